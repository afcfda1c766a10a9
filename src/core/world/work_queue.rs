//=========================================================================
// Work Queue
//=========================================================================
//
// Background job runner used by world loading.
//
// Architecture:
//   submit(job) → crossbeam Sender<Job> → worker thread → job()
//                        │
//                        └─ pending: Arc<AtomicUsize>  (is_empty() polls it)
//
// Jobs run one at a time in submission order. The logic thread never
// blocks on the queue; it polls `is_empty()` once per tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Sender};
use log::{debug, error, warn};

//=== Job =================================================================

/// A unit of background work.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

//=== WorkQueue ===========================================================

/// Single-worker FIFO job queue with a pending counter.
pub struct WorkQueue {
    sender: Option<Sender<Job>>,
    pending: Arc<AtomicUsize>,
    worker: Option<thread::JoinHandle<()>>,
}

impl WorkQueue {
    /// Spawns the worker thread.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded::<Job>();
        let pending = Arc::new(AtomicUsize::new(0));
        let worker_pending = Arc::clone(&pending);

        let worker = thread::Builder::new()
            .name("world-loader".to_string())
            .spawn(move || {
                while let Ok(job) = receiver.recv() {
                    // A failed job still counts as finished
                    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                        error!("World loading job panicked");
                    }
                    worker_pending.fetch_sub(1, Ordering::AcqRel);
                }
                debug!("Work queue worker exiting");
            });

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(e) => {
                error!("Failed to spawn work queue worker, running jobs inline: {}", e);
                None
            }
        };

        Self {
            sender: worker.as_ref().map(|_| sender),
            pending,
            worker,
        }
    }

    /// Queues a job for the worker.
    ///
    /// Without a worker thread the job runs immediately on the caller.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(sender) = &self.sender else {
            job();
            return;
        };

        self.pending.fetch_add(1, Ordering::AcqRel);
        if let Err(err) = sender.send(Box::new(job)) {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            warn!("Work queue disconnected, running job inline");
            (err.into_inner())();
        }
    }

    /// Number of jobs submitted but not yet finished.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// True once every submitted job has finished.
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        // Disconnect so the worker drains and exits
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Work queue worker panicked");
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    //--- Test Helpers -----------------------------------------------------

    fn wait_until_empty(queue: &WorkQueue) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !queue.is_empty() {
            assert!(Instant::now() < deadline, "work queue did not drain");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn new_queue_is_empty() {
        assert!(WorkQueue::new().is_empty());
    }

    #[test]
    fn jobs_run_in_submission_order() {
        let queue = WorkQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..10 {
            let log = Arc::clone(&log);
            queue.submit(move || log.lock().unwrap().push(i));
        }

        wait_until_empty(&queue);
        assert_eq!(*log.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn queue_is_busy_while_job_runs() {
        let queue = WorkQueue::new();
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(0);

        queue.submit(move || {
            let _ = release_rx.recv();
        });
        assert!(!queue.is_empty());

        release_tx.send(()).unwrap();
        wait_until_empty(&queue);
    }

    #[test]
    fn panicking_job_does_not_stall_the_queue() {
        let queue = WorkQueue::new();
        let ran = Arc::new(AtomicUsize::new(0));

        queue.submit(|| panic!("bad zone file"));
        let after = Arc::clone(&ran);
        queue.submit(move || {
            after.fetch_add(1, Ordering::SeqCst);
        });

        wait_until_empty(&queue);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_finishes_queued_jobs() {
        let done = Arc::new(AtomicUsize::new(0));
        {
            let queue = WorkQueue::new();
            for _ in 0..3 {
                let done = Arc::clone(&done);
                queue.submit(move || {
                    done.fetch_add(1, Ordering::SeqCst);
                });
            }
        }
        assert_eq!(done.load(Ordering::SeqCst), 3);
    }
}
