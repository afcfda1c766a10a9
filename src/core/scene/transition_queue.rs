//=========================================================================
// Transition Queue
//=========================================================================
//
// Queue for scene transitions.
//
// Scenes queue transitions here while handling events or updating. The
// scene manager applies them in FIFO order at the end of the tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKey;

//=== Scene Transition ====================================================

/// Scene stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack.
    Remove(K),

    /// Replaces a specific scene in place.
    Replace(K, K),

    /// Clears every scene from the stack.
    Clear,
}

//=== Transition Queue ====================================================

/// FIFO of pending scene transitions.
#[derive(Debug)]
pub struct TransitionQueue<S: SceneKey> {
    queue: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a transition for the end of the tick.
    pub fn push(&mut self, transition: SceneTransition<S>) {
        self.queue.push(transition);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneTransition<S>> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all transitions, leaving the queue empty.
    ///
    /// Transitions queued while the taken batch is applied (from
    /// `on_enter`/`on_exit`) land in the fresh queue and run next tick.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.queue)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
