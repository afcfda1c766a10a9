//=========================================================================
// Errors
//=========================================================================
//
// Typed errors for the fallible edges of the crate: configuration
// loading and the platform event loop. The per-frame core never fails;
// it degrades to explicit fallbacks instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;
use winit::error::EventLoopError;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the engine cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create the event loop (rare, indicates an OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    /// Event loop terminated with an error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),
}

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

//=== EngineError =========================================================

/// Top-level error returned by `Engine::run`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The logic thread panicked.
    #[error("core thread panicked")]
    CoreThreadPanicked,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_implement_error_trait() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PlatformError>();
        assert_error::<ConfigError>();
        assert_error::<EngineError>();
    }

    #[test]
    fn parse_error_converts_into_engine_error() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let engine: EngineError = ConfigError::from(parse).into();
        assert!(matches!(engine, EngineError::Config(ConfigError::Parse(_))));
        assert!(engine.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn io_error_mentions_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.json"));
    }
}
