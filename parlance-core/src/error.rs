//! Engine error taxonomy.

use std::io;
use std::path::PathBuf;

use talkscript_core::GraphError;
use thiserror::Error;

/// Script text could not be loaded. Fatal to compilation: no graph is
/// produced and no session may start.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to load script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate script key '{key}' ({path})")]
    DuplicateScript { key: String, path: PathBuf },
}

/// Recoverable playback errors. Everything here leaves the engine in a
/// well-defined state; `UnknownSection` and `InvalidChoice` point at
/// authoring mistakes and are logged as such.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlayError {
    #[error("a conversation session is already active")]
    SessionActive,
    #[error("no active conversation session")]
    NoSession,
    #[error("the script compiled to an empty graph")]
    EmptyGraph,
    #[error("no choices are pending")]
    NoChoicePending,
    #[error("choice index {index} out of range ({len} choices)")]
    InvalidChoice { index: usize, len: usize },
    #[error("no section named '{0}'")]
    UnknownSection(String),
    #[error("redirect cycle: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),
}

impl From<GraphError> for PlayError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownSection(key) => PlayError::UnknownSection(key),
            GraphError::RedirectCycle(chain) => PlayError::RedirectCycle(chain),
        }
    }
}
