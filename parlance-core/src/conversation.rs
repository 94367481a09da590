//! One speaker's script, variables and compiled graph.

use std::path::Path;
use std::sync::Arc;

use talkscript_core::{SectionGraph, TypeError, Value, VariableStore, compile};

use crate::error::ResourceError;

/// A conversation bundles a script's source text with the store it is
/// compiled against and the resulting graph. The graph is compiled
/// once up front (seeding the store's initial variables) and replaced
/// lazily at session start whenever the store has been written to
/// since.
#[derive(Debug, Clone)]
pub struct Conversation {
    source: String,
    store: VariableStore,
    graph: Arc<SectionGraph>,
}

impl Conversation {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_store(source, VariableStore::new())
    }

    /// Compiles against an existing store. A store that has already
    /// seeded once keeps its variables: this script's `name=value`
    /// lines are ignored.
    pub fn with_store(source: impl Into<String>, mut store: VariableStore) -> Self {
        let source = source.into();
        let graph = Arc::new(compile(&source, &mut store));
        Conversation {
            source,
            store,
            graph,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ResourceError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(source))
    }

    /// Host-side variable write. Marks the store dirty, forcing a
    /// recompile before the next session.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.store.set(name, value);
    }

    pub fn var(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn var_as_int(&self, name: &str) -> Result<i64, TypeError> {
        self.store.get_as_int(name)
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// The graph as of the last compilation.
    pub fn graph(&self) -> &SectionGraph {
        &self.graph
    }

    /// Graph handle for a new session, recompiling first when the
    /// store is dirty. The old graph is discarded wholesale; sessions
    /// already holding it keep their own handle.
    pub(crate) fn session_graph(&mut self) -> Arc<SectionGraph> {
        if self.store.is_dirty() {
            log::info!("variable store changed, recompiling script");
            self.graph = Arc::new(compile(&self.source, &mut self.store));
            self.store.clear_dirty();
        }
        Arc::clone(&self.graph)
    }
}
