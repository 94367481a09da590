//! Script library: loads every `.talk` file under a directory tree.

use std::collections::HashMap;
use std::path::Path;

use walkdir::WalkDir;

use crate::conversation::Conversation;
use crate::error::ResourceError;

/// Conversations keyed by script file stem.
#[derive(Debug, Default)]
pub struct ScriptLibrary {
    scripts: HashMap<String, Conversation>,
}

impl ScriptLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `root` recursively and loads each `.talk` file. Returns
    /// how many scripts were loaded; two files with the same stem are
    /// an error.
    pub fn load_dir(&mut self, root: impl AsRef<Path>) -> Result<usize, ResourceError> {
        let root = root.as_ref();
        log::info!("scanning script directory {:?}", root);

        let mut loaded = 0;
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || !path.extension().map_or(false, |e| e == "talk") {
                continue;
            }
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let key = stem.to_string_lossy().to_string();
            if self.scripts.contains_key(&key) {
                return Err(ResourceError::DuplicateScript {
                    key,
                    path: path.to_path_buf(),
                });
            }
            self.scripts.insert(key, Conversation::from_file(path)?);
            loaded += 1;
        }

        log::info!("script library loaded {} scripts", loaded);
        Ok(loaded)
    }

    pub fn get(&self, key: &str) -> Option<&Conversation> {
        self.scripts.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Conversation> {
        self.scripts.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}
