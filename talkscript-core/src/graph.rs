//! The compiled script artifact: named sections of dialogue lines,
//! choices and optional redirects.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Where a choice leads. Sentinel targets are decided at parse time so
/// the engine never compares magic strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Jump to the named section.
    Section(String),
    /// End the conversation.
    Exit,
    /// End the conversation, then fire the host's invoke hook.
    Invoke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub text: String,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: String,
    pub redirect: Option<String>,
    pub lines: Vec<String>,
    pub choices: Vec<Choice>,
}

impl Section {
    pub fn new(key: impl Into<String>) -> Self {
        Section {
            key: key.into(),
            redirect: None,
            lines: Vec::new(),
            choices: Vec::new(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("no section named '{0}'")]
    UnknownSection(String),
    #[error("redirect cycle: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),
}

/// Key → section map plus the structural entry point. Immutable once
/// compilation finishes; a dirty variable store replaces the whole
/// graph rather than patching it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionGraph {
    sections: FxHashMap<String, Section>,
    first_key: Option<String>,
}

impl SectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section key if it is not already present, tracking
    /// the first registration as the entry fallback.
    pub fn register(&mut self, key: &str) {
        if !self.sections.contains_key(key) {
            self.sections.insert(key.to_string(), Section::new(key));
            if self.first_key.is_none() {
                self.first_key = Some(key.to_string());
            }
        }
    }

    pub fn insert(&mut self, section: Section) {
        if self.first_key.is_none() {
            self.first_key = Some(section.key.clone());
        }
        self.sections.insert(section.key.clone(), section);
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.sections.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First header registered, in file order.
    pub fn first(&self) -> Option<&str> {
        self.first_key.as_deref()
    }

    /// The key playback starts from: `initial` when such a section
    /// exists, otherwise the first header the compiler saw.
    pub fn entry(&self) -> Option<&str> {
        if self.sections.contains_key("initial") {
            Some("initial")
        } else {
            self.first_key.as_deref()
        }
    }

    /// Follows the redirect chain from `key` until a section without a
    /// redirect. A redirect naming a missing section stops at the
    /// current one; a revisited key fails with
    /// [`GraphError::RedirectCycle`]. Resolving an already-resolved
    /// section returns it unchanged.
    pub fn resolve(&self, key: &str) -> Result<&Section, GraphError> {
        let mut current = self
            .sections
            .get(key)
            .ok_or_else(|| GraphError::UnknownSection(key.to_string()))?;
        let mut visited: Vec<&str> = Vec::new();

        while let Some(next) = current.redirect.as_deref() {
            let Some(target) = self.sections.get(next) else {
                break;
            };
            if visited.contains(&current.key.as_str()) {
                let mut chain: Vec<String> =
                    visited.iter().map(|k| k.to_string()).collect();
                chain.push(current.key.clone());
                return Err(GraphError::RedirectCycle(chain));
            }
            visited.push(&current.key);
            current = target;
        }
        Ok(current)
    }
}
