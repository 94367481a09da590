//! Per-conversation playback state.

use std::sync::Arc;

use talkscript_core::{SectionGraph, Target};

use crate::config::PlaybackConfig;
use crate::error::PlayError;
use crate::event::DisplayEvent;

/// A conversation in flight: the graph it walks, the resolved section
/// it is streaming, and how far into that section it has got. One of
/// these exists only while its [`SessionManager`] slot is occupied.
///
/// [`SessionManager`]: crate::SessionManager
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    graph: Arc<SectionGraph>,
    section: String,
    line: usize,
    chars: Vec<char>,
    revealed: usize,
    awaiting_choice: bool,
}

impl PlaybackSession {
    pub(crate) fn start(graph: Arc<SectionGraph>, entry: &str) -> Result<Self, PlayError> {
        let mut session = PlaybackSession {
            graph,
            section: String::new(),
            line: 0,
            chars: Vec::new(),
            revealed: 0,
            awaiting_choice: false,
        };
        session.enter(entry)?;
        Ok(session)
    }

    /// Moves playback to `key`, following its redirect chain first.
    /// On failure the session is left exactly as it was.
    pub(crate) fn enter(&mut self, key: &str) -> Result<(), PlayError> {
        let resolved = self.graph.resolve(key)?.key.clone();
        self.section = resolved;
        self.line = 0;
        self.revealed = 0;
        self.awaiting_choice = false;
        self.load_line();
        Ok(())
    }

    /// One cooperative step: a character, an end-of-line pause, or the
    /// choice list once the section is spent. Repeated calls while
    /// awaiting a choice re-emit the same choice list.
    pub(crate) fn advance(&mut self, config: &PlaybackConfig, fast: bool) -> DisplayEvent {
        if self.awaiting_choice {
            return DisplayEvent::ChoicesReady {
                options: self.options(),
            };
        }

        let section = self
            .graph
            .get(&self.section)
            .expect("session section is resolved against its own graph");

        if self.line >= section.lines.len() {
            let options = section.choices.iter().map(|c| c.text.clone()).collect();
            self.awaiting_choice = true;
            return DisplayEvent::ChoicesReady { options };
        }

        if self.revealed < self.chars.len() {
            let ch = self.chars[self.revealed];
            self.revealed += 1;
            let mut delay = config.letter_delay;
            if fast {
                delay *= config.fast_multiplier;
            }
            return DisplayEvent::CharacterRevealed { ch, delay };
        }

        self.line += 1;
        self.revealed = 0;
        self.load_line();
        DisplayEvent::LineComplete {
            delay: config.sentence_delay,
        }
    }

    /// Target of the pending choice at `index`.
    pub(crate) fn choice_target(&self, index: usize) -> Result<Target, PlayError> {
        if !self.awaiting_choice {
            return Err(PlayError::NoChoicePending);
        }
        let section = self
            .graph
            .get(&self.section)
            .expect("session section is resolved against its own graph");
        section
            .choices
            .get(index)
            .map(|c| c.target.clone())
            .ok_or(PlayError::InvalidChoice {
                index,
                len: section.choices.len(),
            })
    }

    pub fn section_key(&self) -> &str {
        &self.section
    }

    pub fn is_awaiting_choice(&self) -> bool {
        self.awaiting_choice
    }

    fn options(&self) -> Vec<String> {
        self.graph
            .get(&self.section)
            .map(|s| s.choices.iter().map(|c| c.text.clone()).collect())
            .unwrap_or_default()
    }

    fn load_line(&mut self) {
        let chars = self
            .graph
            .get(&self.section)
            .and_then(|s| s.lines.get(self.line))
            .map(|l| l.chars().collect())
            .unwrap_or_default();
        self.chars = chars;
    }
}
