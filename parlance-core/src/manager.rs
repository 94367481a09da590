//! The single-session gate and the host-facing playback API.

use talkscript_core::Target;

use crate::config::PlaybackConfig;
use crate::conversation::Conversation;
use crate::error::PlayError;
use crate::event::{DisplayEvent, Outcome};
use crate::session::PlaybackSession;

/// Owns at most one live [`PlaybackSession`]. Dialogue is a modal,
/// exclusive interaction: hosts share a single manager and acquire the
/// slot through [`begin`], so a second conversation cannot start until
/// the first one exits or is cancelled.
///
/// [`begin`]: SessionManager::begin
#[derive(Debug, Default)]
pub struct SessionManager {
    config: PlaybackConfig,
    active: Option<PlaybackSession>,
}

impl SessionManager {
    pub fn new(config: PlaybackConfig) -> Self {
        SessionManager {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts streaming `conversation` from its entry section.
    ///
    /// Recompiles the conversation's graph first if its variable store
    /// is dirty; the swap is atomic, a running session never observes a
    /// partial graph. Fails with [`PlayError::SessionActive`] while any
    /// session holds the slot.
    pub fn begin(&mut self, conversation: &mut Conversation) -> Result<(), PlayError> {
        if self.active.is_some() {
            return Err(PlayError::SessionActive);
        }

        let graph = conversation.session_graph();
        let entry = graph.entry().ok_or(PlayError::EmptyGraph)?.to_string();
        let session = PlaybackSession::start(graph, &entry)?;
        log::debug!("session started at section '{}'", session.section_key());
        self.active = Some(session);
        Ok(())
    }

    /// Reveals the next display event. The `fast` flag is sampled at
    /// this suspension point only and shortens the character delay,
    /// never skips it.
    pub fn advance(&mut self, fast: bool) -> Result<DisplayEvent, PlayError> {
        let session = self.active.as_mut().ok_or(PlayError::NoSession)?;
        Ok(session.advance(&self.config, fast))
    }

    /// Resolves the pending choice at `index`. Only valid while the
    /// session is awaiting a choice; errors leave the session state
    /// untouched.
    pub fn choose(&mut self, index: usize) -> Result<Outcome, PlayError> {
        let session = self.active.as_mut().ok_or(PlayError::NoSession)?;

        match session.choice_target(index)? {
            Target::Exit => {
                self.active = None;
                Ok(Outcome::Exited)
            }
            Target::Invoke => {
                self.active = None;
                Ok(Outcome::ExitedAndInvoked)
            }
            Target::Section(key) => {
                if let Err(err) = session.enter(&key) {
                    log::error!("choice {} points at a bad section: {}", index, err);
                    return Err(err);
                }
                Ok(Outcome::Continuing)
            }
        }
    }

    /// Force-terminates whatever is running and releases the session
    /// slot. Safe to call in any state.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::debug!("session cancelled");
        }
    }
}
