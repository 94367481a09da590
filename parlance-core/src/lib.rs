//! Parlance: a cooperative playback engine for TalkScript
//! conversations.
//!
//! The engine never runs ahead of the host: every revealed character
//! and every end-of-line pause is a separate [`SessionManager::advance`]
//! call, and choices resolve through [`SessionManager::choose`].
//! Rendering, widgets and input focus stay on the host's side of the
//! [`DisplayEvent`] / [`Outcome`] boundary.

pub mod config;
pub mod conversation;
pub mod error;
pub mod event;
pub mod library;
pub mod manager;
pub mod session;

pub use config::PlaybackConfig;
pub use conversation::Conversation;
pub use error::{PlayError, ResourceError};
pub use event::{DisplayEvent, Outcome};
pub use library::ScriptLibrary;
pub use manager::SessionManager;
