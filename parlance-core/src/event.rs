//! Events handed to the host each time it drives the engine.

/// One step of conversation output. The engine reveals exactly one of
/// these per [`advance`] call; the host is expected to wait `delay`
/// seconds before calling again, which is what makes the stream
/// cancellable and speed-adjustable from outside.
///
/// [`advance`]: crate::SessionManager::advance
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// One more character of the current line is visible.
    CharacterRevealed { ch: char, delay: f32 },
    /// The current line is fully revealed; pause before the next one.
    LineComplete { delay: f32 },
    /// All lines are out; the listed choices are on offer.
    ChoicesReady { options: Vec<String> },
}

/// Result of resolving a player choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Playback moved to another section and keeps streaming.
    Continuing,
    /// The conversation ended.
    Exited,
    /// The conversation ended, and the host should fire its invoke
    /// hook after tearing the dialogue UI down.
    ExitedAndInvoked,
}
