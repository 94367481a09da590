//! TalkScript: a line-oriented scripting language for branching
//! conversations.
//!
//! A script is a flat text file of `[Header]` sections, dialogue
//! lines, `name=value` initial assignments, conditional section
//! routing and player choices. [`compile`] turns that text plus a
//! [`VariableStore`] snapshot into an immutable [`SectionGraph`] that
//! a playback engine can walk.

pub mod compiler;
pub mod condition;
pub mod graph;
pub mod value;

pub use compiler::compile;
pub use graph::{Choice, GraphError, Section, SectionGraph, Target};
pub use value::{TypeError, Value, VariableStore};
