//! Toolkit-independent screen state machines.
//!
//! # Responsibility
//! - Drive the list and editor flows from explicit command enums.
//! - Return effects for the host UI to perform (open editor, prompt,
//!   hand a message to mail transport).
//!
//! # Invariants
//! - Screens never talk to a UI toolkit; hosts translate commands/effects.
//! - Every mutation is followed by a full reload of the cached rows.

pub mod editor;
pub mod list;
