//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep screen layers decoupled from storage details.

pub mod note_service;
