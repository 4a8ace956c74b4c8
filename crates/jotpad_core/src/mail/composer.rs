//! Pure mail-body formatting.
//!
//! # Responsibility
//! - Build subject, recipients and body for one note or the full list.
//!
//! # Invariants
//! - Composed bodies always end with the terminator block (`\n-end-\n`).
//! - Note lines are `"{title} {priority} {duedate}"` using the config labels.

use crate::config::MailConfig;
use crate::model::note::Note;

/// Fixed trailing line signalling end-of-content to the receiving side.
pub const TERMINATOR: &str = "-end-";

/// A composed message ready for transport handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    /// Primary and secondary recipient, in that order.
    pub recipients: [String; 2],
    pub body: String,
}

/// Composes a single note.
///
/// Subject carries the annotated title line; the body is the note body (when
/// non-empty) followed by the terminator block.
pub fn compose_note(note: &Note, config: &MailConfig) -> MailMessage {
    let mut body = String::new();
    if !note.body.is_empty() {
        body.push_str(&note.body);
        body.push('\n');
    }
    push_terminator(&mut body);

    MailMessage {
        subject: annotated_title(&note.title, config),
        recipients: recipients(config),
        body,
    }
}

/// Composes the full note list: one annotated title line per note, then the
/// terminator block.
pub fn compose_all(notes: &[Note], config: &MailConfig) -> MailMessage {
    let mut body = String::new();
    for note in notes {
        body.push_str(&annotated_title(&note.title, config));
        body.push('\n');
    }
    push_terminator(&mut body);

    MailMessage {
        subject: config.subject.clone(),
        recipients: recipients(config),
        body,
    }
}

fn annotated_title(title: &str, config: &MailConfig) -> String {
    format!(
        "{title} {} {}",
        config.default_priority, config.default_due_date
    )
}

fn recipients(config: &MailConfig) -> [String; 2] {
    [config.email.clone(), config.secondary_email.clone()]
}

fn push_terminator(body: &mut String) {
    body.push('\n');
    body.push_str(TERMINATOR);
    body.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{compose_all, compose_note};
    use crate::config::MailConfig;
    use crate::model::note::Note;

    fn config() -> MailConfig {
        MailConfig {
            email: "me@example.com".to_string(),
            secondary_email: "import@example.com".to_string(),
            subject: "My notes".to_string(),
            default_priority: "P1".to_string(),
            default_due_date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn single_note_subject_carries_priority_and_due_date() {
        let note = Note::new(1, "Groceries", "Milk, eggs");
        let message = compose_note(&note, &config());
        assert_eq!(message.subject, "Groceries P1 2024-01-01");
        assert_eq!(message.body, "Milk, eggs\n\n-end-\n");
    }

    #[test]
    fn single_note_with_empty_body_sends_terminator_only() {
        let note = Note::new(2, "Reminder", "");
        let message = compose_note(&note, &config());
        assert_eq!(message.body, "\n-end-\n");
    }

    #[test]
    fn full_list_body_is_one_line_per_note_plus_terminator() {
        let notes = vec![Note::new(1, "A", "a body"), Note::new(2, "B", "b body")];
        let message = compose_all(&notes, &config());
        assert_eq!(message.subject, "My notes");
        assert_eq!(message.body, "A P1 2024-01-01\nB P1 2024-01-01\n\n-end-\n");
    }

    #[test]
    fn recipients_are_primary_then_secondary() {
        let message = compose_all(&[], &config());
        assert_eq!(
            message.recipients,
            ["me@example.com".to_string(), "import@example.com".to_string()]
        );
        assert_eq!(message.body, "\n-end-\n");
    }
}
