//! Mail-composition configuration snapshot.
//!
//! Settings are read ad hoc nowhere: screens build one `MailConfig` per
//! activation and pass it down explicitly.

use crate::repo::prefs_repo::{
    PrefsStore, KEY_DEFAULT_DUEDATE, KEY_DEFAULT_PRIORITY, KEY_EMAIL, KEY_IMPORT_EMAIL,
    KEY_SECONDARY_EMAIL, KEY_SUBJECT,
};
use crate::repo::RepoResult;
use serde::{Deserialize, Serialize};

const DEFAULT_SUBJECT: &str = "Notes";
const DEFAULT_PRIORITY: &str = "P3";
const DEFAULT_DUEDATE: &str = "today";

/// Snapshot of every setting the mail composer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    /// Primary recipient. Empty when unconfigured.
    pub email: String,
    /// Secondary recipient. Empty when unconfigured.
    pub secondary_email: String,
    /// Subject line for full-list mail.
    pub subject: String,
    /// Priority label appended to composed note lines.
    pub default_priority: String,
    /// Due-date label appended to composed note lines.
    pub default_due_date: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            secondary_email: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
            default_priority: DEFAULT_PRIORITY.to_string(),
            default_due_date: DEFAULT_DUEDATE.to_string(),
        }
    }
}

impl MailConfig {
    /// Builds a snapshot from stored preferences, applying documented
    /// defaults for unset keys.
    ///
    /// The secondary recipient reads `rtmemail` first and falls back to
    /// `rtmimport`; existing installs used either key for the same import
    /// address.
    pub fn load(prefs: &PrefsStore<'_>) -> RepoResult<Self> {
        let secondary_email = match prefs.get(KEY_SECONDARY_EMAIL)? {
            Some(value) => value,
            None => prefs.get(KEY_IMPORT_EMAIL)?.unwrap_or_default(),
        };

        Ok(Self {
            email: prefs.get(KEY_EMAIL)?.unwrap_or_default(),
            secondary_email,
            subject: prefs
                .get(KEY_SUBJECT)?
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            default_priority: prefs
                .get(KEY_DEFAULT_PRIORITY)?
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            default_due_date: prefs
                .get(KEY_DEFAULT_DUEDATE)?
                .unwrap_or_else(|| DEFAULT_DUEDATE.to_string()),
        })
    }
}
