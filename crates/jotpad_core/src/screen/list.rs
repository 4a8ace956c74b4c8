//! List screen state machine.
//!
//! # Responsibility
//! - Own the note list lifecycle: activation, reloads, editor handoff,
//!   delete/wipe flows and mail composition.
//!
//! # Invariants
//! - `Idle -> Loaded` happens only through `Activate`.
//! - Every mutation transitions `Loaded -> Loaded` via a full reload.
//! - Editor handoff always returns to `Loaded`, saved or cancelled.
//! - A vanished note id is a silent no-op, never a crash.

use crate::config::MailConfig;
use crate::mail::composer::{compose_all, compose_note, MailMessage};
use crate::model::note::{NoteId, NoteSummary};
use crate::repo::note_repo::NoteRepository;
use crate::screen::editor::EditorSession;
use crate::service::note_service::{NoteService, NoteServiceError};
use log::{info, warn};

/// Lifecycle state of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// Constructed but not yet activated; rows are empty.
    Idle,
    /// Rows are loaded and current.
    Loaded,
    /// An editor session has been handed to the host.
    Editing,
}

/// Answer to the wipe confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
}

/// Host-originated commands driving the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    /// Open the store view and load all rows.
    Activate,
    /// Menu action: start a new note in the editor.
    NewNote,
    /// Row tap: open an existing note in the editor.
    EditNote(NoteId),
    /// The editor was closed, saved or not.
    EditorClosed,
    /// Context action: delete one note.
    DeleteNote(NoteId),
    /// Menu action: ask for wipe confirmation.
    RequestWipe,
    /// Answer to the wipe confirmation prompt.
    Wipe(Confirm),
    /// Context action: mail one note.
    SendNote(NoteId),
    /// Menu action: mail the full list.
    SendAll,
    /// Menu action: open the preferences screen.
    OpenPrefs,
}

/// Work the host must perform in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    /// Present the editor with this session.
    OpenEditor(EditorSession),
    /// Show the Yes/No wipe confirmation prompt.
    PromptWipe,
    /// Hand a composed message to the mail transport.
    Send(MailMessage),
    /// Present the preferences screen.
    OpenPrefs,
}

/// Command-driven controller for the note list.
///
/// Holds a `MailConfig` snapshot taken at construction, so preference reads
/// never happen mid-flow.
pub struct ListScreen<R: NoteRepository> {
    service: NoteService<R>,
    config: MailConfig,
    state: ListState,
    rows: Vec<NoteSummary>,
}

impl<R: NoteRepository> ListScreen<R> {
    pub fn new(service: NoteService<R>, config: MailConfig) -> Self {
        Self {
            service,
            config,
            state: ListState::Idle,
            rows: Vec::new(),
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// Current list rows. Empty until activation.
    pub fn rows(&self) -> &[NoteSummary] {
        &self.rows
    }

    /// Replaces the mail-config snapshot.
    ///
    /// Hosts call this when the preferences screen closes, so the next
    /// composition sees the edited settings.
    pub fn set_config(&mut self, config: MailConfig) {
        self.config = config;
    }

    /// Applies one command and returns the effect the host must perform,
    /// if any.
    ///
    /// Commands that do not fit the current state are ignored: the host may
    /// race a stale tap against a state change, and dropping it matches the
    /// reload-everything contract.
    pub fn handle(&mut self, command: ListCommand) -> Result<Option<ListEffect>, NoteServiceError> {
        match (self.state, command) {
            (ListState::Idle, ListCommand::Activate) => {
                self.reload()?;
                self.state = ListState::Loaded;
                Ok(None)
            }
            (ListState::Idle, other) => {
                warn!("event=list_command module=screen status=ignored state=idle command={other:?}");
                Ok(None)
            }
            (ListState::Loaded, ListCommand::Activate) => {
                self.reload()?;
                Ok(None)
            }
            (ListState::Loaded, ListCommand::NewNote) => {
                self.state = ListState::Editing;
                Ok(Some(ListEffect::OpenEditor(EditorSession::new_note())))
            }
            (ListState::Loaded, ListCommand::EditNote(id)) => match self.service.fetch_note(id) {
                Ok(note) => {
                    self.state = ListState::Editing;
                    Ok(Some(ListEffect::OpenEditor(EditorSession::edit(&note))))
                }
                Err(NoteServiceError::NoteNotFound(_)) => {
                    // Row vanished under the tap; refresh and move on.
                    self.reload()?;
                    Ok(None)
                }
                Err(err) => Err(err),
            },
            (ListState::Loaded, ListCommand::DeleteNote(id)) => {
                self.service.delete_note(id)?;
                self.reload()?;
                Ok(None)
            }
            (ListState::Loaded, ListCommand::RequestWipe) => Ok(Some(ListEffect::PromptWipe)),
            (ListState::Loaded, ListCommand::Wipe(Confirm::Yes)) => {
                info!("event=notes_wipe module=screen status=ok");
                self.service.wipe_notes()?;
                self.reload()?;
                Ok(None)
            }
            (ListState::Loaded, ListCommand::Wipe(Confirm::No)) => Ok(None),
            (ListState::Loaded, ListCommand::SendNote(id)) => match self.service.fetch_note(id) {
                Ok(note) => Ok(Some(ListEffect::Send(compose_note(&note, &self.config)))),
                Err(NoteServiceError::NoteNotFound(_)) => {
                    self.reload()?;
                    Ok(None)
                }
                Err(err) => Err(err),
            },
            (ListState::Loaded, ListCommand::SendAll) => {
                let notes = self.service.list_notes()?;
                Ok(Some(ListEffect::Send(compose_all(&notes, &self.config))))
            }
            (ListState::Loaded, ListCommand::OpenPrefs) => Ok(Some(ListEffect::OpenPrefs)),
            (ListState::Loaded, ListCommand::EditorClosed) => {
                warn!("event=list_command module=screen status=ignored state=loaded command=EditorClosed");
                Ok(None)
            }
            (ListState::Editing, ListCommand::EditorClosed) => {
                self.state = ListState::Loaded;
                self.reload()?;
                Ok(None)
            }
            (ListState::Editing, other) => {
                warn!(
                    "event=list_command module=screen status=ignored state=editing command={other:?}"
                );
                Ok(None)
            }
        }
    }

    /// Saves an editor session against this screen's store.
    ///
    /// Provided so hosts drive editing through the same service the list
    /// reads from; the follow-up `EditorClosed` command performs the reload.
    pub fn save_editor(&self, session: &EditorSession) -> Result<NoteId, NoteServiceError> {
        let saved = session.save(&self.service)?;
        Ok(saved.id)
    }

    fn reload(&mut self) -> Result<(), NoteServiceError> {
        self.rows = self.service.list_summaries()?;
        Ok(())
    }
}
