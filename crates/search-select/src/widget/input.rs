//! Translation of raw render-adapter events into state-machine commands.
//!
//! A renderer reports what the user did in its own terms: the text field
//! changed, or the add/check affordance on some row was clicked. This module
//! turns those reports into [`Command`]s and applies them.

use std::fmt;

use search_select_core::logging::targets;

use super::search_select::SearchSelect;

/// A raw user action reported by a render adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search field now contains this text (untrimmed).
    QueryEdited(String),
    /// The "add" affordance of a result row was clicked.
    AddClicked {
        /// Position in the current result set.
        row: usize,
    },
    /// The "check" affordance of a result row was clicked.
    CheckClicked {
        /// Position in the current result set.
        row: usize,
    },
}

/// A state-machine command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<Id> {
    /// Replace the query.
    SetQuery(String),
    /// Select an identifier.
    Select(Id),
    /// Deselect an identifier.
    Deselect(Id),
}

impl<T, Id> SearchSelect<T, Id>
where
    T: Clone + Send + Sync + 'static,
    Id: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Translates a raw event into a command.
    ///
    /// Query text is trimmed. A click resolves to the identifier of the item
    /// at that row of the current result set; rows out of range and items
    /// without an identifier translate to `None`.
    pub fn translate(&self, event: &InputEvent) -> Option<Command<Id>> {
        match event {
            InputEvent::QueryEdited(text) => Some(Command::SetQuery(text.trim().to_string())),
            InputEvent::AddClicked { row } => self.id_at(*row).map(Command::Select),
            InputEvent::CheckClicked { row } => self.id_at(*row).map(Command::Deselect),
        }
    }

    /// Applies a command.
    pub fn apply(&mut self, command: Command<Id>) {
        match command {
            Command::SetQuery(query) => self.set_query(query),
            Command::Select(id) => self.select(id),
            Command::Deselect(id) => self.deselect(&id),
        }
    }

    /// Translates and applies a raw event.
    ///
    /// Returns `false` if the event did not resolve to a command.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match self.translate(event) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => {
                tracing::debug!(target: targets::STATE, ?event, "input event ignored");
                false
            }
        }
    }

    fn id_at(&self, row: usize) -> Option<Id> {
        self.search_view()
            .get(row)
            .and_then(|item| self.accessors().id_of(item))
    }
}
