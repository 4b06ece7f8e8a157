//! State shared by the screens that show a fetched list.

use ratatui::widgets::ListState;

use crate::api::ApiError;
use crate::core::selection::Selection;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(ApiError),
}

/// Applies the common up/k, down/j bindings. Returns true if the key was one of them.
pub(super) fn move_selection(selection: &mut Selection, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::Up | TuiEvent::Char('k') => {
            selection.up();
            true
        }
        TuiEvent::Down | TuiEvent::Char('j') => {
            selection.down();
            true
        }
        _ => false,
    }
}

/// A list that starts out loading and is filled (or failed) by one fetch.
pub struct FetchedList<T> {
    items: Vec<T>,
    selection: Selection,
    status: LoadStatus,
    list_state: ListState,
}

impl<T> FetchedList<T> {
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            selection: Selection::new(0),
            status: LoadStatus::Loading,
            list_state: ListState::default(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selection.selected().and_then(|i| self.items.get(i))
    }

    /// Installs a fetch result. The cursor keeps its place, clamped to the new length.
    pub fn replace(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.selection.resize(items.len());
                self.items = items;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                self.items.clear();
                self.selection.resize(0);
                self.status = LoadStatus::Failed(e);
            }
        }
    }

    pub fn navigate(&mut self, event: &TuiEvent) -> bool {
        move_selection(&mut self.selection, event)
    }

    /// ratatui list state, synced to the cursor.
    pub fn list_state(&mut self) -> &mut ListState {
        self.list_state.select(self.selection.selected());
        &mut self.list_state
    }
}
