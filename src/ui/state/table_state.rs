use std::collections::BTreeSet;

use tracing::{debug, error, info};

use crate::config::{AppConfig, EditCommit, PagingBasis};
use crate::domain::entities::page::{page_slice, total_pages};
use crate::domain::entities::user::{User, UserField, UserId};
use crate::usecase::ports::user_source::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    UsersLoaded(Vec<User>),
    LoadFailed(FetchError),
    SearchChanged(String),
    SearchSubmitted,
    PageChanged(usize),
    RowToggled(UserId),
    AllToggled,
    EditStarted(UserId),
    FieldChanged {
        id: UserId,
        field: UserField,
        value: String,
    },
    EditSaved(UserId),
    EditCancelled(UserId),
    RowDeleted(UserId),
    SelectedDeleted,
}

impl TableEvent {
    fn name(&self) -> &'static str {
        match self {
            TableEvent::UsersLoaded(_) => "users_loaded",
            TableEvent::LoadFailed(_) => "load_failed",
            TableEvent::SearchChanged(_) => "search_changed",
            TableEvent::SearchSubmitted => "search_submitted",
            TableEvent::PageChanged(_) => "page_changed",
            TableEvent::RowToggled(_) => "row_toggled",
            TableEvent::AllToggled => "all_toggled",
            TableEvent::EditStarted(_) => "edit_started",
            TableEvent::FieldChanged { .. } => "field_changed",
            TableEvent::EditSaved(_) => "edit_saved",
            TableEvent::EditCancelled(_) => "edit_cancelled",
            TableEvent::RowDeleted(_) => "row_deleted",
            TableEvent::SelectedDeleted => "selected_deleted",
        }
    }
}

/// Everything the user table renders from. Derived views (filtered rows,
/// the current page, page counts) are recomputed on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub users: Vec<User>,
    pub selected: BTreeSet<UserId>,
    pub search: String,
    pub current_page: usize,
    pub editing: Option<UserId>,
    /// Pending field values while editing under `EditCommit::Staged`.
    pub draft: Option<User>,
    pub items_per_page: usize,
    pub paging_basis: PagingBasis,
    pub edit_commit: EditCommit,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Applies one event to `state` and returns the next state.
pub fn update(state: TableState, event: TableEvent) -> TableState {
    let mut next = state;
    next.apply(event);
    next
}

impl TableState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            users: Vec::new(),
            selected: BTreeSet::new(),
            search: String::new(),
            current_page: 1,
            editing: None,
            draft: None,
            items_per_page: config.items_per_page,
            paging_basis: config.paging_basis,
            edit_commit: config.edit_commit,
        }
    }

    #[cfg(test)]
    pub fn with_users(config: &AppConfig, users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::new(config)
        }
    }

    pub fn apply(&mut self, event: TableEvent) {
        debug!(event = event.name(), "applying table event");

        match event {
            TableEvent::UsersLoaded(users) => {
                info!(count = users.len(), "loaded users");
                self.users = users;
                self.drop_stale_ids();
            }
            TableEvent::LoadFailed(err) => {
                error!(%err, "error fetching users");
            }
            TableEvent::SearchChanged(term) => self.search = term,
            TableEvent::SearchSubmitted => self.current_page = 1,
            TableEvent::PageChanged(page) => self.current_page = page,
            TableEvent::RowToggled(id) => self.toggle_row(id),
            TableEvent::AllToggled => self.toggle_all(),
            TableEvent::EditStarted(id) => self.start_edit(id),
            TableEvent::FieldChanged { id, field, value } => self.change_field(id, field, value),
            TableEvent::EditSaved(id) => self.save_edit(id),
            TableEvent::EditCancelled(id) => self.cancel_edit(id),
            TableEvent::RowDeleted(id) => self.delete_row(id),
            TableEvent::SelectedDeleted => self.delete_selected(),
        }
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    pub fn filtered_users(&self) -> Vec<&User> {
        let needle = self.search.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.matches(&needle))
            .collect()
    }

    pub fn visible_users(&self) -> Vec<&User> {
        let filtered = self.filtered_users();
        page_slice(&filtered, self.current_page, self.items_per_page).to_vec()
    }

    /// The row as it should be drawn: the draft while a staged edit is open.
    pub fn displayed(&self, user: &User) -> User {
        match &self.draft {
            Some(draft) if draft.id == user.id && self.editing == Some(user.id) => draft.clone(),
            _ => user.clone(),
        }
    }

    pub fn filtered_total_pages(&self) -> usize {
        total_pages(self.filtered_users().len(), self.items_per_page)
    }

    pub fn all_total_pages(&self) -> usize {
        total_pages(self.users.len(), self.items_per_page)
    }

    /// Page count used by the Next/Last controls.
    pub fn nav_total_pages(&self) -> usize {
        match self.paging_basis {
            PagingBasis::AllRecords => self.all_total_pages(),
            PagingBasis::Filtered => self.filtered_total_pages(),
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page != 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page != self.nav_total_pages()
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.users.len()
    }

    pub fn is_editing(&self, id: UserId) -> bool {
        self.editing == Some(id)
    }

    fn toggle_row(&mut self, id: UserId) {
        if !self.contains(id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    fn toggle_all(&mut self) {
        if self.is_all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.users.iter().map(|user| user.id).collect();
        }
    }

    fn start_edit(&mut self, id: UserId) {
        let Some(user) = self.users.iter().find(|user| user.id == id) else {
            return;
        };
        self.draft = match self.edit_commit {
            EditCommit::Immediate => None,
            EditCommit::Staged => Some(user.clone()),
        };
        self.editing = Some(id);
    }

    fn change_field(&mut self, id: UserId, field: UserField, value: String) {
        if !self.is_editing(id) {
            return;
        }
        let target = match self.edit_commit {
            EditCommit::Immediate => self.users.iter_mut().find(|user| user.id == id),
            EditCommit::Staged => self.draft.as_mut().filter(|draft| draft.id == id),
        };
        if let Some(user) = target {
            field.set(user, value);
        }
    }

    fn save_edit(&mut self, id: UserId) {
        if !self.is_editing(id) {
            return;
        }
        if let Some(draft) = self.draft.take() {
            if let Some(user) = self.users.iter_mut().find(|user| user.id == draft.id) {
                *user = draft;
            }
        }
        self.editing = None;
    }

    fn cancel_edit(&mut self, id: UserId) {
        if !self.is_editing(id) {
            return;
        }
        self.draft = None;
        self.editing = None;
    }

    fn delete_row(&mut self, id: UserId) {
        self.users.retain(|user| user.id != id);
        self.selected.clear();
        self.drop_stale_ids();
    }

    fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let selected = std::mem::take(&mut self.selected);
        self.users.retain(|user| !selected.contains(&user.id));
        self.drop_stale_ids();
    }

    fn drop_stale_ids(&mut self) {
        let users = &self.users;
        self.selected
            .retain(|id| users.iter().any(|user| user.id == *id));
        if let Some(id) = self.editing {
            if !users.iter().any(|user| user.id == id) {
                self.editing = None;
                self.draft = None;
            }
        }
    }
}
