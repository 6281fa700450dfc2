use crate::domain::entities::page::ITEMS_PER_PAGE;

pub const MEMBERS_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Which record count bounds the Next/Last navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingBasis {
    /// Every loaded record, regardless of the search term.
    #[default]
    AllRecords,
    /// Only the records matching the search term.
    Filtered,
}

/// When field edits reach the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditCommit {
    /// Each keystroke mutates the record. Cancel leaves the changes in place.
    #[default]
    Immediate,
    /// Keystrokes go to a draft that is written back on save.
    Staged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub items_per_page: usize,
    pub paging_basis: PagingBasis,
    pub edit_commit: EditCommit,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: MEMBERS_ENDPOINT.to_string(),
            items_per_page: ITEMS_PER_PAGE,
            paging_basis: PagingBasis::default(),
            edit_commit: EditCommit::default(),
        }
    }
}
