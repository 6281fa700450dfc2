use std::cell::Cell;

use tracing::warn;

use crate::domain::entities::user::User;
use crate::usecase::ports::user_source::{FetchError, UserSource};

/// Fetches the user list at most once per instance.
pub struct LoadService<S> {
    source: S,
    started: Cell<bool>,
}

impl<S: UserSource> LoadService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            started: Cell::new(false),
        }
    }

    /// Returns `None` when a load has already been issued.
    pub async fn load_once(&self) -> Option<Result<Vec<User>, FetchError>> {
        if self.started.replace(true) {
            warn!("user list already requested, skipping fetch");
            return None;
        }

        Some(self.source.fetch_users().await)
    }
}
