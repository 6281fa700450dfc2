use std::future::Future;

use thiserror::Error;

use crate::domain::entities::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("response is not a user list: {0}")]
    Decode(String),
}

pub trait UserSource {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>>;
}
