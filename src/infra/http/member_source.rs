use tracing::debug;

use crate::domain::entities::user::User;
use crate::usecase::ports::user_source::{FetchError, UserSource};

pub struct HttpMemberSource {
    client: reqwest::Client,
    url: String,
}

impl HttpMemberSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl UserSource for HttpMemberSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!(url = %self.url, "fetching users");

        let transport = |err: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            message: err.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        decode_users(&body)
    }
}

pub fn decode_users(body: &str) -> Result<Vec<User>, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))
}
