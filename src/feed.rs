//! Social feed client (Mastodon-compatible API)
//!
//! Login, posting and the notification stream. The quiz core never touches
//! this module directly; it reaches the feed through `ReplyPoster`.

mod error;
mod stream;
mod types;

pub use error::{FeedError, FeedErrorKind};
pub use stream::NotificationStream;
pub use types::{Account, Notification, Status};

use crate::config::BotConfig;
use crate::runtime::{PostedReply, ReplyPoster};
use crate::state_machine::MessageId;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use types::NewStatus;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated feed client
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    /// Client without a request timeout, for the long-lived stream
    stream_client: Client,
    base_url: Url,
    streaming_url: Url,
    access_token: String,
    account: Account,
}

impl FeedClient {
    /// Verify credentials and return a client bound to the bot account
    pub async fn login(config: &BotConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::network(format!("Failed to build HTTP client: {e}")))?;
        let stream_client = Client::builder()
            .build()
            .map_err(|e| FeedError::network(format!("Failed to build HTTP client: {e}")))?;

        let url = endpoint(&config.uri, "api/v1/accounts/verify_credentials")?;
        let response = client
            .get(url)
            .bearer_auth(&config.access_token)
            .send()
            .await?;
        let account: Account = read_json(response).await?;

        tracing::info!(acct = %account.acct, url = ?account.url, "Logged in");

        Ok(Self {
            client,
            stream_client,
            base_url: config.uri.clone(),
            streaming_url: config.streaming_uri.clone(),
            access_token: config.access_token.clone(),
            account,
        })
    }

    /// The bot's own account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Create a post, optionally as a reply
    pub async fn post_status(&self, text: &str, in_reply_to: Option<&str>) -> Result<Status, FeedError> {
        let url = endpoint(&self.base_url, "api/v1/statuses")?;
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&NewStatus {
                status: text,
                in_reply_to_id: in_reply_to,
            })
            .send()
            .await?;
        read_json(response).await
    }

    /// Open the user stream
    pub async fn stream_notifications(&self) -> Result<NotificationStream, FeedError> {
        let url = endpoint(&self.streaming_url, "api/v1/streaming/user")?;
        let response = self
            .stream_client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::from_status(status, &body));
        }

        Ok(NotificationStream::new(response))
    }
}

#[async_trait]
impl ReplyPoster for FeedClient {
    async fn post(&self, text: &str, in_reply_to: Option<&MessageId>) -> Result<PostedReply, String> {
        let status = self
            .post_status(text, in_reply_to.map(MessageId::as_str))
            .await
            .map_err(|e| e.to_string())?;
        Ok(PostedReply {
            id: MessageId::new(status.id),
            url: status.url,
        })
    }
}

/// Join an API path onto a server base URL
fn endpoint(base: &Url, path: &str) -> Result<Url, FeedError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
        .map_err(|e| FeedError::new(FeedErrorKind::InvalidRequest, format!("Invalid endpoint {path}: {e}")))
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FeedError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FeedError::network(format!("Failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(FeedError::from_status(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| FeedError::decode(format!("Failed to parse response: {e} - body: {body}")))
}
