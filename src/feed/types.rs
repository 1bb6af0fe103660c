//! Feed API payloads (Mastodon-compatible)

use serde::{Deserialize, Serialize};

/// The authenticated account
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub acct: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A post
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    /// HTML body
    #[serde(default)]
    pub content: String,
    pub account: Account,
}

/// A notification delivered on the user stream
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub account: Account,
    #[serde(default)]
    pub status: Option<Status>,
}

impl Notification {
    /// The mentioning post, if this is a mention
    pub fn mention_status(&self) -> Option<&Status> {
        if self.kind == "mention" {
            self.status.as_ref()
        } else {
            None
        }
    }
}

/// Body of a status creation request
#[derive(Debug, Serialize)]
pub struct NewStatus<'a> {
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_mention() {
        let json = r#"{
            "id": "1",
            "type": "mention",
            "account": {"id": "9", "acct": "carol@other.social", "url": "https://other.social/@carol"},
            "status": {
                "id": "42",
                "url": "https://example.social/@carol/42",
                "content": "<p>@quiz start 猫</p>",
                "account": {"id": "9", "acct": "carol@other.social"}
            }
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        let status = notification.mention_status().unwrap();
        assert_eq!(status.id, "42");
        assert_eq!(status.account.acct, "carol@other.social");
    }

    #[test]
    fn test_favourite_is_not_mention() {
        let json = r#"{"id": "2", "type": "favourite", "account": {"id": "9", "acct": "carol"}}"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert!(notification.mention_status().is_none());
    }

    #[test]
    fn test_new_status_omits_missing_parent() {
        let body = serde_json::to_value(NewStatus { status: "hi", in_reply_to_id: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "hi" }));
    }
}
