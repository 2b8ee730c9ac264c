//! Payloads exchanged with the conversations API
//!
//! These are the request and response bodies that surround activities when
//! talking to a channel service: creating conversations, paging members,
//! uploading history, and reporting errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account::ChannelAccount;
use crate::activity::Activity;

/// Id handed back by the channel for a sent or updated resource
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Parameters for creating a new conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationParameters {
    /// Whether the conversation should be a group conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,

    /// The bot joining the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<ChannelAccount>,

    /// Members to add to the conversation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ChannelAccount>,

    /// Topic title, for channels that support one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    /// Tenant the conversation should be created in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// An initial activity to send once the conversation exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Box<Activity>>,

    /// Channel-specific payload for conversation creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<Value>,
}

/// Result of creating a conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResourceResponse {
    /// Id of the initial activity, when one was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,

    /// Endpoint for further operations on the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Id of the new conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The members of one conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMembers {
    /// Id of the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ChannelAccount>,
}

/// One page of the conversations a bot participates in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationsResult {
    /// Token to pass back to fetch the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversations: Vec<ConversationMembers>,
}

/// One page of conversation members
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedMembersResult {
    /// Token to pass back to fetch the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ChannelAccount>,
}

/// A batch of historic activities for upload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
}

/// Replies gathered inline when the delivery mode is `expectReplies`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedReplies {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
}

/// The body and status a bot returns for an `invoke` activity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvokeResponse {
    /// HTTP status code of the invoke result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,

    /// Body of the invoke result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl InvokeResponse {
    pub fn new(status: i32, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
        }
    }

    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status
            .is_some_and(|status| (200..300).contains(&status))
    }
}

/// The HTTP error a dependency call failed with
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InnerHttpError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Error payload returned by a channel service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Machine-readable error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human-readable explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The underlying HTTP failure, when the error wraps one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_http_error: Option<InnerHttpError>,
}

/// Envelope for an [`Error`] on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_conversation_parameters_naming() {
        let parameters = ConversationParameters {
            is_group: Some(false),
            bot: Some(ChannelAccount::new("bot-1", "Bot")),
            members: vec![ChannelAccount::new("user-1", "Ada")],
            tenant_id: Some("tenant-1".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&parameters).unwrap();
        assert_eq!(json["isGroup"], false);
        assert_eq!(json["tenantId"], "tenant-1");
        assert_eq!(json["members"][0]["id"], "user-1");
        assert!(json.get("topicName").is_none());
    }

    #[test]
    fn test_invoke_response_success_range() {
        assert!(InvokeResponse::new(200, None).is_success());
        assert!(InvokeResponse::new(204, None).is_success());
        assert!(!InvokeResponse::new(300, None).is_success());
        assert!(!InvokeResponse::new(404, Some(json!({ "error": "gone" }))).is_success());
        assert!(!InvokeResponse::default().is_success());
    }

    #[test]
    fn test_error_response_round_trip() {
        let wire = json!({
            "error": {
                "code": "ServiceError",
                "message": "upstream failed",
                "innerHttpError": { "statusCode": 502, "body": "bad gateway" }
            }
        });

        let response: ErrorResponse = serde_json::from_value(wire.clone()).unwrap();
        let error = response.error.as_ref().unwrap();
        assert_eq!(error.code.as_deref(), Some("ServiceError"));
        assert_eq!(
            error.inner_http_error.as_ref().unwrap().status_code,
            Some(502)
        );

        assert_eq!(serde_json::to_value(&response).unwrap(), wire);
    }

    #[test]
    fn test_expected_replies_carries_activities() {
        let replies = ExpectedReplies {
            activities: vec![Activity::message().with_text("one"), Activity::typing()],
        };

        let json = serde_json::to_value(&replies).unwrap();
        assert_eq!(json["activities"][0]["text"], "one");
        assert_eq!(json["activities"][1]["type"], "typing");
    }
}
