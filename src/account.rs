//! Channel and conversation identities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An identity (user, bot, or skill) within a channel
///
/// Accounts are how channels name the two ends of an activity. The `id` is
/// channel-scoped: the same person has different account ids on different
/// channels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    /// Channel-scoped id for the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display-friendly name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory object id of the account within the tenant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_object_id: Option<String>,

    /// Role of the account in the conversation (see [`role_types`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ChannelAccount {
    /// Create an account with an id and display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the account role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// An identity for the conversation or thread itself
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    /// Whether the conversation contains more than two participants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,

    /// Channel-specific conversation category (e.g. a group chat vs. a 1:1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,

    /// Tenant the conversation belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Channel-scoped id for the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display-friendly name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory object id of the conversation within the tenant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_object_id: Option<String>,

    /// Role of the entity behind the conversation (see [`role_types`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ConversationAccount {
    /// Create a conversation account with an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Roles an account can play in a conversation
pub mod role_types {
    pub const USER: &str = "user";
    pub const BOT: &str = "bot";
    pub const SKILL: &str = "skill";
}

/// Well-known channel ids
pub mod channels {
    pub const ALEXA: &str = "alexa";
    pub const CONSOLE: &str = "console";
    pub const CORTANA: &str = "cortana";
    pub const DIRECTLINE: &str = "directline";
    pub const DIRECTLINE_SPEECH: &str = "directlinespeech";
    pub const EMAIL: &str = "email";
    pub const EMULATOR: &str = "emulator";
    pub const FACEBOOK: &str = "facebook";
    pub const GROUPME: &str = "groupme";
    pub const KIK: &str = "kik";
    pub const LINE: &str = "line";
    pub const MSTEAMS: &str = "msteams";
    pub const SKYPE: &str = "skype";
    pub const SKYPE_FOR_BUSINESS: &str = "skypeforbusiness";
    pub const SLACK: &str = "slack";
    pub const SMS: &str = "sms";
    pub const TELEGRAM: &str = "telegram";
    pub const TEST: &str = "test";
    pub const TWILIO: &str = "twilio";
    pub const WEBCHAT: &str = "webchat";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_channel_account_serialization() {
        let account = ChannelAccount::new("user-1", "Ada").with_role(role_types::USER);
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(json["id"], "user-1");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["role"], "user");
        assert!(json.get("aadObjectId").is_none());
    }

    #[test]
    fn test_channel_account_preserves_unknown_properties() {
        let wire = json!({
            "id": "user-1",
            "name": "Ada",
            "foo": "bar"
        });

        let account: ChannelAccount = serde_json::from_value(wire).unwrap();
        assert_eq!(account.properties["foo"], "bar");

        let out = serde_json::to_value(&account).unwrap();
        assert_eq!(out["foo"], "bar");
    }

    #[test]
    fn test_conversation_account_field_naming() {
        let wire = json!({
            "isGroup": true,
            "conversationType": "channel",
            "tenantId": "tenant-1",
            "id": "conv-1"
        });

        let conversation: ConversationAccount = serde_json::from_value(wire).unwrap();
        assert_eq!(conversation.is_group, Some(true));
        assert_eq!(conversation.conversation_type.as_deref(), Some("channel"));
        assert_eq!(conversation.tenant_id.as_deref(), Some("tenant-1"));

        let out = serde_json::to_value(&conversation).unwrap();
        assert_eq!(out["isGroup"], true);
        assert!(out.get("is_group").is_none());
    }
}
