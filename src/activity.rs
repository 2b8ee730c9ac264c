//! The Activity record and its type-tag dispatcher
//!
//! [`Activity`] is the single wire format for everything that flows between a
//! user, a channel, and a bot: messages, typing indicators, membership
//! changes, invocations, traces. It is a superset record; which fields are
//! meaningful depends on the `type` tag. [`Activity::is_kind`] implements the
//! prefix-matching rule used to route on that tag, and the view types in
//! [`crate::view`] narrow an activity to the fields its kind actually uses.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::account::{ChannelAccount, ConversationAccount};
use crate::attachment::Attachment;
use crate::card::CardAction;
use crate::entity::Entity;
use crate::error::{Result, SchemaError};
use crate::reference::ConversationReference;

/// A single unit of conversational traffic
///
/// Every field any activity kind may use is present and optional; serde never
/// emits unset fields, and unrecognized wire properties collect in
/// [`properties`](Activity::properties) so they survive a round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity type tag (see [`activity_types`])
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Id assigned by the channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the message was sent, UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// When the message was sent, in the sender's local time zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_timestamp: Option<DateTime<FixedOffset>>,

    /// IANA name of the sender's time zone, e.g. `"America/Los_Angeles"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_timezone: Option<String>,

    /// Service endpoint where replies to this activity should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Id of the channel the activity travels on (see [`channels`](crate::account::channels))
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Sender of the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ChannelAccount>,

    /// Conversation the activity belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,

    /// Addressee of the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<ChannelAccount>,

    /// Format of the text field (see [`text_formats`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_format: Option<String>,

    /// Layout hint for multiple attachments (see [`attachment_layouts`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_layout: Option<String>,

    /// Members added to the conversation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members_added: Vec<ChannelAccount>,

    /// Members removed from the conversation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members_removed: Vec<ChannelAccount>,

    /// Reactions added to a prior activity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions_added: Vec<MessageReaction>,

    /// Reactions removed from a prior activity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions_removed: Vec<MessageReaction>,

    /// Updated topic of the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    /// Whether prior history is visible to new members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_disclosed: Option<bool>,

    /// BCP-47 locale of the text, e.g. `"en-US"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// SSML fragment to speak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,

    /// Whether the bot is accepting input (see [`input_hints`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<String>,

    /// Short text to display when the full activity cannot be rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Quick-reply actions offered with the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<SuggestedActions>,

    /// Attached media and cards
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Metadata entities (mentions, locations, client info)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,

    /// Channel-specific payload, opaque to the schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<Value>,

    /// Action being reported, e.g. a contact-relation `add` or `remove`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Id of the activity this one replies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,

    /// Descriptive label for the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Type hint for the `value` payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// Open-ended payload, shaped per activity kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Name of the operation or event being signaled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reference to the conversation this activity relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relates_to: Option<ConversationReference>,

    /// Why the conversation ended (see [`end_of_conversation_codes`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Instant after which the activity is considered stale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,

    /// Relative importance (see [`activity_importance`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,

    /// How the activity should be delivered (see [`delivery_modes`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<String>,

    /// Speech-priming hints for the channel
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listen_for: Vec<String>,

    /// Text fragments a suggestion activity refers back to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_highlights: Vec<TextHighlight>,

    /// Programmatic action the message text corresponds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_action: Option<SemanticAction>,

    /// OAuth-style id of the caller, set by the receiver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Activity {
    /// Media type identifying an Activity payload
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.activity";

    /// Create an activity of the given kind with no other fields set
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Create a `message` activity
    pub fn message() -> Self {
        Self::new(activity_types::MESSAGE)
    }

    /// Create a `typing` activity
    pub fn typing() -> Self {
        Self::new(activity_types::TYPING)
    }

    /// Create a `handoff` activity
    pub fn handoff() -> Self {
        Self::new(activity_types::HANDOFF)
    }

    /// Create an `event` activity
    pub fn event() -> Self {
        Self::new(activity_types::EVENT)
    }

    /// Create an `invoke` activity
    pub fn invoke() -> Self {
        Self::new(activity_types::INVOKE)
    }

    /// Create a `conversationUpdate` activity
    pub fn conversation_update() -> Self {
        Self::new(activity_types::CONVERSATION_UPDATE)
    }

    /// Create a `contactRelationUpdate` activity
    pub fn contact_relation_update() -> Self {
        Self::new(activity_types::CONTACT_RELATION_UPDATE)
    }

    /// Create an `endOfConversation` activity
    pub fn end_of_conversation() -> Self {
        Self::new(activity_types::END_OF_CONVERSATION)
    }

    /// Create a named `trace` activity
    pub fn trace(name: impl Into<String>) -> Self {
        let mut activity = Self::new(activity_types::TRACE);
        activity.name = Some(name.into());
        activity
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    pub fn with_from(mut self, from: ChannelAccount) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_recipient(mut self, recipient: ChannelAccount) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn with_conversation(mut self, conversation: ConversationAccount) -> Self {
        self.conversation = Some(conversation);
        self
    }

    pub fn with_reply_to_id(mut self, reply_to_id: impl Into<String>) -> Self {
        self.reply_to_id = Some(reply_to_id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_speak(mut self, speak: impl Into<String>) -> Self {
        self.speak = Some(speak.into());
        self
    }

    pub fn with_input_hint(mut self, input_hint: impl Into<String>) -> Self {
        self.input_hint = Some(input_hint.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_delivery_mode(mut self, delivery_mode: impl Into<String>) -> Self {
        self.delivery_mode = Some(delivery_mode.into());
        self
    }

    pub fn with_channel_data(mut self, channel_data: Value) -> Self {
        self.channel_data = Some(channel_data);
        self
    }

    /// Append an attachment
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Append an entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Whether the activity carries anything a channel could render
    ///
    /// Whitespace-only text does not count as content.
    pub fn has_content(&self) -> bool {
        if self.text.as_deref().is_some_and(|text| !text.trim().is_empty()) {
            return true;
        }
        if self
            .summary
            .as_deref()
            .is_some_and(|summary| !summary.trim().is_empty())
        {
            return true;
        }
        if !self.attachments.is_empty() {
            return true;
        }
        self.channel_data.is_some()
    }

    /// Whether the activity arrived over a streaming transport
    ///
    /// True when a service URL is present and does not start with `http`
    /// (which also covers `https`), compared ASCII case-insensitively.
    pub fn is_from_streaming_connection(&self) -> bool {
        self.service_url.as_deref().is_some_and(|url| {
            !url.as_bytes()
                .get(..4)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"http"))
        })
    }

    /// Decode the channel-specific payload as `T`
    ///
    /// Unset channel data is [`SchemaError::MissingChannelData`]; a payload
    /// that does not match `T` surfaces the serde error.
    pub fn channel_data<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.channel_data {
            Some(data) => Ok(serde_json::from_value(data.clone())?),
            None => Err(SchemaError::MissingChannelData),
        }
    }

    /// Decode the channel-specific payload as `T`, swallowing failures
    ///
    /// Returns `None` when channel data is absent or does not match `T`; a
    /// failed conversion is reported at debug level.
    pub fn try_channel_data<T: DeserializeOwned>(&self) -> Option<T> {
        match self.channel_data::<T>() {
            Ok(data) => Some(data),
            Err(SchemaError::MissingChannelData) => None,
            Err(error) => {
                tracing::debug!("channel data did not match the requested type: {}", error);
                None
            }
        }
    }

    /// Whether this activity's type tag matches `kind`
    ///
    /// The tag matches when it equals `kind` ASCII case-insensitively, or
    /// extends it with a `/` subtype separator: `"message/subtype"` matches
    /// `"message"`, while `"messageUpdate"` does not. An unset tag matches
    /// nothing.
    pub fn is_kind(&self, kind: &str) -> bool {
        let actual = match self.kind.as_deref() {
            Some(actual) => actual.as_bytes(),
            None => return false,
        };
        let prefix = kind.as_bytes();
        if actual.len() < prefix.len() || !actual[..prefix.len()].eq_ignore_ascii_case(prefix) {
            return false;
        }
        actual.len() == prefix.len() || actual[prefix.len()] == b'/'
    }
}

/// Quick-reply actions attached to a message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedActions {
    /// Recipient ids the actions should be shown to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<String>,

    /// The actions themselves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<CardAction>,
}

impl SuggestedActions {
    pub fn new(actions: Vec<CardAction>) -> Self {
        Self {
            to: Vec::new(),
            actions,
        }
    }
}

/// A reaction (like, +1) to a prior activity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageReaction {
    /// Reaction type (see [`message_reaction_types`])
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl MessageReaction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            properties: Map::new(),
        }
    }
}

/// A fragment of text to highlight, with its occurrence counter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextHighlight {
    /// The snippet to highlight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// 1-based ordinal of the occurrence within the referenced text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<i32>,
}

/// A programmatic action the message text corresponds to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemanticAction {
    /// Id of the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Named entity arguments to the action
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub entities: HashMap<String, Entity>,

    /// Progress of the action (see [`semantic_action_states`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Activity type tags
pub mod activity_types {
    pub const MESSAGE: &str = "message";
    pub const CONTACT_RELATION_UPDATE: &str = "contactRelationUpdate";
    pub const CONVERSATION_UPDATE: &str = "conversationUpdate";
    pub const TYPING: &str = "typing";
    pub const END_OF_CONVERSATION: &str = "endOfConversation";
    pub const EVENT: &str = "event";
    pub const INVOKE: &str = "invoke";
    pub const DELETE_USER_DATA: &str = "deleteUserData";
    pub const MESSAGE_UPDATE: &str = "messageUpdate";
    pub const MESSAGE_DELETE: &str = "messageDelete";
    pub const INSTALLATION_UPDATE: &str = "installationUpdate";
    pub const MESSAGE_REACTION: &str = "messageReaction";
    pub const SUGGESTION: &str = "suggestion";
    pub const TRACE: &str = "trace";
    pub const HANDOFF: &str = "handoff";
    pub const COMMAND: &str = "command";
    pub const COMMAND_RESULT: &str = "commandResult";
    pub const DELAY: &str = "delay";
    pub const INVOKE_RESPONSE: &str = "invokeResponse";
}

/// How an activity should be delivered
pub mod delivery_modes {
    pub const NORMAL: &str = "normal";
    pub const NOTIFICATION: &str = "notification";
    pub const EXPECT_REPLIES: &str = "expectReplies";
    pub const EPHEMERAL: &str = "ephemeral";
}

/// Why a conversation ended
pub mod end_of_conversation_codes {
    pub const UNKNOWN: &str = "unknown";
    pub const COMPLETED_SUCCESSFULLY: &str = "completedSuccessfully";
    pub const USER_CANCELLED: &str = "userCancelled";
    pub const BOT_TIMED_OUT: &str = "botTimedOut";
    pub const BOT_ISSUED_INVALID_MESSAGE: &str = "botIssuedInvalidMessage";
    pub const CHANNEL_FAILED: &str = "channelFailed";
}

/// Whether the sender is ready for more input
pub mod input_hints {
    pub const ACCEPTING_INPUT: &str = "acceptingInput";
    pub const IGNORING_INPUT: &str = "ignoringInput";
    pub const EXPECTING_INPUT: &str = "expectingInput";
}

/// Formats for message text
pub mod text_formats {
    pub const MARKDOWN: &str = "markdown";
    pub const PLAIN: &str = "plain";
    pub const XML: &str = "xml";
}

/// Layouts for multiple attachments
pub mod attachment_layouts {
    pub const LIST: &str = "list";
    pub const CAROUSEL: &str = "carousel";
}

/// Relative importance of an activity
pub mod activity_importance {
    pub const LOW: &str = "low";
    pub const NORMAL: &str = "normal";
    pub const HIGH: &str = "high";
}

/// Actions reported by a `contactRelationUpdate` activity
pub mod contact_relation_actions {
    pub const ADD: &str = "add";
    pub const REMOVE: &str = "remove";
}

/// Actions reported by an `installationUpdate` activity
pub mod installation_update_actions {
    pub const ADD: &str = "add";
    pub const REMOVE: &str = "remove";
}

/// Reaction types
pub mod message_reaction_types {
    pub const LIKE: &str = "like";
    pub const PLUS_ONE: &str = "plusOne";
}

/// States of a semantic action
pub mod semantic_action_states {
    pub const START: &str = "start";
    pub const CONTINUE: &str = "continue";
    pub const DONE: &str = "done";
}

/// Names of well-known `event` activities
pub mod activity_event_names {
    pub const CONTINUE_CONVERSATION: &str = "continueConversation";
    pub const CREATE_CONVERSATION: &str = "createConversation";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_matches_exact_tag() {
        assert!(Activity::message().is_kind(activity_types::MESSAGE));
        assert!(Activity::typing().is_kind(activity_types::TYPING));
    }

    #[test]
    fn test_kind_matches_case_insensitively() {
        let activity = Activity::new("MESSAGE");
        assert!(activity.is_kind("message"));
        assert!(Activity::message().is_kind("Message"));
    }

    #[test]
    fn test_kind_matches_subtype_behind_separator() {
        let activity = Activity::new("message/foo");
        assert!(activity.is_kind("message"));

        let nested = Activity::new("message/foo/bar");
        assert!(nested.is_kind("message"));
    }

    #[test]
    fn test_kind_rejects_longer_tag_without_separator() {
        let activity = Activity::new("messageUpdate");
        assert!(!activity.is_kind("message"));
    }

    #[test]
    fn test_kind_rejects_shorter_tag() {
        assert!(!Activity::message().is_kind("messageUpdate"));
    }

    #[test]
    fn test_kind_rejects_unset_tag() {
        let activity = Activity::default();
        assert!(!activity.is_kind("message"));
    }

    #[test]
    fn test_wire_field_naming() {
        let activity = Activity::message()
            .with_channel_id("msteams")
            .with_reply_to_id("m-1")
            .with_text("hi")
            .with_input_hint(input_hints::ACCEPTING_INPUT);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "message");
        assert_eq!(json["channelId"], "msteams");
        assert_eq!(json["replyToId"], "m-1");
        assert_eq!(json["inputHint"], "acceptingInput");
        assert!(json.get("reply_to_id").is_none());
    }

    #[test]
    fn test_unset_fields_are_not_emitted() {
        let json = serde_json::to_value(Activity::message()).unwrap();
        assert_eq!(json, json!({ "type": "message" }));
    }

    #[test]
    fn test_unknown_properties_round_trip() {
        let wire = json!({
            "type": "message",
            "text": "hi",
            "foo": "bar"
        });

        let activity: Activity = serde_json::from_value(wire).unwrap();
        assert_eq!(activity.properties["foo"], "bar");

        let out = serde_json::to_value(&activity).unwrap();
        assert_eq!(out["foo"], "bar");
        assert_eq!(out["text"], "hi");
    }

    #[test]
    fn test_timestamp_round_trip_preserves_offsets() {
        let wire = json!({
            "type": "message",
            "timestamp": "2024-05-01T12:00:00Z",
            "localTimestamp": "2024-05-01T14:00:00+02:00"
        });

        let activity: Activity = serde_json::from_value(wire).unwrap();
        let out = serde_json::to_value(&activity).unwrap();
        assert_eq!(out["timestamp"], "2024-05-01T12:00:00Z");
        assert_eq!(out["localTimestamp"], "2024-05-01T14:00:00+02:00");
    }

    #[test]
    fn test_has_content() {
        assert!(!Activity::message().has_content());
        assert!(!Activity::message().with_text("   ").has_content());
        assert!(Activity::message().with_text("hi").has_content());
        assert!(Activity::message().with_summary("a summary").has_content());
        assert!(Activity::message()
            .with_attachment(Attachment::from_url("image/png", "https://x.test/a.png"))
            .has_content());
        assert!(Activity::message()
            .with_channel_data(json!({ "k": 1 }))
            .has_content());
    }

    #[test]
    fn test_is_from_streaming_connection() {
        assert!(!Activity::message().is_from_streaming_connection());
        assert!(!Activity::message()
            .with_service_url("https://smba.example.com")
            .is_from_streaming_connection());
        assert!(!Activity::message()
            .with_service_url("HTTP://smba.example.com")
            .is_from_streaming_connection());
        assert!(Activity::message()
            .with_service_url("wss://stream.example.com")
            .is_from_streaming_connection());
    }

    #[test]
    fn test_channel_data_decoding() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct TeamsData {
            team_id: String,
        }

        let activity =
            Activity::message().with_channel_data(json!({ "team_id": "19:team" }));
        let data: TeamsData = activity.channel_data().unwrap();
        assert_eq!(data.team_id, "19:team");

        let empty = Activity::message();
        assert!(matches!(
            empty.channel_data::<TeamsData>(),
            Err(SchemaError::MissingChannelData)
        ));
    }

    #[test]
    fn test_try_channel_data_swallows_mismatch() {
        #[derive(Debug, Deserialize)]
        struct TeamsData {
            #[allow(dead_code)]
            team_id: String,
        }

        let mismatched = Activity::message().with_channel_data(json!({ "other": 1 }));
        assert!(mismatched.try_channel_data::<TeamsData>().is_none());

        let empty = Activity::message();
        assert!(empty.try_channel_data::<TeamsData>().is_none());

        let matched = Activity::message().with_channel_data(json!({ "team_id": "19:team" }));
        assert!(matched.try_channel_data::<TeamsData>().is_some());
    }

    #[test]
    fn test_trace_factory_sets_name() {
        let activity = Activity::trace("bot state");
        assert_eq!(activity.kind.as_deref(), Some(activity_types::TRACE));
        assert_eq!(activity.name.as_deref(), Some("bot state"));
    }
}
