//! Conversation references: addressing state for later delivery
//!
//! A [`ConversationReference`] captures everything needed to route an
//! activity back into a conversation: the two participants, the conversation
//! id, the channel, and the service endpoint. Bots persist references to send
//! proactive messages long after the original turn ended.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::account::{ChannelAccount, ConversationAccount};
use crate::activity::{activity_event_names, Activity};
use crate::conversation::ResourceResponse;

/// The addressing portion of an activity, extracted for reuse
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationReference {
    /// Id of the activity the reference was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,

    /// The user participating in the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ChannelAccount>,

    /// The bot participating in the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<ChannelAccount>,

    /// The conversation itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,

    /// Channel the conversation lives on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Service endpoint for delivery into the conversation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Locale of the conversation at the time of the referenced activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ConversationReference {
    /// Build the activity that resumes this conversation
    ///
    /// Yields an `event` activity named `continueConversation` with a fresh
    /// id, `relates_to` pointing back at this reference, and the reference
    /// applied in the incoming direction so the bot sees it as received
    /// traffic.
    pub fn get_continuation_activity(&self) -> Activity {
        let mut activity = Activity::event()
            .with_name(activity_event_names::CONTINUE_CONVERSATION)
            .with_id(Uuid::now_v7().to_string());
        activity.relates_to = Some(self.clone());
        activity.apply_conversation_reference(self, true);
        activity
    }
}

impl Activity {
    /// Extract the addressing state of this activity
    ///
    /// Pure projection: `from` becomes `user`, `recipient` becomes `bot`, and
    /// the activity id becomes `activity_id`. The activity is not modified.
    pub fn get_conversation_reference(&self) -> ConversationReference {
        ConversationReference {
            activity_id: self.id.clone(),
            user: self.from.clone(),
            bot: self.recipient.clone(),
            conversation: self.conversation.clone(),
            channel_id: self.channel_id.clone(),
            service_url: self.service_url.clone(),
            locale: self.locale.clone(),
        }
    }

    /// Extract addressing state pointing at a just-sent reply
    ///
    /// Same projection as [`get_conversation_reference`], with `activity_id`
    /// replaced by the id the channel assigned to the reply.
    ///
    /// [`get_conversation_reference`]: Activity::get_conversation_reference
    pub fn get_reply_conversation_reference(
        &self,
        reply: &ResourceResponse,
    ) -> ConversationReference {
        let mut reference = self.get_conversation_reference();
        reference.activity_id = reply.id.clone();
        reference
    }

    /// Stamp addressing state from a reference onto this activity
    ///
    /// `channel_id`, `service_url`, and `conversation` are always taken from
    /// the reference; `locale` only when the reference carries one. The
    /// direction decides the participant swap: an incoming activity is
    /// addressed user-to-bot and gets `id` from the reference, an outgoing
    /// one bot-to-user and gets `reply_to_id` instead.
    pub fn apply_conversation_reference(
        &mut self,
        reference: &ConversationReference,
        is_incoming: bool,
    ) -> &mut Self {
        self.channel_id = reference.channel_id.clone();
        self.service_url = reference.service_url.clone();
        self.conversation = reference.conversation.clone();
        if reference.locale.is_some() {
            self.locale = reference.locale.clone();
        }

        if is_incoming {
            self.from = reference.user.clone();
            self.recipient = reference.bot.clone();
            if reference.activity_id.is_some() {
                self.id = reference.activity_id.clone();
            }
        } else {
            self.from = reference.bot.clone();
            self.recipient = reference.user.clone();
            if reference.activity_id.is_some() {
                self.reply_to_id = reference.activity_id.clone();
            }
        }
        self
    }

    /// Build a message replying to this activity
    ///
    /// The reply travels the same channel and conversation with `from` and
    /// `recipient` swapped, carries `reply_to_id` pointing back here, and
    /// keeps only the routing core of each account (id and name; the
    /// conversation also keeps `is_group`). Text defaults to empty and the
    /// locale to this activity's.
    pub fn create_reply(&self, text: Option<&str>, locale: Option<&str>) -> Activity {
        let mut reply = Activity::message();
        reply.timestamp = Some(Utc::now());
        reply.from = self.recipient.as_ref().map(slim_account);
        reply.recipient = self.from.as_ref().map(slim_account);
        reply.reply_to_id = self.id.clone();
        reply.service_url = self.service_url.clone();
        reply.channel_id = self.channel_id.clone();
        reply.conversation = self.conversation.as_ref().map(slim_conversation);
        reply.text = Some(text.unwrap_or_default().to_string());
        reply.locale = locale.map(str::to_string).or_else(|| self.locale.clone());
        reply
    }

    /// Build a trace activity replying to this one
    ///
    /// Traces carry diagnostic payloads to transcript and debugging tools.
    /// The routing swap matches [`create_reply`](Activity::create_reply); the
    /// conversation is carried over as-is.
    pub fn create_trace(
        &self,
        name: impl Into<String>,
        value: Option<Value>,
        value_type: Option<&str>,
        label: Option<&str>,
    ) -> Activity {
        let mut trace = Activity::trace(name);
        trace.timestamp = Some(Utc::now());
        trace.from = self.recipient.as_ref().map(slim_account);
        trace.recipient = self.from.as_ref().map(slim_account);
        trace.reply_to_id = self.id.clone();
        trace.service_url = self.service_url.clone();
        trace.channel_id = self.channel_id.clone();
        trace.conversation = self.conversation.clone();
        trace.value_type = value_type.map(str::to_string);
        trace.value = value;
        trace.label = label.map(str::to_string);
        trace
    }
}

/// Copy only the routing core of an account
fn slim_account(account: &ChannelAccount) -> ChannelAccount {
    ChannelAccount {
        id: account.id.clone(),
        name: account.name.clone(),
        ..Default::default()
    }
}

/// Copy only the routing core of a conversation account
fn slim_conversation(conversation: &ConversationAccount) -> ConversationAccount {
    ConversationAccount {
        is_group: conversation.is_group,
        id: conversation.id.clone(),
        name: conversation.name.clone(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::activity::activity_types;

    use super::*;

    fn incoming_activity() -> Activity {
        Activity::message()
            .with_id("1")
            .with_from(ChannelAccount::new("A", "Ada"))
            .with_recipient(ChannelAccount::new("B", "Bot"))
            .with_conversation(ConversationAccount::new("C"))
            .with_channel_id("test")
            .with_service_url("https://x")
            .with_locale("en-US")
    }

    #[test]
    fn test_reference_field_naming() {
        let reference = incoming_activity().get_conversation_reference();
        let json = serde_json::to_value(&reference).unwrap();

        assert_eq!(json["activityId"], "1");
        assert_eq!(json["channelId"], "test");
        assert_eq!(json["serviceUrl"], "https://x");
        assert_eq!(json["user"]["id"], "A");
        assert_eq!(json["bot"]["id"], "B");
    }

    #[test]
    fn test_projection_maps_participants() {
        let reference = incoming_activity().get_conversation_reference();

        assert_eq!(reference.activity_id.as_deref(), Some("1"));
        assert_eq!(reference.user.as_ref().unwrap().id.as_deref(), Some("A"));
        assert_eq!(reference.bot.as_ref().unwrap().id.as_deref(), Some("B"));
        assert_eq!(
            reference.conversation.as_ref().unwrap().id.as_deref(),
            Some("C")
        );
        assert_eq!(reference.locale.as_deref(), Some("en-US"));
    }

    #[test]
    fn test_apply_incoming_restores_projected_activity() {
        let source = incoming_activity();
        let reference = source.get_conversation_reference();

        let mut reply = Activity::message();
        reply.apply_conversation_reference(&reference, true);

        assert_eq!(reply.from, source.from);
        assert_eq!(reply.recipient, source.recipient);
        assert_eq!(reply.conversation, source.conversation);
        assert_eq!(reply.channel_id, source.channel_id);
        assert_eq!(reply.service_url, source.service_url);
        assert_eq!(reply.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_apply_outgoing_swaps_and_sets_reply_to_id() {
        let reference = incoming_activity().get_conversation_reference();

        let mut outgoing = Activity::message();
        outgoing.apply_conversation_reference(&reference, false);

        assert_eq!(outgoing.from.as_ref().unwrap().id.as_deref(), Some("B"));
        assert_eq!(outgoing.recipient.as_ref().unwrap().id.as_deref(), Some("A"));
        assert_eq!(outgoing.reply_to_id.as_deref(), Some("1"));
        assert!(outgoing.id.is_none());
    }

    #[test]
    fn test_apply_keeps_locale_when_reference_has_none() {
        let mut reference = incoming_activity().get_conversation_reference();
        reference.locale = None;

        let mut activity = Activity::message().with_locale("fr-FR");
        activity.apply_conversation_reference(&reference, false);

        assert_eq!(activity.locale.as_deref(), Some("fr-FR"));
    }

    #[test]
    fn test_apply_without_activity_id_leaves_ids_unset() {
        let mut reference = incoming_activity().get_conversation_reference();
        reference.activity_id = None;

        let mut incoming = Activity::message();
        incoming.apply_conversation_reference(&reference, true);
        assert!(incoming.id.is_none());

        let mut outgoing = Activity::message();
        outgoing.apply_conversation_reference(&reference, false);
        assert!(outgoing.reply_to_id.is_none());
    }

    #[test]
    fn test_create_reply_swaps_and_routes() {
        let source = incoming_activity();
        let reply = source.create_reply(Some("hi"), None);

        assert_eq!(reply.kind.as_deref(), Some(activity_types::MESSAGE));
        assert_eq!(reply.from.as_ref().unwrap().id.as_deref(), Some("B"));
        assert_eq!(reply.recipient.as_ref().unwrap().id.as_deref(), Some("A"));
        assert_eq!(reply.reply_to_id.as_deref(), Some("1"));
        assert_eq!(reply.conversation.as_ref().unwrap().id.as_deref(), Some("C"));
        assert_eq!(reply.channel_id.as_deref(), Some("test"));
        assert_eq!(reply.service_url.as_deref(), Some("https://x"));
        assert_eq!(reply.text.as_deref(), Some("hi"));
        assert!(reply.timestamp.is_some());
    }

    #[test]
    fn test_create_reply_defaults() {
        let source = incoming_activity();
        let reply = source.create_reply(None, None);

        assert_eq!(reply.text.as_deref(), Some(""));
        assert_eq!(reply.locale.as_deref(), Some("en-US"));

        let localized = source.create_reply(None, Some("de-DE"));
        assert_eq!(localized.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_create_reply_slims_accounts() {
        let mut source = incoming_activity();
        if let Some(from) = source.from.as_mut() {
            from.aad_object_id = Some("aad-1".to_string());
            from.properties.insert("extra".to_string(), json!(true));
        }

        let reply = source.create_reply(None, None);
        let recipient = reply.recipient.unwrap();
        assert_eq!(recipient.id.as_deref(), Some("A"));
        assert!(recipient.aad_object_id.is_none());
        assert!(recipient.properties.is_empty());
    }

    #[test]
    fn test_create_trace_carries_payload() {
        let source = incoming_activity();
        let trace = source.create_trace(
            "bot state",
            Some(json!({ "turn": 3 })),
            Some("https://schemas.example.com/state"),
            Some("state snapshot"),
        );

        assert_eq!(trace.kind.as_deref(), Some(activity_types::TRACE));
        assert_eq!(trace.name.as_deref(), Some("bot state"));
        assert_eq!(trace.value, Some(json!({ "turn": 3 })));
        assert_eq!(
            trace.value_type.as_deref(),
            Some("https://schemas.example.com/state")
        );
        assert_eq!(trace.label.as_deref(), Some("state snapshot"));
        assert_eq!(trace.reply_to_id.as_deref(), Some("1"));
        assert_eq!(trace.from.as_ref().unwrap().id.as_deref(), Some("B"));
    }

    #[test]
    fn test_reply_reference_uses_sent_id() {
        let source = incoming_activity();
        let sent = ResourceResponse {
            id: Some("serverId".to_string()),
        };

        let reference = source.get_reply_conversation_reference(&sent);
        assert_eq!(reference.activity_id.as_deref(), Some("serverId"));
        assert_eq!(reference.channel_id.as_deref(), Some("test"));
    }

    #[test]
    fn test_continuation_activity() {
        let reference = incoming_activity().get_conversation_reference();
        let continuation = reference.get_continuation_activity();

        assert_eq!(continuation.kind.as_deref(), Some(activity_types::EVENT));
        assert_eq!(
            continuation.name.as_deref(),
            Some(activity_event_names::CONTINUE_CONVERSATION)
        );
        assert_eq!(continuation.relates_to.as_ref(), Some(&reference));
        assert_eq!(continuation.from.as_ref().unwrap().id.as_deref(), Some("A"));
        assert_eq!(
            continuation.recipient.as_ref().unwrap().id.as_deref(),
            Some("B")
        );
        assert_eq!(continuation.id.as_deref(), Some("1"));
    }
}
