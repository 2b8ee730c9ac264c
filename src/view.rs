//! Capability views: an activity narrowed to one kind
//!
//! An [`Activity`] is a superset record; code that handles one kind of
//! traffic only cares about a few of its fields. A view is a `Copy` wrapper
//! over `&Activity` exposing the fields meaningful for its kind, built by the
//! matching `as_*` accessor. Narrowing follows [`Activity::is_kind`], so
//! subtyped tags narrow too:
//!
//! ```
//! use activity_protocol::prelude::*;
//!
//! let activity = Activity::new("message/search").with_text("find cats");
//! let message = activity.as_message().unwrap();
//! assert_eq!(message.text(), Some("find cats"));
//! assert!(activity.as_typing().is_none());
//! ```

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::account::{ChannelAccount, ConversationAccount};
use crate::activity::{
    activity_types, Activity, MessageReaction, SuggestedActions, TextHighlight,
};
use crate::attachment::Attachment;
use crate::entity::Entity;
use crate::reference::ConversationReference;

/// Declares a view struct, its routing accessors, and the narrowing accessor
/// on `Activity`.
macro_rules! activity_view {
    ($(#[$doc:meta])* $name:ident, $as_fn:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            activity: &'a Activity,
        }

        impl<'a> $name<'a> {
            /// The full record behind this view
            pub fn activity(&self) -> &'a Activity {
                self.activity
            }

            pub fn id(&self) -> Option<&'a str> {
                self.activity.id.as_deref()
            }

            pub fn timestamp(&self) -> Option<DateTime<Utc>> {
                self.activity.timestamp
            }

            pub fn channel_id(&self) -> Option<&'a str> {
                self.activity.channel_id.as_deref()
            }

            pub fn service_url(&self) -> Option<&'a str> {
                self.activity.service_url.as_deref()
            }

            pub fn from(&self) -> Option<&'a ChannelAccount> {
                self.activity.from.as_ref()
            }

            pub fn recipient(&self) -> Option<&'a ChannelAccount> {
                self.activity.recipient.as_ref()
            }

            pub fn conversation(&self) -> Option<&'a ConversationAccount> {
                self.activity.conversation.as_ref()
            }

            pub fn reply_to_id(&self) -> Option<&'a str> {
                self.activity.reply_to_id.as_deref()
            }
        }

        impl Activity {
            #[doc = concat!("Narrow to a [`", stringify!($name), "`] when the type tag matches")]
            pub fn $as_fn(&self) -> Option<$name<'_>> {
                if self.is_kind($kind) {
                    Some($name { activity: self })
                } else {
                    None
                }
            }
        }
    };
}

/// Accessors for the message-shaped field set, shared by the views whose
/// kinds carry full message content.
macro_rules! message_content_accessors {
    ($name:ident) => {
        impl<'a> $name<'a> {
            pub fn text(&self) -> Option<&'a str> {
                self.activity.text.as_deref()
            }

            pub fn speak(&self) -> Option<&'a str> {
                self.activity.speak.as_deref()
            }

            pub fn input_hint(&self) -> Option<&'a str> {
                self.activity.input_hint.as_deref()
            }

            pub fn summary(&self) -> Option<&'a str> {
                self.activity.summary.as_deref()
            }

            pub fn text_format(&self) -> Option<&'a str> {
                self.activity.text_format.as_deref()
            }

            pub fn attachment_layout(&self) -> Option<&'a str> {
                self.activity.attachment_layout.as_deref()
            }

            pub fn locale(&self) -> Option<&'a str> {
                self.activity.locale.as_deref()
            }

            pub fn attachments(&self) -> &'a [Attachment] {
                &self.activity.attachments
            }

            pub fn suggested_actions(&self) -> Option<&'a SuggestedActions> {
                self.activity.suggested_actions.as_ref()
            }

            pub fn entities(&self) -> &'a [Entity] {
                &self.activity.entities
            }

            pub fn importance(&self) -> Option<&'a str> {
                self.activity.importance.as_deref()
            }

            pub fn delivery_mode(&self) -> Option<&'a str> {
                self.activity.delivery_mode.as_deref()
            }

            pub fn expiration(&self) -> Option<DateTime<Utc>> {
                self.activity.expiration
            }

            pub fn value(&self) -> Option<&'a Value> {
                self.activity.value.as_ref()
            }
        }
    };
}

activity_view!(
    /// A `message` activity: content from one participant to another
    MessageActivity,
    as_message,
    activity_types::MESSAGE
);
message_content_accessors!(MessageActivity);

activity_view!(
    /// A `contactRelationUpdate` activity: the contact list changed
    ContactRelationUpdateActivity,
    as_contact_relation_update,
    activity_types::CONTACT_RELATION_UPDATE
);

impl<'a> ContactRelationUpdateActivity<'a> {
    /// `add` or `remove` (see [`crate::activity::contact_relation_actions`])
    pub fn action(&self) -> Option<&'a str> {
        self.activity.action.as_deref()
    }
}

activity_view!(
    /// An `installationUpdate` activity: the bot was installed or removed
    InstallationUpdateActivity,
    as_installation_update,
    activity_types::INSTALLATION_UPDATE
);

impl<'a> InstallationUpdateActivity<'a> {
    /// `add` or `remove` (see [`crate::activity::installation_update_actions`])
    pub fn action(&self) -> Option<&'a str> {
        self.activity.action.as_deref()
    }
}

activity_view!(
    /// A `conversationUpdate` activity: membership or metadata changed
    ConversationUpdateActivity,
    as_conversation_update,
    activity_types::CONVERSATION_UPDATE
);

impl<'a> ConversationUpdateActivity<'a> {
    pub fn members_added(&self) -> &'a [ChannelAccount] {
        &self.activity.members_added
    }

    pub fn members_removed(&self) -> &'a [ChannelAccount] {
        &self.activity.members_removed
    }

    pub fn topic_name(&self) -> Option<&'a str> {
        self.activity.topic_name.as_deref()
    }

    pub fn history_disclosed(&self) -> Option<bool> {
        self.activity.history_disclosed
    }
}

activity_view!(
    /// A `typing` activity: the other side is composing
    TypingActivity,
    as_typing,
    activity_types::TYPING
);

activity_view!(
    /// An `endOfConversation` activity: the conversation is over
    EndOfConversationActivity,
    as_end_of_conversation,
    activity_types::END_OF_CONVERSATION
);

impl<'a> EndOfConversationActivity<'a> {
    /// Why the conversation ended (see [`crate::activity::end_of_conversation_codes`])
    pub fn code(&self) -> Option<&'a str> {
        self.activity.code.as_deref()
    }

    pub fn text(&self) -> Option<&'a str> {
        self.activity.text.as_deref()
    }
}

activity_view!(
    /// An `event` activity: an asynchronous signal to the bot
    EventActivity,
    as_event,
    activity_types::EVENT
);

impl<'a> EventActivity<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.activity.name.as_deref()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.activity.value.as_ref()
    }

    pub fn relates_to(&self) -> Option<&'a ConversationReference> {
        self.activity.relates_to.as_ref()
    }
}

activity_view!(
    /// An `invoke` activity: a synchronous operation expecting a response
    InvokeActivity,
    as_invoke,
    activity_types::INVOKE
);

impl<'a> InvokeActivity<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.activity.name.as_deref()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.activity.value.as_ref()
    }

    pub fn relates_to(&self) -> Option<&'a ConversationReference> {
        self.activity.relates_to.as_ref()
    }
}

activity_view!(
    /// A `messageUpdate` activity: a previously sent message was edited
    MessageUpdateActivity,
    as_message_update,
    activity_types::MESSAGE_UPDATE
);
message_content_accessors!(MessageUpdateActivity);

activity_view!(
    /// A `messageDelete` activity: a previously sent message was deleted
    MessageDeleteActivity,
    as_message_delete,
    activity_types::MESSAGE_DELETE
);

activity_view!(
    /// A `messageReaction` activity: reactions were added or removed
    MessageReactionActivity,
    as_message_reaction,
    activity_types::MESSAGE_REACTION
);

impl<'a> MessageReactionActivity<'a> {
    pub fn reactions_added(&self) -> &'a [MessageReaction] {
        &self.activity.reactions_added
    }

    pub fn reactions_removed(&self) -> &'a [MessageReaction] {
        &self.activity.reactions_removed
    }
}

activity_view!(
    /// A `suggestion` activity: a private suggestion referencing earlier text
    SuggestionActivity,
    as_suggestion,
    activity_types::SUGGESTION
);
message_content_accessors!(SuggestionActivity);

impl<'a> SuggestionActivity<'a> {
    pub fn text_highlights(&self) -> &'a [TextHighlight] {
        &self.activity.text_highlights
    }
}

activity_view!(
    /// A `trace` activity: diagnostic payload for transcript tooling
    TraceActivity,
    as_trace,
    activity_types::TRACE
);

impl<'a> TraceActivity<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.activity.name.as_deref()
    }

    pub fn label(&self) -> Option<&'a str> {
        self.activity.label.as_deref()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.activity.value.as_ref()
    }

    pub fn value_type(&self) -> Option<&'a str> {
        self.activity.value_type.as_deref()
    }

    pub fn relates_to(&self) -> Option<&'a ConversationReference> {
        self.activity.relates_to.as_ref()
    }
}

activity_view!(
    /// A `handoff` activity: control of the conversation was transferred
    HandoffActivity,
    as_handoff,
    activity_types::HANDOFF
);

activity_view!(
    /// A `command` activity: a request to perform a named action
    CommandActivity,
    as_command,
    activity_types::COMMAND
);

impl<'a> CommandActivity<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.activity.name.as_deref()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.activity.value.as_ref()
    }
}

activity_view!(
    /// A `commandResult` activity: the outcome of a command
    CommandResultActivity,
    as_command_result,
    activity_types::COMMAND_RESULT
);

impl<'a> CommandResultActivity<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.activity.name.as_deref()
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.activity.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_narrowing_requires_matching_kind() {
        let activity = Activity::message().with_text("hi");

        assert!(activity.as_message().is_some());
        assert!(activity.as_typing().is_none());
        assert!(activity.as_event().is_none());
        assert!(activity.as_message_update().is_none());
    }

    #[test]
    fn test_narrowing_accepts_subtyped_tags() {
        let activity = Activity::new("message/search").with_text("find cats");
        assert!(activity.as_message().is_some());

        let update = Activity::new("messageUpdate");
        assert!(update.as_message().is_none());
        assert!(update.as_message_update().is_some());
    }

    #[test]
    fn test_view_routing_accessors_borrow() {
        let activity = Activity::message()
            .with_id("m-1")
            .with_channel_id("test")
            .with_from(ChannelAccount::new("A", "Ada"))
            .with_recipient(ChannelAccount::new("B", "Bot"))
            .with_reply_to_id("m-0");

        let message = activity.as_message().unwrap();
        assert_eq!(message.id(), Some("m-1"));
        assert_eq!(message.channel_id(), Some("test"));
        assert_eq!(message.from().unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(message.recipient().unwrap().id.as_deref(), Some("B"));
        assert_eq!(message.reply_to_id(), Some("m-0"));
        assert_eq!(message.activity().kind.as_deref(), Some("message"));
    }

    #[test]
    fn test_message_view_content_accessors() {
        let mut activity = Activity::message()
            .with_text("hello")
            .with_input_hint("acceptingInput")
            .with_locale("en-US");
        activity.suggested_actions = Some(SuggestedActions::new(vec![
            crate::card::CardAction::im_back("Red"),
        ]));

        let message = activity.as_message().unwrap();
        assert_eq!(message.text(), Some("hello"));
        assert_eq!(message.input_hint(), Some("acceptingInput"));
        assert_eq!(message.locale(), Some("en-US"));
        assert_eq!(message.suggested_actions().unwrap().actions.len(), 1);
        assert!(message.attachments().is_empty());
    }

    #[test]
    fn test_conversation_update_view() {
        let mut activity = Activity::conversation_update();
        activity.members_added.push(ChannelAccount::new("u-1", "Ada"));
        activity.topic_name = Some("standup".to_string());

        let update = activity.as_conversation_update().unwrap();
        assert_eq!(update.members_added().len(), 1);
        assert!(update.members_removed().is_empty());
        assert_eq!(update.topic_name(), Some("standup"));
        assert_eq!(update.history_disclosed(), None);
    }

    #[test]
    fn test_event_and_invoke_views_are_distinct() {
        let event = Activity::event()
            .with_name("tokens/response")
            .with_value(json!({ "token": "t" }));

        assert_eq!(event.as_event().unwrap().name(), Some("tokens/response"));
        assert!(event.as_invoke().is_none());

        let invoke = Activity::invoke().with_name("signin/verifyState");
        assert_eq!(invoke.as_invoke().unwrap().name(), Some("signin/verifyState"));
        assert!(invoke.as_event().is_none());
    }

    #[test]
    fn test_trace_view_exposes_payload() {
        let mut activity = Activity::trace("bot state").with_value(json!({ "turn": 1 }));
        activity.label = Some("snapshot".to_string());
        activity.value_type = Some("state".to_string());

        let trace = activity.as_trace().unwrap();
        assert_eq!(trace.name(), Some("bot state"));
        assert_eq!(trace.label(), Some("snapshot"));
        assert_eq!(trace.value_type(), Some("state"));
        assert_eq!(trace.value(), Some(&json!({ "turn": 1 })));
    }

    #[test]
    fn test_end_of_conversation_view() {
        let activity = Activity::end_of_conversation()
            .with_code("completedSuccessfully")
            .with_text("bye");

        let eoc = activity.as_end_of_conversation().unwrap();
        assert_eq!(eoc.code(), Some("completedSuccessfully"));
        assert_eq!(eoc.text(), Some("bye"));
    }

    #[test]
    fn test_views_are_copy() {
        let activity = Activity::message().with_text("hi");
        let view = activity.as_message().unwrap();
        let copy = view;

        assert_eq!(view.text(), copy.text());
    }

    #[test]
    fn test_suggestion_view_highlights() {
        let mut activity = Activity::new(activity_types::SUGGESTION).with_text("try this");
        activity.text_highlights.push(TextHighlight {
            text: Some("this".to_string()),
            occurrence: Some(1),
        });

        let suggestion = activity.as_suggestion().unwrap();
        assert_eq!(suggestion.text(), Some("try this"));
        assert_eq!(suggestion.text_highlights().len(), 1);
    }

    #[test]
    fn test_command_views() {
        let command = Activity::new(activity_types::COMMAND)
            .with_name("deviceAction")
            .with_value(json!({ "volume": 3 }));
        assert_eq!(command.as_command().unwrap().name(), Some("deviceAction"));
        assert!(command.as_command_result().is_none());

        let result = Activity::new(activity_types::COMMAND_RESULT).with_name("deviceAction");
        assert!(result.as_command_result().is_some());
        assert!(result.as_command().is_none());
    }
}
