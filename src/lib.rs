//! # Activity Protocol
//!
//! Schema types for the Bot Framework Activity protocol.
//!
//! This library models the Activity wire format: the superset
//! [`Activity`](activity::Activity) record that carries every kind of
//! conversational traffic, the capability
//! views that narrow an activity to the fields its kind actually uses, and
//! the conversation-reference operations bots use to reply now or resume a
//! conversation later.
//!
//! ## Features
//!
//! - **Superset record**: one `Activity` struct covers messages, typing,
//!   membership changes, invocations, and traces
//! - **Zero-copy narrowing**: `as_message()` and friends hand out `Copy`
//!   views over a borrowed activity, driven by the prefix-matching type tag
//! - **Round-trip safe**: unknown JSON properties collect in ordered
//!   extension bags and re-emit verbatim
//! - **Wire exact**: camelCase bindings and constant tags match the protocol
//!   byte for byte
//!
//! ## Example
//!
//! ```rust
//! use activity_protocol::prelude::*;
//!
//! let incoming = Activity::message()
//!     .with_id("m-1")
//!     .with_from(ChannelAccount::new("user-1", "Ada"))
//!     .with_recipient(ChannelAccount::new("bot-1", "Bot"))
//!     .with_channel_id("emulator")
//!     .with_text("hello bot");
//!
//! let message = incoming.as_message().expect("narrowed by type tag");
//! assert_eq!(message.text(), Some("hello bot"));
//!
//! let reply = incoming.create_reply(Some("hello user"), None);
//! assert_eq!(reply.reply_to_id.as_deref(), Some("m-1"));
//! assert_eq!(reply.recipient.unwrap().id.as_deref(), Some("user-1"));
//! ```

pub mod account;
pub mod activity;
pub mod attachment;
pub mod card;
pub mod conversation;
pub mod entity;
pub mod error;
pub mod mention;
pub mod payment;
pub mod reference;
pub mod token;
pub mod view;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        account::{ChannelAccount, ConversationAccount},
        activity::{activity_types, Activity},
        attachment::Attachment,
        entity::Entity,
        error::SchemaError,
        mention::Mention,
        reference::ConversationReference,
    };
}
