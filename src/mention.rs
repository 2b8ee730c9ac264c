//! Mention entities and mention handling on activities
//!
//! Channels report @-mentions as `"mention"` entities whose `text` field holds
//! the exact substring of the message text that rendered the mention. The
//! operations here recover those entities and strip mention markup so a bot
//! can read the rest of the message cleanly.

use serde::{Deserialize, Serialize};

use crate::account::ChannelAccount;
use crate::activity::Activity;

/// A reference to another conversation participant inside message text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    /// The account being mentioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<ChannelAccount>,

    /// The substring of the message text that represents the mention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Entity type tag, always [`Mention::KIND`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Mention {
    pub const KIND: &'static str = "mention";

    /// Create a mention of the given account with the type tag pre-filled
    pub fn new(mentioned: ChannelAccount, text: impl Into<String>) -> Self {
        Self {
            mentioned: Some(mentioned),
            text: Some(text.into()),
            kind: Some(Self::KIND.to_string()),
        }
    }
}

impl Activity {
    /// Collect all mention entities carried by this activity
    ///
    /// Entities whose type tag is `"mention"` (compared ASCII
    /// case-insensitively) are decoded in source order. Activities with no
    /// entities yield an empty vec, never an error.
    pub fn get_mentions(&self) -> Vec<Mention> {
        self.entities
            .iter()
            .filter(|entity| {
                entity
                    .kind
                    .as_deref()
                    .is_some_and(|kind| kind.eq_ignore_ascii_case(Mention::KIND))
            })
            .filter_map(|entity| entity.get_as().ok())
            .collect()
    }

    /// Whether any mention targets the account with the given id
    pub fn mentions_id(&self, id: &str) -> bool {
        self.get_mentions().iter().any(|mention| {
            mention
                .mentioned
                .as_ref()
                .and_then(|account| account.id.as_deref())
                == Some(id)
        })
    }

    /// Whether any mention targets this activity's recipient
    pub fn mentions_recipient(&self) -> bool {
        self.recipient
            .as_ref()
            .and_then(|recipient| recipient.id.as_deref())
            .is_some_and(|id| self.mentions_id(id))
    }

    /// Strip mention markup for the given account id out of the message text
    ///
    /// For every mention whose `mentioned.id` equals `id`, all occurrences of
    /// the mention's `text` are deleted from `activity.text` by ASCII
    /// case-insensitive exact-substring replacement. Surrounding whitespace
    /// is left as-is. Returns the updated text.
    pub fn remove_mention_text(&mut self, id: &str) -> Option<&str> {
        let mentions: Vec<Mention> = self
            .get_mentions()
            .into_iter()
            .filter(|mention| {
                mention
                    .mentioned
                    .as_ref()
                    .and_then(|account| account.id.as_deref())
                    == Some(id)
            })
            .collect();

        for mention in mentions {
            let pattern = match mention.text.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => continue,
            };
            if let Some(text) = self.text.as_ref() {
                self.text = Some(remove_all_ignore_ascii_case(text, pattern));
            }
        }
        self.text.as_deref()
    }

    /// Strip mention markup for this activity's recipient out of the text
    ///
    /// Leaves the text untouched when the activity has no recipient id.
    pub fn remove_recipient_mention(&mut self) -> Option<&str> {
        match self
            .recipient
            .as_ref()
            .and_then(|recipient| recipient.id.clone())
        {
            Some(id) => self.remove_mention_text(&id),
            None => self.text.as_deref(),
        }
    }
}

/// Delete every ASCII case-insensitive occurrence of `pattern` from `text`
///
/// Matches can only begin and end on char boundaries because a valid UTF-8
/// pattern never starts with a continuation byte and ASCII folding preserves
/// byte structure, so slicing at match edges is safe.
fn remove_all_ignore_ascii_case(text: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    let bytes = text.as_bytes();
    let needle = pattern.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            out.push_str(&text[copied..i]);
            i += needle.len();
            copied = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[copied..]);
    out
}
