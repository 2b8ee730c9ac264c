//! Attachments: media and rich content carried by an activity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single attachment on an activity
///
/// Either `content_url` points at externally hosted content, or `content`
/// embeds it inline (cards use the inline form).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// MIME type of the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// URL of hosted content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// Inline content, shaped per `content_type`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Display-friendly name of the attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of a thumbnail for the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Attachment {
    /// Create an attachment around inline content
    pub fn from_content(content_type: impl Into<String>, content: Value) -> Self {
        Self {
            content_type: Some(content_type.into()),
            content: Some(content),
            ..Default::default()
        }
    }

    /// Create an attachment pointing at hosted content
    pub fn from_url(content_type: impl Into<String>, content_url: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            content_url: Some(content_url.into()),
            ..Default::default()
        }
    }
}

/// Raw attachment bytes for upload, base64-coded on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentData {
    /// MIME type of the attachment
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display-friendly name of the attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Bytes of the original content
    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_base64: Option<Vec<u8>>,

    /// Bytes of a thumbnail for the content
    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_base64: Option<Vec<u8>>,
}

/// Metadata describing a stored attachment and the views it offers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInfo {
    /// Display-friendly name of the attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MIME type of the attachment
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Views (original, thumbnail) available for the attachment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<AttachmentView>,
}

/// One downloadable rendering of a stored attachment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentView {
    /// Id of the view (e.g. `"original"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    /// Size of this view in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// Standard base64 coding for optional byte fields
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?;
        encoded
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}
