//! Rich card content types
//!
//! Cards travel inside [`Attachment::content`] with a
//! `application/vnd.microsoft.card.*` content type. Every card exposes its
//! content type as a `CONTENT_TYPE` const and converts itself into a
//! ready-to-send attachment with `to_attachment`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attachment::Attachment;
use crate::error::Result;
use crate::token::TokenExchangeResource;

/// Clickable action offered by a card or suggested-action strip
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    /// Action type (see [`card_action_types`])
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Text description on the button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Image to display on the button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Text for the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Text shown in the chat feed when the button is clicked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,

    /// Supplementary parameter, shaped per action type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Channel-specific additional data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<Value>,

    /// Alternate text for the button image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt_text: Option<String>,
}

impl CardAction {
    /// Create an action of the given type
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// An `imBack` action that echoes its title into the conversation
    pub fn im_back(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            kind: Some(card_action_types::IM_BACK.to_string()),
            value: Some(Value::String(title.clone())),
            title: Some(title),
            ..Default::default()
        }
    }

    /// A `postBack` action that sends a payload invisible to the chat feed
    pub fn post_back(title: impl Into<String>, value: Value) -> Self {
        Self {
            kind: Some(card_action_types::POST_BACK.to_string()),
            title: Some(title.into()),
            value: Some(value),
            ..Default::default()
        }
    }

    /// An `openUrl` action that opens the given URL
    pub fn open_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: Some(card_action_types::OPEN_URL.to_string()),
            title: Some(title.into()),
            value: Some(Value::String(url.into())),
            ..Default::default()
        }
    }

    /// A `messageBack` action carrying both display text and a payload
    pub fn message_back(
        title: impl Into<String>,
        text: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            kind: Some(card_action_types::MESSAGE_BACK.to_string()),
            title: Some(title.into()),
            text: Some(text.into()),
            value,
            ..Default::default()
        }
    }
}

/// An image on a card, optionally clickable
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    /// URL of the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Alternate text for accessibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Action to take when the image is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

impl CardImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// A card with a large image, text, and buttons
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<CardImage>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Action to take when the card itself is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

impl HeroCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.hero";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_images(mut self, images: Vec<CardImage>) -> Self {
        self.images = images;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_tap(mut self, tap: CardAction) -> Self {
        self.tap = Some(tap);
        self
    }

    /// Package this card as an inline attachment
    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A card with a small image, text, and buttons
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<CardImage>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Action to take when the card itself is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

impl ThumbnailCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.thumbnail";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_images(mut self, images: Vec<CardImage>) -> Self {
        self.images = images;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A key/value line on a receipt card
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// A purchased line item on a receipt card
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,

    /// Amount with currency marker, e.g. `"$ 4.50"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,
}

/// A receipt with line items and totals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ReceiptItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap: Option<CardAction>,

    /// Total price, including tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,
}

impl ReceiptCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.receipt";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_facts(mut self, facts: Vec<Fact>) -> Self {
        self.facts = facts;
        self
    }

    pub fn with_items(mut self, items: Vec<ReceiptItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_total(mut self, total: impl Into<String>) -> Self {
        self.total = Some(total.into());
        self
    }

    pub fn with_tax(mut self, tax: impl Into<String>) -> Self {
        self.tax = Some(tax.into());
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A card prompting the user to sign in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SigninCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,
}

impl SigninCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.signin";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            buttons: Vec::new(),
        }
    }

    /// A complete sign-in card with a single `signin` button
    pub fn create(
        text: impl Into<String>,
        button_title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let mut button = CardAction::new(card_action_types::SIGNIN);
        button.title = Some(button_title.into());
        button.value = Some(Value::String(url.into()));
        Self {
            text: Some(text.into()),
            buttons: vec![button],
        }
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A card that starts an OAuth flow against a named connection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Name of the OAuth connection registered with the token service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Resource for single-sign-on token exchange
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_exchange_resource: Option<TokenExchangeResource>,
}

impl OAuthCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.oauth";

    pub fn new(text: impl Into<String>, connection_name: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            connection_name: Some(connection_name.into()),
            ..Default::default()
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_token_exchange_resource(mut self, resource: TokenExchangeResource) -> Self {
        self.token_exchange_resource = Some(resource);
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A source URL for playable media
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Hint describing the media format or source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl MediaUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            profile: None,
        }
    }
}

/// A thumbnail image with alternate text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A card that plays an animation (GIF or short video)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ThumbnailUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Whether the card can be shared onward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable: Option<bool>,

    /// Whether playback loops when the media ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoloop: Option<bool>,

    /// Whether playback begins as soon as the card renders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,

    /// Aspect ratio, `"16:9"` or `"4:3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,

    /// Length of the media, as an ISO 8601 duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Supplementary parameter for the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl AnimationCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.animation";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_media(mut self, media: Vec<MediaUrl>) -> Self {
        self.media = media;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A card that plays audio
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ThumbnailUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Whether the card can be shared onward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable: Option<bool>,

    /// Whether playback loops when the media ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoloop: Option<bool>,

    /// Whether playback begins as soon as the card renders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,

    /// Aspect ratio, `"16:9"` or `"4:3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,

    /// Length of the media, as an ISO 8601 duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Supplementary parameter for the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl AudioCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.audio";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_media(mut self, media: Vec<MediaUrl>) -> Self {
        self.media = media;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// A card that plays video
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ThumbnailUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaUrl>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,

    /// Whether the card can be shared onward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareable: Option<bool>,

    /// Whether playback loops when the media ends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoloop: Option<bool>,

    /// Whether playback begins as soon as the card renders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autostart: Option<bool>,

    /// Aspect ratio, `"16:9"` or `"4:3"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,

    /// Length of the media, as an ISO 8601 duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Supplementary parameter for the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl VideoCard {
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.video";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_media(mut self, media: Vec<MediaUrl>) -> Self {
        self.media = media;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<CardAction>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn to_attachment(self) -> Result<Attachment> {
        Ok(Attachment::from_content(
            Self::CONTENT_TYPE,
            serde_json::to_value(self)?,
        ))
    }
}

/// Action types understood by card buttons
pub mod card_action_types {
    pub const OPEN_URL: &str = "openUrl";
    pub const IM_BACK: &str = "imBack";
    pub const POST_BACK: &str = "postBack";
    pub const PLAY_AUDIO: &str = "playAudio";
    pub const PLAY_VIDEO: &str = "playVideo";
    pub const SHOW_IMAGE: &str = "showImage";
    pub const DOWNLOAD_FILE: &str = "downloadFile";
    pub const SIGNIN: &str = "signin";
    pub const CALL: &str = "call";
    pub const MESSAGE_BACK: &str = "messageBack";
    pub const OPEN_APP: &str = "openApp";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_hero_card_to_attachment() {
        let attachment = HeroCard::new()
            .with_title("Pick one")
            .with_buttons(vec![CardAction::im_back("Red"), CardAction::im_back("Blue")])
            .to_attachment()
            .unwrap();

        assert_eq!(attachment.content_type.as_deref(), Some(HeroCard::CONTENT_TYPE));
        let content = attachment.content.unwrap();
        assert_eq!(content["title"], "Pick one");
        assert_eq!(content["buttons"][0]["type"], "imBack");
        assert_eq!(content["buttons"][0]["value"], "Red");
    }

    #[test]
    fn test_card_action_wire_naming() {
        let action = CardAction::message_back("Buy", "buy one", Some(json!({ "sku": 7 })));
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "messageBack");
        assert_eq!(json["title"], "Buy");
        assert_eq!(json["text"], "buy one");
        assert_eq!(json["value"]["sku"], 7);
        assert!(json.get("displayText").is_none());
    }

    #[test]
    fn test_signin_card_create() {
        let card = SigninCard::create("Please sign in", "Sign in", "https://login.example.com");

        assert_eq!(card.text.as_deref(), Some("Please sign in"));
        assert_eq!(card.buttons.len(), 1);
        assert_eq!(
            card.buttons[0].kind.as_deref(),
            Some(card_action_types::SIGNIN)
        );
        assert_eq!(
            card.buttons[0].value,
            Some(json!("https://login.example.com"))
        );
    }

    #[test]
    fn test_oauth_card_field_naming() {
        let card = OAuthCard::new("Sign in to continue", "github");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["connectionName"], "github");
        assert!(json.get("tokenExchangeResource").is_none());
    }

    #[test]
    fn test_receipt_card_round_trip() {
        let card = ReceiptCard::new()
            .with_title("Order 42")
            .with_facts(vec![Fact::new("Order number", "42")])
            .with_items(vec![ReceiptItem {
                title: Some("Coffee".to_string()),
                price: Some("$ 4.50".to_string()),
                quantity: Some("2".to_string()),
                ..Default::default()
            }])
            .with_total("$ 9.00");

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["facts"][0]["key"], "Order number");
        assert_eq!(json["items"][0]["price"], "$ 4.50");

        let back: ReceiptCard = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_video_card_media_naming() {
        let card = VideoCard::new()
            .with_title("Trailer")
            .with_media(vec![MediaUrl::new("https://example.com/trailer.mp4")]);
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["media"][0]["url"], "https://example.com/trailer.mp4");
        assert_eq!(json["title"], "Trailer");
        assert!(json.get("autoloop").is_none());
    }
}
