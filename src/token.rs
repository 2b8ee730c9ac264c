//! Token and sign-in structures for the OAuth flows
//!
//! These types ride inside `event` and `invoke` activities (and the
//! [`OAuthCard`](crate::card::OAuthCard)) when a bot asks the token service
//! for user credentials or exchanges a single-sign-on token.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A token handed back by the token service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Channel the token was issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// OAuth connection the token belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    /// The token itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Expiration instant, ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// A request for a token from a named provider
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// The provider to request the token from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Provider-specific settings
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub settings: HashMap<String, Value>,
}

/// Resource a client can exchange for a token on the user's behalf
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeResource {
    /// Id of the exchange request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Application id or scope of the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Identity provider that recognizes the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

/// Payload sent to trade one token for another
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Token being offered in exchange
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Body of a `signin/tokenExchange` invoke activity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeInvokeRequest {
    /// Id of the exchange request being answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Connection the exchanged token belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    /// Token being exchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Bot's answer to a token-exchange invoke
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeInvokeResponse {
    /// Id of the exchange request that was answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Connection the exchange ran against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    /// Why the exchange failed, when it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_detail: Option<String>,

    /// Wire properties not covered by the declared fields, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Whether a stored token exists for one connection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatus {
    /// Channel the status applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Connection the status applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    /// Whether the service holds a token for the connection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_token: Option<bool>,

    /// Display name of the service provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider_display_name: Option<String>,
}

/// How long and how often a client should poll for a token
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPollingSettings {
    /// Overall polling budget in milliseconds; zero or negative disables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,

    /// Delay between polls in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
}

/// Everything a client needs to run a sign-in flow
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResource {
    /// URL the user visits to sign in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_in_link: Option<String>,

    /// Resource for silent single-sign-on exchange instead of the link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_exchange_resource: Option<TokenExchangeResource>,
}

/// Resource URLs to request AAD tokens for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AadResourceUrls {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_urls: Vec<String>,
}
