//! Payment request structures, after the W3C PaymentRequest shapes
//!
//! These ride inside `invoke` activities whose names are the
//! [`payment_operations`] constants. The namespaced operation names
//! (`payments/update/...`) are the main producers of `/`-separated invoke
//! names in the wild.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A physical address for billing or shipping
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAddress {
    /// ISO 3166 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Street address lines, most specific first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_line: Vec<String>,

    /// Top-level administrative region, e.g. a state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Sublocality below city level, e.g. a district
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Sorting code, e.g. the French CEDEX
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_code: Option<String>,

    /// BCP-47 language code the address is written in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Name of the person receiving at this address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// An amount of money in one currency
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCurrencyAmount {
    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Decimal value as a string, e.g. `"55.00"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// URL identifying the currency system, for non-ISO currencies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_system: Option<String>,
}

impl PaymentCurrencyAmount {
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            value: Some(value.into()),
            currency_system: None,
        }
    }
}

/// One labeled amount within a payment request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    /// Human-readable line description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentCurrencyAmount>,

    /// Whether the amount is not yet final
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
}

impl PaymentItem {
    pub fn new(label: impl Into<String>, amount: PaymentCurrencyAmount) -> Self {
        Self {
            label: Some(label.into()),
            amount: Some(amount),
            pending: None,
        }
    }
}

/// What is being paid for: totals, line items, and shipping choices
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    /// Total amount of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<PaymentItem>,

    /// Line items shown to the payer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_items: Vec<PaymentItem>,

    /// Shipping options the payer may pick from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_options: Vec<PaymentShippingOption>,

    /// Per-payment-method price adjustments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<PaymentDetailsModifier>,

    /// Error to surface to the payer, set on update responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Price adjustments applied when a given payment method is used
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsModifier {
    /// Payment method identifiers the modifier applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_methods: Vec<String>,

    /// Replacement total when the modifier applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<PaymentItem>,

    /// Extra line items explaining the adjustment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_display_items: Vec<PaymentItem>,

    /// Method-specific data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A payment method the merchant accepts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodData {
    /// Payment method identifiers, e.g. a method URL
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_methods: Vec<String>,

    /// Method-specific configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Microsoft Pay configuration for a [`PaymentMethodData`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftPayMethodData {
    /// Merchant id registered with Microsoft Pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Supported card networks, e.g. `"visa"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_networks: Vec<String>,

    /// Supported card types, e.g. `"credit"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_types: Vec<String>,
}

impl MicrosoftPayMethodData {
    /// Payment method identifier for Microsoft Pay
    pub const METHOD_NAME: &'static str = "https://pay.microsoft.com/microsoftpay";

    /// Wrap this configuration in a [`PaymentMethodData`]
    pub fn to_payment_method_data(&self) -> Result<PaymentMethodData> {
        Ok(PaymentMethodData {
            supported_methods: vec![Self::METHOD_NAME.to_string()],
            data: Some(serde_json::to_value(self)?),
        })
    }
}

/// What the merchant wants to know about the payer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payer_name: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payer_email: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payer_phone: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_shipping: Option<bool>,

    /// How the goods move (see [`payment_shipping_types`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_type: Option<String>,
}

/// A request for payment presented to the payer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Id of the request, echoed in updates and completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Payment methods the merchant accepts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub method_data: Vec<PaymentMethodData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentOptions>,

    /// Expiration of the request, as an ISO 8601 duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

/// Completion payload pairing the request with the payer's response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestComplete {
    /// Id of the payment request being completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_request: Option<PaymentRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_response: Option<PaymentResponse>,
}

/// Merchant's verdict on a completed payment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestCompleteResult {
    /// `"success"`, `"fail"`, or `"unknown"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Mid-flow update when the payer changes shipping address or option
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestUpdate {
    /// Id of the payment request being updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<PaymentAddress>,

    /// Id of the shipping option the payer selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<String>,
}

/// Merchant's recalculated details after an update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestUpdateResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,
}

/// The payer's answer to a payment request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// Payment method the payer chose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,

    /// Method-specific response produced by the payment app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<PaymentAddress>,

    /// Id of the shipping option the payer selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_phone: Option<String>,
}

/// One way of getting the goods to the payer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentShippingOption {
    /// Id the payer's selection is reported with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentCurrencyAmount>,

    /// Whether this option is pre-selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// Ways goods can reach the payer
pub mod payment_shipping_types {
    pub const SHIPPING: &str = "shipping";
    pub const DELIVERY: &str = "delivery";
    pub const PICKUP: &str = "pickup";
}

/// Invoke operation names used by the payment flow
pub mod payment_operations {
    pub const COMPLETE: &str = "payments/complete";
    pub const UPDATE_SHIPPING_ADDRESS: &str = "payments/update/shippingAddress";
    pub const UPDATE_SHIPPING_OPTION: &str = "payments/update/shippingOption";
}
