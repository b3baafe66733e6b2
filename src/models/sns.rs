use serde::Deserialize;
use serde_json::Value as JsonValue;

/// The SNS HTTP(S) delivery document. Only the fields this service reads are
/// modelled; everything is optional so that absent fields surface as `None`
/// in metadata instead of failing the decode.
///
/// Fields that only feed metadata or the body accept any JSON value. The ones
/// used for routing or identity must be strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsPayload {
    #[serde(rename = "Type")]
    pub message_type: Option<JsonValue>,
    pub topic_arn: Option<String>,
    pub timestamp: Option<JsonValue>,
    pub message_id: Option<String>,
    pub message: Option<JsonValue>,
    pub subject: Option<String>,
    pub token: Option<JsonValue>,
}

/// Renders a loosely typed field as text: strings verbatim, `null` as absent,
/// anything else as its JSON encoding.
pub fn field_text(value: Option<JsonValue>) -> Option<String> {
    match value? {
        JsonValue::Null => None,
        JsonValue::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
