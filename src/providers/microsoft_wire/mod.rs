use serde::{Deserialize, Serialize};

use crate::core::error::TranslateError;

pub(crate) const TEXT_TYPE_PLAIN: &str = "plain";
pub(crate) const TEXT_TYPE_HTML: &str = "html";

/// One entry of the outbound batch. The vendor accepts multiple items per
/// request; this client always submits exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RequestItem {
    #[serde(rename = "Text")]
    pub text: String,
}

/// Top-level entry of the vendor response array.
///
/// Sample body:
/// `[{"translations":[{"text":"Merhaba","to":"tr"}]}]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ResponseItem {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Translation {
    pub text: String,
    #[serde(rename = "to")]
    #[allow(dead_code)]
    pub target: String,
}

pub(crate) fn encode_batch(text: &str) -> Vec<RequestItem> {
    vec![RequestItem {
        text: text.to_string(),
    }]
}

/// Maps the caller-facing format to the vendor `textType` query parameter.
pub(crate) fn text_type(format: &str) -> &'static str {
    if format == "text" {
        TEXT_TYPE_PLAIN
    } else {
        TEXT_TYPE_HTML
    }
}

/// Extracts `[0].translations[0].text`, the only field this client consumes.
pub(crate) fn decode_first_translation(
    service: &str,
    body: &str,
) -> Result<String, TranslateError> {
    let items: Vec<ResponseItem> =
        serde_json::from_str(body).map_err(|error| TranslateError::Protocol {
            service: service.to_string(),
            message: format!("response body is not a translation array: {error}"),
        })?;

    let first = items
        .into_iter()
        .next()
        .ok_or_else(|| TranslateError::Protocol {
            service: service.to_string(),
            message: "response array is empty".to_string(),
        })?;

    first
        .translations
        .into_iter()
        .next()
        .map(|translation| translation.text)
        .ok_or_else(|| TranslateError::Protocol {
            service: service.to_string(),
            message: "response item has no translations".to_string(),
        })
}
