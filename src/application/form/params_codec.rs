//! # Form Parameter Codec
//!
//! Maps a [`FormModel`] to navigation query parameters and back.
//!
//! ```text
//! clientName, phone, email   → as typed
//! seo, ads, web              → "true" / "false"
//! pages, languages           → decimal
//! ```
//!
//! Decoding never fails. Counts are read from their leading integer, so
//! `"2abc"` is 2; negative counts become 0 and are left for validation to
//! reject; values with no leading integer fall back to 1.
//!
//! # Examples
//!
//! ```
//! use website_quote::application::form::{params_codec, FormModel};
//!
//! let mut model = FormModel::default();
//! model.client_name = "Alice".to_string();
//! model.web_config.selected = true;
//! model.web_config.pages = 4;
//!
//! let params = params_codec::encode(&model);
//! assert_eq!(params.get("web"), Some("true"));
//! assert_eq!(params_codec::decode(&params), model);
//! ```

use crate::application::form::model::{FormModel, WebConfigModel};
use crate::domain::value_objects::{MIN_WEBSITE_UNITS, QueryParams};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Client name parameter.
pub const KEY_CLIENT_NAME: &str = "clientName";
/// Phone parameter.
pub const KEY_PHONE: &str = "phone";
/// Email parameter.
pub const KEY_EMAIL: &str = "email";
/// SEO flag parameter.
pub const KEY_SEO: &str = "seo";
/// Ads flag parameter.
pub const KEY_ADS: &str = "ads";
/// Web flag parameter.
pub const KEY_WEB: &str = "web";
/// Pages parameter.
pub const KEY_PAGES: &str = "pages";
/// Languages parameter.
pub const KEY_LANGUAGES: &str = "languages";

/// Every key written by [`encode`].
pub const FORM_KEYS: [&str; 8] = [
    KEY_CLIENT_NAME,
    KEY_PHONE,
    KEY_EMAIL,
    KEY_SEO,
    KEY_ADS,
    KEY_WEB,
    KEY_PAGES,
    KEY_LANGUAGES,
];

#[allow(clippy::expect_used)]
static LEADING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer regex"));

/// Serialises every form field.
#[must_use]
pub fn encode(model: &FormModel) -> QueryParams {
    QueryParams::from_iter([
        (KEY_CLIENT_NAME, model.client_name.clone()),
        (KEY_PHONE, model.phone.clone()),
        (KEY_EMAIL, model.email.clone()),
        (KEY_SEO, model.seo_selected.to_string()),
        (KEY_ADS, model.ads_selected.to_string()),
        (KEY_WEB, model.web_config.selected.to_string()),
        (KEY_PAGES, model.web_config.pages.to_string()),
        (KEY_LANGUAGES, model.web_config.languages.to_string()),
    ])
}

/// Rebuilds a form from parameters, filling gaps with defaults.
#[must_use]
pub fn decode(params: &QueryParams) -> FormModel {
    FormModel {
        client_name: text(params, KEY_CLIENT_NAME),
        phone: text(params, KEY_PHONE),
        email: text(params, KEY_EMAIL),
        seo_selected: flag(params, KEY_SEO),
        ads_selected: flag(params, KEY_ADS),
        web_config: WebConfigModel {
            selected: flag(params, KEY_WEB),
            pages: count(params, KEY_PAGES),
            languages: count(params, KEY_LANGUAGES),
        },
    }
}

fn text(params: &QueryParams, key: &str) -> String {
    params.get(key).unwrap_or_default().to_string()
}

fn flag(params: &QueryParams, key: &str) -> bool {
    params.get(key) == Some("true")
}

fn count(params: &QueryParams, key: &str) -> u32 {
    let Some(raw) = params.get(key) else {
        return MIN_WEBSITE_UNITS;
    };

    match leading_integer(raw) {
        Some(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        None => {
            debug!(key, value = raw, "non-numeric parameter, using default");
            MIN_WEBSITE_UNITS
        }
    }
}

/// Integer at the start of `raw`, saturating at the `i64` bounds.
fn leading_integer(raw: &str) -> Option<i64> {
    let digits = LEADING_INT_RE.captures(raw)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}
