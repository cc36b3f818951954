//! # Form Model
//!
//! Transient, editable state of the quote form.

use crate::domain::value_objects::{MIN_WEBSITE_UNITS, ServiceSelection};
use serde::{Deserialize, Serialize};

/// Website panel of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebConfigModel {
    /// Whether the website build is selected.
    pub selected: bool,
    /// Number of pages.
    pub pages: u32,
    /// Number of languages.
    pub languages: u32,
}

impl Default for WebConfigModel {
    fn default() -> Self {
        Self {
            selected: false,
            pages: MIN_WEBSITE_UNITS,
            languages: MIN_WEBSITE_UNITS,
        }
    }
}

/// Everything the user typed or ticked so far.
///
/// Deselecting the website keeps pages and languages as they were.
///
/// # Examples
///
/// ```
/// use website_quote::application::form::FormModel;
///
/// let mut model = FormModel::default();
/// model.decrement_pages();
/// assert_eq!(model.web_config.pages, 1);
///
/// model.increment_pages();
/// assert_eq!(model.web_config.pages, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormModel {
    /// Client full name.
    pub client_name: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// SEO campaign ticked.
    pub seo_selected: bool,
    /// Ads campaign ticked.
    pub ads_selected: bool,
    /// Website panel.
    pub web_config: WebConfigModel,
}

impl FormModel {
    /// Services ticked in the form.
    #[must_use]
    pub fn services(&self) -> ServiceSelection {
        ServiceSelection::new(self.seo_selected, self.ads_selected, self.web_config.selected)
    }

    /// Adds a page.
    pub fn increment_pages(&mut self) {
        self.web_config.pages = self.web_config.pages.saturating_add(1);
    }

    /// Removes a page, never going below one.
    pub fn decrement_pages(&mut self) {
        if self.web_config.pages > MIN_WEBSITE_UNITS {
            self.web_config.pages -= 1;
        }
    }

    /// Adds a language.
    pub fn increment_languages(&mut self) {
        self.web_config.languages = self.web_config.languages.saturating_add(1);
    }

    /// Removes a language, never going below one.
    pub fn decrement_languages(&mut self) {
        if self.web_config.languages > MIN_WEBSITE_UNITS {
            self.web_config.languages -= 1;
        }
    }
}
