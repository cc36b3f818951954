//! Help texts shown next to the website size controls.

use crate::application::form::params_codec::{KEY_LANGUAGES, KEY_PAGES};

/// A titled help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub content: &'static str,
}

/// Help for the pages control.
pub const PAGES: HelpTopic = HelpTopic {
    title: "Number of Pages",
    content: "Specify how many pages your website will have. Each page represents a distinct \
              section or view in your website. More pages allow for more content organization \
              but increase development time and cost. The customization cost is calculated as: \
              pages × languages × €30.",
};

/// Help for the languages control.
pub const LANGUAGES: HelpTopic = HelpTopic {
    title: "Number of Languages",
    content: "Add the languages your project will support. Each additional language requires \
              translating all content and adapting the interface, which increases the project \
              scope. The customization cost is calculated as: pages × languages × €30.",
};

/// Help for a form field, if it has any.
#[must_use]
pub fn topic_for(field: &str) -> Option<&'static HelpTopic> {
    match field {
        KEY_PAGES => Some(&PAGES),
        KEY_LANGUAGES => Some(&LANGUAGES),
        _ => None,
    }
}
