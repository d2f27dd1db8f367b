//! Typed handle to a page element.
//!
//! Widgets are generic over [`Surface`] so the same state machine drives a
//! browser `HtmlElement` and a recording fake in tests.
//! Writes are fire-and-forget from the widget's point of view; the browser
//! implementation logs failures instead of surfacing them.

/// The element operations the page widgets need.
pub trait Surface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_attribute(&self, name: &str, value: &str);
    fn set_text(&self, text: &str);
    fn focus(&self);
}

/// String form of a boolean ARIA state.
#[must_use]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
