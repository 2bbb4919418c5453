//! Smooth scrolling for in-page anchor links.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Extracts the element id from a fragment href. Anything that is not a
/// non-empty `#fragment` is left to the browser's default navigation.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Intercepts clicks on `a[data-scroll]` links whose href names an existing
/// element, scrolling it to rest below the fixed navbar instead of jumping.
/// Links to missing targets keep their default behavior.
pub struct AnchorScroll {
    listeners: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
}

impl AnchorScroll {
    pub fn attach(document: &Document) -> Option<Self> {
        let links = document.query_selector_all("a[data-scroll]").ok()?;
        let mut listeners = Vec::with_capacity(links.length() as usize);

        for index in 0..links.length() {
            let Some(link) = links
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };

            let on_click = {
                let document = document.clone();
                let link = link.clone();
                Closure::wrap(Box::new(move |event: MouseEvent| {
                    let Some(href) = link.get_attribute("href") else {
                        return;
                    };
                    let Some(id) = fragment_target(&href) else {
                        return;
                    };
                    let Some(section) = document
                        .get_element_by_id(id)
                        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                    else {
                        return;
                    };
                    event.prevent_default();
                    scroll_to_section(&section);
                }) as Box<dyn FnMut(MouseEvent)>)
            };

            if link
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .is_ok()
            {
                listeners.push((link, on_click));
            }
        }

        Some(Self { listeners })
    }
}

fn scroll_to_section(section: &HtmlElement) {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options
            .top(f64::from(section.offset_top()) - config::ANCHOR_HEADER_OFFSET_PX)
            .behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        for (element, callback) in &self.listeners {
            let _ = element
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_hrefs_resolve_to_their_id() {
        assert_eq!(fragment_target("#features"), Some("features"));
        assert_eq!(fragment_target("#faq"), Some("faq"));
    }

    #[test]
    fn non_fragment_hrefs_are_ignored() {
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/pricing"), None);
        assert_eq!(fragment_target("https://pulseboard.dev/#faq"), None);
    }
}
