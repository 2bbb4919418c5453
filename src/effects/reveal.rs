//! One-shot reveal animation for elements scrolled into view.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;

/// Watches every `.reveal` element and adds the `show` class the first time
/// one becomes sufficiently visible. Each element is unobserved as soon as it
/// is revealed, so the transition never runs twice or reverts.
pub struct RevealOnScroll {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealOnScroll {
    pub fn attach(document: &Document) -> Option<Self> {
        let elements = document.query_selector_all(".reveal").ok()?;

        let on_intersect = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("show");
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from(config::REVEAL_VISIBLE_RATIO));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .ok()?;

        for index in 0..elements.length() {
            if let Some(element) = elements
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for RevealOnScroll {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
