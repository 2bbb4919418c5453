//! Animated stat counters.
//!
//! Each `[data-count]` element starts at zero and climbs to the integer in
//! its attribute once it is mostly visible, one increment per animation
//! frame. The stepping math lives in [`CounterTicker`] so the displayed
//! sequence can be checked without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;

/// Increment applied each frame so any target lands within the frame budget.
pub fn step_for(target: u64) -> u64 {
    (target / config::COUNTER_FRAME_BUDGET).max(1)
}

/// Monotone counter state: rises by a fixed step and clamps at the target.
pub struct CounterTicker {
    current: u64,
    step: u64,
    target: u64,
}

impl CounterTicker {
    pub fn new(target: u64) -> Self {
        Self {
            current: 0,
            step: step_for(target),
            target,
        }
    }

    /// Advances one frame and returns the value to display.
    pub fn tick(&mut self) -> u64 {
        self.current = self.current.saturating_add(self.step).min(self.target);
        self.current
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }
}

/// Formats a value with comma digit grouping, e.g. `12500` → `"12,500"`.
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Observes every `[data-count]` element and runs its count-up animation the
/// first time it becomes mostly visible. Observation stops per element after
/// the first trigger, so each counter animates at most once.
pub struct CounterAnimations {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl CounterAnimations {
    pub fn attach(document: &Document) -> Option<Self> {
        let counters = document.query_selector_all("[data-count]").ok()?;

        let on_intersect = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let goal = target
                        .get_attribute("data-count")
                        .and_then(|raw| raw.trim().parse::<u64>().ok());
                    if let Some(goal) = goal {
                        animate(target, goal);
                    }
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from(config::COUNTER_VISIBLE_RATIO));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .ok()?;

        for index in 0..counters.length() {
            if let Some(element) = counters
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

impl Drop for CounterAnimations {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Drives one element from 0 to `goal`, one tick per animation frame. The
/// closure re-schedules itself and releases its own handle on the final
/// frame, after which no further frames run.
fn animate(element: Element, goal: u64) {
    let mut ticker = CounterTicker::new(goal);
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scheduled = handle.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let value = ticker.tick();
        element.set_text_content(Some(&format_grouped(value)));
        if ticker.done() {
            scheduled.borrow_mut().take();
            return;
        }
        if let Some(frame) = scheduled.borrow().as_ref() {
            request_frame(frame);
        }
    }) as Box<dyn FnMut()>));

    if let Some(frame) = handle.borrow().as_ref() {
        request_frame(frame);
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_one_sixtieth_with_floor_of_one() {
        assert_eq!(step_for(125), 2);
        assert_eq!(step_for(3), 1);
        assert_eq!(step_for(0), 1);
        assert_eq!(step_for(60), 1);
        assert_eq!(step_for(61), 1);
        assert_eq!(step_for(120), 2);
        assert_eq!(step_for(2_400_000), 40_000);
    }

    #[test]
    fn target_125_counts_by_two_then_lands_exactly() {
        let mut ticker = CounterTicker::new(125);
        let mut displayed = Vec::new();
        while !ticker.done() {
            displayed.push(ticker.tick());
        }
        assert_eq!(displayed.first(), Some(&2));
        assert_eq!(displayed[displayed.len() - 2], 124);
        assert_eq!(displayed.last(), Some(&125));
        assert!(displayed.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn small_target_counts_by_one() {
        let mut ticker = CounterTicker::new(3);
        let mut displayed = Vec::new();
        while !ticker.done() {
            displayed.push(ticker.tick());
        }
        assert_eq!(displayed, vec![1, 2, 3]);
    }

    #[test]
    fn ticker_never_passes_its_target() {
        let mut ticker = CounterTicker::new(7);
        for _ in 0..50 {
            assert!(ticker.tick() <= 7);
        }
        assert!(ticker.done());
        assert_eq!(ticker.tick(), 7);
    }

    #[test]
    fn zero_target_finishes_immediately_at_zero() {
        let mut ticker = CounterTicker::new(0);
        assert_eq!(ticker.tick(), 0);
        assert!(ticker.done());
    }

    #[test]
    fn grouping_inserts_commas_every_three_digits() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(125), "125");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(12_500), "12,500");
        assert_eq!(format_grouped(2_400_000), "2,400,000");
    }
}
