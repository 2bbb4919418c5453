//! Pointer-following spotlight, dot, and trailing ring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{AddEventListenerOptions, Document, HtmlElement, MouseEvent, Window};

use crate::config;

/// One smoothing step: moves `current` a fixed fraction of the way to
/// `target`. Applied per mousemove event, not per frame.
pub fn ease_toward(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

struct RingState {
    x: f64,
    y: f64,
    active: bool,
}

/// Positions the spotlight and dot at the cursor and eases the ring after
/// it. The whole effect is pointer-only: the first touch event hides the
/// markers and detaches the mousemove listener for good. All remaining
/// listeners come off when the value drops.
pub struct CursorSpotlight {
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut()>,
    on_press: Closure<dyn FnMut()>,
    on_release: Closure<dyn FnMut()>,
    on_touch: Closure<dyn FnMut()>,
}

impl CursorSpotlight {
    pub fn attach(document: &Document) -> Option<Self> {
        let window = web_sys::window()?;
        let body = document.body()?;
        let spotlight = marker(document, ".cursor-spotlight")?;
        let dot = marker(document, ".cursor-dot")?;
        let ring = marker(document, ".cursor-ring")?;

        let state = Rc::new(RefCell::new(RingState {
            x: 0.0,
            y: 0.0,
            active: false,
        }));

        let on_move = {
            let state = state.clone();
            let body = body.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let x = f64::from(event.client_x());
                let y = f64::from(event.client_y());
                place(&spotlight, x, y);
                place(&dot, x, y);

                let mut state = state.borrow_mut();
                state.x = ease_toward(state.x, x, config::RING_EASE_FACTOR);
                state.y = ease_toward(state.y, y, config::RING_EASE_FACTOR);
                place(&ring, state.x, state.y);

                if !state.active {
                    state.active = true;
                    let _ = body.class_list().add_1("cursor-active");
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let on_leave = {
            let state = state.clone();
            let body = body.clone();
            Closure::wrap(Box::new(move || {
                state.borrow_mut().active = false;
                let _ = body.class_list().remove_1("cursor-active");
            }) as Box<dyn FnMut()>)
        };

        let on_press = {
            let body = body.clone();
            Closure::wrap(Box::new(move || {
                let _ = body.class_list().add_1("cursor-click");
            }) as Box<dyn FnMut()>)
        };

        let on_release = {
            let body = body.clone();
            Closure::wrap(Box::new(move || {
                let _ = body.class_list().remove_1("cursor-click");
            }) as Box<dyn FnMut()>)
        };

        // Touch input permanently retires the effect: the markers are for
        // mouse pointers only.
        let on_touch = {
            let window = window.clone();
            let move_target: Function = on_move.as_ref().unchecked_ref::<Function>().clone();
            Closure::wrap(Box::new(move || {
                state.borrow_mut().active = false;
                let _ = body.class_list().remove_1("cursor-active");
                let _ = window.remove_event_listener_with_callback("mousemove", &move_target);
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("mouseout", on_leave.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("mousedown", on_press.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("mouseup", on_release.as_ref().unchecked_ref())
            .ok()?;
        let mut once = AddEventListenerOptions::new();
        once.once(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                on_touch.as_ref().unchecked_ref(),
                &once,
            )
            .ok()?;

        Some(Self {
            window,
            on_move,
            on_leave,
            on_press,
            on_release,
            on_touch,
        })
    }
}

impl Drop for CursorSpotlight {
    fn drop(&mut self) {
        let listeners: [(&str, &Function); 5] = [
            ("mousemove", self.on_move.as_ref().unchecked_ref()),
            ("mouseout", self.on_leave.as_ref().unchecked_ref()),
            ("mousedown", self.on_press.as_ref().unchecked_ref()),
            ("mouseup", self.on_release.as_ref().unchecked_ref()),
            ("touchstart", self.on_touch.as_ref().unchecked_ref()),
        ];
        for (event, callback) in listeners {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, callback);
        }
    }
}

fn marker(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn place(element: &HtmlElement, x: f64, y: f64) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_covers_a_fifth_of_the_distance() {
        assert_eq!(ease_toward(0.0, 100.0, 0.2), 20.0);
        assert_eq!(ease_toward(20.0, 100.0, 0.2), 36.0);
        assert_eq!(ease_toward(50.0, 50.0, 0.2), 50.0);
    }

    #[test]
    fn repeated_steps_converge_without_overshoot() {
        let target = 100.0;
        let mut position = 0.0;
        let mut previous = position;
        for _ in 0..200 {
            position = ease_toward(position, target, 0.2);
            assert!(position >= previous);
            assert!(position <= target);
            previous = position;
        }
        assert!((target - position).abs() < 1e-6);
    }

    #[test]
    fn easing_works_in_both_directions() {
        assert_eq!(ease_toward(100.0, 0.0, 0.2), 80.0);
        assert!(ease_toward(-40.0, 10.0, 0.2) > -40.0);
    }
}
