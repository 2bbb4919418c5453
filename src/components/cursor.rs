use yew::prelude::*;

use crate::effects::spotlight::CursorSpotlight;

/// Renders the three cursor markers and keeps the spotlight effect alive
/// while mounted. Dropping the effect on unmount detaches every listener.
#[function_component(CursorOverlay)]
pub fn cursor_overlay() -> Html {
    use_effect_with_deps(
        move |_| {
            let spotlight = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| CursorSpotlight::attach(&document));
            move || drop(spotlight)
        },
        (),
    );

    html! {
        <>
            <div class="cursor-spotlight"></div>
            <div class="cursor-dot"></div>
            <div class="cursor-ring"></div>
        </>
    }
}
