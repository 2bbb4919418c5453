use yew::prelude::*;

use crate::effects::theme::{self, Theme};

/// Button flipping the page between light and dark mode. The stored
/// preference is applied to `<body>` on mount; the caption always names the
/// mode a click would switch to.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(theme::load);

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                theme::apply(*theme);
                || ()
            },
            (),
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next: Theme = theme.flipped();
            theme::apply(next);
            theme::store(next);
            theme.set(next);
        })
    };

    html! {
        <button class="theme-toggle" data-theme-toggle="true" onclick={onclick}>
            { theme.toggle_label() }
        </button>
    }
}
