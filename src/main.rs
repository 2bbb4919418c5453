use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod effects {
    pub mod counters;
    pub mod reveal;
    pub mod scroll;
    pub mod spotlight;
    pub mod theme;
}
mod components {
    pub mod cursor;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use components::cursor::CursorOverlay;
use components::theme_toggle::ThemeToggle;
use pages::home::Home;
use pages::termsprivacy::{PrivacyPolicy, TermsOfService};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn FnMut()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(config::past_nav_threshold(scroll_y));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial check, in case the page is restored mid-scroll.
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(config::past_nav_threshold(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {"Pulse"}<em>{"board"}</em>
            </Link<Route>>

            <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class={menu_class}>
                <a href="#features" data-scroll="true" class="nav-link" onclick={close_menu.clone()}>
                    {"Features"}
                </a>
                <a href="#metrics" data-scroll="true" class="nav-link" onclick={close_menu.clone()}>
                    {"Numbers"}
                </a>
                <a href="#pricing" data-scroll="true" class="nav-link" onclick={close_menu.clone()}>
                    {"Pricing"}
                </a>
                <a href="#faq" data-scroll="true" class="nav-link" onclick={close_menu}>
                    {"FAQ"}
                </a>
                <ThemeToggle />
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <CursorOverlay />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Pulseboard site");
    yew::Renderer::<App>::new().render();
}
