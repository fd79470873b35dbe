use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::state::dialog::Inquiry;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_inquiry: Callback<Inquiry>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window");
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window_clone.scroll_y() {
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
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

    // Smooth-scroll to an in-page section; activating a link also closes the
    // mobile panel.
    let nav_to = {
        let menu_open = menu_open.clone();
        move |section: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(target) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(section))
                {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                menu_open.set(false);
            })
        }
    };

    let get_started = {
        let on_inquiry = props.on_inquiry.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_inquiry.emit(Inquiry::GetStarted);
        })
    };

    let links = [
        ("hero", "Home"),
        ("features", "Services"),
        ("process", "Process"),
        ("faq", "FAQ"),
        ("contact", "Contact"),
    ];

    html! {
        <>
            <nav class={classes!("nav-desktop", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={nav_to("hero")}>{config::BRAND}</a>
                    <div class="nav-links">
                        { for links.iter().map(|(section, label)| html! {
                            <a href={format!("#{section}")} class="nav-link" onclick={nav_to(*section)}>{*label}</a>
                        }) }
                        <button class="nav-get-started" onclick={get_started.clone()}>{"Get Started"}</button>
                    </div>
                </div>
            </nav>

            <nav class={classes!("nav-mobile", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={nav_to("hero")}>{config::BRAND}</a>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
                <div class={classes!("mobile-menu", (*menu_open).then(|| "active"))}>
                    { for links.iter().map(|(section, label)| html! {
                        <a href={format!("#{section}")} class="mobile-nav-link" onclick={nav_to(*section)}>{*label}</a>
                    }) }
                    <button class="nav-get-started" onclick={get_started}>{"Get Started"}</button>
                </div>
            </nav>

            <style>
                {r#"
                .nav-desktop, .nav-mobile {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(8px);
                    transition: all 0.3s ease;
                }

                .nav-desktop.scrolled, .nav-mobile.scrolled {
                    background: rgba(255, 255, 255, 0.97);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 800;
                    color: #16a34a;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-link {
                    color: #1f2937;
                    text-decoration: none;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    transition: all 0.2s ease;
                }

                .nav-link:hover {
                    color: #16a34a;
                    background: rgba(34, 197, 94, 0.1);
                }

                .nav-get-started {
                    background: #16a34a;
                    color: #fff;
                    border: none;
                    padding: 0.6rem 1.4rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .nav-get-started:hover {
                    transform: scale(1.05);
                }

                .burger-menu {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #1f2937;
                    cursor: pointer;
                }

                .nav-mobile {
                    display: none;
                }

                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    padding: 1rem 2rem 1.5rem;
                    gap: 0.75rem;
                }

                .mobile-menu.active {
                    display: flex;
                }

                .mobile-nav-link {
                    color: #1f2937;
                    text-decoration: none;
                    font-size: 1.1rem;
                    padding: 0.5rem 0;
                }

                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }

                    .nav-mobile {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}
