use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;

mod config;
mod effects;
mod state {
    pub mod accordion;
    pub mod dialog;
}
mod components {
    pub mod animate;
    pub mod email_modal;
    pub mod faq;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Fade the page in once the app has mounted, then report load latency.
    use_effect_with_deps(
        move |_| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .expect("document body");
            let style = body.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transition", "opacity 0.5s ease");
            Timeout::new(config::PAGE_FADE_IN_MS, move || {
                let _ = style.set_property("opacity", "1");
            })
            .forget();

            if let Some(performance) = web_sys::window().and_then(|w| w.performance()) {
                info!("Page loaded in {:.2}ms", performance.now());
            }
            info!("NextVolve landing page loaded successfully!");
            || ()
        },
        (),
    );

    html! { <Landing /> }
}

fn main() {
    // Route uncaught runtime faults to the console instead of a silent wasm
    // abort.
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
