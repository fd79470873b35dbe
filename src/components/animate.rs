//! Viewport-triggered animations: the scroll-reveal wrapper and the stat
//! counter. Both watch their own element with an IntersectionObserver.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::effects::counter_value;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Starts faded out and shifted down, transitions in once it scrolls into
/// view. The observer stays subscribed; refiring just re-applies the final
/// style, which is harmless.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let el = node.cast::<HtmlElement>().expect("reveal element mounted");
                let style = el.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", "translateY(30px)");
                let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");

                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                if let Some(target) = entry.target().dyn_ref::<HtmlElement>() {
                                    let style = target.style();
                                    let _ = style.set_property("opacity", "1");
                                    let _ = style.set_property("transform", "translateY(0)");
                                }
                            }
                        }
                    },
                );
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(config::REVEAL_THRESHOLD));
                options.set_root_margin(config::REVEAL_ROOT_MARGIN);
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("intersection observer");
                observer.observe(&el);

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
}

/// Renders "0+" until at least half visible, then counts up to the target
/// over two seconds. The observer unsubscribes itself after the first fire,
/// so the animation runs once per page load.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state(|| 0u32);
    let node = use_node_ref();

    {
        let node = node.clone();
        let setter = shown.setter();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let el = node.cast::<HtmlElement>().expect("stat counter mounted");
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if !entry.is_intersecting() {
                                continue;
                            }
                            observer.unobserve(&entry.target());
                            let duration = config::COUNTER_DURATION_MS;
                            let steps = (duration / config::COUNTER_STEP_MS).max(1);
                            for step in 1..=steps {
                                let setter = setter.clone();
                                let elapsed = (step * config::COUNTER_STEP_MS) as f64;
                                Timeout::new(step * config::COUNTER_STEP_MS, move || {
                                    setter.set(counter_value(target, elapsed, duration as f64));
                                })
                                .forget();
                            }
                            let setter = setter.clone();
                            Timeout::new(duration, move || setter.set(target)).forget();
                        }
                    },
                );
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(config::COUNTER_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("intersection observer");
                observer.observe(&el);

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <span ref={node} class="stat-number">{ format!("{}+", *shown) }</span>
    }
}
