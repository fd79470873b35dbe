//! Page utilities exposed to other scripts sharing the page, plus the pure
//! stepping math behind the counter and typewriter animations.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::Callback;

use crate::config;

thread_local! {
    static MODAL_HOOKS: RefCell<Option<ModalHooks>> = RefCell::new(None);
}

/// Entry points into the mounted page's dialog, registered once on mount so
/// the exported functions below can reach it.
pub struct ModalHooks {
    pub open: Callback<(String, String, String)>,
    pub close: Callback<()>,
}

pub fn register_modal_hooks(hooks: ModalHooks) {
    MODAL_HOOKS.with(|cell| *cell.borrow_mut() = Some(hooks));
}

/// Open the contact dialog with the given content. `button_text` defaults to
/// "Send Message".
#[wasm_bindgen]
pub fn open_email_modal(subject: String, message: String, button_text: Option<String>) {
    MODAL_HOOKS.with(|cell| match &*cell.borrow() {
        Some(hooks) => hooks.open.emit((
            subject,
            message,
            button_text.unwrap_or_else(|| "Send Message".to_string()),
        )),
        None => gloo_console::error!("open_email_modal called before the page mounted"),
    });
}

#[wasm_bindgen]
pub fn close_email_modal() {
    MODAL_HOOKS.with(|cell| match &*cell.borrow() {
        Some(hooks) => hooks.close.emit(()),
        None => gloo_console::error!("close_email_modal called before the page mounted"),
    });
}

/// Clear the element's text and retype it one character per tick.
#[wasm_bindgen]
pub fn type_writer(element_id: &str, text: String, speed_ms: Option<u32>) {
    let Some(el) = element_by_id(element_id) else {
        gloo_console::error!("type_writer: no element with id", element_id);
        return;
    };
    let speed = speed_ms.unwrap_or(config::TYPEWRITER_SPEED_MS).max(1);
    el.set_text_content(Some(""));
    let total = text.chars().count();
    for tick in 1..=total {
        let el = el.clone();
        let text = text.clone();
        Timeout::new(speed * tick as u32, move || {
            el.set_text_content(Some(&typed_prefix(&text, tick)));
        })
        .forget();
    }
}

/// Count the element's text up from zero to `target`, rendered with a `+`
/// suffix. Duration defaults to 2 seconds.
#[wasm_bindgen]
pub fn animate_counter(element_id: &str, target: u32, duration_ms: Option<u32>) {
    let Some(el) = element_by_id(element_id) else {
        gloo_console::error!("animate_counter: no element with id", element_id);
        return;
    };
    run_counter(el, target, duration_ms.unwrap_or(config::COUNTER_DURATION_MS));
}

/// Fire-and-forget counter animation over a plain element.
pub fn run_counter(el: Element, target: u32, duration_ms: u32) {
    let steps = (duration_ms / config::COUNTER_STEP_MS).max(1);
    for step in 1..=steps {
        let el = el.clone();
        let elapsed = (step * config::COUNTER_STEP_MS) as f64;
        Timeout::new(step * config::COUNTER_STEP_MS, move || {
            let shown = counter_value(target, elapsed, duration_ms as f64);
            el.set_text_content(Some(&format!("{shown}+")));
        })
        .forget();
    }
    // The step grid may stop short of the full duration.
    Timeout::new(duration_ms, move || {
        el.set_text_content(Some(&format!("{target}+")));
    })
    .forget();
}

/// Read-more/see-less toggle for list-style content blocks. The button's
/// preceding sibling holds the description.
#[wasm_bindgen]
pub fn toggle_description(button_id: &str) {
    let Some(button) = element_by_id(button_id) else {
        gloo_console::error!("toggle_description: no element with id", button_id);
        return;
    };
    toggle_description_on(&button);
}

pub fn toggle_description_on(button: &Element) {
    let Some(description) = button.previous_element_sibling() else {
        return;
    };
    let desc_classes = description.class_list();
    let button_classes = button.class_list();
    if desc_classes.contains("expanded") {
        let _ = desc_classes.remove_1("expanded");
        let _ = desc_classes.add_1("collapsed");
        button.set_text_content(Some("Read More"));
        let _ = button_classes.remove_1("btn-see-less");
        let _ = button_classes.add_1("btn-read-more");
    } else {
        let _ = desc_classes.remove_1("collapsed");
        let _ = desc_classes.add_1("expanded");
        button.set_text_content(Some("See Less"));
        let _ = button_classes.remove_1("btn-read-more");
        let _ = button_classes.add_1("btn-see-less");
    }
}

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Counter reading after `elapsed_ms` of a linear ramp to `target`.
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = (elapsed_ms / duration_ms).max(0.0);
    (target as f64 * t).floor() as u32
}

/// First `ticks` characters of `text`, respecting char boundaries.
pub fn typed_prefix(text: &str, ticks: usize) -> String {
    text.chars().take(ticks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_ramps_monotonically_and_clamps() {
        let mut last = 0;
        for step in 1..=125u32 {
            let value = counter_value(500, (step * 16) as f64, 2000.0);
            assert!(value >= last);
            assert!(value <= 500);
            last = value;
        }
        assert_eq!(counter_value(500, 2000.0, 2000.0), 500);
        assert_eq!(counter_value(500, 9999.0, 2000.0), 500);
    }

    #[test]
    fn counter_with_zero_duration_jumps_to_target() {
        assert_eq!(counter_value(42, 0.0, 0.0), 42);
    }

    #[test]
    fn typed_prefix_steps_through_the_text() {
        assert_eq!(typed_prefix("Evolve", 0), "");
        assert_eq!(typed_prefix("Evolve", 3), "Evo");
        assert_eq!(typed_prefix("Evolve", 6), "Evolve");
        assert_eq!(typed_prefix("Evolve", 99), "Evolve");
    }

    #[test]
    fn typed_prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("ペース", 2), "ペー");
    }
}
