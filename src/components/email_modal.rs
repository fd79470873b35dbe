//! The contact dialog. State lives on the landing page as a `DialogState`;
//! this component wires it to the document: scroll lock, focus trap,
//! backdrop/escape/close dismissal and the submit flow.

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, EventTarget, FocusEvent, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    InputEvent, KeyboardEvent, MouseEvent, SubmitEvent,
};
use yew::prelude::*;

use crate::config;
use crate::state::dialog::{resolve_submission, trap_target, DialogState};

#[derive(Properties, PartialEq)]
pub struct EmailModalProps {
    pub state: DialogState,
    pub on_close: Callback<()>,
}

#[function_component(EmailModal)]
pub fn email_modal(props: &EmailModalProps) -> Html {
    let overlay_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let sending = use_state(|| false);

    // Push dialog content into the fields, lock background scroll while open
    // and seed focus on the first focusable control.
    {
        let overlay_ref = overlay_ref.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        use_effect_with_deps(
            move |state: &DialogState| {
                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .expect("document");
                let body = document.body().expect("document body");
                if state.is_open {
                    if let Some(subject) = subject_ref.cast::<HtmlInputElement>() {
                        subject.set_value(&state.subject_text);
                    }
                    if let Some(message) = message_ref.cast::<HtmlTextAreaElement>() {
                        message.set_value(&state.body_text);
                    }
                    let _ = body.style().set_property("overflow", "hidden");
                    if let Some(overlay) = overlay_ref.cast::<Element>() {
                        if let Some(first) = focusable_elements(&overlay).into_iter().next() {
                            if let Some(first) = first.dyn_ref::<HtmlElement>() {
                                let _ = first.focus();
                            }
                        }
                    }
                } else {
                    let _ = body.style().set_property("overflow", "auto");
                }
                || ()
            },
            props.state.clone(),
        );
    }

    // Escape closes the dialog while it is open.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if *open {
                    let document = web_sys::window()
                        .and_then(|w| w.document())
                        .expect("document");
                    let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    })
                        as Box<dyn FnMut(KeyboardEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .expect("keydown listener");
                    cleanup = Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        );
                    });
                }
                move || cleanup()
            },
            props.state.is_open,
        );
    }

    // Focus trap: Tab on the last focusable wraps to the first, Shift+Tab on
    // the first wraps to the last. The focusable set is recomputed on every
    // relevant key press since the templated content changes the controls.
    let on_keydown = {
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Tab" {
                return;
            }
            let Some(overlay) = overlay_ref.cast::<Element>() else {
                return;
            };
            let focusables = focusable_elements(&overlay);
            let active = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element());
            let position = active.and_then(|active| focusables.iter().position(|el| *el == active));
            if let Some(next) = trap_target(position, focusables.len(), e.shift_key()) {
                e.prevent_default();
                if let Some(target) = focusables[next].dyn_ref::<HtmlElement>() {
                    let _ = target.focus();
                }
            }
        })
    };

    // Dismiss only when the click lands on the backdrop itself, never on a
    // descendant of the content box.
    let on_overlay_click = {
        let overlay_ref = overlay_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if let (Some(target), Some(overlay)) = (target, overlay_ref.cast::<Element>()) {
                if target == overlay {
                    on_close.emit(());
                }
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_field_blur = Callback::from(|e: FocusEvent| mark_required(e.target(), true));
    let on_field_input = Callback::from(|e: InputEvent| mark_required(e.target(), false));

    let on_submit = {
        let state = props.state.clone();
        let on_close = props.on_close.clone();
        let sending = sending.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(subject), Some(message), Some(name), Some(email)) = (
                subject_ref.cast::<HtmlInputElement>(),
                message_ref.cast::<HtmlTextAreaElement>(),
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let submission = resolve_submission(
                &subject.value(),
                &message.value(),
                &email.value(),
                &name.value(),
                &state,
            );
            info!(
                "email form submitted: subject=\"{}\" from {} <{}>, {} chars",
                submission.subject,
                submission.name,
                submission.email,
                submission.body.len()
            );

            sending.set(true);
            {
                let sending = sending.clone();
                Timeout::new(config::SENDING_REVERT_MS, move || sending.set(false)).forget();
            }

            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Thank you for your message! We'll get back to you soon.");
            }

            subject.set_value("");
            message.set_value("");
            name.set_value("");
            email.set_value("");
            on_close.emit(());
        })
    };

    let submit_label = if *sending {
        "Sending...".to_string()
    } else {
        props.state.submit_label.clone()
    };

    html! {
        <div
            ref={overlay_ref}
            class={classes!("modal-overlay", props.state.is_open.then(|| "active"))}
            onclick={on_overlay_click}
            onkeydown={on_keydown}
            role="dialog"
            aria-modal="true"
        >
            <div class="modal-content">
                <button class="modal-close" onclick={close} aria-label="Close dialog">{"✕"}</button>
                <h2 class="modal-title">{"Get in Touch"}</h2>
                <form class="modal-form" onsubmit={on_submit}>
                    <input
                        ref={name_ref}
                        name="name"
                        type="text"
                        placeholder="Your name"
                        required=true
                        onblur={on_field_blur.clone()}
                        oninput={on_field_input.clone()}
                    />
                    <input
                        ref={email_ref}
                        name="email"
                        type="email"
                        placeholder="Your email"
                        required=true
                        onblur={on_field_blur.clone()}
                        oninput={on_field_input.clone()}
                    />
                    // subject and message stay optional so an emptied field
                    // falls back to the dialog's pre-filled content
                    <input
                        ref={subject_ref}
                        name="subject"
                        type="text"
                        placeholder="Subject"
                    />
                    <textarea
                        ref={message_ref}
                        name="message"
                        rows="8"
                        placeholder="Your message"
                    />
                    <button type="submit" class="btn-modal-submit" disabled={*sending}>
                        { submit_label }
                    </button>
                </form>
            </div>

            <style>
                {r#"
                .modal-overlay {
                    display: none;
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.55);
                    z-index: 200;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }

                .modal-overlay.active {
                    display: flex;
                }

                .modal-content {
                    position: relative;
                    background: #fff;
                    border-radius: 16px;
                    padding: 2rem;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    overflow-y: auto;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    color: #6b7280;
                    cursor: pointer;
                }

                .modal-close:hover {
                    color: #111827;
                }

                .modal-title {
                    margin: 0 0 1.5rem;
                    font-size: 1.6rem;
                    color: #111827;
                }

                .modal-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .modal-form input,
                .modal-form textarea {
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    font-size: 1rem;
                    font-family: inherit;
                }

                .modal-form input:focus,
                .modal-form textarea:focus {
                    outline: none;
                    border-color: #16a34a;
                }

                .btn-modal-submit {
                    background: #16a34a;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem 1.5rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .btn-modal-submit:hover {
                    transform: scale(1.05);
                }

                .btn-modal-submit:disabled {
                    opacity: 0.7;
                    cursor: default;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}

fn focusable_elements(root: &Element) -> Vec<Element> {
    let list = root
        .query_selector_all(config::FOCUSABLE_SELECTOR)
        .expect("valid focusable selector");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// Required-field polish: red border on empty blur, green once filled.
fn mark_required(target: Option<EventTarget>, allow_red: bool) {
    let Some(target) = target else {
        return;
    };
    let (style, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.style(), input.value())
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        (area.style(), area.value())
    } else {
        return;
    };
    if value.trim().is_empty() {
        if allow_red {
            let _ = style.set_property("border-color", "#ef4444");
        }
    } else {
        let _ = style.set_property("border-color", "#22c55e");
    }
}
