//! FAQ section: a strict one-open-at-a-time accordion driven by a single
//! `AccordionState`.

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::animate::Reveal;
use crate::state::accordion::AccordionState;

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "How long does a typical project take?",
        "Most projects ship their first usable version within 6 to 10 weeks. We break the work into weekly milestones, so you see real progress from the first sprint instead of waiting months for a big reveal.",
    ),
    (
        "How much does a software project cost?",
        "It depends on scope, but we quote a fixed price after the initial consultation and stick to it. No hourly billing surprises. Small tools start around the price of a used car; full products are quoted per milestone.",
    ),
    (
        "What technologies do you work with?",
        "We pick the stack that fits the problem rather than the other way around. Most of our recent work is web applications, internal tools and integrations, with native mobile when the product truly needs it.",
    ),
    (
        "Who owns the code when the project ends?",
        "You do, fully. Every repository, credential and deployment pipeline is handed over in your name at launch. We stay available afterwards, but you are never locked in.",
    ),
    (
        "Do you provide support after launch?",
        "Yes. Every project includes a free stabilization month, and after that you can keep us on a light maintenance retainer or take over entirely. Most clients do a bit of both.",
    ),
    (
        "How do we get started?",
        "Send us a short description of what you want to build through the contact form. We'll schedule a free consultation call, and you'll have a written proposal with a fixed quote within a week.",
    ),
];

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(AccordionState::new);

    let toggle = {
        let accordion = accordion.clone();
        move |id: usize| {
            let accordion = accordion.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                accordion.set(accordion.toggle(id));
            })
        }
    };

    // Enter and Space toggle exactly like a click; default is suppressed so
    // Space does not scroll the page.
    let key_toggle = {
        let accordion = accordion.clone();
        move |id: usize| {
            let accordion = accordion.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    accordion.set(accordion.toggle(id));
                }
            })
        }
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(id, (question, answer))| {
                    let open = accordion.is_expanded(id);
                    html! {
                        <Reveal class={classes!("faq-item")}>
                            <button
                                class="faq-question"
                                onclick={toggle(id)}
                                onkeydown={key_toggle(id)}
                                aria-expanded={open.to_string()}
                            >
                                <span>{*question}</span>
                                <span class="faq-toggle-icon">{ if open { "−" } else { "+" } }</span>
                            </button>
                            <div class={classes!("faq-answer", open.then(|| "active"))}>
                                <p>{*answer}</p>
                            </div>
                        </Reveal>
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #22c55e;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    color: #111827;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    color: #16a34a;
                }

                .faq-toggle-icon {
                    font-size: 1.4rem;
                    color: #16a34a;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-answer.active {
                    max-height: 500px;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
