use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::animate::{Reveal, StatCounter};
use crate::components::email_modal::EmailModal;
use crate::components::faq::FaqSection;
use crate::components::nav::Nav;
use crate::config;
use crate::effects;
use crate::state::dialog::{DialogState, Inquiry};

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Discover",
        "A free consultation call where we map out what you need, what it should cost and what can be cut without hurting the product.",
    ),
    (
        "02",
        "Design",
        "We turn the requirements into clickable screens and a fixed-price proposal, so you know exactly what you are buying before any code is written.",
    ),
    (
        "03",
        "Build",
        "Weekly milestones, weekly demos. You watch the product grow and steer the priorities instead of waiting for a big reveal.",
    ),
    (
        "04",
        "Launch",
        "We deploy, hand over every credential and repository in your name, and stay around for a free stabilization month.",
    ),
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Fixed-price quotes",
        "One written quote after the consultation, honored to the end. Scope changes get their own quote instead of silently inflating the bill.",
    ),
    (
        "Weekly demos",
        "Every Friday you see the product running, not a status slide. Feedback lands in the next week's milestone.",
    ),
    (
        "Senior engineers only",
        "Your project is built by people who have shipped production software for a decade, not handed down to whoever is free.",
    ),
    (
        "Full code ownership",
        "Repositories, infrastructure and documentation are yours from day one. Leaving us is always a realistic option, which keeps us honest.",
    ),
];

const INSIGHTS: &[(&str, &str)] = &[
    (
        "Why fixed prices beat hourly billing",
        "Hourly billing puts the customer and the agency on opposite sides of the table: every inefficiency becomes revenue. A fixed quote forces the hard scoping conversation to happen up front, where it is cheap, instead of at invoice time, where it is painful. It also means the agency carries the estimation risk, which is exactly where the expertise sits. We have quoted fixed prices for years and the discipline it imposes on both sides is worth more than any single contract.",
    ),
    (
        "The case for weekly demos",
        "A demo every week sounds like overhead until you count what it prevents. Requirements drift silently; a running product does not lie. When stakeholders see the real thing every Friday, misunderstandings survive five days instead of five months, and the expensive rework at the end of the project simply never accumulates. The demo is not a ceremony, it is the project's heartbeat.",
    ),
    (
        "What code ownership actually means",
        "Plenty of agencies say you own the code while keeping the cloud account, the domain and the deployment pipeline in their name. Ownership that cannot survive a falling-out is not ownership. From the first week, everything we create lives in accounts you control and we work as invited collaborators. The handover at launch is a formality because there is nothing left to hand over.",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let dialog = use_state(DialogState::closed);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Let other scripts on the page drive the dialog.
    {
        let open_handle = dialog.clone();
        let close_handle = dialog.clone();
        use_effect_with_deps(
            move |_| {
                effects::register_modal_hooks(effects::ModalHooks {
                    open: Callback::from(move |(subject, body, label): (String, String, String)| {
                        open_handle.set(open_handle.open(&subject, &body, &label));
                    }),
                    close: Callback::from(move |_| close_handle.set(close_handle.close())),
                });
                || ()
            },
            (),
        );
    }

    let open_inquiry = {
        let dialog = dialog.clone();
        Callback::from(move |inquiry: Inquiry| dialog.set(dialog.open_inquiry(inquiry)))
    };

    // One generic attach routine for every trigger button on the page.
    let inquire = {
        let open_inquiry = open_inquiry.clone();
        move |inquiry: Inquiry| {
            let open_inquiry = open_inquiry.clone();
            Callback::from(move |_: MouseEvent| open_inquiry.emit(inquiry))
        }
    };

    let close_dialog = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(dialog.close()))
    };

    let on_read_more = Callback::from(|e: MouseEvent| {
        if let Some(button) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            effects::toggle_description_on(&button);
        }
    });

    html! {
        <div class="landing-page">
            <Nav on_inquiry={open_inquiry.clone()} />

            <section id="hero" class="hero-section">
                <h1 class="hero-title">{"Software that ships."}</h1>
                <p class="hero-subtitle">
                    {"NextVolve builds web products and internal tools for companies that are tired of \
                      agencies billing by the hour and delivering by the quarter."}
                </p>
                <div class="hero-actions">
                    <button class="btn-hero-primary" onclick={inquire(Inquiry::StartProject)}>
                        {"Start Your Project"}
                    </button>
                    <button class="btn-hero-secondary" onclick={inquire(Inquiry::ScheduleConsultation)}>
                        {"Schedule a Consultation"}
                    </button>
                </div>
            </section>

            <section id="stats" class="stats-section">
                <div class="stat">
                    <StatCounter target={120} />
                    <span class="stat-label">{"Projects delivered"}</span>
                </div>
                <div class="stat">
                    <StatCounter target={40} />
                    <span class="stat-label">{"Long-term clients"}</span>
                </div>
                <div class="stat">
                    <StatCounter target={10} />
                    <span class="stat-label">{"Years in business"}</span>
                </div>
            </section>

            <section id="process" class="process-section">
                <h2 class="section-title">{"How we work"}</h2>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().map(|(number, title, text)| html! {
                        <Reveal class={classes!("process-step")}>
                            <span class="step-number">{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="comparison-section">
                <h2 class="section-title">{"Why companies switch to us"}</h2>
                <div class="comparison-grid">
                    <Reveal class={classes!("comparison-card", "comparison-old")}>
                        <h3>{"The usual agency"}</h3>
                        <ul>
                            <li>{"Hourly billing with open-ended estimates"}</li>
                            <li>{"Monthly status reports instead of working software"}</li>
                            <li>{"Juniors doing the work after the sales call"}</li>
                            <li>{"Code and infrastructure held in their accounts"}</li>
                        </ul>
                    </Reveal>
                    <Reveal class={classes!("comparison-card", "comparison-new")}>
                        <h3>{config::BRAND}</h3>
                        <ul>
                            <li>{"Fixed quote before the first line of code"}</li>
                            <li>{"A running demo every single week"}</li>
                            <li>{"Senior engineers from kickoff to launch"}</li>
                            <li>{"Everything in your name from day one"}</li>
                        </ul>
                    </Reveal>
                </div>
            </section>

            <section id="features" class="features-section">
                <h2 class="section-title">{"What you get"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(title, text)| html! {
                        <Reveal class={classes!("feature-card")}>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <FaqSection />

            <section class="insights-section">
                <h2 class="section-title">{"From our notebook"}</h2>
                <div class="insights-grid">
                    { for INSIGHTS.iter().map(|(title, text)| html! {
                        <div class="insight-card">
                            <h3>{*title}</h3>
                            <p class="insight-description collapsed">{*text}</p>
                            <button class="btn-read-more" onclick={on_read_more.clone()}>
                                {"Read More"}
                            </button>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta-section">
                <h2>{"Ready to build something that actually ships?"}</h2>
                <p>{"Tell us what you have in mind and get a fixed quote within a week."}</p>
                <button class="btn-cta-primary" onclick={inquire(Inquiry::StartProjectCta)}>
                    {"Start Your Project"}
                </button>
            </section>

            <section id="contact" class="contact-section">
                <h2 class="section-title">{"Contact"}</h2>
                <p>
                    {"Questions about our services? Write to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    {" or use the form."}
                </p>
                <div class="contact-actions">
                    <button class="btn-primary" onclick={inquire(Inquiry::ContactQuestion)}>
                        {"Ask a Question"}
                    </button>
                    <button class="btn-primary" onclick={inquire(Inquiry::FreeConsultation)}>
                        {"Request a Free Consultation"}
                    </button>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <span class="footer-brand">{config::BRAND}</span>
                    <button class="footer-email-link" onclick={inquire(Inquiry::FooterContact)}>
                        {"Send us a message"}
                    </button>
                    <span class="footer-copyright">{"© 2026 NextVolve. All rights reserved."}</span>
                </div>
            </footer>

            <EmailModal state={(*dialog).clone()} on_close={close_dialog} />

            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    color: #111827;
                    background: #f9fafb;
                }

                .section-title {
                    text-align: center;
                    font-size: 2.25rem;
                    margin: 0 0 2.5rem;
                }

                .hero-section {
                    padding: 11rem 2rem 6rem;
                    text-align: center;
                    background: linear-gradient(180deg, #ecfdf5 0%, #f9fafb 100%);
                }

                .hero-title {
                    font-size: 3.5rem;
                    margin: 0 0 1.25rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .btn-hero-primary, .btn-cta-primary, .btn-primary {
                    background: #16a34a;
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem 1.8rem;
                    font-size: 1.05rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .btn-hero-secondary {
                    background: #fff;
                    color: #16a34a;
                    border: 2px solid #16a34a;
                    border-radius: 10px;
                    padding: 0.9rem 1.8rem;
                    font-size: 1.05rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .btn-hero-primary:hover, .btn-hero-secondary:hover,
                .btn-cta-primary:hover, .btn-primary:hover {
                    transform: scale(1.05);
                }

                .stats-section {
                    display: flex;
                    justify-content: center;
                    gap: 4rem;
                    padding: 4rem 2rem;
                    flex-wrap: wrap;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .stat-number {
                    font-size: 3rem;
                    font-weight: 800;
                    color: #16a34a;
                }

                .stat-label {
                    color: #4b5563;
                }

                .process-section, .features-section, .comparison-section, .insights-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 1.5rem;
                }

                .process-step {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.75rem;
                }

                .step-number {
                    font-size: 0.9rem;
                    font-weight: 700;
                    color: #16a34a;
                    letter-spacing: 0.1em;
                }

                .process-step h3 {
                    margin: 0.5rem 0 0.75rem;
                }

                .process-step p, .feature-card p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin: 0;
                }

                .comparison-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .comparison-card {
                    border-radius: 12px;
                    padding: 2rem;
                }

                .comparison-old {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    color: #6b7280;
                }

                .comparison-new {
                    background: #064e3b;
                    color: #ecfdf5;
                }

                .comparison-card ul {
                    margin: 1rem 0 0;
                    padding-left: 1.25rem;
                    line-height: 1.9;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.75rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.08);
                }

                .insights-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .insight-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.75rem;
                }

                .insight-description {
                    color: #4b5563;
                    line-height: 1.6;
                }

                .insight-description.collapsed {
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }

                .insight-description.expanded {
                    display: block;
                }

                .btn-read-more, .btn-see-less {
                    background: none;
                    border: none;
                    color: #16a34a;
                    font-size: 0.95rem;
                    cursor: pointer;
                    padding: 0.5rem 0 0;
                }

                .cta-section {
                    text-align: center;
                    background: #064e3b;
                    color: #ecfdf5;
                    padding: 5rem 2rem;
                }

                .cta-section h2 {
                    font-size: 2rem;
                    margin: 0 0 1rem;
                }

                .cta-section p {
                    margin: 0 0 2rem;
                    color: #a7f3d0;
                }

                .contact-section {
                    text-align: center;
                    padding: 5rem 2rem;
                }

                .contact-section a {
                    color: #16a34a;
                }

                .contact-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }

                .footer {
                    background: #111827;
                    color: #9ca3af;
                    padding: 2.5rem 2rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .footer-brand {
                    font-weight: 800;
                    color: #fff;
                }

                .footer-email-link {
                    background: none;
                    border: none;
                    color: #22c55e;
                    cursor: pointer;
                    font-size: 1rem;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.4rem;
                    }

                    .stats-section {
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
