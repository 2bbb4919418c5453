use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::effects::counters::CounterAnimations;
use crate::effects::reveal::RevealOnScroll;
use crate::effects::scroll::AnchorScroll;
use crate::Route;

const HERO_WORDS: &[&str] = &["revenue", "retention", "activation", "latency"];

#[function_component(Home)]
pub fn home() -> Html {
    let word_index = use_state(|| 0usize);

    // Rotate the hero keyword on a fixed cadence.
    {
        let word_index = word_index.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = 0usize;
                let interval = Interval::new(config::HERO_WORD_INTERVAL_MS, move || {
                    current = (current + 1) % HERO_WORDS.len();
                    word_index.set(current);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Attach the scroll-driven behaviors once the page markup exists; they
    // detach themselves when this page unmounts.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let behaviors = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    (
                        RevealOnScroll::attach(&document),
                        CounterAnimations::attach(&document),
                        AnchorScroll::attach(&document),
                    )
                });
            move || drop(behaviors)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>
                    {"See your "}
                    <span class="hero-word">{ HERO_WORDS[*word_index] }</span>
                    {" move in real time"}
                </h1>
                <p class="hero-sub">
                    {"Pulseboard turns the metrics scattered across your stack into one live \
                      dashboard your whole team actually reads."}
                </p>
                <div class="hero-actions">
                    <a href="#pricing" data-scroll="true" class="button-primary">{"See plans"}</a>
                    <a href="#features" data-scroll="true" class="button-secondary">{"How it works"}</a>
                </div>
            </section>

            <section id="metrics" class="stats">
                { stat("12500", "teams shipping with Pulseboard") }
                { stat("340", "integrations out of the box") }
                { stat("98", "percent weekly active retention") }
                { stat("2400000", "events ingested every day") }
            </section>

            <section id="features" class="features">
                <h2 class="reveal">{"Built for the numbers that matter"}</h2>
                <div class="feature-grid">
                    { feature_card("Live boards", "Every chart streams. No refresh button, no \
                        stale Monday-morning export.") }
                    { feature_card("Alerts that think", "Thresholds with seasonality baked in, so \
                        a quiet Sunday never pages anyone.") }
                    { feature_card("One query layer", "Point Pulseboard at your warehouse once and \
                        reuse the same metric definitions everywhere.") }
                    { feature_card("Shareable views", "Send a board to an exec as a link, not a \
                        screenshot taped into a slide.") }
                    { feature_card("Anomaly replay", "Scrub back through any spike and see the \
                        exact segments that drove it.") }
                    { feature_card("Your data stays put", "We read from your warehouse. Nothing is \
                        copied out, nothing to re-secure.") }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 class="reveal">{"Plans"}</h2>
                <div class="pricing-grid">
                    { plan_card("Starter", "$0", "Two boards, five seats, community support. \
                        Enough to make Monday metrics meetings obsolete.") }
                    { plan_card("Growth", "$49", "Unlimited boards, alerting, anomaly replay, \
                        priority support. Per workspace, per month.") }
                    { plan_card("Scale", "Custom", "SSO, audit logs, dedicated ingest and a human \
                        who answers the phone.") }
                </div>
            </section>

            <section id="faq" class="faq">
                <h2 class="reveal">{"Frequently asked questions"}</h2>
                <FaqItem question="Where does my data live?">
                    <p>{"In your warehouse. Pulseboard queries it in place and caches only the \
                        aggregates a board needs to render."}</p>
                </FaqItem>
                <FaqItem question="How fresh is 'live'?">
                    <p>{"Streaming sources render within seconds. Warehouse-backed charts follow \
                        your sync schedule, typically every few minutes."}</p>
                </FaqItem>
                <FaqItem question="Do you support self-hosting?">
                    <p>{"The Scale plan can run inside your own VPC. Everything else about the \
                        product is identical."}</p>
                </FaqItem>
                <FaqItem question="Can I try it without a credit card?">
                    <p>{"Yes. Starter is free forever, not a trial, and upgrading keeps every \
                        board you already built."}</p>
                </FaqItem>
            </section>

            <section class="cta reveal">
                <h2>{"Stop guessing. Start watching."}</h2>
                <p>{"Wire up your first board in under ten minutes."}</p>
                <a href="#pricing" data-scroll="true" class="button-primary">{"Get started"}</a>
            </section>

            <footer class="footer">
                <span class="footer-brand">{"Pulse"}<em>{"board"}</em></span>
                <div class="footer-links">
                    <Link<Route> to={Route::Terms} classes="footer-link">{"Terms"}</Link<Route>>
                    <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                    <a class="footer-link" href="mailto:hello@pulseboard.dev">{"Contact"}</a>
                </div>
                <span class="footer-note">{"© 2026 Pulseboard"}</span>
            </footer>

            <style>
                {r#"
                .landing-page section {
                    padding: 6rem 2rem;
                    max-width: 1080px;
                    margin: 0 auto;
                }
                .hero {
                    min-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3.2rem;
                    line-height: 1.15;
                    letter-spacing: -0.03em;
                }
                .hero-word {
                    color: var(--accent);
                }
                .hero-sub {
                    margin: 1.5rem auto 0;
                    max-width: 540px;
                    color: var(--text-dim);
                    font-size: 1.15rem;
                }
                .hero-actions {
                    margin-top: 2.5rem;
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }
                .button-primary,
                .button-secondary {
                    display: inline-block;
                    padding: 0.8rem 1.8rem;
                    border-radius: 10px;
                    font-weight: 600;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .button-primary {
                    background: var(--accent);
                    color: #fff;
                }
                .button-secondary {
                    border: 1px solid var(--border);
                    color: var(--text);
                }
                .button-primary:hover,
                .button-secondary:hover {
                    transform: translateY(-2px);
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-value {
                    display: block;
                    font-size: 2.6rem;
                    font-weight: 700;
                    color: var(--accent);
                    font-variant-numeric: tabular-nums;
                }
                .stat-label {
                    color: var(--text-dim);
                    font-size: 0.95rem;
                }
                .features h2,
                .pricing h2,
                .faq h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 3rem;
                    letter-spacing: -0.02em;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card,
                .plan-card {
                    background: var(--bg-raised);
                    border: 1px solid var(--border);
                    border-radius: 14px;
                    padding: 1.8rem;
                }
                .feature-card h3,
                .plan-card h3 {
                    margin-bottom: 0.6rem;
                }
                .feature-card p,
                .plan-card p {
                    color: var(--text-dim);
                    font-size: 0.95rem;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .plan-price {
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--accent);
                    margin-bottom: 0.8rem;
                }
                .faq {
                    max-width: 760px;
                }
                .faq-item {
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.1rem 1.4rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-icon {
                    color: var(--accent);
                    font-size: 1.3rem;
                }
                .faq-answer {
                    padding: 0 1.4rem 1.2rem;
                    color: var(--text-dim);
                }
                .cta {
                    text-align: center;
                }
                .cta h2 {
                    font-size: 2.4rem;
                    letter-spacing: -0.02em;
                }
                .cta p {
                    color: var(--text-dim);
                    margin: 1rem 0 2rem;
                }
                .footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding: 2.5rem 2rem;
                    max-width: 1080px;
                    margin: 0 auto;
                    border-top: 1px solid var(--border);
                }
                .footer-brand {
                    font-weight: 700;
                }
                .footer-brand em {
                    color: var(--accent);
                    font-style: normal;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-link {
                    color: var(--text-dim);
                    font-size: 0.9rem;
                }
                .footer-link:hover {
                    color: var(--text);
                }
                .footer-note {
                    color: var(--text-dim);
                    font-size: 0.85rem;
                }
                @media (max-width: 640px) {
                    .hero h1 {
                        font-size: 2.3rem;
                    }
                    .landing-page section {
                        padding: 4rem 1.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn stat(count: &'static str, label: &'static str) -> Html {
    html! {
        <div class="stat reveal">
            <span class="stat-value" data-count={count}>{"0"}</span>
            <span class="stat-label">{ label }</span>
        </div>
    }
}

fn feature_card(title: &'static str, body: &'static str) -> Html {
    html! {
        <div class="feature-card reveal">
            <h3>{ title }</h3>
            <p>{ body }</p>
        </div>
    }
}

fn plan_card(name: &'static str, price: &'static str, body: &'static str) -> Html {
    html! {
        <div class="plan-card reveal">
            <h3>{ name }</h3>
            <div class="plan-price">{ price }</div>
            <p>{ body }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={classes!("faq-item", "reveal", (*open).then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={if *open { "true" } else { "false" }}
            >
                <span>{ props.question.clone() }</span>
                <span class="faq-icon">{ if *open { "−" } else { "+" } }</span>
            </button>
            {
                if *open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
