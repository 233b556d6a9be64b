use chrono::Datelike;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::card::Card;
use crate::components::layout::PageShell;
use crate::config;
use crate::scroll::{use_scroll_sample, ScrollState};
use crate::Route;

struct Feature {
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    description: &'static str,
}

struct Plan {
    title: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Easy to Use",
        icon: "📄",
        accent: "accent-blue",
        description: "Intuitive interface guides you through the tax filing process step by step.",
    },
    Feature {
        title: "Maximize Refunds",
        icon: "$",
        accent: "accent-green",
        description: "Our smart algorithms ensure you claim every deduction and credit you're entitled to.",
    },
    Feature {
        title: "Secure & Compliant",
        icon: "🛡",
        accent: "accent-purple",
        description: "Bank-level encryption and full compliance with CRA regulations for your peace of mind.",
    },
];

const PLANS: &[Plan] = &[
    Plan {
        title: "Basic",
        price: "$19.99",
        features: &["Personal tax return", "Basic deductions", "Email support"],
        highlighted: false,
    },
    Plan {
        title: "Pro",
        price: "$39.99",
        features: &[
            "Personal & small business",
            "Advanced deductions",
            "Priority support",
            "Audit assistance",
        ],
        highlighted: true,
    },
    Plan {
        title: "Enterprise",
        price: "Custom",
        features: &[
            "Multiple business entities",
            "Dedicated account manager",
            "Custom integrations",
            "24/7 support",
        ],
        highlighted: false,
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah L.",
        role: "Small Business Owner",
        quote: "CanTax Pro saved me hours of work and maximized my refund. Highly recommended!",
    },
    Testimonial {
        name: "Michael T.",
        role: "Freelance Designer",
        quote: "The interface is so intuitive, and the support team is always there when I need them.",
    },
];

const SECTION_LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Testimonials"),
];

/// Number of hero elements revealed one after another on mount.
const HERO_STAGES: u32 = 3;

#[derive(Properties, PartialEq)]
struct HeaderProps {
    state: ScrollState,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors keep their default jump, only the menu closes
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", props.state.is_scrolled().then(|| "scrolled"))}>
            <div class="header-content">
                <h1 class="brand">{config::BRAND_NAME}</h1>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </nav>
                <Link<Route> to={Route::Dashboard} classes="pill-button">
                    {"File Now"}
                </Link<Route>>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let stage = use_state(|| 0u32);

    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |current: &u32| {
                let next = *current + 1;
                let timeout = (*current < HERO_STAGES).then(|| {
                    let delay = if *current == 0 { 0 } else { config::HERO_STAGE_DELAY_MS };
                    Timeout::new(delay, move || stage_setter.set(next))
                });
                // Dropping a pending Timeout cancels it
                move || drop(timeout)
            },
            *stage,
        );
    }

    let reveal = |index: u32| classes!("reveal", (*stage > index).then(|| "visible"));

    html! {
        <section class="hero">
            <h2 class={reveal(0)}>{"Simplify Your Canadian Taxes"}</h2>
            <p class={reveal(1)}>
                {"Fast, accurate, and secure tax filing for individuals and businesses"}
            </p>
            <div class={reveal(2)}>
                <Link<Route> to={Route::Checklist} classes="pill-button large">
                    {"Start Your Tax Return"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h4>{config::BRAND_NAME}</h4>
                    <p>{"Simplifying Canadian taxes for individuals and businesses."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for SECTION_LINKS.iter().map(|(href, label)| html! {
                            <li><a href={*href}>{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact Us"}</h4>
                    <p>{format!("Email: {}", config::SUPPORT_EMAIL)}</p>
                    <p>{format!("Phone: {}", config::SUPPORT_PHONE)}</p>
                </div>
            </div>
            <p class="copyright">
                {format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}
            </p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_scroll_sample();
    let features_style = format!("opacity: {:.3};", scroll.fade_opacity());

    html! {
        <PageShell class="landing-page">
            <Header state={scroll.state()} />
            <main>
                <Hero />

                <section class="features" id="features" style={features_style}>
                    <h3 class="section-title">{format!("Why Choose {}?", config::BRAND_NAME)}</h3>
                    <div class="grid three">
                        { for FEATURES.iter().map(|feature| html! {
                            <Card class="feature-card" title={feature.title}>
                                <div class={classes!("feature-icon", feature.accent)}>{feature.icon}</div>
                                <p class="card-description">{feature.description}</p>
                            </Card>
                        }) }
                    </div>
                </section>

                <section class="pricing" id="pricing">
                    <h3 class="section-title">{"Affordable Pricing Plans"}</h3>
                    <div class="grid three">
                        { for PLANS.iter().map(|plan| html! {
                            <Card
                                class={classes!("plan-card", plan.highlighted.then(|| "highlighted"))}
                                title={plan.title}
                                description={plan.price}
                            >
                                <ul class="plan-features">
                                    { for plan.features.iter().map(|item| html! {
                                        <li><span class="check">{"✓"}</span>{*item}</li>
                                    }) }
                                </ul>
                                <button class="pill-button wide">{"Choose Plan"}</button>
                            </Card>
                        }) }
                    </div>
                </section>

                <section class="testimonials" id="testimonials">
                    <h3 class="section-title">{"What Our Customers Say"}</h3>
                    <div class="grid two">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <Card title={t.name} description={t.role}>
                                <p class="quote">{format!("\"{}\"", t.quote)}</p>
                            </Card>
                        }) }
                    </div>
                </section>

                <section class="cta">
                    <h3>{"Ready to Simplify Your Taxes?"}</h3>
                    <p>{"Join thousands of satisfied customers and file your taxes with confidence."}</p>
                    <Link<Route> to={Route::Checklist} classes="pill-button inverted large">
                        {"Get Started Now →"}
                    </Link<Route>>
                </section>
            </main>
            <Footer />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #eff6ff, #ffffff);
                    color: #1f2937;
                }

                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    padding: 0.5rem 0;
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #2563eb;
                }

                .header-nav {
                    display: flex;
                    gap: 1rem;
                }

                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .nav-link:hover {
                    color: #2563eb;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #2563eb;
                }

                .pill-button {
                    display: inline-block;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 9999px;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .pill-button:hover {
                    background: #1d4ed8;
                    transform: scale(1.05);
                }

                .pill-button.large {
                    font-size: 1.125rem;
                    padding: 0.75rem 1.5rem;
                }

                .pill-button.wide {
                    width: 100%;
                    margin-top: 1.5rem;
                }

                .pill-button.inverted {
                    background: #ffffff;
                    color: #2563eb;
                }

                main {
                    padding-top: 5rem;
                }

                .hero {
                    text-align: center;
                    padding: 5rem 1rem;
                }

                .hero h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .hero p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .features, .testimonials {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                }

                .pricing {
                    background: #f9fafb;
                    padding: 5rem 1rem;
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }

                .grid.two {
                    grid-template-columns: repeat(2, 1fr);
                }

                .feature-card, .plan-card {
                    text-align: center;
                }

                .feature-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .accent-blue { color: #3b82f6; }
                .accent-green { color: #22c55e; }
                .accent-purple { color: #a855f7; }

                .plan-card {
                    transition: all 0.3s ease;
                }

                .plan-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }

                .plan-card.highlighted {
                    border: 2px solid #3b82f6;
                }

                .plan-card .card-description {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin: 1rem 0;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                }

                .plan-features li {
                    margin-bottom: 0.5rem;
                }

                .check {
                    color: #22c55e;
                    margin-right: 0.5rem;
                }

                .quote {
                    font-style: italic;
                }

                .cta {
                    background: #2563eb;
                    color: #ffffff;
                    text-align: center;
                    padding: 5rem 1rem;
                }

                .cta h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .cta p {
                    font-size: 1.25rem;
                    margin-bottom: 2rem;
                }

                .site-footer {
                    background: #1f2937;
                    color: #ffffff;
                    padding: 2rem 1rem;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .site-footer h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }

                .site-footer a {
                    color: #ffffff;
                    text-decoration: none;
                }

                .site-footer a:hover {
                    color: #60a5fa;
                }

                .copyright {
                    margin-top: 2rem;
                    text-align: center;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .header-nav {
                        display: none;
                    }

                    .header-nav.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: #ffffff;
                        padding: 1rem;
                    }

                    .grid.three, .grid.two, .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h2 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </PageShell>
    }
}
