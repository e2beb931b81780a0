use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::pages::privacy::PrivacyContent;
use flowlocal::Page;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

/// Static markup only. Open state lives on the `.faq-item` element and is
/// driven by the accordion wired in `Page`.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <button class="faq-question" type="button">
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon" aria-hidden="true"></span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureProps {
    title: AttrValue,
    image: AttrValue,
    children: Children,
}

#[function_component(Feature)]
fn feature(props: &FeatureProps) -> Html {
    html! {
        <div class="feature">
            <img data-src={props.image.clone()} alt={props.title.clone()} class="feature-image" />
            <h3>{&props.title}</h3>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire the interaction layer once the markup is in the document. The page
    // handle owns every listener and animation, so unmounting tears them down.
    use_effect_with_deps(
        move |_| {
            let page = Page::init().map_err(|e| e.log("landing page")).ok();
            move || drop(page)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <div id="intro">
                <div class="intro-logo-container">
                    <svg id="intro-logo" viewBox="0 0 120 120" width="120" height="120">
                        <path
                            d="M20 60 C20 30 45 15 60 15 C85 15 100 35 100 60 C100 85 80 105 60 105 C40 105 30 90 30 75"
                            fill="none"
                            stroke="#5eead4"
                            stroke-width="6"
                            stroke-linecap="round"
                        />
                    </svg>
                </div>
            </div>

            <header id="header">
                <div class="header-content">
                    <span id="header-logo" class="header-logo">{"Flow Local"}</span>
                    <a id="hero-book-call-link" class="header-cta" href="#booking">{"Book a call"}</a>
                </div>
            </header>

            <main>
                <section class="section hero" data-section="1">
                    <h1>{"Never miss another call"}</h1>
                    <p class="hero-subtitle">
                        {"Flow Local answers every call, books appointments and follows up on WhatsApp while you get on with the job."}
                    </p>
                    <button id="try-demo-btn" class="hero-cta" type="button">{"Try the demo"}</button>
                </section>

                <section class="section features" data-section="2">
                    <h2>{"An AI receptionist for local businesses"}</h2>
                    <div class="features-grid">
                        <Feature title="24/7 call answering" image="/assets/feature-calls.webp">
                            <p>{"Every caller gets a friendly answer, day or night."}</p>
                        </Feature>
                        <Feature title="Bookings in your calendar" image="/assets/feature-calendar.webp">
                            <p>{"Appointments land straight in the calendar you already use."}</p>
                        </Feature>
                        <Feature title="WhatsApp follow-ups" image="/assets/feature-whatsapp.webp">
                            <p>{"Missed a lead? Flow Local messages them back within seconds."}</p>
                        </Feature>
                    </div>
                </section>

                <section class="section how-it-works" data-section="3">
                    <h2>{"How it works"}</h2>
                    <div class="steps-grid">
                        <div class="step">
                            <h3>{"Forward your number"}</h3>
                            <p>{"Keep your existing number. Calls you can't take go to Flow Local."}</p>
                        </div>
                        <div class="step">
                            <h3>{"We learn your business"}</h3>
                            <p>{"Opening hours, prices and services, set up in one call."}</p>
                        </div>
                        <div class="step">
                            <h3>{"You get the summary"}</h3>
                            <p>{"Every conversation arrives as a short text with the next step."}</p>
                        </div>
                    </div>
                </section>

                <section class="section pricing" data-section="4">
                    <h2>{"Pricing"}</h2>
                    <div class="pricing-grid">
                        <div class="pricing-card">
                            <h3>{"Professional"}</h3>
                            <div class="price">
                                <span class="amount">{"£300"}</span>
                                <span class="period">{"/month"}</span>
                            </div>
                            <p>{"Setup waived for the first 10 Belfast businesses."}</p>
                        </div>
                        <div class="pricing-card">
                            <h3>{"Premium"}</h3>
                            <div class="price">
                                <span class="amount">{"£450"}</span>
                                <span class="period">{"/month"}</span>
                            </div>
                            <p>{"Unlimited AI minutes and WhatsApp."}</p>
                        </div>
                    </div>
                    <button id="pricing-book-btn" class="hero-cta" type="button">{"Book a setup call"}</button>
                </section>

                <section class="section demo" data-section="5">
                    <h2>{"Hear it for yourself"}</h2>
                    <div id="demo-panel" class="demo-panel">
                        <button id="demo-toggle" class="demo-toggle" type="button" aria-controls="demo-panel">
                            {"Demo options"}
                        </button>
                        <div class="demo-panel-body">
                            <button class="demo-button-large demo-voice" type="button">
                                <span class="demo-icon-large" aria-hidden="true"></span>
                                {"Talk to the AI receptionist"}
                            </button>
                            <button class="demo-button" type="button">
                                <span class="demo-icon" aria-hidden="true"></span>
                                {"WhatsApp demo"}
                            </button>
                            <button class="demo-button" type="button">
                                <span class="demo-icon" aria-hidden="true"></span>
                                {"Booking demo"}
                            </button>
                        </div>
                    </div>
                </section>

                <section class="section faq" data-section="6">
                    <h2>{"Frequently asked questions"}</h2>
                    <FaqItem question="Will callers know they're talking to an AI?">
                        <p>{"Flow Local introduces itself as your assistant. Most callers just get their answer and move on."}</p>
                    </FaqItem>
                    <FaqItem question="Can I keep my current phone number?">
                        <p>{"Yes. You forward unanswered calls to Flow Local, nothing else changes."}</p>
                    </FaqItem>
                    <FaqItem question="What happens when a question is too tricky?">
                        <p>{"The caller's details and question are passed to you straight away so you can call back."}</p>
                    </FaqItem>
                    <FaqItem question="Is there a contract?">
                        <p>{"No. Plans are monthly and you can cancel any time."}</p>
                    </FaqItem>
                </section>
            </main>

            <footer class="site-footer">
                <p>{"© Flow Local, Belfast"}</p>
                <div class="legal-links">
                    <a id="privacy-toggle" href="#privacy">{"Privacy Policy"}</a>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Full policy page"}</Link<Route>>
                </div>
            </footer>

            <div id="cookie-banner" class="cookie-banner" role="dialog" aria-live="polite">
                <p>{"We use cookies for analytics and advertising, only with your permission."}</p>
                <div class="cookie-actions">
                    <button id="cookie-reject" type="button">{"Reject"}</button>
                    <button id="cookie-accept" type="button">{"Accept"}</button>
                </div>
            </div>

            <div id="privacy-modal" class="modal" role="dialog" aria-modal="true">
                <div class="modal-content legal-content">
                    <button id="privacy-close" class="modal-close" type="button" aria-label="Close">{"×"}</button>
                    <h1>{"Privacy Policy"}</h1>
                    <PrivacyContent />
                </div>
            </div>

            <div id="booking-modal" class="modal" role="dialog" aria-modal="true">
                <div class="modal-content">
                    <button id="booking-close" class="modal-close" type="button" aria-label="Close">{"×"}</button>
                    <h2>{"Book a call"}</h2>
                    <p>{"Pick a time that suits you and we'll walk you through a setup for your business."}</p>
                    <a class="hero-cta" href="https://www.flow-local.com" target="_blank" rel="noopener noreferrer">
                        {"Open the booking calendar"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                    #intro {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0b1120;
                    }

                    .intro-logo-container {
                        opacity: 0;
                    }

                    .reduce-motion #intro {
                        display: none;
                    }

                    #header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        opacity: 0;
                        transform: translateY(-100%);
                        transition: opacity 0.4s ease, transform 0.4s ease;
                        background: rgba(11, 17, 32, 0.85);
                        backdrop-filter: blur(10px);
                    }

                    #header.visible {
                        opacity: 1;
                        transform: none;
                    }

                    .header-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                    }

                    .header-logo {
                        display: inline-block;
                        font-weight: 700;
                        color: #5eead4;
                    }

                    .section {
                        min-height: 80vh;
                        padding: 6rem 2rem;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }

                    .section.section--visible {
                        opacity: 1;
                        transform: none;
                    }

                    .features-grid, .steps-grid, .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 2rem auto;
                    }

                    .demo-panel-body {
                        display: none;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .demo-panel.open .demo-panel-body,
                    .demo-panel:not(.ready) .demo-panel-body {
                        display: flex;
                    }

                    .demo-button, .demo-button-large {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.4rem;
                        border: none;
                        border-radius: 999px;
                        background: #14b8a6;
                        color: #fff;
                        cursor: pointer;
                    }

                    .demo-button-large {
                        font-size: 1.2rem;
                        padding: 1.2rem 2rem;
                    }

                    .demo-icon, .demo-icon-large {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        border-radius: 50%;
                        background: #ccfbf1;
                    }

                    .demo-icon-large {
                        width: 1.4rem;
                        height: 1.4rem;
                    }

                    .faq-answer {
                        display: none;
                    }

                    .faq-item.open .faq-answer {
                        display: block;
                    }

                    .faq-question .toggle-icon::after {
                        content: "+";
                    }

                    .faq-item.open .faq-question .toggle-icon::after {
                        content: "−";
                    }

                    .cookie-banner {
                        position: fixed;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        z-index: 60;
                        padding: 1rem 1.5rem;
                        border-radius: 12px;
                        background: #111827;
                        color: #e5e7eb;
                        transform: translateY(150%);
                        transition: transform 0.4s ease;
                    }

                    .cookie-banner.visible {
                        transform: none;
                    }

                    .modal {
                        display: none;
                        position: fixed;
                        inset: 0;
                        z-index: 80;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                    }

                    .modal-content {
                        position: relative;
                        max-width: 720px;
                        max-height: 85vh;
                        overflow-y: auto;
                        padding: 2.5rem;
                        border-radius: 16px;
                        background: #111827;
                        color: #e5e7eb;
                    }

                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        color: inherit;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }

                    .reduce-motion *, .reduce-motion *::before, .reduce-motion *::after {
                        transition: none !important;
                        animation: none !important;
                    }
                "#}
            </style>
        </div>
    }
}
