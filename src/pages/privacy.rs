use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

/// Policy text, shown both in the landing page dialog and on `/privacy`.
#[function_component(PrivacyContent)]
pub fn privacy_content() -> Html {
    html! {
        <>
            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"When you use this site or book a call we may process:"}</p>
                <ul>
                    <li>{"Your name, business name, email and phone number (when you book a call)"}</li>
                    <li>{"Messages you leave with our AI receptionist demo"}</li>
                    <li>{"Anonymous usage data, only if you accept cookies"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Cookies and Tracking"}</h2>
                <p>{"Analytics and advertising scripts are never loaded until you choose \"Accept\" in the cookie banner."}</p>
                <ul>
                    <li>{"Your choice is stored in your browser's local storage"}</li>
                    <li>{"Choosing \"Reject\" keeps all third-party tracking off"}</li>
                    <li>{"Clearing your browser storage brings the banner back"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. How We Use Your Data"}</h2>
                <ul>
                    <li>{"To get back to you about a booked call"}</li>
                    <li>{"To set up and run the Flow Local service for your business"}</li>
                    <li>{"To understand which parts of this page are useful (with consent)"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"Under UK GDPR you can ask us to access, correct or delete the personal data we hold about you."}</p>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{"For privacy questions contact us through flow-local.com."}</p>
                <p>{"Location: Belfast, Northern Ireland"}</p>
            </section>
        </>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>
            <PrivacyContent />
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to Flow Local"}</Link<Route>>
            </div>
        </div>
    }
}
