use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to Flow Local"}</Link<Route>>
            </div>
        </div>
    }
}
