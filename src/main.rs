use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

use flowlocal::{config, dom};

mod pages {
    pub mod landing;
    pub mod not_found;
    pub mod privacy;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
    privacy::PrivacyPolicy,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let document = dom::window().and_then(|window| dom::document(&window));
    match document {
        Ok(document) => dom::on_ready(&document, || {
            yew::Renderer::<App>::new().render();
        }),
        Err(e) => e.log("startup"),
    }
}
