use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll;
mod checklist {
    pub mod catalog;
    pub mod selection;
}
mod components {
    pub mod accordion;
    pub mod card;
    pub mod layout;
}
mod pages {
    pub mod checklist;
    pub mod dashboard;
    pub mod landing;
}

use components::layout::PageShell;
use pages::{
    checklist::Checklist,
    dashboard::Dashboard,
    landing::Landing,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/dashboard")]
    Dashboard,
    #[at("/checklist")]
    Checklist,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        },
        Route::Checklist => {
            info!("Rendering Checklist page");
            html! { <Checklist /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <PageShell title="Page Not Found" class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Landing}>{"Back to Home"}</Link<Route>>
                </PageShell>
            }
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

    // Initialize logging, verbose in debug builds
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
