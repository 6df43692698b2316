use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod content;
mod components {
    pub mod accordion;
    pub mod carousel;
    pub mod countdown;
    pub mod counter;
    pub mod cta;
    pub mod icons;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use content::Catalog;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(catalog: Rc<Catalog>, route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing catalog={catalog} /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let catalog = props.catalog.clone();
    let render = move |route: Route| switch(catalog.clone(), route);

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    info!(
        "Starting landing page: {} features, {} testimonials, {} FAQ entries",
        catalog.features.len(),
        catalog.testimonials.len(),
        catalog.faq.len()
    );
    yew::Renderer::<App>::with_props(AppProps { catalog: Rc::new(catalog) }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/checkout"), Some(Route::NotFound));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
