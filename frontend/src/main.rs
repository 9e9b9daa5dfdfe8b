use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, Level};

mod clock;
mod config;
mod rng;
mod theme;
mod effects {
    pub mod particles;
    pub mod celebration;
}
mod motion {
    pub mod spring;
    pub mod reveal;
}
mod components {
    pub mod icons;
    pub mod floating_hearts;
    pub mod hero;
    pub mod love_message;
    pub mod media_panel;
    pub mod question;
    pub mod footer;
}
mod pages {
    pub mod valentine;
}

use config::{PageConfig, Variant};
use pages::valentine::{FallbackGreeting, ValentinePage};
use theme::Theme;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/memories")]
    Memories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering classic page");
            html! { <ValentinePage variant={Variant::Classic} /> }
        },
        Route::Memories => {
            info!("Rendering memories page");
            html! { <ValentinePage variant={Variant::Memories} /> }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| PageConfig::load().map(Rc::new), ());

    match &*config {
        Ok(config) => html! {
            <ContextProvider<Rc<PageConfig>> context={config.clone()}>
                <Theme />
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<PageConfig>>>
        },
        Err(err) => {
            error!("{}", err);
            html! {
                <>
                    <Theme />
                    <FallbackGreeting />
                </>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
