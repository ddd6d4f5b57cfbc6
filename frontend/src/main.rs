use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod components;
mod config;
mod pages;
mod session;

use config::AppConfig;
use session::SessionProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let config = AppConfig::from_env();
    match routes {
        Route::Home | Route::Login | Route::NotFound => {
            html! { <pages::login::LoginPage {config} /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());

    html! {
        <SessionProvider config={(*config).clone()}>
            <BrowserRouter>
                <div class="container">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Login page starting");
    yew::Renderer::<App>::new().render();
}
