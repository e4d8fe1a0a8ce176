mod components;
mod forms;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use routes::{Route, basename, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter basename={basename()}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    folio::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
