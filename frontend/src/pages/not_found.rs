use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::meta::{page_title, use_page_meta};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_meta(page_title("Page not found"), None);
    let location = use_location();

    {
        let path = location.map(|location| location.path().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |path: &String| {
                warn!("No route for {}", path);
                || ()
            },
            path,
        );
    }

    html! {
        <div class="page not-found">
            <section class="container section centered">
                <p class="eyebrow">{"404"}</p>
                <h1>{"Oops! Page not found"}</h1>
                <p class="muted">{"The page you\u{2019}re looking for doesn\u{2019}t exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
            </section>
        </div>
    }
}
