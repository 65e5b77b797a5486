use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod lightbox;
mod meta;
mod motion {
    pub mod counter;
    pub mod format;
    pub mod frame;
    pub mod preference;
    pub mod reveal;
    pub mod spin;
    pub mod visibility;
}
mod forms {
    pub mod bridge;
    pub mod message;
    pub mod validate;
}
mod components {
    pub mod appointment_dialog;
    pub mod cards;
    pub mod contact_form;
    pub mod fabs;
    pub mod faq;
    pub mod form_fields;
    pub mod gallery_lightbox;
    pub mod layout;
    pub mod marquee;
    pub mod modal;
    pub mod section_heading;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod home;
    pub mod not_found;
    pub mod services;
    pub mod technology;
}

use components::{
    fabs::ContactFabs,
    layout::{SiteFooter, SiteHeader},
    toast::{Toast, ToastMessage, Toaster},
};
use motion::preference::MotionContext;
use pages::{
    about::About, contact::Contact, gallery::Gallery, home::Home, not_found::NotFound,
    services::Services, technology::Technology,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/technology")]
    Technology,
    #[at("/gallery")]
    Gallery,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Technology => {
            info!("Rendering Technology page");
            html! { <Technology /> }
        }
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <Gallery /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            warn!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const GLOBAL_STYLE: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: "Inter", system-ui, -apple-system, sans-serif;
        color: #0f172a;
        background: #f8fafc;
        line-height: 1.55;
    }
    h1, h2 {
        letter-spacing: -0.02em;
        line-height: 1.15;
    }
    h1 {
        font-size: clamp(2.2rem, 5vw, 3.1rem);
        margin: 0.5rem 0 0;
    }
    h2 {
        font-size: clamp(1.5rem, 3vw, 2rem);
        margin: 0.5rem 0 0;
    }
    img {
        max-width: 100%;
        display: block;
    }
    .container {
        width: 100%;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.25rem;
    }
    .site-main {
        padding-top: 6.5rem;
        min-height: 100vh;
    }
    .section {
        padding-top: 3.5rem;
        padding-bottom: 3.5rem;
    }
    .centered {
        text-align: center;
    }
    .bg-hero {
        background: radial-gradient(circle at 15% 20%, rgba(14, 116, 144, 0.12), transparent 55%),
            radial-gradient(circle at 85% 10%, rgba(224, 242, 254, 0.9), transparent 60%);
    }
    .page-hero {
        padding: 3.5rem 0;
    }
    .eyebrow {
        font-size: 0.85rem;
        font-weight: 500;
        color: #64748b;
    }
    .lead {
        max-width: 42rem;
        font-size: 1.1rem;
        color: #64748b;
    }
    .muted {
        color: #64748b;
        font-size: 0.9rem;
    }
    .surface {
        background: rgba(255, 255, 255, 0.85);
        border: 1px solid #e2e8f0;
        border-radius: 1.5rem;
        padding: 1.5rem;
        box-shadow: 0 12px 32px rgba(15, 23, 42, 0.06);
    }
    .section-heading {
        max-width: 42rem;
        margin-bottom: 2rem;
    }
    .hero-grid {
        display: grid;
        gap: 2.5rem;
        align-items: center;
        padding-top: 3.5rem;
        padding-bottom: 3.5rem;
    }
    .split {
        display: grid;
        gap: 2.5rem;
        align-items: center;
    }
    @media (min-width: 1024px) {
        .hero-grid, .split {
            grid-template-columns: 1fr 1fr;
        }
    }
    .media-frame {
        overflow: hidden;
        border-radius: 1.5rem;
        border: 1px solid #e2e8f0;
        background: #fff;
    }
    .media-frame img {
        width: 100%;
        height: 360px;
        object-fit: cover;
    }
    .media-frame.tall img {
        height: 420px;
    }
    .card-grid {
        display: grid;
        gap: 1.5rem;
    }
    @media (min-width: 768px) {
        .card-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }
        .card-grid.cols-4 { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 1024px) {
        .card-grid.cols-4 { grid-template-columns: repeat(4, 1fr); }
    }
    .card-grid.stack {
        margin-top: 1.5rem;
    }
    .card {
        height: 100%;
    }
    .card.lift {
        transition: transform 0.3s ease;
    }
    .card.lift:hover {
        transform: translateY(-4px);
    }
    .card-title {
        font-weight: 600;
        font-size: 0.95rem;
    }
    .bullets {
        margin: 0.75rem 0;
        padding-left: 1.1rem;
        color: #64748b;
        font-size: 0.9rem;
    }
    .trust-badges {
        margin-top: 2.5rem;
        display: grid;
        gap: 0.75rem;
    }
    @media (min-width: 640px) {
        .trust-badges { grid-template-columns: repeat(3, 1fr); }
    }
    .trust-badge {
        border: 1px solid #e2e8f0;
        border-radius: 1rem;
        padding: 0.75rem 1rem;
        background: rgba(255, 255, 255, 0.7);
        font-size: 0.875rem;
        font-weight: 500;
    }
    .hero-actions, .cta-actions {
        margin-top: 1.75rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .outcome-grid {
        margin-top: 1.5rem;
        display: grid;
        gap: 1rem;
    }
    @media (min-width: 768px) {
        .outcome-grid { grid-template-columns: repeat(3, 1fr); }
    }
    .outcome {
        border: 1px solid #e2e8f0;
        border-radius: 1rem;
        padding: 1.25rem;
        background: rgba(255, 255, 255, 0.7);
    }
    .outcome-value, .stat-value {
        font-size: 1.9rem;
        font-weight: 600;
    }
    .cta {
        display: grid;
        gap: 1.5rem;
        align-items: center;
    }
    .service-groups {
        display: grid;
        gap: 2.5rem;
    }
    .service-body {
        display: grid;
        gap: 1.25rem;
        padding-bottom: 1rem;
    }
    .service-faqs {
        display: grid;
        gap: 0.75rem;
    }
    .service-faq {
        border: 1px solid #e2e8f0;
        border-radius: 1rem;
        padding: 1rem;
    }
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.4rem;
        border-radius: 0.75rem;
        padding: 0.6rem 1.1rem;
        font: inherit;
        font-size: 0.9rem;
        font-weight: 500;
        text-decoration: none;
        cursor: pointer;
        border: 1px solid transparent;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .btn-sm { padding: 0.4rem 0.8rem; font-size: 0.8rem; }
    .btn-lg { padding: 0.8rem 1.4rem; font-size: 1rem; }
    .btn-primary {
        background: linear-gradient(135deg, #0e7490, #0891b2);
        color: #fff;
    }
    .btn-primary.ready {
        box-shadow: 0 8px 20px rgba(14, 116, 144, 0.35);
    }
    .btn-outline {
        background: #fff;
        border-color: #cbd5e1;
        color: #0f172a;
    }
    .btn-soft {
        background: #e0f2fe;
        color: #0e7490;
    }
    .reveal {
        opacity: 0;
        transform: translateY(1rem);
        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(0.5rem); }
        to { opacity: 1; transform: none; }
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            opacity: 1;
            transform: none;
            transition: none;
        }
        *, *::before, *::after {
            animation-duration: 0.01ms !important;
            animation-iteration-count: 1 !important;
        }
    }
"#;

#[function_component]
fn App() -> Html {
    let motion = use_memo(|_| MotionContext::from_media_query(), ());
    let toast = use_state(|| None::<ToastMessage>);
    let next_toast_id = use_mut_ref(|| 0u64);

    let toaster = {
        let toast = toast.clone();
        let toaster = use_memo(
            move |_| {
                Toaster(Callback::from(move |(title, description): (&'static str, &'static str)| {
                    let id = {
                        let mut next = next_toast_id.borrow_mut();
                        *next += 1;
                        *next
                    };
                    toast.set(Some(ToastMessage::new(id, title, description)));
                }))
            },
            (),
        );
        (*toaster).clone()
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <ContextProvider<MotionContext> context={(*motion).clone()}>
            <ContextProvider<Toaster> context={toaster}>
                <BrowserRouter>
                    <SiteHeader />
                    <main class="site-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <SiteFooter />
                    <ContactFabs />
                    <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
                </BrowserRouter>
            </ContextProvider<Toaster>>
            <style>{ GLOBAL_STYLE }</style>
        </ContextProvider<MotionContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
