use chrono::{Datelike, Local};
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::appointment_dialog::AppointmentDialog;
use crate::components::marquee::Marquee;
use crate::config::CLINIC;
use crate::content::LOGO_IMAGE;
use crate::dom::{listen_window, scroll_y};
use crate::forms::message::{chat_url, tel_href};
use crate::Route;

/// Header gains a shadow once the page has scrolled this far.
const SCROLLED_AFTER_PX: f64 = 24.0;

pub const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Technology, "Technology"),
    (Route::Gallery, "Gallery"),
    (Route::Contact, "Contact"),
];

fn ticker() -> Html {
    let [first, second] = CLINIC.phones;
    html! {
        <div class="ticker">
            <div class="container">
                <Marquee class={classes!("ticker-marquee")} duration_s={18}>
                    <span class="ticker-lead">{ format!("Call {}:", CLINIC.doctor) }</span>
                    <a href={tel_href(first)}>{ first }</a>
                    <span aria-hidden="true">{"•"}</span>
                    <a href={tel_href(second)}>{ second }</a>
                    <span aria-hidden="true">{"•"}</span>
                    <span>{ format!("WhatsApp {}", CLINIC.whatsapp_display()) }</span>
                </Marquee>
            </div>
        </div>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| scroll_y() > SCROLLED_AFTER_PX);
    let appointment_open = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = listen_window("scroll", move |_| {
                    is_scrolled.set(scroll_y() > SCROLLED_AFTER_PX);
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_appointment = {
        let menu_open = menu_open.clone();
        let appointment_open = appointment_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Opening appointment dialog from header");
            menu_open.set(false);
            appointment_open.set(true);
        })
    };

    let close_appointment = {
        let appointment_open = appointment_open.clone();
        Callback::from(move |_: ()| appointment_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let phone = CLINIC.primary_phone();

    html! {
        <>
            <header class={classes!("site-header", (*is_scrolled).then_some("scrolled"))}>
                { ticker() }
                <nav class="top-nav">
                    <div class="nav-content container">
                        <Link<Route> to={Route::Home} classes="nav-logo">
                            <img src={LOGO_IMAGE} alt={format!("{} logo", CLINIC.name)} />
                            <span class="nav-logo-text">
                                <strong>{ CLINIC.name.to_uppercase() }</strong>
                                <small>{"Pitampura, Delhi"}</small>
                            </span>
                        </Link<Route>>

                        <button class="burger-menu" aria-label="Open menu" aria-expanded={menu_open.to_string()} onclick={toggle_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>

                        <div class={menu_class}>
                            { for NAV_ITEMS.iter().map(|(target, label)| {
                                let active = route.as_ref() == Some(target);
                                html! {
                                    <div key={*label} onclick={close_menu.clone()}>
                                        <Link<Route> to={target.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                                            { *label }
                                        </Link<Route>>
                                    </div>
                                }
                            }) }
                            <div class="nav-actions">
                                <a class="btn btn-outline btn-sm" href={tel_href(phone)}>{"Call"}</a>
                                <a class="btn btn-soft btn-sm" href={chat_url(CLINIC.whatsapp)} target="_blank" rel="noopener noreferrer">
                                    {"WhatsApp"}
                                </a>
                                <button type="button" class="btn btn-primary btn-sm" onclick={open_appointment}>
                                    {"Book Appointment"}
                                </button>
                            </div>
                        </div>
                    </div>
                </nav>
            </header>
            <AppointmentDialog open={*appointment_open} on_close={close_appointment} />
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        inset: 0 0 auto 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid #e2e8f0;
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    }
                    .ticker {
                        background: rgba(224, 242, 254, 0.6);
                        border-bottom: 1px solid #e2e8f0;
                        padding: 0.4rem 0;
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    .ticker a {
                        color: inherit;
                    }
                    .ticker-lead {
                        font-weight: 500;
                        color: #0f172a;
                    }
                    .nav-content {
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                        color: inherit;
                    }
                    .nav-logo img {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        object-fit: cover;
                    }
                    .nav-logo-text {
                        display: flex;
                        flex-direction: column;
                        line-height: 1.1;
                    }
                    .nav-logo-text strong {
                        font-size: 0.8rem;
                        letter-spacing: -0.02em;
                    }
                    .nav-logo-text small {
                        font-size: 0.7rem;
                        color: #64748b;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #64748b;
                        text-decoration: none;
                    }
                    .nav-link.active,
                    .nav-link:hover {
                        color: #0f172a;
                    }
                    .nav-actions {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.6rem;
                        padding: 0.55rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 18px;
                        height: 2px;
                        background: #0f172a;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            position: fixed;
                            top: 6.5rem;
                            right: 0;
                            bottom: 0;
                            width: min(320px, 100%);
                            display: flex;
                            flex-direction: column;
                            align-items: stretch;
                            padding: 1.5rem;
                            background: #fff;
                            box-shadow: -12px 0 24px rgba(15, 23, 42, 0.1);
                        }
                        .nav-right.mobile-menu-open .nav-actions {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();
    let [first, second] = CLINIC.phones;

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="footer-name">{ CLINIC.name }</div>
                    <p class="muted">{ format!("{}. Established {}.", CLINIC.tagline, CLINIC.established) }</p>
                    <div class="footer-actions">
                        <a class="btn btn-outline btn-sm" href={tel_href(first)}>{"Call"}</a>
                        <a class="btn btn-soft btn-sm" href={chat_url(CLINIC.whatsapp)} target="_blank" rel="noopener noreferrer">
                            {"WhatsApp"}
                        </a>
                    </div>
                </div>
                <div>
                    <div class="footer-heading">{"Quick Links"}</div>
                    <div class="footer-links">
                        <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                        <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                        <Link<Route> to={Route::Technology}>{"Technology & Comfort"}</Link<Route>>
                    </div>
                </div>
                <div>
                    <div class="footer-heading">{"Visit Us"}</div>
                    <p class="muted">{ CLINIC.address_line }</p>
                    <p class="muted">{ first }<br />{ second }</p>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="container">
                    { format!("© {} {}. All rights reserved.", year, CLINIC.name) }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid #e2e8f0;
                        background: #fff;
                    }
                    .footer-grid {
                        display: grid;
                        gap: 2.5rem;
                        padding: 3.5rem 0;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .footer-name {
                        font-size: 1.1rem;
                        font-weight: 600;
                    }
                    .footer-heading {
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.75rem;
                    }
                    .footer-links {
                        display: grid;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-links a {
                        color: #64748b;
                        text-decoration: none;
                    }
                    .footer-actions {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .footer-bottom {
                        border-top: 1px solid #e2e8f0;
                        padding: 1.5rem 0;
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                "#}
            </style>
        </footer>
    }
}
