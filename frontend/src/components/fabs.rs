use yew::prelude::*;

use crate::config::CLINIC;
use crate::forms::message::{chat_url, tel_href};

#[derive(Properties, PartialEq)]
pub struct ContactFabsProps {
    /// Also show the mobile call button.
    #[prop_or(true)]
    pub call: bool,
}

/// Floating WhatsApp button, plus a call button on narrow screens.
#[function_component(ContactFabs)]
pub fn contact_fabs(props: &ContactFabsProps) -> Html {
    let phone = CLINIC.primary_phone();

    html! {
        <>
            {
                if props.call {
                    html! {
                        <a class="fab fab-call" href={tel_href(phone)} aria-label={format!("Call now {}", phone)}>
                            {"Call Now"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }
            <a
                class="fab fab-whatsapp"
                href={chat_url(CLINIC.whatsapp)}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
            >
                {"WhatsApp"}
            </a>
            <style>
                {r#"
                    .fab {
                        position: fixed;
                        bottom: 1.25rem;
                        z-index: 40;
                        border-radius: 999px;
                        padding: 0.7rem 1.1rem;
                        font-size: 0.85rem;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 12px 24px rgba(15, 23, 42, 0.18);
                    }
                    .fab-call {
                        left: 1.25rem;
                        background: #0e7490;
                        color: #fff;
                    }
                    .fab-whatsapp {
                        right: 1.25rem;
                        background: #dcfce7;
                        color: #166534;
                    }
                    @media (min-width: 640px) {
                        .fab-call {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
