use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::section_heading::{PageHero, SectionHeading};
use crate::config::CLINIC;
use crate::content::HOURS;
use crate::forms::message::{chat_url, map_embed_url, tel_href};
use crate::meta::{page_title, use_page_meta};
use crate::motion::reveal::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_meta(
        page_title("Contact"),
        Some("Contact Bhasin Dental Clinic in Pitampura, Delhi. View location, hours, and request an appointment via WhatsApp."),
    );
    let [first, second] = CLINIC.phones;

    html! {
        <div class="page contact">
            <PageHero
                eyebrow="Contact"
                title="Visit us or request an appointment"
                lead="Call, WhatsApp, or send a quick request. Our team will confirm the best time."
            />
            <section class="container section split">
                <div>
                    <Reveal>
                        <SectionHeading
                            eyebrow="Location"
                            title={format!("Find {}", CLINIC.name)}
                            description="We\u{2019}re located in Pitampura, Delhi: easy to reach and patient-friendly."
                        />
                    </Reveal>
                    <div class="surface map-card">
                        <iframe
                            class="map-frame"
                            title={format!("{} location on Google Maps", CLINIC.name)}
                            src={map_embed_url(CLINIC.address_line)}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        />
                        <div class="map-details">
                            <div>
                                <div class="card-title">{"Address"}</div>
                                <p class="muted">{ CLINIC.address_line }</p>
                            </div>
                            <div>
                                <div class="card-title">{"Clinic hours"}</div>
                                { for HOURS.iter().map(|(day, time)| html! {
                                    <div key={*day} class="hours-row">
                                        <span class="hours-day">{ *day }</span>
                                        <span class="muted">{ *time }</span>
                                    </div>
                                }) }
                            </div>
                            <div>
                                <div class="card-title">{"Phone"}</div>
                                <p class="muted">
                                    <a href={tel_href(first)}>{ first }</a>
                                    <br />
                                    <a href={tel_href(second)}>{ second }</a>
                                </p>
                            </div>
                            <div class="form-actions">
                                <a class="btn btn-outline" href={tel_href(first)}>{"Call"}</a>
                                <a class="btn btn-soft" href={chat_url(CLINIC.whatsapp)} target="_blank" rel="noopener noreferrer">
                                    {"WhatsApp"}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
                <div>
                    <Reveal>
                        <SectionHeading
                            eyebrow="Request form"
                            title="Send a quick request"
                            description="Fill in the form and WhatsApp opens with your message pre-filled."
                        />
                    </Reveal>
                    <ContactForm />
                </div>
            </section>
            <style>
                {r#"
                    .map-card {
                        padding: 0;
                        overflow: hidden;
                    }
                    .map-frame {
                        width: 100%;
                        aspect-ratio: 16 / 10;
                        border: 0;
                    }
                    .map-details {
                        display: grid;
                        gap: 1.25rem;
                        padding: 1.5rem;
                    }
                    .hours-row {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.875rem;
                    }
                    .hours-day {
                        width: 6rem;
                    }
                "#}
            </style>
        </div>
    }
}
