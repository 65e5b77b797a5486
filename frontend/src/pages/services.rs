use log::info;
use yew::prelude::*;

use crate::components::appointment_dialog::AppointmentDialog;
use crate::components::cards::BulletList;
use crate::components::faq::{Accordion, FaqItem};
use crate::components::section_heading::{PageHero, SectionHeading};
use crate::config::CLINIC;
use crate::content::{
    service_catalogue, ServiceDetail, ServiceGroup, DENTAL_TREATMENTS, DIAGNOSTIC_TESTS,
    SERVICE_CATEGORIES,
};
use crate::forms::message::service_enquiry_url;
use crate::meta::{page_title, use_page_meta};
use crate::motion::reveal::Reveal;

fn service_body(service: &ServiceDetail) -> Html {
    html! {
        <div class="service-body">
            <p class="muted">{ &service.summary }</p>
            <div class="split">
                <div>
                    <div class="card-title">{"Guided process"}</div>
                    <ol class="bullets">
                        { for service.process.iter().map(|step| html! { <li key={step.clone()}>{ step }</li> }) }
                    </ol>
                </div>
                <div>
                    <div class="card-title">{"Benefits"}</div>
                    <ul class="bullets">
                        { for service.benefits.iter().map(|benefit| html! { <li key={benefit.clone()}>{ benefit }</li> }) }
                    </ul>
                </div>
            </div>
            <div class="card-title">{"FAQs"}</div>
            <div class="service-faqs">
                { for service.faqs.iter().map(|faq| html! {
                    <div key={faq.q.clone()} class="service-faq">
                        <div class="card-title">{ &faq.q }</div>
                        <p class="muted">{ &faq.a }</p>
                    </div>
                }) }
            </div>
            <div class="form-actions">
                <a
                    class="btn btn-primary"
                    href={service_enquiry_url(&CLINIC, &service.title)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"WhatsApp for next steps →"}
                </a>
                <span class="form-note">{"Comfort-first planning • Clear next steps"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceGroupPanelProps {
    group: &'static ServiceGroup,
}

#[function_component(ServiceGroupPanel)]
fn service_group_panel(props: &ServiceGroupPanelProps) -> Html {
    let accordion = use_state(Accordion::default);
    let group = props.group;

    html! {
        <section class="surface service-group">
            <h2>{ &group.title }</h2>
            <p class="muted">{ &group.description }</p>
            { for group.services.iter().enumerate().map(|(index, service)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                };
                html! {
                    <FaqItem
                        key={service.key.clone()}
                        question={service.title.clone()}
                        open={accordion.is_open(index)}
                        {on_toggle}
                    >
                        { service_body(service) }
                    </FaqItem>
                }
            }) }
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_page_meta(
        page_title("Services"),
        Some("Explore dental treatments and diagnostic support at Bhasin Dental Clinic in Pitampura, Delhi."),
    );
    let booking = use_state(|| None::<AttrValue>);

    let close_booking = {
        let booking = booking.clone();
        Callback::from(move |_: ()| booking.set(None))
    };

    let catalogue = service_catalogue();

    html! {
        <div class="page services">
            <PageHero
                eyebrow="Services"
                title="Comprehensive care, from routine to advanced"
                lead="Modern dentistry with clear recommendations and comfort-first planning."
            />

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="At a glance"
                        title="Core categories"
                        description="Pick a category to book straight away, or read the details below."
                    />
                </Reveal>
                <div class="card-grid cols-4">
                    { for SERVICE_CATEGORIES.iter().enumerate().map(|(index, category)| {
                        let onclick = {
                            let booking = booking.clone();
                            let title = category.title;
                            Callback::from(move |_: MouseEvent| {
                                info!("Booking {} from services page", title);
                                booking.set(Some(AttrValue::Static(title)));
                            })
                        };
                        html! {
                            <Reveal key={category.key} delay_ms={index as u32 * 80}>
                                <div class="surface card">
                                    <div class="card-title">{ category.title }</div>
                                    <p class="muted">{ category.description }</p>
                                    <BulletList items={category.bullets} />
                                    <button type="button" class="btn btn-soft btn-sm" {onclick}>{"Book this service"}</button>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section class="container section">
                <div class="split">
                    <Reveal>
                        <div class="surface card">
                            <div class="card-title">{"Dental treatments available"}</div>
                            <BulletList items={DENTAL_TREATMENTS} />
                        </div>
                    </Reveal>
                    <Reveal delay_ms={90}>
                        <div class="surface card">
                            <div class="card-title">{"Diagnostic and medical tests"}</div>
                            <BulletList items={DIAGNOSTIC_TESTS} />
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="container section">
                <SectionHeading
                    eyebrow="What we offer"
                    title="Service details"
                    description="Each service includes a guided process, benefits, and a clear next step."
                />
                {
                    if catalogue.is_empty() {
                        html! {
                            <p class="muted">{"Service details are unavailable right now. Call or message us on WhatsApp for help."}</p>
                        }
                    } else {
                        html! {
                            <div class="service-groups">
                                { for catalogue.iter().map(|group| html! {
                                    <ServiceGroupPanel key={group.key.clone()} {group} />
                                }) }
                            </div>
                        }
                    }
                }
            </section>

            <AppointmentDialog
                open={booking.is_some()}
                on_close={close_booking}
                initial_service={(*booking).clone()}
            />
        </div>
    }
}
