use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::appointment_dialog::AppointmentDialog;
use crate::components::cards::HighlightGrid;
use crate::components::faq::FaqList;
use crate::components::section_heading::SectionHeading;
use crate::components::testimonials::TestimonialsCarousel;
use crate::config::CLINIC;
use crate::content::{
    Outcome, FEATURES, FIRST_VISIT, HERO_IMAGE, HOME_FAQS, OUTCOMES, PORTRAIT_IMAGE,
    SERVICE_CATEGORIES, TESTIMONIALS, TRUST_BADGES, WHY_CHOOSE_US,
};
use crate::forms::message::{chat_url, tel_href};
use crate::meta::use_page_meta;
use crate::motion::counter::SlotCounter;
use crate::motion::reveal::Reveal;
use crate::Route;

const OUTCOME_DURATION_MS: u32 = 1400;

fn outcome_card(index: usize, outcome: &Outcome) -> Html {
    html! {
        <Reveal key={outcome.label} delay_ms={120 + index as u32 * 90}>
            <div class="outcome">
                <div class="outcome-value">
                    <SlotCounter
                        start={outcome.start()}
                        end={outcome.end}
                        step={outcome.step()}
                        duration_ms={OUTCOME_DURATION_MS}
                    />
                </div>
                <div class="muted">{ outcome.label }</div>
            </div>
        </Reveal>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(
        format!("{} | Pitampura, Delhi", CLINIC.name),
        Some("Bhasin Dental Clinic in Pitampura, Delhi: advanced, pain-free dental care since 2017. Book an appointment for preventive, cosmetic, restorative and sedation dentistry."),
    );
    let booking_open = use_state(|| false);

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening appointment dialog from home page");
            booking_open.set(true);
        })
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };

    let faqs: Vec<(AttrValue, AttrValue)> = HOME_FAQS
        .iter()
        .map(|faq| (AttrValue::Static(faq.q), AttrValue::Static(faq.a)))
        .collect();
    let phone = CLINIC.primary_phone();

    html! {
        <div class="page home">
            <section class="bg-hero">
                <div class="container hero-grid">
                    <Reveal>
                        <h1>{ CLINIC.name }</h1>
                        <p class="lead">{"Where Every Smile Is Treated With Care and Confidence"}</p>
                        <p class="muted">
                            { format!(
                                "{} is a trusted dental care provider in Pitampura, serving patients with dedication and expertise since {}. Led by {} (B.D.S., PGDHHM, MSR, MIDA), we deliver comfort\u{2011}first care with modern dental technology in a calm, welcoming environment.",
                                CLINIC.name, CLINIC.established, CLINIC.doctor
                            ) }
                        </p>
                        <div class="hero-actions">
                            <button type="button" class="btn btn-primary btn-lg" onclick={open_booking.clone()}>
                                {"Book Appointment →"}
                            </button>
                            <Link<Route> to={Route::About} classes="btn btn-outline btn-lg">{"Learn More"}</Link<Route>>
                        </div>
                        <div class="trust-badges">
                            { for TRUST_BADGES.iter().map(|badge| html! {
                                <div key={*badge} class="trust-badge">{"✦ "}{ *badge }</div>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal delay_ms={120}>
                        <div class="media-frame">
                            <img src={HERO_IMAGE} alt="Modern dental clinic interior" loading="eager" />
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="container section">
                <Reveal>
                    <div class="surface outcomes">
                        <div class="muted">{"Successfully Completed"}</div>
                        <h2>{"Proven outcomes, premium care"}</h2>
                        <div class="outcome-grid">
                            { for OUTCOMES.iter().enumerate().map(|(index, outcome)| outcome_card(index, outcome)) }
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="container section">
                <Reveal>
                    <div class="split">
                        <div class="media-frame">
                            <img src={PORTRAIT_IMAGE} alt={format!("{} portrait", CLINIC.doctor)} loading="lazy" />
                        </div>
                        <div>
                            <SectionHeading
                                eyebrow="About"
                                title={format!("Led by {}", CLINIC.doctor)}
                                description="Skilled cosmetic and laser dental surgeon known for a patient\u{2011}focused approach and commitment to excellence."
                            />
                            <p class="muted">
                                {"Every patient is treated with personalised attention because no two smiles are the same. Treatment plans are designed around individual dental needs, comfort levels, and long\u{2011}term oral health goals."}
                            </p>
                            <Link<Route> to={Route::About} classes="btn btn-outline">{"Read More"}</Link<Route>>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="Experience"
                        title="What to expect on your first visit"
                        description="A calm, guided process designed to reduce anxiety and deliver clarity before any treatment begins."
                    />
                </Reveal>
                <HighlightGrid items={FIRST_VISIT} class={classes!("cols-3")} />
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="Services"
                        title="Care for every smile"
                        description="Explore our core service categories, designed around comfort, longevity, and confidence."
                    />
                </Reveal>
                <div class="card-grid cols-4">
                    { for SERVICE_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                        <Reveal key={category.key} delay_ms={index as u32 * 80}>
                            <div class="surface card lift">
                                <div class="card-title">{ category.title }</div>
                                <p class="muted">{ category.description }</p>
                                <Link<Route> to={Route::Services} classes="btn btn-soft btn-sm">{"View Details"}</Link<Route>>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="Why choose us"
                        title="A calmer dental experience"
                        description="Advanced technology meets personalized care, built for trust and comfort."
                    />
                </Reveal>
                <HighlightGrid items={WHY_CHOOSE_US} class={classes!("cols-4")} />
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading eyebrow="Features" title="Everything under one roof" />
                </Reveal>
                <HighlightGrid items={FEATURES} class={classes!("cols-3")} />
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="Testimonials"
                        title="Loved by patients"
                        description="A small snapshot of the comfort-first experience we aim to deliver."
                    />
                </Reveal>
                <Reveal delay_ms={120}>
                    <TestimonialsCarousel items={TESTIMONIALS} />
                </Reveal>
            </section>

            <section class="container section">
                <Reveal>
                    <SectionHeading eyebrow="FAQs" title="Common questions" />
                </Reveal>
                <Reveal delay_ms={120}>
                    <div class="surface">
                        <FaqList items={faqs} />
                    </div>
                </Reveal>
            </section>

            <section class="bg-hero">
                <div class="container section">
                    <div class="surface cta">
                        <div>
                            <h2>{"Ready to schedule?"}</h2>
                            <p class="muted">
                                {"Share your preference and we\u{2019}ll confirm your appointment shortly. Click-to-call and WhatsApp are available for quick support."}
                            </p>
                        </div>
                        <div class="cta-actions">
                            <button type="button" class="btn btn-primary btn-lg" onclick={open_booking}>
                                {"Book Your Appointment"}
                            </button>
                            <a class="btn btn-outline btn-lg" href={tel_href(phone)}>{"Call Us Now"}</a>
                            <a class="btn btn-soft btn-lg" href={chat_url(CLINIC.whatsapp)} target="_blank" rel="noopener noreferrer">
                                {"WhatsApp"}
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <AppointmentDialog open={*booking_open} on_close={close_booking} />
        </div>
    }
}
