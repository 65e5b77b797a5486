use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::cards::{BulletList, HighlightGrid};
use crate::components::gallery_lightbox::GalleryLightbox;
use crate::components::section_heading::{PageHero, SectionHeading};
use crate::config::CLINIC;
use crate::content::{ABOUT_GALLERY, ABOUT_VALUES, FACILITY_IMAGE, FACILITY_POINTS, PORTRAIT_IMAGE, TIMELINE};
use crate::meta::{page_title, use_page_meta};
use crate::motion::reveal::Reveal;
use crate::motion::spin::SpinCounter;

/// Whole years of practice, never negative.
pub fn years_in_practice(established: i32, current_year: i32) -> i64 {
    i64::from((current_year - established).max(0))
}

#[function_component(About)]
pub fn about() -> Html {
    use_page_meta(
        page_title("About"),
        Some("Learn about Bhasin Dental Clinic in Pitampura, Delhi: our story, philosophy, and Dr. Damini Bhasin\u{2019}s patient-centered approach."),
    );
    let years = years_in_practice(CLINIC.established, Local::now().year());

    html! {
        <div class="page about">
            <PageHero
                eyebrow="About"
                title="Warm, modern dentistry built on trust"
                lead="We combine advanced technology with an empathetic, comfort-first approach so you feel informed, safe, and in control."
            />

            <section class="container section">
                <Reveal>
                    <SectionHeading
                        eyebrow="Our story"
                        title={format!("Established excellence since {}", CLINIC.established)}
                        description="A simple promise: gentle care, clear guidance, and outcomes you can trust."
                    />
                </Reveal>
                <div class="card-grid cols-3">
                    { for TIMELINE.iter().enumerate().map(|(index, milestone)| html! {
                        <Reveal key={milestone.year} delay_ms={index as u32 * 90}>
                            <div class="surface card">
                                <div class="muted">{ milestone.year }</div>
                                <div class="card-title">{ milestone.title }</div>
                                <p class="muted">{ milestone.description }</p>
                            </div>
                        </Reveal>
                    }) }
                    <Reveal delay_ms={TIMELINE.len() as u32 * 90}>
                        <div class="surface card stat-card" tabindex="0">
                            <div class="stat-value">
                                <SpinCounter value={years} />
                            </div>
                            <p class="muted">{"Years of comfort-first care in Pitampura"}</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="container section">
                <div class="split">
                    <div>
                        <Reveal>
                            <SectionHeading
                                eyebrow="Meet your dentist"
                                title={CLINIC.doctor}
                                description="A calm, meticulous approach paired with modern protocols designed for comfort."
                            />
                        </Reveal>
                        <HighlightGrid items={ABOUT_VALUES} class={classes!("stack")} />
                    </div>
                    <Reveal delay_ms={120}>
                        <div class="media-frame tall">
                            <img src={PORTRAIT_IMAGE} alt={format!("Professional portrait of {}", CLINIC.doctor)} loading="lazy" />
                        </div>
                        <p class="muted">
                            {"\u{201c}Your comfort is our priority\u{201d}, from anxiety-friendly planning to pain-minimized techniques."}
                        </p>
                    </Reveal>
                </div>
            </section>

            <section class="container section">
                <Reveal>
                    <div class="split">
                        <div class="media-frame">
                            <img src={FACILITY_IMAGE} alt={format!("{} reception and waiting area", CLINIC.name)} loading="lazy" />
                        </div>
                        <div>
                            <SectionHeading
                                eyebrow="Our facility"
                                title="Clean, modern, and built for comfort"
                                description="A calm environment, modern treatment rooms, and an experience designed to make visits easier."
                            />
                            <BulletList items={FACILITY_POINTS} />
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="container section">
                <GalleryLightbox
                    eyebrow="Gallery"
                    title="A quick look inside the clinic"
                    description="Tap any image to open it full-screen."
                    items={ABOUT_GALLERY}
                />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_count_from_establishment() {
        assert_eq!(years_in_practice(2017, 2026), 9);
        assert_eq!(years_in_practice(2017, 2017), 0);
    }

    #[test]
    fn clock_skew_never_goes_negative() {
        assert_eq!(years_in_practice(2017, 2001), 0);
    }
}
