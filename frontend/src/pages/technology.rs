use yew::prelude::*;

use crate::components::cards::HighlightGrid;
use crate::components::gallery_lightbox::GalleryLightbox;
use crate::components::section_heading::{PageHero, SectionHeading};
use crate::content::{TECHNOLOGY_GALLERY, TECHNOLOGY_IMAGE, TECH_ITEMS, TECH_PILLARS};
use crate::meta::{page_title, use_page_meta};
use crate::motion::reveal::Reveal;

#[function_component(Technology)]
pub fn technology() -> Html {
    use_page_meta(
        page_title("Technology & Comfort"),
        Some("Learn about the advanced technology, conscious sedation approach, and sterilization standards at Bhasin Dental Clinic, Pitampura."),
    );

    html! {
        <div class="page technology">
            <PageHero
                eyebrow="Technology & Comfort"
                title="Advanced care, designed for comfort"
                lead="We invest in modern systems and comfort-forward protocols so treatment feels smoother and more reassuring."
            />

            <section class="container section">
                <div class="split">
                    <Reveal>
                        <div class="media-frame">
                            <img src={TECHNOLOGY_IMAGE} alt="Advanced dental technology equipment used at the clinic" loading="lazy" />
                        </div>
                    </Reveal>
                    <div>
                        <Reveal>
                            <SectionHeading
                                eyebrow="Advanced equipment"
                                title="Modern tools for precise, efficient treatment"
                                description="Better diagnostics and planning help reduce uncertainty and improve outcomes."
                            />
                        </Reveal>
                        <HighlightGrid items={TECH_ITEMS} class={classes!("stack")} />
                    </div>
                </div>
            </section>

            <section class="container section">
                <HighlightGrid items={TECH_PILLARS} class={classes!("cols-3")} />
            </section>

            <section class="container section">
                <GalleryLightbox
                    eyebrow="Gallery"
                    title="See the space, feel the comfort"
                    description="A clean clinic and modern equipment, designed to make treatment feel calmer."
                    items={TECHNOLOGY_GALLERY}
                />
            </section>
        </div>
    }
}
