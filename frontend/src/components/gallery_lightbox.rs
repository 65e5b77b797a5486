use log::info;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::section_heading::SectionHeading;
use crate::config::PLACEHOLDER_IMAGE;
use crate::dom::listen_window;
use crate::lightbox::{key_action, GalleryItem, LightboxAction, LightboxState};

/// Grid spans repeat every six tiles.
pub fn mosaic_span(index: usize) -> &'static str {
    match index % 6 {
        0 => "tile-hero",
        1 => "tile-wide",
        2 => "tile-half",
        3 | 4 => "tile-third",
        _ => "tile-third-full",
    }
}

/// Tiles fade in one after another, capped so large galleries do not drag.
pub fn stagger_delay_ms(index: usize) -> usize {
    (index * 60).min(360)
}

pub fn is_placeholder(item: &GalleryItem) -> bool {
    item.src == PLACEHOLDER_IMAGE
}

#[derive(Properties, PartialEq)]
pub struct GalleryLightboxProps {
    #[prop_or_default]
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    pub items: &'static [GalleryItem],
}

#[function_component(GalleryLightbox)]
pub fn gallery_lightbox(props: &GalleryLightboxProps) -> Html {
    let state = use_reducer(LightboxState::closed);
    let is_open = state.is_open();

    // Arrow keys only while this instance is open.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = if *is_open {
                    listen_window("keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if let Some(action) = key_action(&event.key()) {
                            event.prevent_default();
                            dispatcher.dispatch(action);
                        }
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            is_open,
        );
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LightboxAction::Close))
    };
    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Next))
    };

    let items = props.items;
    let tiles = items.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| {
                info!("Opening gallery image {}", index);
                state.dispatch(LightboxAction::Open { items, index });
            })
        };
        let placeholder = is_placeholder(item);
        html! {
            <button
                key={item.caption}
                type="button"
                class={classes!("gallery-tile", mosaic_span(index))}
                style={format!("animation-delay: {}ms;", stagger_delay_ms(index))}
                aria-label={format!("Open image: {}", item.caption)}
                {onclick}
            >
                <img
                    src={item.src}
                    alt={item.alt}
                    loading="lazy"
                    class={classes!(placeholder.then_some("placeholder"))}
                />
                <div class="gallery-caption">
                    <span>{ item.caption }</span>
                    <span class="gallery-expand" aria-hidden="true">{"⤢"}</span>
                </div>
                {
                    if placeholder {
                        html! { <div class="gallery-badge">{"Upload photo"}</div> }
                    } else {
                        html! {}
                    }
                }
            </button>
        }
    });

    let active = state.active();
    let title = active.map(|item| item.caption).unwrap_or_default();

    html! {
        <div class="gallery surface">
            <SectionHeading
                class={classes!("gallery-heading")}
                eyebrow={props.eyebrow.clone()}
                title={props.title.clone()}
                description={props.description.clone()}
            />

            <div class="gallery-grid">
                { for tiles }
            </div>

            <Modal
                open={is_open}
                on_close={on_close}
                title={AttrValue::from(title)}
                description={Some(AttrValue::Static("Use the arrows (or your keyboard) to browse the gallery."))}
                close_on_escape={false}
                class={classes!("wide")}
            >
                <div class="lightbox-stage">
                    {
                        if let Some(item) = active {
                            html! { <img src={item.src} alt={item.alt} /> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if state.len() > 1 {
                            html! {
                                <div class="lightbox-controls">
                                    <button type="button" aria-label="Previous image" onclick={on_prev}>{"‹"}</button>
                                    <button type="button" aria-label="Next image" onclick={on_next}>{"›"}</button>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </Modal>

            <style>
                {r#"
                    .gallery {
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                    }
                    .gallery-heading {
                        max-width: 42rem;
                    }
                    .gallery-grid {
                        margin-top: 2rem;
                        display: grid;
                        grid-template-columns: repeat(12, minmax(0, 1fr));
                        grid-auto-rows: 120px;
                        gap: 1rem;
                    }
                    .gallery-tile {
                        position: relative;
                        overflow: hidden;
                        border: 1px solid #e2e8f0;
                        border-radius: 1rem;
                        background: #fff;
                        padding: 0;
                        cursor: pointer;
                        text-align: left;
                        animation: fadeIn 0.5s ease-out both;
                    }
                    .tile-hero { grid-column: span 12; grid-row: span 3; }
                    .tile-wide { grid-column: span 12; grid-row: span 2; }
                    .tile-half { grid-column: span 6; grid-row: span 2; }
                    .tile-third { grid-column: span 6; grid-row: span 2; }
                    .tile-third-full { grid-column: span 12; grid-row: span 2; }
                    @media (min-width: 640px) {
                        .tile-wide { grid-column: span 6; }
                        .tile-third, .tile-third-full { grid-column: span 4; }
                    }
                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.3s ease;
                    }
                    .gallery-tile img.placeholder {
                        object-fit: contain;
                        padding: 2.5rem;
                        background: rgba(224, 242, 254, 0.4);
                    }
                    .gallery-tile:hover img {
                        transform: scale(1.03);
                    }
                    .gallery-caption {
                        position: absolute;
                        inset: auto 0 0 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem 1rem;
                        background: rgba(255, 255, 255, 0.85);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .gallery-badge {
                        position: absolute;
                        top: 0.75rem;
                        left: 0.75rem;
                        border-radius: 999px;
                        padding: 0.25rem 0.75rem;
                        background: rgba(255, 255, 255, 0.85);
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    .lightbox-stage {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid #e2e8f0;
                    }
                    .lightbox-stage img {
                        width: 100%;
                        max-height: 70vh;
                        object-fit: contain;
                    }
                    .lightbox-controls {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem;
                        pointer-events: none;
                    }
                    .lightbox-controls button {
                        pointer-events: auto;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e2e8f0;
                        background: rgba(255, 255, 255, 0.9);
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mosaic_repeats_every_six_tiles() {
        for index in 0..6 {
            assert_eq!(mosaic_span(index), mosaic_span(index + 6));
        }
        assert_eq!(mosaic_span(0), "tile-hero");
        assert_eq!(mosaic_span(5), "tile-third-full");
    }

    #[test]
    fn stagger_is_capped() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 180);
        assert_eq!(stagger_delay_ms(6), 360);
        assert_eq!(stagger_delay_ms(40), 360);
    }

    #[test]
    fn placeholder_is_detected_by_source() {
        let item = GalleryItem { src: PLACEHOLDER_IMAGE, alt: "", caption: "Soon" };
        assert!(is_placeholder(&item));
        let real = GalleryItem { src: "/assets/clinic-facility.jpg", alt: "", caption: "Lobby" };
        assert!(!is_placeholder(&real));
    }
}
