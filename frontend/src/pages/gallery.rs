use log::debug;
use yew::prelude::*;

use crate::components::gallery_lightbox::GalleryLightbox;
use crate::components::section_heading::PageHero;
use crate::content::{GalleryCategory, GALLERY_CATEGORIES};
use crate::meta::{page_title, use_page_meta};

/// Category for a tab key, falling back to the first category.
pub fn category_for(key: &str) -> Option<&'static GalleryCategory> {
    GALLERY_CATEGORIES
        .iter()
        .find(|category| category.key == key)
        .or_else(|| GALLERY_CATEGORIES.first())
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    use_page_meta(
        page_title("Gallery"),
        Some("Explore photos of the clinic facility, technology, and team at Bhasin Dental Clinic in Pitampura, Delhi."),
    );
    let tab = use_state(|| "facility");

    let tabs = GALLERY_CATEGORIES.iter().map(|category| {
        let onclick = {
            let tab = tab.clone();
            let key = category.key;
            Callback::from(move |_: MouseEvent| {
                debug!("Gallery tab {}", key);
                tab.set(key);
            })
        };
        let active = *tab == category.key;
        html! {
            <button
                key={category.key}
                type="button"
                role="tab"
                aria-selected={active.to_string()}
                class={classes!("tab", active.then_some("active"))}
                {onclick}
            >
                { category.label }
            </button>
        }
    });

    html! {
        <div class="page gallery-page">
            <PageHero
                eyebrow="Gallery"
                title="Take a quick look inside"
                lead="Browse facility, technology and team photos. Tap any image to open it full-screen."
            />
            <section class="container section">
                <div class="tab-bar">
                    <span class="muted">{"Categories"}</span>
                    <div class="tabs" role="tablist">{ for tabs }</div>
                </div>
                {
                    if let Some(category) = category_for(*tab) {
                        html! {
                            <GalleryLightbox
                                key={category.key}
                                eyebrow={category.label}
                                title={format!("Photos: {}", category.label)}
                                description="You can replace placeholders with real clinic photos anytime."
                                items={category.items}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </section>
            <style>
                {r#"
                    .tab-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .tabs {
                        display: inline-flex;
                        gap: 0.25rem;
                        padding: 0.25rem;
                        border-radius: 0.75rem;
                        background: #f1f5f9;
                    }
                    .tab {
                        border: none;
                        background: none;
                        padding: 0.45rem 1rem;
                        border-radius: 0.6rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                        color: #64748b;
                    }
                    .tab.active {
                        background: #fff;
                        color: #0f172a;
                        box-shadow: 0 1px 3px rgba(15, 23, 42, 0.12);
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
    fn tabs_resolve_to_their_category() {
        assert_eq!(category_for("team").map(|c| c.label), Some("Team"));
    }

    #[test]
    fn unknown_tab_falls_back_to_first() {
        assert_eq!(category_for("lab").map(|c| c.key), Some("facility"));
    }
}
