use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content::Testimonial;
use crate::lightbox::step_index;
use crate::motion::preference::use_reduced_motion;

pub const AUTOPLAY_MS: u32 = 5500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Next,
    Prev,
}

/// Looping slide position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide(self, direction: Slide) -> Self {
        let delta = match direction {
            Slide::Next => 1,
            Slide::Prev => -1,
        };
        Self { index: step_index(self.index, delta, self.len), len: self.len }
    }

    /// Whether the carousel advances on its own.
    pub fn autoplays(&self, reduced_motion: bool) -> bool {
        self.len > 1 && !reduced_motion
    }
}

fn stars(count: u8) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", count)}>
            { for (0..count).map(|_| html! { <span aria-hidden="true">{"★"}</span> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: &'static [Testimonial],
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel(props: &TestimonialsProps) -> Html {
    let reduced = use_reduced_motion();
    let carousel = use_state(|| Carousel::new(props.items.len()));
    let autoplay = carousel.autoplays(reduced);

    // Latest position, read by the autoplay interval.
    let position = use_mut_ref(|| *carousel);
    *position.borrow_mut() = *carousel;

    {
        let carousel = carousel.clone();
        let position = position.clone();
        use_effect_with_deps(
            move |autoplay: &bool| {
                let interval = autoplay.then(|| {
                    Interval::new(AUTOPLAY_MS, move || {
                        let next = position.borrow().slide(Slide::Next);
                        *position.borrow_mut() = next;
                        carousel.set(next);
                    })
                });
                move || drop(interval)
            },
            autoplay,
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.slide(Slide::Prev)))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.slide(Slide::Next)))
    };

    let track_style = format!(
        "transform: translateX(-{}%);{}",
        carousel.index() * 100,
        if reduced { " transition: none;" } else { "" }
    );

    html! {
        <div class="testimonials">
            <div class="testimonials-window">
                <div class="testimonials-track" style={track_style}>
                    { for props.items.iter().map(|t| html! {
                        <figure key={t.name} class="testimonial">
                            { stars(t.rating) }
                            <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
                            <figcaption>{ t.name }</figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            <div class="testimonials-controls">
                <button type="button" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                <button type="button" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
            </div>
            <style>
                {r#"
                    .testimonials-window {
                        overflow: hidden;
                    }
                    .testimonials-track {
                        display: flex;
                        transition: transform 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .testimonial {
                        flex: 0 0 100%;
                        margin: 0;
                        padding: 1.5rem;
                        border: 1px solid #e2e8f0;
                        border-radius: 1.5rem;
                        background: #fff;
                    }
                    .testimonial blockquote {
                        margin: 1rem 0 0;
                        color: #64748b;
                        font-size: 0.95rem;
                    }
                    .testimonial figcaption {
                        margin-top: 1.25rem;
                        font-weight: 500;
                    }
                    .stars {
                        color: #f59e0b;
                        letter-spacing: 0.15rem;
                    }
                    .testimonials-controls {
                        margin-top: 1.5rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .testimonials-controls button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 999px;
                        border: 1px solid #e2e8f0;
                        background: #fff;
                        font-size: 1.4rem;
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
    fn loops_in_both_directions() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.slide(Slide::Prev).index(), 2);
        let around = carousel.slide(Slide::Next).slide(Slide::Next).slide(Slide::Next);
        assert_eq!(around.index(), 0);
    }

    #[test]
    fn autoplay_needs_motion_and_more_than_one_slide() {
        assert!(Carousel::new(3).autoplays(false));
        assert!(!Carousel::new(3).autoplays(true));
        assert!(!Carousel::new(1).autoplays(false));
    }
}
