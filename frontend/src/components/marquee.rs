use yew::prelude::*;

use crate::motion::preference::use_reduced_motion;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds per full loop.
    #[prop_or(18)]
    pub duration_s: u32,
    #[prop_or(true)]
    pub pause_on_hover: bool,
}

/// Right-to-left scrolling strip. The content is rendered twice so the loop
/// has no visible seam; the copy is hidden from assistive tech.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let reduced = use_reduced_motion();
    let track_style = if reduced {
        "animation: none;".to_string()
    } else {
        format!("animation-duration: {}s;", props.duration_s)
    };

    html! {
        <div class={classes!("marquee", props.pause_on_hover.then_some("pausable"), props.class.clone())}>
            <div class="marquee-track" style={track_style}>
                <div class="marquee-group">{ for props.children.iter() }</div>
                <div class="marquee-group" aria-hidden="true">{ for props.children.iter() }</div>
            </div>
            <style>
                {r#"
                    .marquee {
                        position: relative;
                        overflow: hidden;
                        mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
                    }
                    .marquee-track {
                        display: flex;
                        width: max-content;
                        gap: 0.75rem;
                        animation: marquee 18s linear infinite;
                    }
                    .marquee.pausable:hover .marquee-track {
                        animation-play-state: paused;
                    }
                    .marquee-group {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        white-space: nowrap;
                    }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(calc(-50% - 0.375rem)); }
                    }
                "#}
            </style>
        </div>
    }
}
