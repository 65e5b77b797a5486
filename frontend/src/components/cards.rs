use yew::prelude::*;

use crate::content::Highlight;
use crate::motion::reveal::Reveal;

/// Stagger between neighbouring cards in a revealed grid.
pub const CARD_STAGGER_MS: u32 = 80;

#[derive(Properties, PartialEq)]
pub struct HighlightGridProps {
    pub items: &'static [Highlight],
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HighlightGrid)]
pub fn highlight_grid(props: &HighlightGridProps) -> Html {
    html! {
        <div class={classes!("card-grid", props.class.clone())}>
            { for props.items.iter().enumerate().map(|(index, item)| html! {
                <Reveal key={item.title} delay_ms={index as u32 * CARD_STAGGER_MS}>
                    <div class="surface card">
                        <div class="card-title">{ item.title }</div>
                        <p class="muted">{ item.description }</p>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletListProps {
    pub items: &'static [&'static str],
}

#[function_component(BulletList)]
pub fn bullet_list(props: &BulletListProps) -> Html {
    html! {
        <ul class="bullets">
            { for props.items.iter().map(|item| html! { <li key={*item}>{ *item }</li> }) }
        </ul>
    }
}
