use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Eyebrow, heading and lead paragraph. Empty parts are left out.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!("section-heading", props.class.clone())}>
            {
                if props.eyebrow.is_empty() {
                    html! {}
                } else {
                    html! { <div class="eyebrow">{ props.eyebrow.clone() }</div> }
                }
            }
            <h2>{ props.title.clone() }</h2>
            {
                if props.description.is_empty() {
                    html! {}
                } else {
                    html! { <p class="muted">{ props.description.clone() }</p> }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    pub lead: AttrValue,
}

/// Top-of-page banner for the inner pages.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <header class="page-hero bg-hero">
            <div class="container">
                <p class="eyebrow">{ props.eyebrow.clone() }</p>
                <h1>{ props.title.clone() }</h1>
                <p class="lead">{ props.lead.clone() }</p>
            </div>
        </header>
    }
}
