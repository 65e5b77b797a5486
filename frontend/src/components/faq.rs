use yew::prelude::*;

/// Single-open accordion: opening one item closes the other, clicking the
/// open item collapses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            {
                if props.open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: Vec<(AttrValue, AttrValue)>,
}

/// Plain question and answer pairs in one accordion.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, (question, answer))| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| accordion.set(accordion.toggle(index)))
                };
                html! {
                    <FaqItem key={index} question={question.clone()} open={accordion.is_open(index)} {on_toggle}>
                        <p>{ answer.clone() }</p>
                    </FaqItem>
                }
            }) }
            <style>
                {r#"
                    .faq-item {
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem 0;
                        background: none;
                        border: none;
                        cursor: pointer;
                        text-align: left;
                        font-size: 0.95rem;
                        font-weight: 500;
                    }
                    .faq-answer {
                        padding-bottom: 1rem;
                        color: #64748b;
                        font-size: 0.9rem;
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
    fn only_one_item_is_open() {
        let accordion = Accordion::default().toggle(1);
        assert!(accordion.is_open(1));
        let accordion = accordion.toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn toggling_open_item_collapses() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert_eq!(accordion, Accordion::default());
    }
}
