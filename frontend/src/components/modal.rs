use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom::{listen_window, ScrollLock};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Owners that bind their own key handling turn this off.
    #[prop_or(true)]
    pub close_on_escape: bool,
}

/// Dialog overlay. Locks page scroll while open and closes on backdrop click.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |(open, close_on_escape): &(bool, bool)| -> Box<dyn FnOnce()> {
                if !*open {
                    return Box::new(|| ());
                }
                let lock = ScrollLock::acquire();
                let escape = if *close_on_escape {
                    listen_window("keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            if event.key() == "Escape" {
                                on_close.emit(());
                            }
                        }
                    })
                } else {
                    None
                };
                Box::new(move || {
                    drop(escape);
                    drop(lock);
                })
            },
            (props.open, props.close_on_escape),
        );
    }

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class={classes!("modal-panel", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={keep_open}
            >
                <div class="modal-header">
                    <h2 class="modal-title">{ props.title.clone() }</h2>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="modal-description">{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close_button}>
                        {"×"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.55);
                        backdrop-filter: blur(4px);
                    }
                    .modal-panel {
                        position: relative;
                        width: 100%;
                        max-width: 36rem;
                        max-height: calc(100vh - 2rem);
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        box-shadow: 0 24px 48px rgba(15, 23, 42, 0.2);
                    }
                    .modal-panel.wide {
                        max-width: 56rem;
                    }
                    .modal-header {
                        margin-bottom: 1rem;
                        padding-right: 2.5rem;
                    }
                    .modal-title {
                        font-size: 1.35rem;
                        margin: 0;
                    }
                    .modal-description {
                        margin: 0.4rem 0 0;
                        color: #64748b;
                        font-size: 0.9rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        width: 2rem;
                        height: 2rem;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.6rem;
                        background: #fff;
                        cursor: pointer;
                        font-size: 1.1rem;
                    }
                "#}
            </style>
        </div>
    }
}
