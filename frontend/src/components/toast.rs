use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::forms::bridge::FormKind;

pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u64,
    pub title: AttrValue,
    pub description: AttrValue,
}

impl ToastMessage {
    pub fn new(id: u64, title: &'static str, description: &'static str) -> Self {
        Self {
            id,
            title: AttrValue::Static(title),
            description: AttrValue::Static(description),
        }
    }
}

/// Shows a toast from anywhere below the provider.
#[derive(Clone, PartialEq)]
pub struct Toaster(pub Callback<(&'static str, &'static str)>);

impl Toaster {
    pub fn acknowledge(&self, kind: FormKind) {
        self.0.emit(kind.acknowledgment());
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
    #[prop_or(TOAST_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        // Keyed on the id so a new toast restarts the countdown.
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let timeout = id.map(|_| Timeout::new(duration_ms, move || on_dismiss.emit(())));
                move || drop(timeout)
            },
            props.message.as_ref().map(|message| message.id),
        );
    }

    let Some(message) = &props.message else {
        return html! {};
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast" role="status" aria-live="polite">
            <div class="toast-body">
                <div class="toast-title">{ message.title.clone() }</div>
                <div class="toast-description">{ message.description.clone() }</div>
            </div>
            <button type="button" class="toast-close" aria-label="Dismiss" onclick={dismiss}>{"×"}</button>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.25rem;
                        bottom: 5.5rem;
                        z-index: 70;
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        max-width: 22rem;
                        padding: 1rem 1.25rem;
                        border-radius: 1rem;
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        box-shadow: 0 16px 32px rgba(15, 23, 42, 0.15);
                        animation: slideIn 0.4s ease-out;
                    }
                    .toast-title {
                        font-weight: 600;
                        font-size: 0.95rem;
                    }
                    .toast-description {
                        margin-top: 0.25rem;
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    .toast-close {
                        border: none;
                        background: none;
                        cursor: pointer;
                        font-size: 1.1rem;
                        color: #64748b;
                    }
                    @keyframes slideIn {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toaster_forwards_form_acknowledgments() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();
        let toaster = Toaster(Callback::from(move |(title, _): (&'static str, &'static str)| {
            sink.borrow_mut().push(title);
        }));

        toaster.acknowledge(FormKind::Appointment);
        toaster.acknowledge(FormKind::Contact);
        assert_eq!(*shown.borrow(), vec!["Appointment request received", "Ready to send"]);
    }

    #[test]
    fn messages_with_new_ids_differ() {
        let first = ToastMessage::new(1, "Saved", "Done");
        let second = ToastMessage::new(2, "Saved", "Done");
        assert_ne!(first, second);
        assert_eq!(&*first.title, "Saved");
    }
}
