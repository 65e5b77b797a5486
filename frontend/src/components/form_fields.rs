use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::validate::{Field, FormState};

pub enum FormAction {
    Input(Field, String),
    Touch(Field),
    Preselect(Field, AttrValue),
    /// Swaps in the state returned by a submit attempt.
    Replace(FormState),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let FormAction::Replace(next) = action {
            return Rc::new(next);
        }
        let mut next = (*self).clone();
        match action {
            FormAction::Input(field, value) => next.set(field, value),
            FormAction::Touch(field) => next.touch(field),
            FormAction::Preselect(field, value) => next.preselect(field, &value),
            FormAction::Replace(_) => {}
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Current value of whichever form control fired `event`.
fn target_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

pub fn on_input(form: &UseReducerHandle<FormState>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = target_value(&e) {
            form.dispatch(FormAction::Input(field, value));
        }
    })
}

pub fn on_blur(form: &UseReducerHandle<FormState>, field: Field) -> Callback<FocusEvent> {
    let form = form.clone();
    Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Touch(field)))
}

/// Selects commit on change: the value is stored and checked at once.
pub fn on_change(form: &UseReducerHandle<FormState>, field: Field) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        if let Some(value) = target_value(&e) {
            form.dispatch(FormAction::Input(field, value));
            form.dispatch(FormAction::Touch(field));
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Label, control and inline error.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("invalid"), props.class.clone())}>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            { for props.children.iter() }
            {
                if let Some(error) = &props.error {
                    html! { <p class="field-error" role="alert">{ error.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub fn error_text(form: &FormState, field: Field) -> Option<AttrValue> {
    form.error(field).map(|error| AttrValue::from(error.to_string()))
}

pub const FORM_STYLE: &str = r#"
    .enquiry-form {
        display: grid;
        gap: 1rem;
    }
    .form-row {
        display: grid;
        gap: 1rem;
    }
    @media (min-width: 640px) {
        .form-row {
            grid-template-columns: 1fr 1fr;
        }
    }
    .form-field label {
        display: block;
        margin-bottom: 0.35rem;
        font-size: 0.85rem;
        font-weight: 500;
    }
    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.65rem 0.8rem;
        border: 1px solid #cbd5e1;
        border-radius: 0.75rem;
        font: inherit;
        background: #fff;
    }
    .form-field textarea {
        min-height: 6rem;
        resize: vertical;
    }
    .form-field.invalid input,
    .form-field.invalid select,
    .form-field.invalid textarea {
        border-color: #dc2626;
    }
    .field-error {
        margin: 0.3rem 0 0;
        font-size: 0.8rem;
        color: #dc2626;
    }
    .form-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
        align-items: center;
    }
    .form-note {
        font-size: 0.8rem;
        color: #64748b;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::bridge::FormKind;

    #[test]
    fn input_without_touch_shows_no_error() {
        let form = Rc::new(FormKind::Contact.new_form());
        let form = form.reduce(FormAction::Input(Field::Name, "A".to_string()));
        assert_eq!(form.value(Field::Name), "A");
        assert!(form.error(Field::Name).is_none());

        let form = form.reduce(FormAction::Touch(Field::Name));
        assert!(form.error(Field::Name).is_some());
    }

    #[test]
    fn preselect_validates_immediately() {
        let form = Rc::new(FormKind::Appointment.new_form());
        let form = form.reduce(FormAction::Preselect(Field::Service, AttrValue::Static("Sedation Dentistry")));
        assert_eq!(form.value(Field::Service), "Sedation Dentistry");
        assert!(form.error(Field::Service).is_none());
    }

    #[test]
    fn unchanged_state_is_reused() {
        let form = Rc::new(FormKind::Contact.new_form());
        let same = form.clone().reduce(FormAction::Input(Field::Email, "x".to_string()));
        assert!(Rc::ptr_eq(&form, &same));
    }

    #[test]
    fn error_text_uses_display_message() {
        let mut form = FormKind::Contact.new_form();
        form.touch(Field::Phone);
        assert_eq!(
            error_text(&form, Field::Phone).as_deref(),
            Some("Please enter a valid phone number")
        );
    }
}
