use yew::prelude::*;

use crate::components::form_fields::{
    error_text, on_blur, on_change, on_input, FormAction, FormField, FORM_STYLE,
};
use crate::components::toast::Toaster;
use crate::config::CLINIC;
use crate::content::SERVICE_OPTIONS;
use crate::forms::bridge::{submit, FormKind, NewTabLauncher};
use crate::forms::validate::{Field, FormState};

/// Inline enquiry form on the contact page.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(|| FormKind::Contact.new_form());
    let toaster = use_context::<Toaster>();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next: FormState = (*form).clone();
            let result = submit(FormKind::Contact, &CLINIC, &mut next, &NewTabLauncher);
            form.dispatch(FormAction::Replace(next));
            if let (Ok(_), Some(toaster)) = (result, &toaster) {
                toaster.acknowledge(FormKind::Contact);
            }
        })
    };

    let selected = form.value(Field::Service).to_string();
    let ready = form.is_submittable();

    html! {
        <form class="enquiry-form surface" novalidate=true {onsubmit}>
            <div class="form-row">
                <FormField id="contact-name" label="Name" error={error_text(&form, Field::Name)}>
                    <input
                        id="contact-name"
                        type="text"
                        autocomplete="name"
                        value={form.value(Field::Name).to_string()}
                        oninput={on_input(&form, Field::Name)}
                        onblur={on_blur(&form, Field::Name)}
                    />
                </FormField>
                <FormField id="contact-phone" label="Phone" error={error_text(&form, Field::Phone)}>
                    <input
                        id="contact-phone"
                        type="tel"
                        autocomplete="tel"
                        value={form.value(Field::Phone).to_string()}
                        oninput={on_input(&form, Field::Phone)}
                        onblur={on_blur(&form, Field::Phone)}
                    />
                </FormField>
            </div>
            <FormField id="contact-service" label="Service" error={error_text(&form, Field::Service)}>
                <select id="contact-service" onchange={on_change(&form, Field::Service)}>
                    <option value="" selected={selected.is_empty()} disabled=true>{"Select a service"}</option>
                    { for SERVICE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={selected == *option}>{ *option }</option>
                    }) }
                </select>
            </FormField>
            <FormField id="contact-message" label="Message" error={error_text(&form, Field::Message)}>
                <textarea
                    id="contact-message"
                    placeholder="Tell us what you need help with"
                    value={form.value(Field::Message).to_string()}
                    oninput={on_input(&form, Field::Message)}
                    onblur={on_blur(&form, Field::Message)}
                />
            </FormField>
            <div class="form-actions">
                <button type="submit" class={classes!("btn", "btn-primary", ready.then_some("ready"))}>
                    {"Send on WhatsApp"}
                </button>
            </div>
            <style>{ FORM_STYLE }</style>
        </form>
    }
}
