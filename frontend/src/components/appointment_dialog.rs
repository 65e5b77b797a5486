use chrono::Local;
use log::debug;
use yew::prelude::*;

use crate::components::form_fields::{
    error_text, on_blur, on_change, on_input, FormAction, FormField, FORM_STYLE,
};
use crate::components::modal::Modal;
use crate::components::toast::Toaster;
use crate::config::CLINIC;
use crate::content::SERVICE_OPTIONS;
use crate::forms::bridge::{submit, FormKind, NewTabLauncher};
use crate::forms::message::tel_href;
use crate::forms::validate::{Field, FormState};

#[derive(Properties, PartialEq)]
pub struct AppointmentDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Service to preselect each time the dialog opens.
    #[prop_or_default]
    pub initial_service: Option<AttrValue>,
}

#[function_component(AppointmentDialog)]
pub fn appointment_dialog(props: &AppointmentDialogProps) -> Html {
    let form = use_reducer(|| FormKind::Appointment.new_form());
    let toaster = use_context::<Toaster>();

    {
        let form = form.clone();
        use_effect_with_deps(
            move |(open, service): &(bool, Option<AttrValue>)| {
                if let (true, Some(service)) = (*open, service.clone()) {
                    debug!("Preselecting {}", service);
                    form.dispatch(FormAction::Preselect(Field::Service, service));
                }
                || ()
            },
            (props.open, props.initial_service.clone()),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next: FormState = (*form).clone();
            let result = submit(FormKind::Appointment, &CLINIC, &mut next, &NewTabLauncher);
            form.dispatch(FormAction::Replace(next));
            if result.is_ok() {
                if let Some(toaster) = &toaster {
                    toaster.acknowledge(FormKind::Appointment);
                }
                on_close.emit(());
            }
        })
    };

    let today = Local::now().format("%Y-%m-%d").to_string();
    let phone = CLINIC.primary_phone();

    html! {
        <Modal
            open={props.open}
            on_close={props.on_close.clone()}
            title="Book an Appointment"
            description={Some(AttrValue::Static("Share a few details and we\u{2019}ll confirm your visit on WhatsApp."))}
        >
            <form class="enquiry-form" novalidate=true {onsubmit}>
                <div class="form-row">
                    <FormField id="appt-name" label="Full name" error={error_text(&form, Field::Name)}>
                        <input
                            id="appt-name"
                            type="text"
                            autocomplete="name"
                            value={form.value(Field::Name).to_string()}
                            oninput={on_input(&form, Field::Name)}
                            onblur={on_blur(&form, Field::Name)}
                        />
                    </FormField>
                    <FormField id="appt-phone" label="Phone" error={error_text(&form, Field::Phone)}>
                        <input
                            id="appt-phone"
                            type="tel"
                            autocomplete="tel"
                            placeholder="+91 98xxxxxxx"
                            value={form.value(Field::Phone).to_string()}
                            oninput={on_input(&form, Field::Phone)}
                            onblur={on_blur(&form, Field::Phone)}
                        />
                    </FormField>
                </div>
                <FormField id="appt-email" label="Email (optional)" error={error_text(&form, Field::Email)}>
                    <input
                        id="appt-email"
                        type="email"
                        autocomplete="email"
                        value={form.value(Field::Email).to_string()}
                        oninput={on_input(&form, Field::Email)}
                        onblur={on_blur(&form, Field::Email)}
                    />
                </FormField>
                <FormField id="appt-service" label="Service" error={error_text(&form, Field::Service)}>
                    <select id="appt-service" onchange={on_change(&form, Field::Service)}>
                        { for SERVICE_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={form.value(Field::Service) == *option}>{ *option }</option>
                        }) }
                    </select>
                </FormField>
                <div class="form-row">
                    <FormField id="appt-date" label="Preferred date">
                        <input
                            id="appt-date"
                            type="date"
                            min={today}
                            value={form.value(Field::PreferredDate).to_string()}
                            oninput={on_input(&form, Field::PreferredDate)}
                        />
                    </FormField>
                    <FormField id="appt-time" label="Preferred time">
                        <input
                            id="appt-time"
                            type="time"
                            value={form.value(Field::PreferredTime).to_string()}
                            oninput={on_input(&form, Field::PreferredTime)}
                        />
                    </FormField>
                </div>
                <FormField id="appt-message" label="Anything we should know?" error={error_text(&form, Field::Message)}>
                    <textarea
                        id="appt-message"
                        value={form.value(Field::Message).to_string()}
                        oninput={on_input(&form, Field::Message)}
                        onblur={on_blur(&form, Field::Message)}
                    />
                </FormField>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Send on WhatsApp"}</button>
                    <a class="btn btn-outline" href={tel_href(phone)}>{ format!("Call {}", phone) }</a>
                </div>
                <p class="form-note">{"We\u{2019}ll open WhatsApp with your details pre-filled. Nothing is stored on this site."}</p>
            </form>
            <style>{ FORM_STYLE }</style>
        </Modal>
    }
}
