use shared::{Appointment, AppointmentRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UpdateAppointmentFormProps {
    /// The appointment being edited; the form pre-fills from it
    pub appointment: Appointment,
    pub on_submit: Callback<(i32, AppointmentRequest)>,
}

fn text_input_handler(state: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        state.set(input.value());
    })
}

/// Edit form for an existing appointment. Submission re-reads every field
/// into a full replacement record.
#[function_component(UpdateAppointmentForm)]
pub fn update_appointment_form(props: &UpdateAppointmentFormProps) -> Html {
    let full_name = use_state(|| props.appointment.full_name.clone());
    let email = use_state(|| props.appointment.email.clone());
    let phone_number = use_state(|| props.appointment.phone_number.clone());
    let vehicle_make = use_state(|| props.appointment.vehicle_make.clone());
    let vehicle_model = use_state(|| props.appointment.vehicle_model.clone());
    let vehicle_year = use_state(|| props.appointment.vehicle_year.to_string());
    let service_type = use_state(|| props.appointment.service_type.clone());
    let preferred_date = use_state(|| props.appointment.preferred_date.clone());
    let preferred_time = use_state(|| props.appointment.preferred_time.clone());
    let additional_notes = use_state(|| props.appointment.additional_notes.clone());
    let appointment_state = use_state(|| props.appointment.appointment_state.clone());

    let form_ref = use_node_ref();

    // Re-fill the fields whenever a different appointment is loaded
    {
        let full_name = full_name.clone();
        let email = email.clone();
        let phone_number = phone_number.clone();
        let vehicle_make = vehicle_make.clone();
        let vehicle_model = vehicle_model.clone();
        let vehicle_year = vehicle_year.clone();
        let service_type = service_type.clone();
        let preferred_date = preferred_date.clone();
        let preferred_time = preferred_time.clone();
        let additional_notes = additional_notes.clone();
        let appointment_state = appointment_state.clone();
        let form_ref = form_ref.clone();

        use_effect_with(props.appointment.clone(), move |appointment| {
            full_name.set(appointment.full_name.clone());
            email.set(appointment.email.clone());
            phone_number.set(appointment.phone_number.clone());
            vehicle_make.set(appointment.vehicle_make.clone());
            vehicle_model.set(appointment.vehicle_model.clone());
            vehicle_year.set(appointment.vehicle_year.to_string());
            service_type.set(appointment.service_type.clone());
            preferred_date.set(appointment.preferred_date.clone());
            preferred_time.set(appointment.preferred_time.clone());
            additional_notes.set(appointment.additional_notes.clone());
            appointment_state.set(appointment.appointment_state.clone());

            if let Some(element) = form_ref.cast::<web_sys::HtmlElement>() {
                element.scroll_into_view();
            }

            || ()
        });
    }

    let onsubmit = {
        let id = props.appointment.id;
        let full_name = full_name.clone();
        let email = email.clone();
        let phone_number = phone_number.clone();
        let vehicle_make = vehicle_make.clone();
        let vehicle_model = vehicle_model.clone();
        let vehicle_year = vehicle_year.clone();
        let service_type = service_type.clone();
        let preferred_date = preferred_date.clone();
        let preferred_time = preferred_time.clone();
        let additional_notes = additional_notes.clone();
        let appointment_state = appointment_state.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let request = AppointmentRequest {
                full_name: (*full_name).clone(),
                email: (*email).clone(),
                phone_number: (*phone_number).clone(),
                vehicle_make: (*vehicle_make).clone(),
                vehicle_model: (*vehicle_model).clone(),
                vehicle_year: (*vehicle_year).trim().parse().unwrap_or_default(),
                service_type: (*service_type).clone(),
                preferred_date: (*preferred_date).clone(),
                preferred_time: (*preferred_time).clone(),
                additional_notes: (*additional_notes).clone(),
                appointment_state: (*appointment_state).clone(),
            };
            on_submit.emit((id, request));
        })
    };

    html! {
        <section class="update-appointment-section">
            <h2>{"Update Appointment"}</h2>

            <form id="update-form" ref={form_ref} {onsubmit}>
                <div class="form-group">
                    <label for="update-appointment-id">{"ID:"}</label>
                    <input
                        type="text"
                        id="update-appointment-id"
                        value={props.appointment.id.to_string()}
                        readonly=true
                    />
                </div>

                <div class="form-group">
                    <label for="update-full-name">{"Full Name:"}</label>
                    <input
                        type="text"
                        id="update-full-name"
                        value={(*full_name).clone()}
                        onchange={text_input_handler(full_name.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-email">{"Email:"}</label>
                    <input
                        type="email"
                        id="update-email"
                        value={(*email).clone()}
                        onchange={text_input_handler(email.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-phone-number">{"Phone Number:"}</label>
                    <input
                        type="text"
                        id="update-phone-number"
                        value={(*phone_number).clone()}
                        onchange={text_input_handler(phone_number.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-vehicle-make">{"Vehicle Make:"}</label>
                    <input
                        type="text"
                        id="update-vehicle-make"
                        value={(*vehicle_make).clone()}
                        onchange={text_input_handler(vehicle_make.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-vehicle-model">{"Vehicle Model:"}</label>
                    <input
                        type="text"
                        id="update-vehicle-model"
                        value={(*vehicle_model).clone()}
                        onchange={text_input_handler(vehicle_model.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-vehicle-year">{"Vehicle Year:"}</label>
                    <input
                        type="number"
                        id="update-vehicle-year"
                        value={(*vehicle_year).clone()}
                        onchange={text_input_handler(vehicle_year.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-service-type">{"Service Type:"}</label>
                    <input
                        type="text"
                        id="update-service-type"
                        value={(*service_type).clone()}
                        onchange={text_input_handler(service_type.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-preferred-date">{"Preferred Date:"}</label>
                    <input
                        type="date"
                        id="update-preferred-date"
                        value={(*preferred_date).clone()}
                        onchange={text_input_handler(preferred_date.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-preferred-time">{"Preferred Time:"}</label>
                    <input
                        type="time"
                        id="update-preferred-time"
                        value={(*preferred_time).clone()}
                        onchange={text_input_handler(preferred_time.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-additional-notes">{"Additional Notes:"}</label>
                    <input
                        type="text"
                        id="update-additional-notes"
                        value={(*additional_notes).clone()}
                        onchange={text_input_handler(additional_notes.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="update-appointment-state">{"Appointment State:"}</label>
                    <input
                        type="text"
                        id="update-appointment-state"
                        value={(*appointment_state).clone()}
                        onchange={text_input_handler(appointment_state.clone())}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Save Changes"}</button>
            </form>
        </section>
    }
}
