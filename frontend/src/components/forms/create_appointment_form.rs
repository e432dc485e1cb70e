use shared::{AppointmentDraft, SlotKey};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateAppointmentFormProps {
    /// Slot picked in the schedule grid, if any
    pub selected_slot: Option<SlotKey>,
    pub on_submit: Callback<AppointmentDraft>,
}

fn text_input_handler(state: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        state.set(input.value());
    })
}

/// Booking form for a new appointment. Only the vehicle year is coerced
/// client-side; everything else is validated by the service.
#[function_component(CreateAppointmentForm)]
pub fn create_appointment_form(props: &CreateAppointmentFormProps) -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let phone_number = use_state(String::new);
    let vehicle_make = use_state(String::new);
    let vehicle_model = use_state(String::new);
    let vehicle_year = use_state(String::new);
    let service_type = use_state(String::new);
    let additional_notes = use_state(String::new);

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let phone_number = phone_number.clone();
        let vehicle_make = vehicle_make.clone();
        let vehicle_model = vehicle_model.clone();
        let vehicle_year = vehicle_year.clone();
        let service_type = service_type.clone();
        let additional_notes = additional_notes.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let draft = AppointmentDraft {
                full_name: (*full_name).clone(),
                email: (*email).clone(),
                phone_number: (*phone_number).clone(),
                vehicle_make: (*vehicle_make).clone(),
                vehicle_model: (*vehicle_model).clone(),
                vehicle_year: (*vehicle_year).trim().parse().unwrap_or_default(),
                service_type: (*service_type).clone(),
                additional_notes: (*additional_notes).clone(),
            };
            on_submit.emit(draft);
        })
    };

    html! {
        <section class="create-appointment-section">
            <h2>{"Book an Appointment"}</h2>

            <p class="selected-slot">
                {match props.selected_slot {
                    Some(slot) => format!("Selected slot: {}", slot),
                    None => "Pick an open time slot in the schedule above.".to_string(),
                }}
            </p>

            <form id="create-appointment-form" {onsubmit}>
                <div class="form-group">
                    <label for="full_name">{"Full Name:"}</label>
                    <input
                        type="text"
                        id="full_name"
                        name="full_name"
                        value={(*full_name).clone()}
                        onchange={text_input_handler(full_name.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email:"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={(*email).clone()}
                        onchange={text_input_handler(email.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="phone_number">{"Phone Number:"}</label>
                    <input
                        type="text"
                        id="phone_number"
                        name="phone_number"
                        value={(*phone_number).clone()}
                        onchange={text_input_handler(phone_number.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="vehicle_make">{"Vehicle Make:"}</label>
                    <input
                        type="text"
                        id="vehicle_make"
                        name="vehicle_make"
                        value={(*vehicle_make).clone()}
                        onchange={text_input_handler(vehicle_make.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="vehicle_model">{"Vehicle Model:"}</label>
                    <input
                        type="text"
                        id="vehicle_model"
                        name="vehicle_model"
                        value={(*vehicle_model).clone()}
                        onchange={text_input_handler(vehicle_model.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="vehicle_year">{"Vehicle Year:"}</label>
                    <input
                        type="number"
                        id="vehicle_year"
                        name="vehicle_year"
                        value={(*vehicle_year).clone()}
                        onchange={text_input_handler(vehicle_year.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="service_type">{"Service Type:"}</label>
                    <input
                        type="text"
                        id="service_type"
                        name="service_type"
                        value={(*service_type).clone()}
                        onchange={text_input_handler(service_type.clone())}
                    />
                </div>

                <div class="form-group">
                    <label for="additional_notes">{"Additional Notes:"}</label>
                    <input
                        type="text"
                        id="additional_notes"
                        name="additional_notes"
                        value={(*additional_notes).clone()}
                        onchange={text_input_handler(additional_notes.clone())}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Book Appointment"}</button>
            </form>
        </section>
    }
}
