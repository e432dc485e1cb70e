use shared::Appointment;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppointmentListProps {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub on_update_click: Callback<Appointment>,
    pub on_delete_click: Callback<i32>,
}

/// The administrator's appointment list, cleared and rebuilt on each refresh.
#[function_component(AppointmentList)]
pub fn appointment_list(props: &AppointmentListProps) -> Html {
    if props.loading {
        return html! {
            <div id="appointments-list">
                <div class="loading">{"Loading appointments..."}</div>
            </div>
        };
    }

    html! {
        <div id="appointments-list">
            {for props.appointments.iter().map(|appointment| {
                let on_update = {
                    let on_update_click = props.on_update_click.clone();
                    let appointment = appointment.clone();
                    Callback::from(move |_: MouseEvent| on_update_click.emit(appointment.clone()))
                };
                let on_delete = {
                    let on_delete_click = props.on_delete_click.clone();
                    let id = appointment.id;
                    Callback::from(move |_: MouseEvent| on_delete_click.emit(id))
                };

                html! {
                    <div class="appointment-item">
                        <p><strong>{"ID: "}</strong>{appointment.id}</p>
                        <p><strong>{"Full Name: "}</strong>{&appointment.full_name}</p>
                        <p><strong>{"Email: "}</strong>{&appointment.email}</p>
                        <p><strong>{"Phone Number: "}</strong>{&appointment.phone_number}</p>
                        <p><strong>{"Vehicle Make: "}</strong>{&appointment.vehicle_make}</p>
                        <p><strong>{"Vehicle Model: "}</strong>{&appointment.vehicle_model}</p>
                        <p><strong>{"Vehicle Year: "}</strong>{appointment.vehicle_year}</p>
                        <p><strong>{"Service Type: "}</strong>{&appointment.service_type}</p>
                        <p><strong>{"Preferred Date: "}</strong>{&appointment.preferred_date}</p>
                        <p><strong>{"Preferred Time: "}</strong>{&appointment.preferred_time}</p>
                        <p><strong>{"Additional Notes: "}</strong>{&appointment.additional_notes}</p>
                        <p><strong>{"Creation Date: "}</strong>{&appointment.creation_date}</p>
                        <p><strong>{"Appointment State: "}</strong>{&appointment.appointment_state}</p>
                        <button class="update-appointment-btn" onclick={on_update}>{"Update"}</button>
                        <button class="delete-appointment-btn" onclick={on_delete}>{"Delete"}</button>
                    </div>
                }
            })}
        </div>
    }
}
