mod components;
mod hooks;
mod services;

use shared::{Appointment, AppointmentDraft, AppointmentRequest, SlotKey};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::{
    AppointmentList, CreateAppointmentForm, ScheduleTable, UpdateAppointmentForm, WeekSelector,
};
use hooks::{use_appointments, use_schedule};
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let appointments = use_appointments(&api_client);
    let schedule = use_schedule();

    // The single pending booking candidate; a new grid click overwrites it
    let selected_slot = use_state(|| Option::<SlotKey>::None);
    // Appointment loaded into the update form, if any
    let editing = use_state(|| Option::<Appointment>::None);

    // Load the appointment list once on startup
    use_effect_with((), {
        let refresh = appointments.actions.refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let on_slot_click = {
        let selected_slot = selected_slot.clone();
        Callback::from(move |slot: SlotKey| {
            if *selected_slot == Some(slot) {
                Logger::info_with_component("schedule", "Reservation cleared");
                selected_slot.set(None);
            } else {
                Logger::info_with_component("schedule", &format!("Reserved on {}", slot));
                selected_slot.set(Some(slot));
            }
        })
    };

    let on_create = {
        let api_client = api_client.clone();
        let refresh = appointments.actions.refresh.clone();
        let selected_slot = selected_slot.clone();

        Callback::from(move |draft: AppointmentDraft| {
            let Some(slot) = *selected_slot else {
                Logger::error_with_component("create-form", "No appointment slot selected.");
                return;
            };

            let api_client = (*api_client).clone();
            let refresh = refresh.clone();
            let selected_slot = selected_slot.clone();

            spawn_local(async move {
                let request = AppointmentRequest::pending(draft, slot);
                match api_client.create_appointment(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("create-form", "Appointment created successfully");
                        selected_slot.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "create-form",
                            &format!("Failed to create appointment: {}", e),
                        );
                    }
                }
            });
        })
    };

    let on_update_click = {
        let editing = editing.clone();
        Callback::from(move |appointment: Appointment| {
            editing.set(Some(appointment));
        })
    };

    let on_update_submit = {
        let api_client = api_client.clone();
        let refresh = appointments.actions.refresh.clone();
        let editing = editing.clone();

        Callback::from(move |(id, request): (i32, AppointmentRequest)| {
            let api_client = (*api_client).clone();
            let refresh = refresh.clone();
            let editing = editing.clone();

            spawn_local(async move {
                match api_client.update_appointment(id, &request).await {
                    Ok(()) => {
                        Logger::info_with_component("update-form", "Appointment updated successfully");
                        editing.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "update-form",
                            &format!("Failed to update appointment: {}", e),
                        );
                    }
                }
            });
        })
    };

    let on_delete_click = {
        let api_client = api_client.clone();
        let refresh = appointments.actions.refresh.clone();

        Callback::from(move |id: i32| {
            let api_client = (*api_client).clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_appointment(id).await {
                    Ok(()) => {
                        Logger::info_with_component("appointments", "Appointment deleted successfully");
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "appointments",
                            &format!("Failed to delete appointment: {}", e),
                        );
                    }
                }
            });
        })
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Automotive Service Appointments"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="schedule-section">
                        <h2>{"Weekly Schedule"}</h2>
                        <WeekSelector
                            options={schedule.state.options.clone()}
                            selected={schedule.state.week_start}
                            on_change={schedule.actions.on_week_change.clone()}
                        />
                        <ScheduleTable
                            week_start={schedule.state.week_start}
                            appointments={appointments.state.appointments.clone()}
                            selected_slot={*selected_slot}
                            on_slot_click={on_slot_click}
                        />
                    </section>

                    <CreateAppointmentForm
                        selected_slot={*selected_slot}
                        on_submit={on_create}
                    />

                    <section class="appointments-section">
                        <h2>{"Appointments"}</h2>
                        <AppointmentList
                            appointments={appointments.state.appointments.clone()}
                            loading={appointments.state.loading}
                            on_update_click={on_update_click}
                            on_delete_click={on_delete_click}
                        />
                    </section>

                    {if let Some(appointment) = (*editing).clone() {
                        html! {
                            <UpdateAppointmentForm
                                appointment={appointment}
                                on_submit={on_update_submit}
                            />
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
