use shared::Appointment;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct AppointmentsState {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
}

pub struct UseAppointmentsResult {
    pub state: AppointmentsState,
    pub actions: UseAppointmentsActions,
}

#[derive(Clone)]
pub struct UseAppointmentsActions {
    pub refresh: Callback<()>,
}

/// Holds the current appointment list snapshot and a refresh action.
///
/// A failed fetch is logged and leaves the displayed list unchanged until the
/// next successful refresh.
#[hook]
pub fn use_appointments(api_client: &ApiClient) -> UseAppointmentsResult {
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let appointments = appointments.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let appointments = appointments.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_appointments().await {
                    Ok(data) => {
                        appointments.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "appointments",
                            &format!("Error fetching appointments: {}", e),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    let state = AppointmentsState {
        appointments: (*appointments).clone(),
        loading: *loading,
    };

    let actions = UseAppointmentsActions { refresh };

    UseAppointmentsResult { state, actions }
}
