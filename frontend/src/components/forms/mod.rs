pub mod create_appointment_form;
pub mod update_appointment_form;

pub use create_appointment_form::CreateAppointmentForm;
pub use update_appointment_form::UpdateAppointmentForm;
