pub mod use_appointments;
pub mod use_schedule;

pub use use_appointments::use_appointments;
pub use use_schedule::use_schedule;
