pub mod appointment_list;
pub mod forms;
pub mod schedule_table;
pub mod week_selector;

pub use appointment_list::AppointmentList;
pub use forms::{CreateAppointmentForm, UpdateAppointmentForm};
pub use schedule_table::ScheduleTable;
pub use week_selector::WeekSelector;
