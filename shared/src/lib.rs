use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First bookable hour of the working day (inclusive).
pub const OPENING_HOUR: u32 = 8;
/// Last bookable hour of the working day (inclusive).
pub const CLOSING_HOUR: u32 = 18;
/// Number of day columns in the schedule grid.
pub const DAYS_SHOWN: usize = 6;
/// Number of weeks offered by the week selector.
pub const WEEKS_SHOWN: usize = 4;

/// State string the service uses for an unscheduled appointment.
pub const FREE_STATE: &str = "free";
/// State string a freshly submitted appointment carries.
pub const PENDING_STATE: &str = "Pending";
/// Label shown on schedule cells that lie in the past.
pub const NOT_POSSIBLE_LABEL: &str = "Not possible";
/// Label shown on the cell the customer has picked for a new booking.
pub const RESERVED_LABEL: &str = "Reserved";

/// Appointment record as the booking service stores and returns it.
///
/// The service owns this schema; fields are carried in their wire form.
/// `appointment_state` doubles as a workflow status ("free", "Pending") and,
/// once scheduled, a `"<date> <time>"` slot reference. Use [`Appointment::status`]
/// and [`Appointment::slot_key`] for a typed view instead of matching on the
/// raw string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub service_type: String,
    /// Requested day, YYYY-MM-DD
    pub preferred_date: String,
    /// Requested time of day, HH:MM
    pub preferred_time: String,
    pub additional_notes: String,
    /// RFC 3339 timestamp set by the service at creation
    pub creation_date: String,
    /// Raw state string, see struct docs
    pub appointment_state: String,
}

impl Appointment {
    /// Typed view of the overloaded `appointment_state` string.
    pub fn status(&self) -> Option<AppointmentStatus> {
        AppointmentStatus::parse(&self.appointment_state)
    }

    /// Structural key for the slot this appointment occupies.
    ///
    /// Prefers the slot encoded in the state string; otherwise derives the key
    /// from `preferred_date` and `preferred_time`. `None` when neither parses.
    pub fn slot_key(&self) -> Option<SlotKey> {
        match self.status() {
            Some(AppointmentStatus::Scheduled(slot)) => Some(slot),
            _ => SlotKey::parse(&self.preferred_date, &self.preferred_time),
        }
    }
}

/// Workflow status decoded from an appointment's state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Slot not taken ("free")
    Free,
    /// Submitted, awaiting confirmation ("Pending")
    Pending,
    /// Scheduled into a concrete slot ("<date> <time>")
    Scheduled(SlotKey),
}

impl AppointmentStatus {
    /// Parse a state string; unrecognized strings yield `None`.
    pub fn parse(state: &str) -> Option<Self> {
        match state.trim() {
            FREE_STATE => Some(AppointmentStatus::Free),
            PENDING_STATE => Some(AppointmentStatus::Pending),
            other => SlotKey::parse_state(other).map(AppointmentStatus::Scheduled),
        }
    }
}

/// Structural key of one bookable hour: a calendar day plus an hour of day.
///
/// Appointments are matched to grid cells by comparing these keys as typed
/// values, never by comparing rendered display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub hour: u32,
}

impl SlotKey {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }

    /// Parse a `YYYY-MM-DD` date plus a `HH:MM` (or `H:MM`) time of day.
    pub fn parse(date: &str, time: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        let hour = parse_hour(time)?;
        Some(Self { date, hour })
    }

    /// Parse the `"<date> <time>"` form used by scheduled state strings.
    pub fn parse_state(state: &str) -> Option<Self> {
        let (date, time) = state.trim().split_once(' ')?;
        Self::parse(date, time)
    }

    /// The absolute instant this slot begins.
    pub fn datetime(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.hour, 0, 0).unwrap_or_default();
        self.date.and_time(time)
    }

    /// Date in the wire format the service expects (YYYY-MM-DD).
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time in the wire format the service expects (HH:MM).
    pub fn time_param(&self) -> String {
        format!("{:02}:00", self.hour)
    }

    /// Unpadded `H:00` form used for the cell's `data-time` attribute.
    pub fn time_attr(&self) -> String {
        format!("{}:00", self.hour)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {:02}:00",
            month_short(self.date.month()),
            self.date.day(),
            self.hour
        )
    }
}

fn parse_hour(time: &str) -> Option<u32> {
    let (hour, minute) = time.trim().split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    if hour < 24 && minute < 60 {
        Some(hour)
    } else {
        None
    }
}

/// Create/update request body: an appointment without the service-assigned
/// `id` and `creation_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub service_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub additional_notes: String,
    pub appointment_state: String,
}

impl AppointmentRequest {
    /// Build the create-path request: form fields plus the picked slot, with
    /// the state initialized to "Pending".
    pub fn pending(draft: AppointmentDraft, slot: SlotKey) -> Self {
        Self {
            full_name: draft.full_name,
            email: draft.email,
            phone_number: draft.phone_number,
            vehicle_make: draft.vehicle_make,
            vehicle_model: draft.vehicle_model,
            vehicle_year: draft.vehicle_year,
            service_type: draft.service_type,
            preferred_date: slot.date_param(),
            preferred_time: slot.time_param(),
            additional_notes: draft.additional_notes,
            appointment_state: PENDING_STATE.to_string(),
        }
    }
}

/// Customer and vehicle details gathered from the creation form, before a
/// slot has been attached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub service_type: String,
    pub additional_notes: String,
}

/// One entry of the week selector.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekOption {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

/// The Monday at or before `date` (ISO week, Monday = start).
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Parse a week selector value (YYYY-MM-DD) and snap it to its week's Monday.
/// Invalid input yields `None`.
pub fn parse_week_start(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(start_of_week)
}

/// Selector entries for `count` consecutive weeks starting with the week
/// containing `today`.
pub fn week_options(today: NaiveDate, count: usize) -> Vec<WeekOption> {
    let first = start_of_week(today);
    (0..count)
        .map(|i| {
            let start = first + Duration::days(7 * i as i64);
            let end = start + Duration::days(6);
            WeekOption {
                start,
                end,
                label: format!("{} - {}", format_week_date(start), format_week_date(end)),
            }
        })
        .collect()
}

/// Human-readable date for selector labels, e.g. "Mon, Jun 10, 2024".
pub fn format_week_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        weekday_short(date.weekday().num_days_from_sunday()),
        month_short(date.month()),
        date.day(),
        date.year()
    )
}

/// Column heading for a schedule day, e.g. "Tue, Jun 11".
pub fn format_day_heading(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        weekday_short(date.weekday().num_days_from_sunday()),
        month_short(date.month()),
        date.day()
    )
}

fn month_short(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Jan",
    }
}

fn weekday_short(day_from_sunday: u32) -> &'static str {
    match day_from_sunday {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "Invalid",
    }
}

/// Availability of one schedule cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// Slot lies before the current instant; never interactive
    Past,
    /// Slot is selectable
    Open,
    /// Slot is taken by an existing appointment
    Reserved,
}

/// One cell of the schedule grid. View-local: rebuilt on every render,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub slot: SlotKey,
    pub status: CellStatus,
    pub label: String,
}

/// One hour row of the schedule grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub hour: u32,
    pub cells: Vec<GridCell>,
}

/// The weekly schedule grid: hours 8 through 18 by six days.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGrid {
    pub week_start: NaiveDate,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    /// Build the empty grid for the week starting at `week_start`.
    ///
    /// The displayed window deliberately begins the day after the selected
    /// week start, so cells run from `week_start + 1` through `week_start + 6`
    /// days. Cells before `now` are marked past and labeled "Not possible".
    pub fn build(week_start: NaiveDate, now: NaiveDateTime) -> Self {
        let rows = (OPENING_HOUR..=CLOSING_HOUR)
            .map(|hour| {
                let cells = (0..DAYS_SHOWN)
                    .map(|day| {
                        let date = week_start + Duration::days(day as i64 + 1);
                        let slot = SlotKey::new(date, hour);
                        if slot.datetime() < now {
                            GridCell {
                                slot,
                                status: CellStatus::Past,
                                label: NOT_POSSIBLE_LABEL.to_string(),
                            }
                        } else {
                            GridCell {
                                slot,
                                status: CellStatus::Open,
                                label: slot.to_string(),
                            }
                        }
                    })
                    .collect();
                GridRow { hour, cells }
            })
            .collect();

        Self { week_start, rows }
    }

    /// The dates of the six displayed day columns, in order.
    pub fn day_dates(&self) -> Vec<NaiveDate> {
        (0..DAYS_SHOWN)
            .map(|day| self.week_start + Duration::days(day as i64 + 1))
            .collect()
    }

    pub fn cell(&self, slot: &SlotKey) -> Option<&GridCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.slot == *slot)
    }

    pub fn cell_mut(&mut self, slot: &SlotKey) -> Option<&mut GridCell> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.cells.iter_mut())
            .find(|cell| cell.slot == *slot)
    }

    /// Mark the cells taken by the given appointments as reserved, labeling
    /// each with the appointment's raw state string.
    ///
    /// Free appointments are skipped. Appointments whose slot has no cell in
    /// this week (or whose slot cannot be derived at all) are skipped and
    /// their ids returned so the caller can log the miss.
    pub fn annotate(&mut self, appointments: &[Appointment]) -> Vec<i32> {
        let mut unmatched = Vec::new();

        for appointment in appointments {
            if appointment.status() == Some(AppointmentStatus::Free) {
                continue;
            }
            let Some(slot) = appointment.slot_key() else {
                unmatched.push(appointment.id);
                continue;
            };
            match self.cell_mut(&slot) {
                Some(cell) => {
                    cell.status = CellStatus::Reserved;
                    cell.label = appointment.appointment_state.clone();
                }
                None => unmatched.push(appointment.id),
            }
        }

        unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn appointment(id: i32, preferred_date: &str, preferred_time: &str, state: &str) -> Appointment {
        Appointment {
            id,
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "123-456-7890".to_string(),
            vehicle_make: "Toyota".to_string(),
            vehicle_model: "Camry".to_string(),
            vehicle_year: 2022,
            service_type: "Oil Change".to_string(),
            preferred_date: preferred_date.to_string(),
            preferred_time: preferred_time.to_string(),
            additional_notes: "Please check the brakes too".to_string(),
            creation_date: "2024-06-01T10:00:00Z".to_string(),
            appointment_state: state.to_string(),
        }
    }

    #[test]
    fn test_start_of_week_returns_monday_at_or_before() {
        // Monday 2024-06-10 through Sunday 2024-06-16 all map to that Monday
        let monday = date(2024, 6, 10);
        for offset in 0..7 {
            let d = monday + Duration::days(offset);
            let start = start_of_week(d);
            assert_eq!(start, monday);
            assert_eq!(start.weekday(), chrono::Weekday::Mon);
            assert!(start <= d);
            assert!((d - start).num_days() < 7);
        }
    }

    #[test]
    fn test_start_of_week_on_sunday_goes_back_six_days() {
        let sunday = date(2024, 6, 16);
        assert_eq!(start_of_week(sunday), date(2024, 6, 10));
    }

    #[test]
    fn test_parse_week_start() {
        // Mid-week date snaps to its Monday
        assert_eq!(parse_week_start("2024-06-12"), Some(date(2024, 6, 10)));
        assert_eq!(parse_week_start("2024-06-10"), Some(date(2024, 6, 10)));

        // Invalid input fails instead of guessing
        assert_eq!(parse_week_start("not-a-date"), None);
        assert_eq!(parse_week_start("2024-13-40"), None);
        assert_eq!(parse_week_start(""), None);
    }

    #[test]
    fn test_week_options() {
        let options = week_options(date(2024, 6, 12), 4);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].start, date(2024, 6, 10));
        for (i, option) in options.iter().enumerate() {
            assert_eq!(option.start, date(2024, 6, 10) + Duration::days(7 * i as i64));
            assert_eq!(option.end, option.start + Duration::days(6));
        }
        assert_eq!(options[0].label, "Mon, Jun 10, 2024 - Sun, Jun 16, 2024");
    }

    #[test]
    fn test_slot_key_parse() {
        let slot = SlotKey::parse("2024-06-11", "09:00").unwrap();
        assert_eq!(slot.date, date(2024, 6, 11));
        assert_eq!(slot.hour, 9);

        // Unpadded hour is accepted
        assert_eq!(SlotKey::parse("2024-06-11", "9:00"), Some(slot));

        assert_eq!(SlotKey::parse("2024-06-11", "25:00"), None);
        assert_eq!(SlotKey::parse("2024-06-11", "nine"), None);
        assert_eq!(SlotKey::parse("June 11", "09:00"), None);
    }

    #[test]
    fn test_slot_key_parse_state() {
        let slot = SlotKey::parse_state("2024-06-11 09:00").unwrap();
        assert_eq!(slot, SlotKey::new(date(2024, 6, 11), 9));

        assert_eq!(SlotKey::parse_state("Pending"), None);
        assert_eq!(SlotKey::parse_state("free"), None);
    }

    #[test]
    fn test_slot_key_formats() {
        let slot = SlotKey::new(date(2024, 6, 11), 9);
        assert_eq!(slot.date_param(), "2024-06-11");
        assert_eq!(slot.time_param(), "09:00");
        assert_eq!(slot.time_attr(), "9:00");
        assert_eq!(slot.to_string(), "Jun 11, 09:00");
        assert_eq!(slot.datetime(), datetime(2024, 6, 11, 9));
    }

    #[test]
    fn test_appointment_status_parse() {
        assert_eq!(AppointmentStatus::parse("free"), Some(AppointmentStatus::Free));
        assert_eq!(AppointmentStatus::parse("Pending"), Some(AppointmentStatus::Pending));
        assert_eq!(
            AppointmentStatus::parse("2024-06-11 09:00"),
            Some(AppointmentStatus::Scheduled(SlotKey::new(date(2024, 6, 11), 9)))
        );
        assert_eq!(AppointmentStatus::parse("Cancelled maybe"), None);
    }

    #[test]
    fn test_appointment_slot_key_prefers_state_slot() {
        // State encodes a different slot than the preferred fields; the state wins
        let a = appointment(1, "2024-06-11", "09:00", "2024-06-12 10:00");
        assert_eq!(a.slot_key(), Some(SlotKey::new(date(2024, 6, 12), 10)));

        // Pending falls back to the preferred fields
        let b = appointment(2, "2024-06-11", "09:00", "Pending");
        assert_eq!(b.slot_key(), Some(SlotKey::new(date(2024, 6, 11), 9)));

        // Nothing derivable
        let c = appointment(3, "soon", "morning", "Pending");
        assert_eq!(c.slot_key(), None);
    }

    #[test]
    fn test_grid_shape() {
        // Week of Monday 2024-06-10, viewed from long before
        let grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));

        assert_eq!(grid.rows.len(), 11);
        for (i, row) in grid.rows.iter().enumerate() {
            assert_eq!(row.hour, OPENING_HOUR + i as u32);
            assert_eq!(row.cells.len(), DAYS_SHOWN);
            for (day, cell) in row.cells.iter().enumerate() {
                // One-day offset: column d shows week_start + d + 1
                assert_eq!(
                    cell.slot.date,
                    date(2024, 6, 10) + Duration::days(day as i64 + 1)
                );
                assert_eq!(cell.slot.hour, row.hour);
            }
        }
    }

    #[test]
    fn test_grid_first_cell_is_tuesday_morning() {
        let grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let first = &grid.rows[0].cells[0];
        assert_eq!(first.slot, SlotKey::new(date(2024, 6, 11), 8));
        assert_eq!(first.slot.date.weekday(), chrono::Weekday::Tue);
        assert_eq!(first.status, CellStatus::Open);
        assert_eq!(first.label, "Jun 11, 08:00");
    }

    #[test]
    fn test_grid_past_cells_not_possible() {
        // "Now" is Wednesday June 12 at 10:30; everything at or before
        // Wednesday 10:00 lies in the past
        let now = date(2024, 6, 12).and_hms_opt(10, 30, 0).unwrap();
        let grid = ScheduleGrid::build(date(2024, 6, 10), now);

        for row in &grid.rows {
            for cell in &row.cells {
                if cell.slot.datetime() < now {
                    assert_eq!(cell.status, CellStatus::Past);
                    assert_eq!(cell.label, NOT_POSSIBLE_LABEL);
                } else {
                    assert_eq!(cell.status, CellStatus::Open);
                    assert_eq!(cell.label, cell.slot.to_string());
                }
            }
        }

        // Spot checks: Tuesday is fully past, Wednesday 10:00 past, 11:00 open
        let tuesday_evening = grid.cell(&SlotKey::new(date(2024, 6, 11), 18)).unwrap();
        assert_eq!(tuesday_evening.status, CellStatus::Past);
        let wed_ten = grid.cell(&SlotKey::new(date(2024, 6, 12), 10)).unwrap();
        assert_eq!(wed_ten.status, CellStatus::Past);
        let wed_eleven = grid.cell(&SlotKey::new(date(2024, 6, 12), 11)).unwrap();
        assert_eq!(wed_eleven.status, CellStatus::Open);
    }

    #[test]
    fn test_grid_day_dates() {
        let grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let days = grid.day_dates();
        assert_eq!(days.len(), DAYS_SHOWN);
        assert_eq!(days[0], date(2024, 6, 11));
        assert_eq!(days[5], date(2024, 6, 16));
    }

    #[test]
    fn test_annotate_marks_matching_cell() {
        let mut grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let scheduled = appointment(7, "2024-06-11", "09:00", "2024-06-11 09:00");

        let unmatched = grid.annotate(&[scheduled]);
        assert!(unmatched.is_empty());

        let cell = grid.cell(&SlotKey::new(date(2024, 6, 11), 9)).unwrap();
        assert_eq!(cell.status, CellStatus::Reserved);
        assert_eq!(cell.label, "2024-06-11 09:00");
    }

    #[test]
    fn test_annotate_pending_matches_via_preferred_fields() {
        let mut grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let pending = appointment(8, "2024-06-13", "14:00", "Pending");

        let unmatched = grid.annotate(&[pending]);
        assert!(unmatched.is_empty());

        let cell = grid.cell(&SlotKey::new(date(2024, 6, 13), 14)).unwrap();
        assert_eq!(cell.status, CellStatus::Reserved);
        assert_eq!(cell.label, "Pending");
    }

    #[test]
    fn test_annotate_skips_free_appointments() {
        let mut grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let before = grid.clone();
        let free = appointment(9, "2024-06-11", "09:00", "free");

        let unmatched = grid.annotate(&[free]);
        assert!(unmatched.is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_annotate_reports_miss_and_leaves_grid_unchanged() {
        let mut grid = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        let before = grid.clone();

        // Slot lies in a different week entirely
        let elsewhere = appointment(10, "2024-07-01", "09:00", "2024-07-01 09:00");
        // Slot cannot be derived at all
        let garbage = appointment(11, "soon", "morning", "Cancelled maybe");

        let unmatched = grid.annotate(&[elsewhere, garbage]);
        assert_eq!(unmatched, vec![10, 11]);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let appointments = vec![
            appointment(1, "2024-06-11", "09:00", "2024-06-11 09:00"),
            appointment(2, "2024-06-13", "14:00", "Pending"),
        ];

        let mut first = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        first.annotate(&appointments);

        let mut second = ScheduleGrid::build(date(2024, 6, 10), datetime(2024, 1, 1, 0));
        second.annotate(&appointments);
        second.annotate(&appointments);

        assert_eq!(first, second);
    }

    #[test]
    fn test_pending_request_from_draft_and_slot() {
        let draft = AppointmentDraft {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "123-456-7890".to_string(),
            vehicle_make: "Toyota".to_string(),
            vehicle_model: "Camry".to_string(),
            vehicle_year: 2022,
            service_type: "Oil Change".to_string(),
            additional_notes: "None".to_string(),
        };
        let slot = SlotKey::new(date(2024, 6, 11), 9);

        let request = AppointmentRequest::pending(draft, slot);
        assert_eq!(request.preferred_date, "2024-06-11");
        assert_eq!(request.preferred_time, "09:00");
        assert_eq!(request.appointment_state, "Pending");
        assert_eq!(request.full_name, "John Doe");
        assert_eq!(request.vehicle_year, 2022);
    }

    #[test]
    fn test_appointment_wire_format() {
        let json = r#"{
            "id": 3,
            "full_name": "Enrique Ruiz",
            "email": "enriqueruiz@gmail.com",
            "phone_number": "987-654-3210",
            "vehicle_make": "Honda",
            "vehicle_model": "Accord",
            "vehicle_year": 2020,
            "service_type": "Tire Rotation",
            "preferred_date": "2024-03-18",
            "preferred_time": "09:00",
            "additional_notes": "None",
            "creation_date": "2024-03-01T09:30:00Z",
            "appointment_state": "Pending"
        }"#;

        let parsed: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 3);
        assert_eq!(parsed.vehicle_year, 2020);
        assert_eq!(parsed.status(), Some(AppointmentStatus::Pending));
        assert_eq!(parsed.slot_key(), Some(SlotKey::new(date(2024, 3, 18), 9)));

        // Request bodies must not carry id or creation_date
        let request = AppointmentRequest::pending(AppointmentDraft::default(), SlotKey::new(date(2024, 3, 18), 9));
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("creation_date").is_none());
    }
}
