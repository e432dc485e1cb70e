use chrono::NaiveDate;
use shared::{parse_week_start, start_of_week, week_options, WeekOption, WEEKS_SHOWN};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct ScheduleState {
    pub week_start: NaiveDate,
    pub options: Vec<WeekOption>,
}

pub struct UseScheduleResult {
    pub state: ScheduleState,
    pub actions: UseScheduleActions,
}

#[derive(Clone)]
pub struct UseScheduleActions {
    pub on_week_change: Callback<Event>,
}

/// Tracks which week the schedule shows and the selector's week options.
#[hook]
pub fn use_schedule() -> UseScheduleResult {
    let week_start = use_state(|| start_of_week(date_utils::today()));
    let options = use_memo((), |_| week_options(date_utils::today(), WEEKS_SHOWN));

    let on_week_change = {
        let week_start = week_start.clone();

        use_callback((), move |event: Event, _| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            match parse_week_start(&value) {
                Some(start) => {
                    week_start.set(start);
                }
                None => {
                    Logger::warn_with_component(
                        "schedule",
                        &format!("Ignoring invalid week selection: {}", value),
                    );
                }
            }
        })
    };

    let state = ScheduleState {
        week_start: *week_start,
        options: (*options).clone(),
    };

    let actions = UseScheduleActions { on_week_change };

    UseScheduleResult { state, actions }
}
