use chrono::NaiveDate;
use shared::{
    format_day_heading, Appointment, CellStatus, GridCell, ScheduleGrid, SlotKey, RESERVED_LABEL,
};
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
    pub week_start: NaiveDate,
    pub appointments: Vec<Appointment>,
    /// The slot currently picked as the candidate for a new booking
    pub selected_slot: Option<SlotKey>,
    pub on_slot_click: Callback<SlotKey>,
}

/// The weekly schedule grid, rebuilt from scratch on every render.
#[function_component(ScheduleTable)]
pub fn schedule_table(props: &ScheduleTableProps) -> Html {
    let mut grid = ScheduleGrid::build(props.week_start, date_utils::now());

    for id in grid.annotate(&props.appointments) {
        Logger::warn_with_component("schedule", &format!("Cell not found for appointment: {}", id));
    }

    html! {
        <table class="schedule-table">
            <thead>
                <tr>
                    <th>{"Time"}</th>
                    {for grid.day_dates().iter().map(|day| {
                        html! { <th>{format_day_heading(*day)}</th> }
                    })}
                </tr>
            </thead>
            <tbody id="schedule-body">
                {for grid.rows.iter().map(|row| {
                    html! {
                        <tr>
                            <td class="time-cell">{format!("{}:00", row.hour)}</td>
                            {for row.cells.iter().map(|cell| {
                                let selected = props.selected_slot == Some(cell.slot);
                                cell_view(cell, selected, &props.on_slot_click)
                            })}
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}

fn cell_view(cell: &GridCell, selected: bool, on_slot_click: &Callback<SlotKey>) -> Html {
    let day_attr = cell.slot.date_param();
    let time_attr = cell.slot.time_attr();

    match cell.status {
        CellStatus::Past => html! {
            <td class="not-possible" data-day={day_attr} data-time={time_attr}>
                {&cell.label}
            </td>
        },
        CellStatus::Reserved => html! {
            <td class="reserved" data-day={day_attr} data-time={time_attr}>
                {&cell.label}
            </td>
        },
        CellStatus::Open => {
            let onclick = {
                let on_slot_click = on_slot_click.clone();
                let slot = cell.slot;
                Callback::from(move |_: MouseEvent| on_slot_click.emit(slot))
            };

            if selected {
                html! {
                    <td class="reserved" data-day={day_attr} data-time={time_attr} {onclick}>
                        {RESERVED_LABEL}
                    </td>
                }
            } else {
                html! {
                    <td class="open" data-day={day_attr} data-time={time_attr} {onclick}>
                        {&cell.label}
                    </td>
                }
            }
        }
    }
}
