use chrono::NaiveDate;
use shared::WeekOption;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekSelectorProps {
    pub options: Vec<WeekOption>,
    pub selected: NaiveDate,
    pub on_change: Callback<Event>,
}

#[function_component(WeekSelector)]
pub fn week_selector(props: &WeekSelectorProps) -> Html {
    html! {
        <div class="week-selector">
            <label for="weekSelector">{"Select a week:"}</label>
            <select id="weekSelector" onchange={props.on_change.clone()}>
                {for props.options.iter().map(|option| {
                    html! {
                        <option
                            value={option.start.format("%Y-%m-%d").to_string()}
                            selected={option.start == props.selected}
                        >
                            {&option.label}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
