use chrono::{DateTime, Utc};
use gala_core::countdown::{pad_unit, TimeRemaining, TICK_MILLIS};
use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target: DateTime<Utc>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
    let remaining = use_state(|| TimeRemaining::between(props.target, Utc::now()));

    {
        let remaining = remaining.clone();
        use_effect_with(props.target, move |target| {
            let target = *target;
            remaining.set(TimeRemaining::between(target, Utc::now()));

            let interval = Interval::new(TICK_MILLIS, move || {
                remaining.set(TimeRemaining::between(target, Utc::now()));
            });

            // Dropping the interval clears it
            move || drop(interval)
        });
    }

    html! {
        <div class="countdown">
            { for remaining.units().into_iter().map(|(label, value)| html! {
                <div class="countdown-unit" key={label}>
                    <span class="countdown-value">{ pad_unit(value) }</span>
                    <span class="countdown-label">{ label }</span>
                </div>
            }) }
        </div>
    }
}
