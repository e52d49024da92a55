use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::utils::constants::CLOCK_TICK_MS;

/// One-second wall clock for live duration displays. Independent of any
/// fetch interval; stops with the component.
#[hook]
pub fn use_clock() -> DateTime<Utc> {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(CLOCK_TICK_MS, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    *now
}
