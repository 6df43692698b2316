use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    /// Time remaining from `now` until the midnight that ends its day.
    /// The target moves forward with `now`, so the offer restarts daily.
    pub fn until_midnight(now: NaiveDateTime) -> Self {
        let midnight = (now.date() + Duration::days(1)).and_time(NaiveTime::MIN);
        let remaining_ms = (midnight - now).num_milliseconds();
        Self::from_millis(remaining_ms)
    }

    pub fn from_millis(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::default();
        }
        Self {
            hours: ((remaining_ms / 3_600_000) % 24) as u32,
            minutes: ((remaining_ms / 60_000) % 60) as u32,
            seconds: ((remaining_ms / 1_000) % 60) as u32,
        }
    }

    pub fn now() -> Self {
        Self::until_midnight(Local::now().naive_local())
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", pad2(self.hours), pad2(self.minutes), pad2(self.seconds))
    }
}

pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}

#[derive(Properties, PartialEq)]
struct TimerBoxProps {
    value: u32,
    label: &'static str,
}

#[function_component(TimerBox)]
fn timer_box(props: &TimerBoxProps) -> Html {
    html! {
        <div class="timer-box">
            <div class="timer-value">{ pad2(props.value) }</div>
            <div class="timer-label">{ props.label }</div>
        </div>
    }
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    // Plain use_state: every tick must re-render so the effect re-arms.
    let time_left = use_state(TimeLeft::now);

    {
        let time_left = time_left.clone();
        use_effect(move || {
            let timeout = Timeout::new(config::COUNTDOWN_TICK_MS, move || {
                time_left.set(TimeLeft::now());
            });
            move || {
                timeout.cancel();
            }
        });
    }

    html! {
        <div class="countdown">
            <TimerBox value={time_left.hours} label="Horas" />
            <span class="timer-sep">{":"}</span>
            <TimerBox value={time_left.minutes} label="Min" />
            <span class="timer-sep">{":"}</span>
            <TimerBox value={time_left.seconds} label="Seg" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn ten_seconds_before_midnight() {
        let left = TimeLeft::until_midnight(at(23, 59, 50, 250));
        assert_eq!(left, TimeLeft { hours: 0, minutes: 0, seconds: 9 });
        assert_eq!(left.to_string(), "00:00:09");

        let exact = TimeLeft::until_midnight(at(23, 59, 50, 0));
        assert_eq!(exact.to_string(), "00:00:10");
    }

    #[test]
    fn exactly_midnight_wraps_to_zero_hours() {
        // A full day remaining is 24h, which folds to 00 under mod 24.
        let left = TimeLeft::until_midnight(at(0, 0, 0, 0));
        assert_eq!(left, TimeLeft::default());
    }

    #[test]
    fn just_after_midnight_counts_a_full_day() {
        let left = TimeLeft::until_midnight(at(0, 0, 0, 1));
        assert_eq!(left.to_string(), "23:59:59");
    }

    #[test]
    fn midday() {
        let left = TimeLeft::until_midnight(at(12, 30, 15, 0));
        assert_eq!(left.to_string(), "11:29:45");
    }

    #[test]
    fn past_target_clamps_to_zero() {
        assert_eq!(TimeLeft::from_millis(0), TimeLeft::default());
        assert_eq!(TimeLeft::from_millis(-5_000), TimeLeft::default());
    }

    #[test]
    fn fields_stay_in_range_and_render_two_digits() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let start = day.and_hms_opt(0, 0, 0).unwrap();
        // Every 37 seconds across the whole day, plus odd milliseconds.
        for step in 0..(86_400 / 37) {
            let now = start + Duration::milliseconds(step * 37_000 + (step % 1000));
            let left = TimeLeft::until_midnight(now);
            assert!(left.hours <= 23);
            assert!(left.minutes <= 59);
            assert!(left.seconds <= 59);
            let shown = left.to_string();
            assert_eq!(shown.len(), 8);
            assert!(shown.split(':').all(|part| part.len() == 2));
        }
    }

    #[test]
    fn pads_single_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(23), "23");
    }
}
