use log::debug;
use yew::prelude::*;

use crate::browser::FrameLoop;
use crate::components::reveal::use_reveal_once;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampStep {
    Running(u64),
    Finished(u64),
}

/// Linear ramp from 0 to `target`. Yields values until the duration has
/// elapsed, then one final `Finished(target)`, then nothing.
#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: u64,
    duration_ms: f64,
    finished: bool,
}

impl CounterRamp {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, finished: false }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if elapsed_ms >= self.duration_ms {
            return self.target;
        }
        if elapsed_ms <= 0.0 {
            return 0;
        }
        let target = self.target as f64;
        (target * elapsed_ms / self.duration_ms).min(target).floor() as u64
    }

    pub fn step(&mut self, elapsed_ms: f64) -> Option<RampStep> {
        if self.finished {
            return None;
        }
        if elapsed_ms >= self.duration_ms {
            self.finished = true;
            return Some(RampStep::Finished(self.target));
        }
        Some(RampStep::Running(self.value_at(elapsed_ms)))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Groups digits in threes with `.` as pt-BR does (`2000` → `2.000`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// What the counter does once its visibility is known. Without a window to
/// drive frames it shows the target directly.
#[derive(Debug, PartialEq, Eq)]
pub enum CounterStart<W> {
    Idle,
    Animate(W),
    Snap,
}

impl<W> CounterStart<W> {
    pub fn decide(visible: bool, window: Option<W>) -> Self {
        match (visible, window) {
            (false, _) => CounterStart::Idle,
            (true, Some(window)) => CounterStart::Animate(window),
            (true, None) => CounterStart::Snap,
        }
    }

    /// The value to show right away, if any.
    pub fn initial_value(&self, target: u64) -> Option<u64> {
        match self {
            CounterStart::Snap => Some(target),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u64,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let count = use_state_eq(|| 0u64);
    let node = use_node_ref();
    let visible = use_reveal_once(node.clone(), config::COUNTER_THRESHOLD);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |(visible, target)| {
                let target = *target;
                let start = CounterStart::decide(*visible, web_sys::window());
                if let Some(value) = start.initial_value(target) {
                    count.set(value);
                }
                let frames = match start {
                    CounterStart::Animate(window) => {
                        let mut ramp = CounterRamp::new(target, config::COUNTER_RAMP_MS);
                        let mut origin = None;
                        Some(FrameLoop::start(window, move |timestamp| {
                            let first = *origin.get_or_insert(timestamp);
                            match ramp.step(timestamp - first) {
                                Some(RampStep::Running(value)) => {
                                    count.set(value);
                                    true
                                }
                                Some(RampStep::Finished(value)) => {
                                    debug!("Counter reached {}", value);
                                    count.set(value);
                                    false
                                }
                                None => false,
                            }
                        }))
                    }
                    CounterStart::Idle | CounterStart::Snap => None,
                };
                move || drop(frames)
            },
            (visible, props.target),
        );
    }

    html! {
        <span ref={node}>{ group_thousands(*count) }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn halfway_is_half_the_target() {
        let ramp = CounterRamp::new(2000, 2000.0);
        assert_eq!(ramp.value_at(1000.0), 1000);
        assert_eq!(ramp.value_at(0.0), 0);
        assert_eq!(ramp.value_at(2000.0), 2000);
        assert_eq!(ramp.value_at(5000.0), 2000);
    }

    #[test]
    fn floors_intermediate_values() {
        let ramp = CounterRamp::new(7, 2000.0);
        assert_eq!(ramp.value_at(1000.0), 3);
        assert_eq!(ramp.value_at(1999.0), 6);
    }

    #[test]
    fn non_decreasing_for_any_target() {
        for target in [0u64, 1, 3, 999, 2000, 123_456] {
            let ramp = CounterRamp::new(target, 2000.0);
            let mut last = 0;
            for ms in (0..=2100).step_by(7) {
                let value = ramp.value_at(ms as f64);
                assert!(value >= last);
                assert!(value <= target);
                last = value;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut ramp = CounterRamp::new(0, 2000.0);
        assert_eq!(ramp.step(0.0), Some(RampStep::Running(0)));
        assert_eq!(ramp.step(1500.0), Some(RampStep::Running(0)));
        assert_eq!(ramp.step(2000.0), Some(RampStep::Finished(0)));
    }

    #[test]
    fn finishes_once_and_cannot_restart() {
        let mut ramp = CounterRamp::new(2000, 2000.0);
        let mut steps = Vec::new();
        for ms in [0.0, 16.7, 500.0, 1999.0, 2016.0, 2032.0, 0.0] {
            if let Some(step) = ramp.step(ms) {
                steps.push(step);
            }
        }
        assert_eq!(
            steps,
            vec![
                RampStep::Running(0),
                RampStep::Running(16),
                RampStep::Running(500),
                RampStep::Running(1999),
                RampStep::Finished(2000),
            ]
        );
        assert!(ramp.is_finished());
    }

    #[test]
    fn groups_like_pt_br() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2000), "2.000");
        assert_eq!(group_thousands(10_000), "10.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
    }

    #[test]
    fn starts_only_once_visible() {
        assert_eq!(CounterStart::decide(false, Some(())), CounterStart::Idle);
        assert_eq!(CounterStart::decide(false, None::<()>), CounterStart::Idle);
        assert_eq!(CounterStart::decide(true, Some(())), CounterStart::Animate(()));
        assert_eq!(CounterStart::<()>::Idle.initial_value(2000), None);
        assert_eq!(CounterStart::Animate(()).initial_value(2000), None);
    }

    #[test]
    fn snaps_to_target_without_a_window() {
        let start = CounterStart::decide(true, None::<()>);
        assert_eq!(start, CounterStart::Snap);
        assert_eq!(start.initial_value(2000), Some(2000));
        assert_eq!(start.initial_value(0), Some(0));
    }

    #[tokio::test]
    async fn renders_zero_before_visible() {
        let html = ServerRenderer::<AnimatedCounter>::with_props(|| AnimatedCounterProps { target: 2000 })
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains(">0</span>"));
        assert!(!html.contains("2.000"));
    }
}
