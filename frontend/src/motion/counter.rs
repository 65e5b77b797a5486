use log::{debug, error};
use thiserror::Error;
use yew::prelude::*;

use crate::motion::format::{group_digits, with_suffix};
use crate::motion::frame::FrameLoop;
use crate::motion::preference::use_reduced_motion;
use crate::motion::visibility::use_visibility;

pub const COUNTER_THRESHOLD: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterSpecError {
    #[error("counter step must be positive, got {0}")]
    NonPositiveStep(i64),
    #[error("counter duration must be positive")]
    ZeroDuration,
    #[error("counter end {end} is below its start {start}")]
    EndBeforeStart { start: i64, end: i64 },
}

/// Immutable description of one counter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    start: i64,
    end: i64,
    step: i64,
    duration_ms: u32,
    suffix: String,
}

impl CounterSpec {
    pub fn new(
        start: i64,
        end: i64,
        step: i64,
        duration_ms: u32,
        suffix: impl Into<String>,
    ) -> Result<Self, CounterSpecError> {
        if step <= 0 {
            return Err(CounterSpecError::NonPositiveStep(step));
        }
        if duration_ms == 0 {
            return Err(CounterSpecError::ZeroDuration);
        }
        if end < start {
            return Err(CounterSpecError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end, step, duration_ms, suffix: suffix.into() })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of discrete increments between start and end, at least one.
    pub fn steps(&self) -> i64 {
        let range = (i128::from(self.end) - i128::from(self.start)) as f64;
        ((range / self.step as f64).round() as i64).max(1)
    }

    /// Displayed value after `elapsed_ms`. Exactly `end` once the duration
    /// has passed.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let t = (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.end;
        }
        let steps = self.steps();
        let index = ((ease_out_cubic(t) * steps as f64).round() as i64).min(steps);
        let value = i128::from(self.start) + i128::from(index) * i128::from(self.step);
        value.min(i128::from(self.end)) as i64
    }

    pub fn text_for(&self, value: i64) -> String {
        with_suffix(value, &self.suffix)
    }

    pub fn settled_text(&self) -> String {
        self.text_for(self.end)
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    pub done: bool,
}

/// Step-mode animation driven by externally supplied timestamps. The first
/// timestamp seen becomes the start of the run.
#[derive(Debug, Clone)]
pub struct StepAnimation {
    spec: CounterSpec,
    started_at: Option<f64>,
}

impl StepAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        Self { spec, started_at: None }
    }

    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;
        Frame {
            value: self.spec.value_at(elapsed),
            done: elapsed >= self.spec.duration_ms as f64,
        }
    }
}

pub type RunToken = u64;

/// Mutable state of a counter instance. Each (re)start hands out a fresh
/// token; writes carrying an older token are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterRun {
    current: i64,
    in_view: bool,
    token: RunToken,
}

impl CounterRun {
    pub fn new(initial: i64) -> Self {
        Self { current: initial, in_view: false, token: 0 }
    }

    #[cfg(test)]
    pub fn current(&self) -> i64 {
        self.current
    }

    #[cfg(test)]
    pub fn token(&self) -> RunToken {
        self.token
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    /// Returns `true` the first time only.
    pub fn mark_in_view(&mut self) -> bool {
        !std::mem::replace(&mut self.in_view, true)
    }

    pub fn restart(&mut self, from: i64) -> RunToken {
        self.token += 1;
        self.current = from;
        self.token
    }

    pub fn is_current(&self, token: RunToken) -> bool {
        token == self.token
    }

    /// Applies `value` if `token` belongs to the latest run.
    pub fn apply(&mut self, token: RunToken, value: i64) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.current = value;
        true
    }
}

/// Value to render. Reduced motion always shows the final value, even before
/// any frame has run.
pub fn displayed_value(spec: &CounterSpec, reduced: bool, value: i64) -> i64 {
    if reduced {
        spec.end()
    } else {
        value
    }
}

#[derive(Properties, PartialEq)]
pub struct SlotCounterProps {
    pub start: i64,
    pub end: i64,
    #[prop_or(100)]
    pub step: i64,
    #[prop_or(1200)]
    pub duration_ms: u32,
    #[prop_or(AttrValue::Static("+"))]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Step-mode counter: ticks from `start` to `end` on animation frames once the
/// element scrolls into view. Runs once per mount.
#[function_component(SlotCounter)]
pub fn slot_counter(props: &SlotCounterProps) -> Html {
    let reduced = use_reduced_motion();
    let node = use_node_ref();
    let in_view = use_visibility(node.clone(), COUNTER_THRESHOLD, reduced);
    let run = use_mut_ref(|| CounterRun::new(props.start));
    let value = use_state(|| if reduced { props.end } else { props.start });

    let spec = CounterSpec::new(
        props.start,
        props.end,
        props.step,
        props.duration_ms,
        props.suffix.to_string(),
    );

    {
        let value = value.clone();
        let run = run.clone();
        use_effect_with_deps(
            move |(spec, in_view, reduced): &(Result<CounterSpec, CounterSpecError>, bool, bool)| -> Box<dyn FnOnce()> {
                let spec = match spec {
                    Ok(spec) => spec.clone(),
                    Err(e) => {
                        error!("Invalid counter: {}", e);
                        return Box::new(|| ());
                    }
                };
                if !*in_view {
                    return Box::new(|| ());
                }
                run.borrow_mut().mark_in_view();
                if *reduced {
                    run.borrow_mut().restart(spec.end());
                    value.set(spec.end());
                    return Box::new(|| ());
                }

                let token = run.borrow_mut().restart(spec.start());
                debug!("Counter run {} from {} to {}", token, spec.start(), spec.end());
                let mut animation = StepAnimation::new(spec);
                let frames = FrameLoop::start(move |now| {
                    let frame = animation.frame(now);
                    if run.borrow_mut().apply(token, frame.value) {
                        value.set(frame.value);
                    }
                    !frame.done
                });
                Box::new(move || drop(frames))
            },
            (spec.clone(), in_view, reduced),
        );
    }

    let (text, label) = match &spec {
        Ok(spec) => {
            (spec.text_for(displayed_value(spec, reduced, *value)), spec.settled_text())
        }
        Err(_) => {
            let settled = format!("{}{}", group_digits(props.end), props.suffix);
            (settled.clone(), settled)
        }
    };

    html! {
        <span ref={node} class={classes!("counter", props.class.clone())} aria-label={label}>
            { text }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(start: i64, end: i64, step: i64, duration_ms: u32) -> CounterSpec {
        CounterSpec::new(start, end, step, duration_ms, "+").unwrap()
    }

    #[test]
    fn rejects_invalid_specs() {
        assert_eq!(
            CounterSpec::new(0, 10, 0, 100, ""),
            Err(CounterSpecError::NonPositiveStep(0))
        );
        assert_eq!(
            CounterSpec::new(0, 10, -5, 100, ""),
            Err(CounterSpecError::NonPositiveStep(-5))
        );
        assert_eq!(CounterSpec::new(0, 10, 1, 0, ""), Err(CounterSpecError::ZeroDuration));
        assert_eq!(
            CounterSpec::new(10, 0, 1, 100, ""),
            Err(CounterSpecError::EndBeforeStart { start: 10, end: 0 })
        );
    }

    #[test]
    fn steps_never_drop_below_one() {
        assert_eq!(spec(9000, 10_000, 100, 1400).steps(), 10);
        assert_eq!(spec(5, 5, 100, 1400).steps(), 1);
        assert_eq!(spec(0, 10, 100, 1400).steps(), 1);
    }

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn value_starts_at_start_and_moves_in_whole_steps() {
        let spec = spec(9000, 10_000, 100, 1400);
        assert_eq!(spec.value_at(0.0), 9000);
        for elapsed in [100.0, 350.0, 700.0, 1000.0, 1399.0] {
            let value = spec.value_at(elapsed);
            assert_eq!((value - 9000) % 100, 0, "value {} off the step grid", value);
            assert!(value <= 10_000);
        }
    }

    #[test]
    fn value_is_monotonic_over_time() {
        let spec = spec(4000, 5000, 50, 1400);
        let mut last = spec.value_at(0.0);
        for ms in (0..=1400).step_by(16) {
            let value = spec.value_at(ms as f64);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn completed_run_lands_exactly_on_end() {
        // Ranges that are not a multiple of the step must still finish on `end`.
        let cases = [
            spec(9000, 10_000, 100, 1400),
            spec(0, 1000, 300, 500),
            spec(3, 7, 5, 100),
            spec(42, 42, 1, 16),
            spec(6000, 7000, 50, 1),
        ];
        for spec in cases {
            let mut animation = StepAnimation::new(spec.clone());
            let mut now = 1_000.0;
            let mut frame = animation.frame(now);
            while !frame.done {
                now += 16.7;
                frame = animation.frame(now);
            }
            assert_eq!(frame.value, spec.end());
            assert_eq!(spec.text_for(frame.value), spec.settled_text());
        }
    }

    #[test]
    fn first_frame_sets_the_clock() {
        let spec = spec(0, 1000, 100, 1000);
        let mut animation = StepAnimation::new(spec);
        let first = animation.frame(52_000.0);
        assert_eq!(first, Frame { value: 0, done: false });
        let last = animation.frame(53_000.0);
        assert_eq!(last, Frame { value: 1000, done: true });
    }

    #[test]
    fn settled_text_uses_grouping_and_suffix() {
        assert_eq!(spec(9000, 10_000, 100, 1400).settled_text(), "10,000+");
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        let wide = spec(i64::MIN, i64::MAX, 1, 1000);
        assert!(wide.steps() > 1);
        let midway = wide.value_at(500.0);
        assert!(midway > i64::MIN && midway < i64::MAX);
        assert_eq!(wide.value_at(1000.0), i64::MAX);

        let coarse = spec(0, i64::MAX, i64::MAX / 3, 1000);
        assert_eq!(coarse.value_at(999.0) % (i64::MAX / 3), 0);
    }

    #[test]
    fn reduced_motion_shows_end_before_any_frame() {
        let spec = spec(9000, 10_000, 100, 1400);
        let initial = spec.start();
        assert_eq!(displayed_value(&spec, true, initial), 10_000);
        assert_eq!(spec.text_for(displayed_value(&spec, true, initial)), spec.settled_text());
        assert_eq!(displayed_value(&spec, false, initial), 9000);
    }

    #[test]
    fn marks_in_view_once() {
        let mut run = CounterRun::new(0);
        assert!(!run.in_view());
        assert!(run.mark_in_view());
        assert!(!run.mark_in_view());
        assert!(run.in_view());
    }

    #[test]
    fn stale_run_cannot_overwrite_newer_run() {
        let first = spec(0, 500, 10, 1000);
        let second = spec(0, 900, 10, 1000);
        let mut run = CounterRun::new(0);

        let stale = run.restart(first.start());
        let fresh = run.restart(second.start());
        assert_ne!(stale, fresh);

        assert!(run.apply(fresh, second.value_at(400.0)));
        // The first run completes late and must be ignored.
        assert!(!run.apply(stale, first.end()));
        assert!(run.apply(fresh, second.end()));
        assert!(!run.apply(stale, first.end()));

        assert_eq!(run.current(), second.end());
        assert_eq!(run.token(), fresh);
    }
}
