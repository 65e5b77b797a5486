use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::motion::counter::{CounterRun, RunToken, COUNTER_THRESHOLD};
use crate::motion::format::group_digits;
use crate::motion::preference::use_reduced_motion;
use crate::motion::visibility::use_visibility;

/// Full 0-9 cycles a reel passes before settling.
pub const DECADES: u32 = 2;
/// Extra start delay per digit position, left to right.
pub const CASCADE_MS: u32 = 90;
/// Gap between resetting the reels and releasing them, so the reset paints.
const ARM_MS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reel {
    pub target: u8,
    pub delay_ms: u32,
}

impl Reel {
    /// Index of the cell the reel comes to rest on.
    pub fn stops(&self) -> u32 {
        DECADES * 10 + u32::from(self.target)
    }

    /// Digits printed on the reel, top to bottom.
    pub fn strip(&self) -> Vec<u8> {
        (0..=self.stops()).map(|i| (i % 10) as u8).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Fixed(char),
    Reel(Reel),
}

/// Splits the grouped value into reels for digits and fixed glyphs for
/// separators and signs.
pub fn layout(value: i64) -> Vec<Glyph> {
    let mut position = 0;
    group_digits(value)
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => {
                let reel = Reel { target: digit as u8, delay_ms: position * CASCADE_MS };
                position += 1;
                Glyph::Reel(reel)
            }
            None => Glyph::Fixed(c),
        })
        .collect()
}

/// Time from release until the last reel settles.
pub fn total_duration_ms(glyphs: &[Glyph], duration_ms: u32) -> u32 {
    let last_delay = glyphs
        .iter()
        .filter_map(|glyph| match glyph {
            Glyph::Reel(reel) => Some(reel.delay_ms),
            Glyph::Fixed(_) => None,
        })
        .max()
        .unwrap_or(0);
    duration_ms + last_delay
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// Plain text, final value.
    Settled,
    /// Reels parked on their first cell, no transition.
    Armed,
    /// Reels travelling to their target cell.
    Spinning,
}

/// Digit-spin state machine. Every `start` invalidates timers scheduled by
/// earlier runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinRun {
    run: CounterRun,
    phase: SpinPhase,
}

impl SpinRun {
    pub fn new(target: i64) -> Self {
        Self { run: CounterRun::new(target), phase: SpinPhase::Settled }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn token(&self) -> RunToken {
        self.run.token()
    }

    pub fn mark_in_view(&mut self) -> bool {
        self.run.mark_in_view()
    }

    pub fn in_view(&self) -> bool {
        self.run.in_view()
    }

    pub fn start(&mut self, target: i64) -> RunToken {
        self.phase = SpinPhase::Armed;
        self.run.restart(target)
    }

    pub fn release(&mut self, token: RunToken) -> bool {
        if self.run.is_current(token) && self.phase == SpinPhase::Armed {
            self.phase = SpinPhase::Spinning;
            true
        } else {
            false
        }
    }

    pub fn settle(&mut self, token: RunToken, value: i64) -> bool {
        if self.run.apply(token, value) {
            self.phase = SpinPhase::Settled;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> i64 {
        self.run.current()
    }
}

/// Phase to render. Reduced motion never leaves the settled text.
pub fn effective_phase(reduced: bool, phase: SpinPhase) -> SpinPhase {
    if reduced {
        SpinPhase::Settled
    } else {
        phase
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinCounterProps {
    pub value: i64,
    #[prop_or(1200)]
    pub duration_ms: u32,
    #[prop_or(AttrValue::Static("+"))]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Digit-spin counter. Spins once when scrolled into view and again on every
/// hover or focus.
#[function_component(SpinCounter)]
pub fn spin_counter(props: &SpinCounterProps) -> Html {
    let reduced = use_reduced_motion();
    let node = use_node_ref();
    let in_view = use_visibility(node.clone(), COUNTER_THRESHOLD, reduced);
    let run = use_mut_ref(|| SpinRun::new(props.value));
    let phase = use_state(|| SpinPhase::Settled);
    let timers: Rc<RefCell<Vec<Timeout>>> = use_mut_ref(Vec::new);

    let spin = {
        let run = run.clone();
        let phase = phase.clone();
        let timers = timers.clone();
        let target = props.value;
        let duration_ms = props.duration_ms;
        Callback::from(move |_: ()| {
            if reduced {
                return;
            }
            let token = run.borrow_mut().start(target);
            debug!("Spin run {} towards {}", token, target);
            phase.set(SpinPhase::Armed);

            let release = {
                let run = run.clone();
                let phase = phase.clone();
                Timeout::new(ARM_MS, move || {
                    if run.borrow_mut().release(token) {
                        phase.set(SpinPhase::Spinning);
                    }
                })
            };
            let settle = {
                let run = run.clone();
                let phase = phase.clone();
                let total = ARM_MS + total_duration_ms(&layout(target), duration_ms);
                Timeout::new(total, move || {
                    if run.borrow_mut().settle(token, target) {
                        phase.set(SpinPhase::Settled);
                    }
                })
            };
            // Superseded runs lose their pending timers.
            let mut timers = timers.borrow_mut();
            timers.clear();
            timers.push(release);
            timers.push(settle);
        })
    };

    {
        let spin = spin.clone();
        let run = run.clone();
        use_effect_with_deps(
            move |(in_view, reduced): &(bool, bool)| {
                if *in_view && !*reduced && run.borrow_mut().mark_in_view() {
                    spin.emit(());
                }
                || ()
            },
            (in_view, reduced),
        );
    }

    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    let retrigger = {
        let run = run.clone();
        let spin = spin.clone();
        move || {
            let ready = {
                let run = run.borrow();
                run.in_view() && run.phase() != SpinPhase::Armed
            };
            if ready {
                spin.emit(());
            }
        }
    };
    let onmouseenter = {
        let retrigger = retrigger.clone();
        Callback::from(move |_: MouseEvent| retrigger())
    };
    let onfocus = Callback::from(move |_: FocusEvent| retrigger());

    let settled = format!("{}{}", group_digits(props.value), props.suffix);
    let current_phase = effective_phase(reduced, *phase);
    let glyphs = layout(props.value);

    let body = match current_phase {
        SpinPhase::Settled => html! { <span class="spin-settled">{ group_digits(props.value) }</span> },
        SpinPhase::Armed | SpinPhase::Spinning => html! {
            <span class="spin-reels" aria-hidden="true">
                { for glyphs.iter().map(|glyph| render_glyph(glyph, current_phase, props.duration_ms)) }
            </span>
        },
    };

    html! {
        <span
            ref={node}
            class={classes!("spin-counter", props.class.clone())}
            aria-label={settled}
            tabindex="0"
            {onmouseenter}
            {onfocus}
        >
            { body }
            <span class="spin-suffix">{ props.suffix.clone() }</span>
            <style>
                {r#"
                    .spin-counter {
                        display: inline-flex;
                        align-items: baseline;
                        font-variant-numeric: tabular-nums;
                        outline: none;
                    }
                    .spin-reels {
                        display: inline-flex;
                    }
                    .spin-window {
                        display: inline-block;
                        height: 1em;
                        line-height: 1em;
                        overflow: hidden;
                    }
                    .spin-strip {
                        display: flex;
                        flex-direction: column;
                        transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
                        transition-property: transform;
                    }
                    .spin-strip span {
                        height: 1em;
                    }
                "#}
            </style>
        </span>
    }
}

fn render_glyph(glyph: &Glyph, phase: SpinPhase, duration_ms: u32) -> Html {
    match glyph {
        Glyph::Fixed(c) => html! { <span class="spin-fixed">{ c.to_string() }</span> },
        Glyph::Reel(reel) => {
            let style = match phase {
                SpinPhase::Spinning => format!(
                    "transform: translateY(-{}em); transition-duration: {}ms; transition-delay: {}ms;",
                    reel.stops(),
                    duration_ms,
                    reel.delay_ms
                ),
                _ => "transform: translateY(0); transition: none;".to_string(),
            };
            html! {
                <span class="spin-window">
                    <span class="spin-strip" {style}>
                        { for reel.strip().into_iter().map(|digit| html! { <span>{ digit }</span> }) }
                    </span>
                </span>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_cascades_digits_left_to_right() {
        let glyphs = layout(10_000);
        assert_eq!(glyphs.len(), 6);
        assert_eq!(glyphs[2], Glyph::Fixed(','));
        let delays: Vec<u32> = glyphs
            .iter()
            .filter_map(|glyph| match glyph {
                Glyph::Reel(reel) => Some(reel.delay_ms),
                Glyph::Fixed(_) => None,
            })
            .collect();
        assert_eq!(delays, vec![0, CASCADE_MS, 2 * CASCADE_MS, 3 * CASCADE_MS, 4 * CASCADE_MS]);
    }

    #[test]
    fn reel_spins_two_decades_before_target() {
        let reel = Reel { target: 7, delay_ms: 0 };
        assert_eq!(reel.stops(), 27);
        let strip = reel.strip();
        assert_eq!(strip.len(), 28);
        assert_eq!(strip[0], 0);
        assert_eq!(strip[10], 0);
        assert_eq!(*strip.last().unwrap(), 7);
    }

    #[test]
    fn total_duration_includes_last_delay() {
        let glyphs = layout(5000);
        assert_eq!(total_duration_ms(&glyphs, 1200), 1200 + 3 * CASCADE_MS);
        assert_eq!(total_duration_ms(&[Glyph::Fixed('-')], 800), 800);
    }

    #[test]
    fn run_walks_through_phases() {
        let mut run = SpinRun::new(7000);
        assert_eq!(run.phase(), SpinPhase::Settled);

        let token = run.start(7000);
        assert_eq!(run.phase(), SpinPhase::Armed);
        assert!(run.release(token));
        assert_eq!(run.phase(), SpinPhase::Spinning);
        assert!(!run.release(token));
        assert!(run.settle(token, 7000));
        assert_eq!(run.phase(), SpinPhase::Settled);
        assert_eq!(run.value(), 7000);
    }

    #[test]
    fn retrigger_invalidates_in_flight_timers() {
        let mut run = SpinRun::new(0);
        let first = run.start(5000);
        assert!(run.release(first));

        // Hover restarts the spin before the first run finished.
        let second = run.start(5000);
        assert_eq!(run.phase(), SpinPhase::Armed);

        // The first run's timers fire late and are ignored.
        assert!(!run.settle(first, 5000));
        assert!(!run.release(first));
        assert_eq!(run.phase(), SpinPhase::Armed);

        assert!(run.release(second));
        assert!(run.settle(second, 5000));
        assert_eq!(run.token(), second);
        assert_eq!(run.phase(), SpinPhase::Settled);
    }

    #[test]
    fn reduced_motion_renders_settled_text_in_every_phase() {
        let mut run = SpinRun::new(20);
        let token = run.start(20);
        assert_eq!(effective_phase(true, run.phase()), SpinPhase::Settled);
        assert!(run.release(token));
        assert_eq!(effective_phase(true, run.phase()), SpinPhase::Settled);
        assert_eq!(effective_phase(false, run.phase()), SpinPhase::Spinning);
    }

    #[test]
    fn first_view_is_reported_once() {
        let mut run = SpinRun::new(1);
        assert!(!run.in_view());
        assert!(run.mark_in_view());
        assert!(!run.mark_in_view());
        assert!(run.in_view());
    }
}
