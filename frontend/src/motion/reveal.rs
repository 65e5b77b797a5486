use yew::prelude::*;

use crate::motion::preference::use_reduced_motion;
use crate::motion::visibility::use_visibility;

pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    shown: bool,
    delay_ms: u32,
}

impl RevealState {
    pub fn new(delay_ms: u32) -> Self {
        Self { shown: false, delay_ms }
    }

    #[cfg(test)]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Latches `shown`. Later `false` inputs are ignored.
    pub fn sync(&mut self, visible: bool) {
        self.shown |= visible;
    }

    pub fn class(&self) -> &'static str {
        if self.shown {
            "reveal is-visible"
        } else {
            "reveal"
        }
    }

    /// Inline style for the wrapper. Reduced motion drops the transition
    /// entirely so the final state is the first one painted.
    pub fn style(&self, reduced_motion: bool) -> String {
        if reduced_motion {
            "transition: none; transition-delay: 0ms;".to_string()
        } else {
            format!("transition-delay: {}ms;", self.delay_ms)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// ms
    #[prop_or(0)]
    pub delay_ms: u32,
    /// How much of the element must be visible before revealing.
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let reduced = use_reduced_motion();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), props.threshold, reduced);
    let state = use_mut_ref(|| RevealState::new(props.delay_ms));

    let (class, style) = {
        let mut state = state.borrow_mut();
        state.sync(visible || reduced);
        (state.class(), state.style(reduced))
    };

    html! {
        <div ref={node} class={classes!(class, props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_with_delay() {
        let state = RevealState::new(120);
        assert!(!state.is_shown());
        assert_eq!(state.class(), "reveal");
        assert_eq!(state.style(false), "transition-delay: 120ms;");
    }

    #[test]
    fn shown_is_monotonic() {
        let mut state = RevealState::new(0);
        state.sync(true);
        for visible in [false, true, false, false] {
            state.sync(visible);
            assert!(state.is_shown());
        }
        assert_eq!(state.class(), "reveal is-visible");
    }

    #[test]
    fn reduced_motion_has_no_delay_or_transition() {
        let mut state = RevealState::new(300);
        state.sync(true);
        let style = state.style(true);
        assert!(style.contains("transition: none"));
        assert!(style.contains("0ms"));
        assert!(!style.contains("300"));
    }
}
