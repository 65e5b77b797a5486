use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::preference::Subscription;

/// Browsers report intersection ratios with a little rounding noise, so a
/// notification sent for crossing 0.2 may carry 0.199.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    NotYetVisible,
    Visible,
}

/// One-shot visibility latch for a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: Visibility,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: Visibility::NotYetVisible,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn has_become_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Called once when the element mounts. Fires straight away when motion is
    /// reduced or the platform cannot observe intersections. Returns whether
    /// this call fired.
    pub fn arm(&mut self, reduced_motion: bool, observer_available: bool) -> bool {
        if reduced_motion || !observer_available {
            self.fire()
        } else {
            false
        }
    }

    /// Feeds one intersection notification. Returns `true` only for the
    /// notification that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if is_intersecting && ratio + RATIO_TOLERANCE >= self.threshold {
            self.fire()
        } else {
            false
        }
    }

    fn fire(&mut self) -> bool {
        match self.state {
            Visibility::Visible => false,
            Visibility::NotYetVisible => {
                self.state = Visibility::Visible;
                true
            }
        }
    }
}

fn observer_available() -> bool {
    web_sys::window()
        .map(|window| {
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

fn observe_element(
    element: &Element,
    trigger: VisibilityTrigger,
    on_visible: Callback<()>,
) -> Option<Subscription> {
    let threshold = trigger.threshold();
    let trigger = Rc::new(RefCell::new(trigger));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let fired = trigger
                    .borrow_mut()
                    .observe(entry.is_intersecting(), entry.intersection_ratio());
                if fired {
                    observer.disconnect();
                    on_visible.emit(());
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Flips to `true` once the referenced element has been seen, and never back.
///
/// Reduced motion, a missing `IntersectionObserver`, or a node that never
/// mounted all count as visible so content is never held back.
#[hook]
pub fn use_visibility(node: NodeRef, threshold: f64, reduced_motion: bool) -> bool {
    let visible = use_state(|| reduced_motion);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(threshold, reduced_motion): &(f64, bool)| -> Box<dyn FnOnce()> {
                if *visible {
                    return Box::new(|| ());
                }

                let mut trigger = VisibilityTrigger::new(*threshold);
                if trigger.arm(*reduced_motion, observer_available()) {
                    if !*reduced_motion {
                        warn!("IntersectionObserver unavailable, revealing content immediately");
                    }
                    visible.set(true);
                    return Box::new(|| ());
                }

                let Some(element) = node.cast::<Element>() else {
                    visible.set(true);
                    return Box::new(|| ());
                };

                let on_visible = {
                    let visible = visible.clone();
                    Callback::from(move |_| visible.set(true))
                };
                match observe_element(&element, trigger, on_visible) {
                    Some(subscription) => Box::new(move || drop(subscription)),
                    None => {
                        warn!("Could not create IntersectionObserver, revealing content immediately");
                        visible.set(true);
                        Box::new(|| ())
                    }
                }
            },
            (threshold, reduced_motion),
        );
    }

    *visible || reduced_motion
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_visible() {
        let trigger = VisibilityTrigger::new(0.2);
        assert!(!trigger.has_become_visible());
        assert_eq!(trigger.threshold(), 0.2);
    }

    #[test]
    fn fires_once_when_threshold_is_crossed() {
        let mut trigger = VisibilityTrigger::new(0.35);
        assert!(!trigger.observe(true, 0.1));
        assert!(!trigger.observe(false, 0.0));
        assert!(trigger.observe(true, 0.4));
        assert!(trigger.has_become_visible());
    }

    #[test]
    fn never_rearms_after_firing() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(trigger.observe(true, 1.0));
        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 1.0));
        assert!(trigger.has_become_visible());
    }

    #[test]
    fn already_visible_element_fires_on_initial_notification() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(!trigger.arm(false, true));
        assert!(trigger.observe(true, 1.0));
    }

    #[test]
    fn ratio_rounding_noise_still_fires() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(trigger.observe(true, 0.195));
    }

    #[test]
    fn reduced_motion_fires_at_arm_time() {
        let mut trigger = VisibilityTrigger::new(0.2);
        assert!(trigger.arm(true, true));
        assert!(trigger.has_become_visible());
    }

    #[test]
    fn missing_observer_fires_at_arm_time() {
        let mut trigger = VisibilityTrigger::new(0.35);
        assert!(trigger.arm(false, false));
        assert!(trigger.has_become_visible());
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(VisibilityTrigger::new(-1.0).threshold(), 0.0);
    }
}
