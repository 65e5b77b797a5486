use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Releases whatever it guards when dropped. Returned by every registration in
/// the motion layer (preference listeners, observers, frame requests).
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

struct OracleState {
    reduced: Cell<bool>,
    next_id: Cell<usize>,
    listeners: RefCell<Vec<(usize, Callback<bool>)>>,
}

impl OracleState {
    fn update(&self, reduced: bool) {
        if self.reduced.replace(reduced) == reduced {
            return;
        }
        debug!("Reduced motion preference changed to {}", reduced);
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Callback<bool>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for listener in listeners {
            listener.emit(reduced);
        }
    }
}

/// Reports whether the user asked the platform for reduced motion and tells
/// subscribers synchronously when that changes.
pub struct MotionOracle {
    state: Rc<OracleState>,
    _media_listener: Option<Subscription>,
}

impl MotionOracle {
    /// An oracle that only changes through [`MotionOracle::set`].
    pub fn fixed(reduced: bool) -> Self {
        Self {
            state: Rc::new(OracleState {
                reduced: Cell::new(reduced),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
            _media_listener: None,
        }
    }

    /// Binds to `window.matchMedia`. When the query cannot be evaluated the
    /// oracle reports "motion allowed" forever.
    pub fn from_media_query() -> Self {
        let Some(query) = reduced_motion_query() else {
            warn!("prefers-reduced-motion is not available, assuming motion is allowed");
            return Self::fixed(false);
        };

        let mut oracle = Self::fixed(query.matches());
        let state: Weak<OracleState> = Rc::downgrade(&oracle.state);
        let target = query.clone();
        let listener = Closure::<dyn Fn()>::new(move || {
            if let Some(state) = state.upgrade() {
                state.update(target.matches());
            }
        });

        match query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            Ok(()) => {
                oracle._media_listener = Some(Subscription::new(move || {
                    let _ = query.remove_event_listener_with_callback(
                        "change",
                        listener.as_ref().unchecked_ref(),
                    );
                }));
            }
            Err(_) => warn!("Could not listen for reduced motion changes"),
        }
        oracle
    }

    pub fn prefers_reduced(&self) -> bool {
        self.state.reduced.get()
    }

    /// Overrides the current preference, notifying subscribers if it changed.
    #[cfg(test)]
    pub fn set(&self, reduced: bool) {
        self.state.update(reduced);
    }

    pub fn subscribe(&self, on_change: Callback<bool>) -> Subscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state.listeners.borrow_mut().push((id, on_change));

        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Context handed down from the app root so every consumer shares one oracle.
#[derive(Clone)]
pub struct MotionContext(pub Rc<MotionOracle>);

impl MotionContext {
    pub fn from_media_query() -> Self {
        Self(Rc::new(MotionOracle::from_media_query()))
    }
}

impl PartialEq for MotionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Current reduced-motion preference, re-rendering the caller whenever it
/// changes. Outside a [`MotionContext`] the hook binds its own media query.
#[hook]
pub fn use_reduced_motion() -> bool {
    let context = use_context::<MotionContext>();
    let oracle = use_state(move || context.unwrap_or_else(MotionContext::from_media_query));
    let reduced = use_state(|| oracle.0.prefers_reduced());

    {
        let reduced = reduced.clone();
        let oracle = (*oracle).clone();
        use_effect_with_deps(
            move |_| {
                reduced.set(oracle.0.prefers_reduced());
                let subscription = oracle.0.subscribe(Callback::from(move |value: bool| {
                    reduced.set(value);
                }));
                move || {
                    debug!("Dropping reduced motion listener ({} active)", oracle.0.listener_count());
                    drop(subscription);
                }
            },
            (),
        );
    }

    *reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<bool>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |value: bool| sink.borrow_mut().push(value)))
    }

    #[test]
    fn reports_initial_preference() {
        assert!(MotionOracle::fixed(true).prefers_reduced());
        assert!(!MotionOracle::fixed(false).prefers_reduced());
    }

    #[test]
    fn notifies_subscribers_synchronously_on_change() {
        let oracle = MotionOracle::fixed(false);
        let (seen, callback) = recorder();
        let _subscription = oracle.subscribe(callback);

        oracle.set(true);
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(oracle.prefers_reduced());

        oracle.set(false);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unchanged_value_is_not_broadcast() {
        let oracle = MotionOracle::fixed(true);
        let (seen, callback) = recorder();
        let _subscription = oracle.subscribe(callback);

        oracle.set(true);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let oracle = MotionOracle::fixed(false);
        let (seen, callback) = recorder();
        let subscription = oracle.subscribe(callback);
        assert_eq!(oracle.listener_count(), 1);

        drop(subscription);
        assert_eq!(oracle.listener_count(), 0);

        oracle.set(true);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn subscription_outliving_oracle_is_harmless() {
        let oracle = MotionOracle::fixed(false);
        let (_, callback) = recorder();
        let subscription = oracle.subscribe(callback);
        drop(oracle);
        drop(subscription);
    }

    #[test]
    fn context_equality_is_identity() {
        let a = MotionContext(Rc::new(MotionOracle::fixed(false)));
        let b = MotionContext(Rc::new(MotionOracle::fixed(false)));
        assert!(a == a.clone());
        assert!(a != b);
    }
}
