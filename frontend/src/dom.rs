use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::motion::preference::Subscription;

/// Adds a `window` listener for `event`, removed when the returned guard drops.
pub fn listen_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Subscription> {
    let window = web_sys::window()?;
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("Could not listen for {} events", event);
        return None;
    }
    Some(Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }))
}

/// Hides body overflow while held, restoring the previous value on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().set_property("overflow", &self.previous);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
