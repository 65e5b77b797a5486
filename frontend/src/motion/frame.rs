use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

type FrameSlot = RefCell<Option<AnimationFrame>>;
type OnFrame = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// A `requestAnimationFrame` loop. `on_frame` receives the frame timestamp in
/// milliseconds and returns whether another frame is wanted. Dropping the
/// loop cancels any pending frame.
pub struct FrameLoop {
    frame: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn start(on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let frame = Rc::new(RefCell::new(None));
        let on_frame: OnFrame = Rc::new(RefCell::new(on_frame));
        request_next(Rc::downgrade(&frame), on_frame);
        Self { frame }
    }
}

fn request_next(slot: Weak<FrameSlot>, on_frame: OnFrame) {
    let Some(frame) = slot.upgrade() else {
        return;
    };
    let next = request_animation_frame(move |timestamp| {
        let again = (on_frame.borrow_mut())(timestamp);
        if again {
            request_next(slot, on_frame);
        } else if let Some(frame) = slot.upgrade() {
            frame.borrow_mut().take();
        }
    });
    *frame.borrow_mut() = Some(next);
}
