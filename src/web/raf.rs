//! `requestAnimationFrame` loop.
//!
//! [`FrameLoop`] calls its callback once per display frame until stopped or
//! dropped. The JS closure re-registers itself from inside its own body, so
//! it is kept in a `RefCell` separate from the callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct Inner {
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut()>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

pub(crate) struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    /// A loop that is not yet running.
    pub(crate) fn new(callback: impl FnMut() + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Start requesting frames. No-op if already running.
    pub(crate) fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            inner.callback.borrow_mut()();
            if inner.running.get()
                && let Some(ref closure) = *inner.closure.borrow()
            {
                inner.raf_id.set(request_animation_frame(closure.as_ref().unchecked_ref()));
            }
        }) as Box<dyn FnMut(f64)>);

        self.inner.raf_id.set(request_animation_frame(closure.as_ref().unchecked_ref()));
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Cancel the pending frame. Can be restarted.
    pub(crate) fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.closure.borrow_mut().take();
    }
}
