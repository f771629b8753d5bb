//! requestAnimationFrame driver.
//!
//! The simulator has no clock of its own; this loop is the only thing that
//! calls it per frame. Dropping or cancelling the loop stops scheduling and
//! releases the JS closure.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

struct Inner {
    request_id: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn schedule(&self) -> Result<(), JsValue> {
        let closure = self.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return Ok(()); // cancelled
        };
        let id = web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .request_animation_frame(closure.as_ref().unchecked_ref())?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // The closure may be the caller; wasm-bindgen defers the free until
        // it returns.
        self.closure.borrow_mut().take();
    }
}

/// Owns the scheduling handle. One callback per animation frame until
/// [`FrameLoop::cancel`] or drop.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    /// Start calling `on_frame(timestamp_ms)` once per animation frame.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let inner = Rc::new(Inner {
            request_id: Cell::new(None),
            closure: RefCell::new(None),
        });

        // Weak, so the closure never keeps its own owner alive.
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            on_frame(timestamp);
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.request_id.set(None);
            if let Err(e) = inner.schedule() {
                web_sys::console::error_1(&e);
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.closure.borrow_mut() = Some(closure);
        inner.schedule()?;
        log::debug!("Frame loop started");

        Ok(Self { inner })
    }

    pub fn is_active(&self) -> bool {
        self.inner.closure.borrow().is_some()
    }

    pub fn cancel(&self) {
        if self.is_active() {
            log::debug!("Frame loop cancelled");
        }
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
