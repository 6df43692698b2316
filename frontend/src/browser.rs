//! Scoped handles over browser callbacks.
//!
//! Every registration made here is owned by a Rust value and released in
//! its `Drop`, so a component only has to keep the handle inside its effect
//! and let the effect cleanup drop it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

/// Runs an action the first time it is tripped and never again.
pub struct RevealLatch<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> RevealLatch<F> {
    pub fn new(action: F) -> Self {
        Self { action: Some(action) }
    }

    /// Returns true only on the call that actually ran the action.
    pub fn trip(&mut self) -> bool {
        match self.action.take() {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    pub fn is_tripped(&self) -> bool {
        self.action.is_none()
    }
}

/// Whether the host exposes `IntersectionObserver` at all.
pub fn supports_intersection(window: &Window) -> bool {
    let global: &JsValue = window.as_ref();
    Reflect::has(global, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// An entry counts only once the visible fraction has reached `threshold`.
/// Hosts also report entries that are intersecting below it, e.g. at the
/// initial observation.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// One-shot viewport watch over a single element. The element is unobserved
/// as soon as it intersects, and the observer is disconnected on drop.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn observe(
        element: &Element,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new(on_visible);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    observer.unobserve(&entry.target());
                    if latch.trip() {
                        debug!("Reveal latch tripped at threshold {}", threshold);
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` loop. `on_frame` receives the
/// frame timestamp and returns whether another frame is wanted. Dropping
/// the loop cancels any pending frame and frees the callback.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(window: Window, mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    pending.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>)
        };

        pending.set(window.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
        *callback.borrow_mut() = Some(closure);

        Self { window, pending, callback }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds an Rc to its own slot; taking it breaks the cycle.
        self.callback.borrow_mut().take();
    }
}
