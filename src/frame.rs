use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A self-rescheduling requestAnimationFrame loop.
///
/// `stop` (or dropping the loop) cancels the pending frame and releases the
/// callback, which also breaks the closure's reference to itself. It must not
/// be called from inside `on_frame`.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            on_frame();
            pending_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(request_frame(&tick));

        Self { tick, pending }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
