use crate::dom::{self, EventListener};
use crate::field::FieldController;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared slot for the lazily acquired 2D surface.
pub type SurfaceSlot = Rc<RefCell<Option<CanvasSurface>>>;

/// Re-measure the canvas, resize its backing store if needed and hand the CSS
/// size to the controller, which skips the rebuild when nothing changed.
pub fn apply_viewport(
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<FieldController>>,
    surface: &SurfaceSlot,
) {
    let vp = dom::sync_canvas_backing_size(canvas);
    if vp.backing_changed {
        if let Some(s) = surface.borrow_mut().as_mut() {
            s.set_scale(vp.dpr);
        }
    }
    let rebuilt = field.borrow_mut().resize(vp.css_width, vp.css_height);
    if rebuilt {
        let f = field.borrow();
        let (cols, rows) = f.grid();
        let (width, height) = f.size();
        log::debug!(
            "[resize] {}x{} @{}x class={:?} grid={}x{} dots={}",
            width,
            height,
            vp.dpr,
            f.profile().class,
            cols,
            rows,
            f.dots().len()
        );
    }
}

pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<FieldController>>,
    surface: &SurfaceSlot,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    let field = field.clone();
    let surface = surface.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        apply_viewport(&canvas, &field, &surface);
    })
}
