use crate::field::CanvasOrigin;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(1.0)
}

#[inline]
pub fn touch_capable() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

/// Canvas size in CSS pixels plus the ratio used for its backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f64,
    /// True when the backing store was resized, which also resets the 2D
    /// context transform.
    pub backing_changed: bool,
}

/// Size the canvas to its container and its backing store to CSS size times
/// devicePixelRatio. The backing store is only touched when it differs.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = device_pixel_ratio();
    let (css_w, css_h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width(), parent.client_height()),
        None => (canvas.client_width(), canvas.client_height()),
    };
    let css_w = css_w.max(0);
    let css_h = css_h.max(0);

    let w_px = (css_w as f64 * dpr).round() as u32;
    let h_px = (css_h as f64 * dpr).round() as u32;
    let backing_changed = canvas.width() != w_px || canvas.height() != h_px;
    if backing_changed {
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    Viewport {
        css_width: css_w as f32,
        css_height: css_h as f32,
        dpr,
        backing_changed,
    }
}

/// Client-space origin of the canvas, or `None` while it is detached.
pub fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Option<CanvasOrigin> {
    if !canvas.is_connected() {
        return None;
    }
    let rect = canvas.get_bounding_client_rect();
    Some(CanvasOrigin {
        left: rect.left() as f32,
        top: rect.top() as f32,
    })
}

/// A registered DOM listener. Dropping it unregisters the callback and frees
/// the closure.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
