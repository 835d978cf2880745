#![cfg(target_arch = "wasm32")]
use crate::field::{FieldController, FieldOptions, Surface};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod field;
mod frame;
mod render;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("listener wiring failed: {0}")]
    Wiring(String),
}

impl From<MountError> for JsValue {
    fn from(e: MountError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dot-field loaded");
    Ok(())
}

// Field order is drop order: stop the frame loop before the listeners go.
struct Mounted {
    field: Rc<RefCell<FieldController>>,
    _frame: frame::FrameLoop,
    _listeners: Vec<dom::EventListener>,
}

/// JS handle for one dot-field background bound to a canvas element.
///
/// `mount` wires listeners and starts the frame loop; `unmount` (or freeing
/// the handle) tears all of it down again.
#[wasm_bindgen]
pub struct DotField {
    canvas_id: String,
    options: FieldOptions,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl DotField {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> DotField {
        DotField {
            canvas_id: canvas_id.to_string(),
            options: FieldOptions::default(),
            mounted: None,
        }
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.options.color = [r, g, b];
        self.push_options();
    }

    pub fn set_breakpoint(&mut self, px: f32) {
        if px.is_finite() && px > 0.0 {
            self.options.breakpoint = px;
            self.push_options();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn dot_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.field.borrow().dots().len())
            .unwrap_or(0)
    }

    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Ok(());
        }
        let mounted = mount_field(&self.canvas_id, self.options.clone())?;
        {
            let field = mounted.field.borrow();
            log::info!(
                "[mount] #{} dots={} class={:?} touch={}",
                self.canvas_id,
                field.dots().len(),
                field.profile().class,
                field.options().touch_capable
            );
        }
        self.mounted = Some(mounted);
        Ok(())
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("[unmount] #{}", self.canvas_id);
        }
    }
}

impl DotField {
    fn push_options(&self) {
        if let Some(m) = &self.mounted {
            let mut field = m.field.borrow_mut();
            let mut options = self.options.clone();
            options.touch_capable = field.options().touch_capable;
            field.set_options(options);
        }
    }
}

fn mount_field(canvas_id: &str, mut options: FieldOptions) -> Result<Mounted, MountError> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;

    options.touch_capable = dom::touch_capable();
    let field = Rc::new(RefCell::new(FieldController::new(
        options,
        StdRng::from_entropy(),
    )));
    let surface: events::resize::SurfaceSlot = Rc::new(RefCell::new(None));
    events::apply_viewport(&canvas, &field, &surface);

    // Any early return below drops what was registered so far.
    let wiring = |e: anyhow::Error| MountError::Wiring(format!("{:#}", e));
    let mut listeners =
        vec![events::wire_resize(&window, &canvas, &field, &surface).map_err(wiring)?];
    listeners.extend(
        events::wire_pointer_handlers(&window, &document, &canvas, &field).map_err(wiring)?,
    );

    let frame = {
        let canvas = canvas.clone();
        let field = field.clone();
        let started = Instant::now();
        let mut warned = false;
        frame::FrameLoop::start(move || {
            events::apply_viewport(&canvas, &field, &surface);
            let mut slot = surface.borrow_mut();
            if slot.is_none() {
                match render::CanvasSurface::acquire(&canvas, dom::device_pixel_ratio()) {
                    Ok(s) => *slot = Some(s),
                    Err(e) if !warned => {
                        log::warn!("[frame] drawing disabled: {:#}", e);
                        warned = true;
                    }
                    Err(_) => {}
                }
            }
            let elapsed = started.elapsed().as_secs_f32();
            let target = slot.as_mut().map(|s| s as &mut dyn Surface);
            field.borrow_mut().step(elapsed, target);
        })
    };

    Ok(Mounted {
        field,
        _frame: frame,
        _listeners: listeners,
    })
}
