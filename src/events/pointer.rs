use crate::dom::{self, EventListener};
use crate::field::FieldController;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer and touch listeners feeding the controller's interaction tracker.
///
/// Listeners sit on the window because the field usually renders behind
/// page content that would otherwise swallow the events.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<FieldController>>,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::with_capacity(6);

    {
        let canvas = canvas.clone();
        let field = field.clone();
        listeners.push(EventListener::new(window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            field
                .borrow_mut()
                .tracker_mut()
                .pointer_moved(client, dom::canvas_origin(&canvas));
        })?);
    }

    for kind in ["touchstart", "touchmove"] {
        let canvas = canvas.clone();
        let field = field.clone();
        listeners.push(EventListener::new(window, kind, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let first = ev
                .touches()
                .get(0)
                .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
            field
                .borrow_mut()
                .tracker_mut()
                .touched(first, dom::canvas_origin(&canvas));
        })?);
    }

    for kind in ["touchend", "touchcancel"] {
        let field = field.clone();
        listeners.push(EventListener::new(window, kind, move |_ev| {
            field.borrow_mut().tracker_mut().clear();
        })?);
    }

    // Leaving the document shows up as a mouseout with no related target.
    {
        let field = field.clone();
        listeners.push(EventListener::new(document, "mouseout", move |ev| {
            let left_document = ev
                .dyn_ref::<web::MouseEvent>()
                .map(|m| m.related_target().is_none())
                .unwrap_or(false);
            if left_document {
                field.borrow_mut().tracker_mut().clear();
            }
        })?);
    }

    Ok(listeners)
}
