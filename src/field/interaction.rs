use glam::Vec2;

/// Top-left corner of the canvas in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasOrigin {
    pub left: f32,
    pub top: f32,
}

impl CanvasOrigin {
    #[inline]
    pub fn to_local(self, client: Vec2) -> Vec2 {
        Vec2::new(client.x - self.left, client.y - self.top)
    }
}

/// Latest pointer or touch location in canvas-local CSS pixels.
///
/// Events are applied as they arrive; the frame step reads the result once
/// per frame. `origin` is `None` whenever the canvas is not mounted, in which
/// case the point is forced to none.
#[derive(Clone, Debug, Default)]
pub struct InteractionTracker {
    point: Option<Vec2>,
}

impl InteractionTracker {
    #[inline]
    pub fn point(&self) -> Option<Vec2> {
        self.point
    }

    pub fn pointer_moved(&mut self, client: Vec2, origin: Option<CanvasOrigin>) {
        self.point = match origin {
            Some(o) if client.is_finite() => Some(o.to_local(client)),
            Some(_) => self.point,
            None => None,
        };
    }

    /// Touch start/move. `first_touch` is `None` when the event carried no
    /// touches, which leaves the current point untouched.
    pub fn touched(&mut self, first_touch: Option<Vec2>, origin: Option<CanvasOrigin>) {
        match (first_touch, origin) {
            (_, None) => self.point = None,
            (Some(client), Some(o)) if client.is_finite() => self.point = Some(o.to_local(client)),
            _ => {}
        }
    }

    /// Touch end, pointer leaving the canvas or the document.
    pub fn clear(&mut self) {
        self.point = None;
    }
}
