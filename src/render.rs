use crate::field::Surface;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D implementation of [`Surface`].
///
/// Fill colour is set once and reused; per-dot opacity goes through
/// `globalAlpha` so the hot loop never formats a colour string.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    color: Option<[u8; 3]>,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement, dpr: f64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let mut surface = Self { ctx, color: None };
        surface.set_scale(dpr);
        Ok(surface)
    }

    /// Map CSS pixels onto the backing store. Must be reapplied whenever the
    /// canvas width or height is assigned.
    pub fn set_scale(&mut self, dpr: f64) {
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.color = None;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) {
        if !(center.is_finite() && radius.is_finite() && alpha.is_finite()) || radius <= 0.0 {
            return;
        }
        if self.color != Some(color) {
            let [r, g, b] = color;
            self.ctx
                .set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
            self.color = Some(color);
        }
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
