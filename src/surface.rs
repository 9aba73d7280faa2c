use crate::assets::ImageStore;
use crate::dom;
use crate::metrics;
use scrollview_core::{DrawCmd, DrawList, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Owned 2D canvas that replays a [`DrawList`].
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` while the canvas cannot hand out a 2D context (not mounted yet,
    /// or already bound to another context type).
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// Full redraw: size the backing store, reset the DPR transform, clear,
    /// then execute every command in order.
    pub fn draw(&self, viewport: &Viewport, list: &DrawList, images: &ImageStore) -> anyhow::Result<()> {
        dom::sync_canvas_backing_size(&self.canvas, viewport.backing_width, viewport.backing_height);
        let dpr = viewport.device_pixel_ratio as f64;
        self.ctx
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(js_err)?;
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        for cmd in list.cmds() {
            self.ctx.save();
            let res = self.draw_cmd(cmd, images);
            self.ctx.restore();
            res?;
        }
        Ok(())
    }

    fn draw_cmd(&self, cmd: &DrawCmd, images: &ImageStore) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Image(c) => {
                // not decoded yet: skip silently, a later tick picks it up
                let Some(img) = images.element(c.asset) else {
                    return Ok(());
                };
                ctx.set_global_alpha(c.alpha as f64);
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    c.rect.x as f64,
                    c.rect.y as f64,
                    c.rect.w as f64,
                    c.rect.h as f64,
                )
                .map_err(js_err)?;
            }
            DrawCmd::Glow(c) => {
                let (x, y, r) = (c.center.x as f64, c.center.y as f64, c.radius as f64);
                let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, r).map_err(js_err)?;
                gradient.add_color_stop(0.0, &c.color.to_css()).map_err(js_err)?;
                gradient.add_color_stop(1.0, "transparent").map_err(js_err)?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.begin_path();
                ctx.arc(x, y, r, 0.0, TAU).map_err(js_err)?;
                ctx.fill();
            }
            DrawCmd::Ring(c) => {
                ctx.set_stroke_style_str(&c.stroke.to_css());
                ctx.set_line_width(c.line_width as f64);
                set_dash(ctx, c.dash)?;
                ctx.begin_path();
                ctx.arc(c.center.x as f64, c.center.y as f64, c.radius as f64, 0.0, TAU)
                    .map_err(js_err)?;
                ctx.stroke();
            }
            DrawCmd::Line(c) => {
                ctx.set_stroke_style_str(&c.stroke.to_css());
                ctx.set_line_width(c.line_width as f64);
                set_dash(ctx, None)?;
                ctx.begin_path();
                ctx.move_to(c.from.x as f64, c.from.y as f64);
                ctx.line_to(c.to.x as f64, c.to.y as f64);
                ctx.stroke();
            }
            DrawCmd::Label(c) => {
                ctx.set_fill_style_str(&c.color.to_css());
                ctx.set_font(&metrics::label_font(c.font_px));
                set_letter_spacing(ctx, c.letter_spacing)?;
                ctx.fill_text(&c.text, c.origin.x as f64, c.origin.y as f64)
                    .map_err(js_err)?;
            }
        }
        Ok(())
    }
}

fn set_dash(ctx: &web::CanvasRenderingContext2d, dash: Option<[f32; 2]>) -> anyhow::Result<()> {
    let segments = match dash {
        Some([on, off]) => js_sys::Array::of2(&JsValue::from_f64(on as f64), &JsValue::from_f64(off as f64)),
        None => js_sys::Array::new(),
    };
    ctx.set_line_dash(&segments).map_err(js_err)
}

// `letterSpacing` is newer than the web-sys canvas bindings; engines without
// it simply ignore the property.
fn set_letter_spacing(ctx: &web::CanvasRenderingContext2d, px: f32) -> anyhow::Result<()> {
    js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("letterSpacing"),
        &JsValue::from_str(&metrics::letter_spacing(px)),
    )
    .map_err(js_err)?;
    Ok(())
}
