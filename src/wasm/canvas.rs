use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::screen::{DrawCommand, ScreenFrame, TextAlign, CANVAS_SIZE};

/// Offscreen canvas the screen image is painted on before upload.
pub struct ScreenCanvas {
    pub canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl ScreenCanvas {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(CANVAS_SIZE as u32);
        canvas.set_height(CANVAS_SIZE as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d canvas not supported")?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    pub fn paint(&self, frame: &ScreenFrame) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for cmd in &frame.commands {
            match cmd {
                DrawCommand::Clear => {
                    ctx.clear_rect(0.0, 0.0, f64::from(frame.width), f64::from(frame.height));
                }
                DrawCommand::LinearGradient { from, to, stops } => {
                    let g = ctx.create_linear_gradient(
                        f64::from(from.0),
                        f64::from(from.1),
                        f64::from(to.0),
                        f64::from(to.1),
                    );
                    for (offset, color) in stops {
                        g.add_color_stop(*offset, color)?;
                    }
                    ctx.set_fill_style_canvas_gradient(&g);
                    ctx.fill_rect(0.0, 0.0, f64::from(frame.width), f64::from(frame.height));
                }
                DrawCommand::FillRect { color, x, y, width, height } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(f64::from(*x), f64::from(*y), f64::from(*width), f64::from(*height));
                }
                DrawCommand::Text { text, font, color, align, x, y } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align(match align {
                        TextAlign::Center => "center",
                    });
                    ctx.fill_text(text, f64::from(*x), f64::from(*y))?;
                }
            }
        }
        Ok(())
    }
}
