use handfx_core::{Color, CompositeOp, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by the output canvas' 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }
    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn reset_transform(&mut self) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }
    fn set_composite(&mut self, op: CompositeOp) {
        _ = self.ctx.set_global_composite_operation(op.as_str());
    }
    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
    }
    fn set_stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.css());
    }
    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }
    fn set_shadow(&mut self, color: Color, blur: f32) {
        self.ctx.set_shadow_color(&color.css());
        self.ctx.set_shadow_blur(blur as f64);
    }
    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, start as f64, end as f64);
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
