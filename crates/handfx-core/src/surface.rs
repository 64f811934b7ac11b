//! Immediate-mode 2D drawing surface.
//!
//! The renderers only speak to this trait. The web frontend implements it on
//! top of `CanvasRenderingContext2d`; [`RecordingSurface`] keeps a command log
//! for host-side tests.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hex(&'static str),
    Named(&'static str),
    Rgb(u8, u8, u8),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl(f32, f32, f32),
}

impl Color {
    pub const BLACK: Color = Color::Named("black");
    pub const CYAN: Color = Color::Hex("#00ffff");

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(s) | Color::Named(s) => f.write_str(s),
            Color::Rgb(r, g, b) => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Hsl(h, s, l) => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeOp {
    SourceOver,
    Lighter,
}

impl CompositeOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeOp::SourceOver => "source-over",
            CompositeOp::Lighter => "lighter",
        }
    }
}

pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn save(&mut self);
    fn restore(&mut self);
    fn reset_transform(&mut self);

    fn set_alpha(&mut self, alpha: f32);
    fn set_composite(&mut self, op: CompositeOp);
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_shadow(&mut self, color: Color, blur: f32);
    fn set_font(&mut self, font: &str);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    /// Reset drawing state and erase the whole surface to transparent.
    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.save();
        self.reset_transform();
        self.set_composite(CompositeOp::SourceOver);
        self.set_alpha(1.0);
        self.set_shadow(Color::BLACK, 0.0);
        self.clear_rect(0.0, 0.0, w, h);
        self.restore();
    }

    /// Paint the whole surface with a fully opaque color in one pass.
    fn fill_opaque(&mut self, color: Color) {
        let (w, h) = (self.width(), self.height());
        self.save();
        self.set_composite(CompositeOp::SourceOver);
        self.set_alpha(1.0);
        self.set_fill(color);
        self.fill_rect(0.0, 0.0, w, h);
        self.restore();
    }

    /// Full circle as a closed path; the caller strokes or fills it.
    fn circle(&mut self, x: f32, y: f32, radius: f32) {
        self.begin_path();
        self.arc(x, y, radius.max(0.0), 0.0, std::f32::consts::TAU);
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.stroke();
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    ResetTransform,
    Alpha(f32),
    Composite(CompositeOp),
    Fill(Color),
    Stroke(Color),
    LineWidth(f32),
    Shadow(Color, f32),
    Font(String),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Arc { x: f32, y: f32, radius: f32 },
    StrokePath,
    FillPath,
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    Text { text: String, x: f32, y: f32 },
}

impl DrawCmd {
    /// Commands that put pixels on the surface.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCmd::StrokePath
                | DrawCmd::FillPath
                | DrawCmd::FillRect { .. }
                | DrawCmd::Text { .. }
        )
    }
}

/// Headless surface that logs every call and tracks the current alpha,
/// fill and composite mode so paints can be inspected with their state.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCmd>,
    state: PaintState,
    stack: Vec<PaintState>,
}

/// Drawing state in effect when a paint command was issued.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintState {
    pub alpha: f32,
    pub fill: Color,
    pub composite: CompositeOp,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            fill: Color::BLACK,
            composite: CompositeOp::SourceOver,
        }
    }
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            state: PaintState::default(),
            stack: Vec::new(),
        }
    }

    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }

    pub fn current_state(&self) -> PaintState {
        self.state
    }

    /// True when the recorded sequence contains an opaque, source-over fill
    /// covering the whole surface.
    pub fn has_opaque_full_fill(&self) -> bool {
        self.opaque_full_fill_position().is_some()
    }

    /// Index of the first opaque full-surface fill, replaying the state
    /// stack to know alpha and composite at that point.
    pub fn opaque_full_fill_position(&self) -> Option<usize> {
        let mut state = PaintState::default();
        let mut stack: Vec<PaintState> = Vec::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            match cmd {
                DrawCmd::Save => stack.push(state),
                DrawCmd::Restore => state = stack.pop().unwrap_or_default(),
                DrawCmd::Alpha(a) => state.alpha = *a,
                DrawCmd::Fill(c) => state.fill = *c,
                DrawCmd::Composite(op) => state.composite = *op,
                DrawCmd::FillRect { x, y, w, h } => {
                    let covers = *x <= 0.0 && *y <= 0.0 && *w >= self.width && *h >= self.height;
                    if covers && state.alpha >= 1.0 && state.composite == CompositeOp::SourceOver {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn save(&mut self) {
        self.stack.push(self.state);
        self.push(DrawCmd::Save);
    }
    fn restore(&mut self) {
        self.state = self.stack.pop().unwrap_or_default();
        self.push(DrawCmd::Restore);
    }
    fn reset_transform(&mut self) {
        self.push(DrawCmd::ResetTransform);
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
        self.push(DrawCmd::Alpha(alpha));
    }
    fn set_composite(&mut self, op: CompositeOp) {
        self.state.composite = op;
        self.push(DrawCmd::Composite(op));
    }
    fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
        self.push(DrawCmd::Fill(color));
    }
    fn set_stroke(&mut self, color: Color) {
        self.push(DrawCmd::Stroke(color));
    }
    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCmd::LineWidth(width));
    }
    fn set_shadow(&mut self, color: Color, blur: f32) {
        self.push(DrawCmd::Shadow(color, blur));
    }
    fn set_font(&mut self, font: &str) {
        self.push(DrawCmd::Font(font.to_string()));
    }
    fn begin_path(&mut self) {
        self.push(DrawCmd::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCmd::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCmd::LineTo(x, y));
    }
    fn arc(&mut self, x: f32, y: f32, radius: f32, _start: f32, _end: f32) {
        self.push(DrawCmd::Arc { x, y, radius });
    }
    fn stroke(&mut self) {
        self.push(DrawCmd::StrokePath);
    }
    fn fill(&mut self) {
        self.push(DrawCmd::FillPath);
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCmd::FillRect { x, y, w, h });
    }
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCmd::ClearRect { x, y, w, h });
    }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
