//! Software rasterization of sketch strokes.
//!
//! The canvas keeps its drawing in a `tiny_skia::Pixmap`. The same pixels are
//! uploaded as the on-screen texture and handed to the export pipeline, so
//! a capture always matches what the user sees.

use std::sync::Arc;

use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage, imageops};
use tiny_skia::{
    FillRule, FilterQuality, IntSize, LineCap, LineJoin, Paint, Path, PathBuilder, Pattern, Pixmap, SpreadMode,
    Transform,
};

use crate::document::{Background, Document};
use crate::stroke::Stroke;
use crate::tool::Tool;

/// Canvas color beneath the background image and strokes.
pub const CANVAS_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Immutable copy of the canvas pixels at one point in time.
#[derive(Debug, Clone)]
pub struct SketchSnapshot {
    pixels: Arc<RgbaImage>,
}

impl SketchSnapshot {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Pixmap holding the canvas base and every committed stroke.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Pixels per canvas point.
    scale: f32,
    base: Pixmap,
    pixels: Pixmap,
}

impl Surface {
    /// `None` when the size is too large for a pixmap.
    pub fn new(width: u32, height: u32, scale: f32, background: Option<&Background>) -> Option<Self> {
        let base = build_base(width.max(1), height.max(1), background)?;
        Some(Self {
            scale,
            pixels: base.clone(),
            base,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Drops every stroke, leaving only the base.
    pub fn reset(&mut self) {
        self.pixels.data_mut().copy_from_slice(self.base.data());
    }

    /// Redraws the whole document from scratch.
    pub fn render_document(&mut self, document: &Document) {
        self.reset();
        for stroke in document.strokes() {
            self.draw_stroke(stroke);
        }
    }

    pub fn draw_stroke(&mut self, stroke: &Stroke) {
        self.draw_points(stroke.tool(), stroke.color(), stroke.thickness(), stroke.points());
    }

    /// Strokes a polyline given in canvas points with round caps and joins.
    ///
    /// The pen paints its color. The eraser paints the base back in.
    pub fn draw_points(&mut self, tool: Tool, color: Color32, thickness: f32, points: &[Pos2]) {
        let width = thickness * self.scale;
        let Some(outline) = stroke_outline(points, self.scale, width) else {
            return;
        };

        let mut paint = Paint::default();
        match tool {
            Tool::Pen => {
                let [r, g, b, a] = color.to_srgba_unmultiplied();
                paint.set_color_rgba8(r, g, b, a);
            }
            Tool::Eraser => {
                paint.shader = Pattern::new(
                    self.base.as_ref(),
                    SpreadMode::Pad,
                    FilterQuality::Nearest,
                    1.0,
                    Transform::identity(),
                );
            }
        }

        match outline {
            Outline::Dot(path) => {
                self.pixels
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            Outline::Line(path) => {
                let stroke = tiny_skia::Stroke {
                    width,
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Default::default()
                };
                self.pixels
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    pub fn snapshot(&self) -> SketchSnapshot {
        let width = self.width();
        let pixels = self.pixels.pixels();
        SketchSnapshot::new(RgbaImage::from_fn(width, self.height(), |x, y| {
            let color = pixels[(y * width + x) as usize].demultiply();
            Rgba([color.red(), color.green(), color.blue(), color.alpha()])
        }))
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.data(),
        )
    }
}

/// Geometry of one stroke in surface pixels.
enum Outline {
    /// A single tap, filled as a circle.
    Dot(Path),
    Line(Path),
}

fn stroke_outline(points: &[Pos2], scale: f32, width: f32) -> Option<Outline> {
    let mut scaled = points.iter().map(|p| (p.x * scale, p.y * scale));
    let (x, y) = scaled.next()?;
    if points.len() == 1 {
        return PathBuilder::from_circle(x, y, width / 2.0).map(Outline::Dot);
    }
    let mut builder = PathBuilder::new();
    builder.move_to(x, y);
    for (x, y) in scaled {
        builder.line_to(x, y);
    }
    builder.finish().map(Outline::Line)
}

/// Canvas color with the background scaled to fit, centered.
fn build_base(width: u32, height: u32, background: Option<&Background>) -> Option<Pixmap> {
    let mut base = RgbaImage::from_pixel(width, height, CANVAS_COLOR);
    if let Some(background) = background {
        let source = background.pixels();
        let ratio = (width as f32 / source.width() as f32).min(height as f32 / source.height() as f32);
        let fit_width = ((source.width() as f32 * ratio).round() as u32).clamp(1, width);
        let fit_height = ((source.height() as f32 * ratio).round() as u32).clamp(1, height);
        let resized = imageops::resize(source, fit_width, fit_height, imageops::FilterType::Triangle);
        let x = (width - fit_width) / 2;
        let y = (height - fit_height) / 2;
        imageops::overlay(&mut base, &resized, x as i64, y as i64);
    }
    // Opaque after compositing onto the canvas color, so already premultiplied.
    Pixmap::from_vec(base.into_raw(), IntSize::from_wh(width, height)?)
}
