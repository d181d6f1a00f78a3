//! The sketch widget: stroke capture, rendering and clearing.

use std::path::{Path, PathBuf};

use egui::{Color32, Key, Modifiers, Pos2, Rect, Sense, TextureHandle, TextureOptions, pos2};
use image::RgbaImage;

use crate::document::{Background, Document};
use crate::error::ExportResult;
use crate::export::capture::capture_to_file;
use crate::export::{CaptureFormat, CaptureOptions};
use crate::raster::{CANVAS_COLOR, SketchSnapshot, Surface};
use crate::stroke::MutableStroke;
use crate::tool::Tool;

/// Canvas size used when a snapshot is taken before the first layout.
pub const FALLBACK_SIZE: [u32; 2] = [360, 640];

/// Emitted when the widget writes the sketch to disk on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSaveEvent {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Result of showing the canvas for one frame.
pub struct SketchResponse {
    pub response: egui::Response,
    pub saved: Option<SketchSaveEvent>,
}

pub struct SketchCanvas {
    document: Document,
    surface: Option<Surface>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    current: Option<MutableStroke>,
    pen_width: f32,
    eraser_width: f32,
}

impl SketchCanvas {
    pub fn new(pen_width: f32, eraser_width: f32) -> Self {
        Self {
            document: Document::new(),
            surface: None,
            texture: None,
            texture_dirty: true,
            current: None,
            pen_width,
            eraser_width,
        }
    }

    /// Draw `path` beneath the strokes. A file that cannot be read leaves the
    /// canvas white.
    pub fn set_background_path(&mut self, path: Option<&Path>) {
        let background = path.and_then(|path| match Background::load(path) {
            Ok(background) => Some(background),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        });
        self.document.set_background(background);
        self.rebuild_surface();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn width_for(&self, tool: Tool) -> f32 {
        match tool {
            Tool::Pen => self.pen_width,
            Tool::Eraser => self.eraser_width,
        }
    }

    /// Remove every stroke, including one being drawn.
    pub fn clear(&mut self) {
        self.current = None;
        self.document.clear();
        if let Some(surface) = &mut self.surface {
            surface.reset();
        }
        self.texture_dirty = true;
        log::debug!("Sketch cleared");
    }

    pub fn begin_stroke(&mut self, tool: Tool, color: Color32, pos: Pos2) {
        let mut stroke = MutableStroke::new(tool, color, self.width_for(tool));
        stroke.add_point(pos);
        self.current = Some(stroke);
    }

    pub fn extend_stroke(&mut self, pos: Pos2) {
        if let Some(stroke) = &mut self.current {
            stroke.add_point(pos);
        }
    }

    /// Commit the stroke being drawn.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.current.take() else {
            return;
        };
        if stroke.is_empty() {
            return;
        }
        let stroke = stroke.to_stroke_ref();
        if let Some(surface) = &mut self.surface {
            surface.draw_stroke(&stroke);
            self.texture_dirty = true;
        }
        self.document.add_stroke(stroke);
    }

    /// Copy of the pixels as currently shown.
    pub fn snapshot(&mut self) -> SketchSnapshot {
        if self.surface.is_none() {
            let [width, height] = FALLBACK_SIZE;
            self.resize(width, height, 1.0);
        }
        match &self.surface {
            Some(surface) => surface.snapshot(),
            None => SketchSnapshot::new(RgbaImage::from_pixel(FALLBACK_SIZE[0], FALLBACK_SIZE[1], CANVAS_COLOR)),
        }
    }

    /// Write the sketch as a PNG into `directory` and describe the result.
    pub fn save_sketch(&mut self, directory: &Path) -> ExportResult<SketchSaveEvent> {
        let snapshot = self.snapshot();
        let options = CaptureOptions {
            format: CaptureFormat::Png,
            quality: 100,
            directory: directory.to_path_buf(),
        };
        let path = capture_to_file(&snapshot, &options)?;
        Ok(SketchSaveEvent {
            path,
            width: snapshot.width(),
            height: snapshot.height(),
        })
    }

    /// Make the surface match the canvas size in pixels.
    pub fn resize(&mut self, width: u32, height: u32, scale: f32) {
        let (width, height) = (width.max(1), height.max(1));
        if let Some(surface) = &self.surface
            && surface.width() == width
            && surface.height() == height
            && surface.scale() == scale
        {
            return;
        }
        log::debug!("Rasterizing sketch at {}x{} (scale {})", width, height, scale);
        self.surface = Surface::new(width, height, scale, self.document.background());
        match &mut self.surface {
            Some(surface) => surface.render_document(&self.document),
            None => log::warn!("Canvas of {}x{} is too large to rasterize", width, height),
        }
        self.texture_dirty = true;
    }

    fn rebuild_surface(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.resize(surface.width(), surface.height(), surface.scale());
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        if !self.texture_dirty {
            return;
        }
        let Some(surface) = &self.surface else {
            return;
        };
        let image = surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => self.texture = Some(ctx.load_texture("sketch-canvas", image, TextureOptions::LINEAR)),
        }
        self.texture_dirty = false;
    }

    /// Show the canvas filling the available space.
    ///
    /// `save_directory` receives the file written by the save shortcut.
    pub fn show(&mut self, ui: &mut egui::Ui, tool: Tool, color: Color32, save_directory: &Path) -> SketchResponse {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let scale = ui.ctx().pixels_per_point();
        self.resize(
            (rect.width() * scale).round() as u32,
            (rect.height() * scale).round() as u32,
            scale,
        );

        let to_canvas = |p: Pos2| pos2(p.x - rect.min.x, p.y - rect.min.y);
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.begin_stroke(tool, color, to_canvas(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.extend_stroke(to_canvas(pos));
            }
        }
        if response.drag_stopped() {
            self.end_stroke();
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.begin_stroke(tool, color, to_canvas(pos));
                self.end_stroke();
            }
        }

        self.sync_texture(ui.ctx());
        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        self.paint_preview(&painter, rect.min);

        let saved = if response.hovered() && ui.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::S)) {
            match self.save_sketch(save_directory) {
                Ok(event) => Some(event),
                Err(err) => {
                    log::error!("Saving the sketch failed: {}", err);
                    None
                }
            }
        } else {
            None
        };

        SketchResponse { response, saved }
    }

    fn paint_preview(&self, painter: &egui::Painter, origin: Pos2) {
        let Some(stroke) = &self.current else {
            return;
        };
        let color = match stroke.tool() {
            Tool::Pen => stroke.color(),
            // Translucent preview showing the area being erased.
            Tool::Eraser => Color32::from_rgba_unmultiplied(255, 255, 255, 128),
        };
        let points: Vec<Pos2> = stroke
            .points()
            .iter()
            .map(|p| pos2(p.x + origin.x, p.y + origin.y))
            .collect();
        match points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single, stroke.thickness() / 2.0, color);
            }
            _ => {
                painter.add(egui::Shape::line(points, egui::Stroke::new(stroke.thickness(), color)));
            }
        }
    }
}
