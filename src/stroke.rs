use egui::{Color32, Pos2};
use std::sync::Arc;

use crate::tool::Tool;

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
    tool: Tool,
}

// Mutable stroke for editing
#[derive(Debug)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
    tool: Tool,
}

pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(tool: Tool, color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
            tool,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }
}

impl MutableStroke {
    pub fn new(tool: Tool, color: Color32, thickness: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            thickness,
            tool,
        }
    }

    /// Adds a point, skipping exact repeats of the last one.
    pub fn add_point(&mut self, point: Pos2) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.tool, self.color, self.thickness, self.points.clone())
    }

    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_mutable_stroke_skips_repeated_points() {
        let mut stroke = MutableStroke::new(Tool::Pen, Color32::RED, 4.0);
        stroke.add_point(pos2(1.0, 1.0));
        stroke.add_point(pos2(1.0, 1.0));
        stroke.add_point(pos2(2.0, 3.0));
        assert_eq!(stroke.points().len(), 2);

        let frozen = stroke.to_stroke();
        assert_eq!(frozen.tool(), Tool::Pen);
        assert_eq!(frozen.color(), Color32::RED);
        assert_eq!(frozen.points(), stroke.points());
    }
}
