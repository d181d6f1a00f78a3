use serde::{Deserialize, Serialize};

/// The active drawing mode of the sketch canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
        }
    }

    /// The tool selected by the next press of the tool button.
    pub fn next(self) -> Tool {
        match self {
            Tool::Pen => Tool::Eraser,
            Tool::Eraser => Tool::Pen,
        }
    }

    pub fn is_eraser(self) -> bool {
        self == Tool::Eraser
    }
}
