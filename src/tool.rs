use serde::{Deserialize, Serialize};

/// The active interaction mode. Exactly one tool is active at a time; it
/// changes only through explicit toolbar selection or a stage clear (which
/// resets to `Select`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Circle,
    Pencil,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Rectangle, Tool::Circle, Tool::Pencil];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Pencil => "Pencil",
        }
    }

    /// Whether pointer gestures draw shapes (anything but select mode).
    pub fn is_drawing_tool(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}
