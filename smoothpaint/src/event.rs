use crate::graphics::PixelPos;

#[derive(PartialEq, Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Other,
}

impl PointerAction {
    /// Down and Move, the phases during which a stroke is being drawn.
    pub fn is_drawing(&self) -> bool {
        use PointerAction::*;
        matches!(self, Down | Move)
    }
}

#[derive(Default, PartialEq, Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub enum ToolType {
    Stylus,
    Finger,
    Mouse,
    #[default]
    Other,
}

impl ToolType {
    pub fn is_stylus(&self) -> bool {
        matches!(self, ToolType::Stylus)
    }
}

/// One delivered pointer sample plus whatever the hardware buffered since the last one.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub location: PixelPos,
    #[serde(default)]
    pub tool: ToolType,
    #[serde(default)]
    pub history: Vec<PixelPos>,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32, tool: ToolType) -> Self {
        PointerEvent {
            action,
            location: PixelPos { x, y },
            tool,
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.history.extend(history.into_iter().map(PixelPos::from));
        self
    }

    /// Historical samples in capture order, then the live one.
    pub fn samples(&self) -> impl Iterator<Item = PixelPos> + '_ {
        self.history
            .iter()
            .copied()
            .chain(std::iter::once(self.location))
    }
}
