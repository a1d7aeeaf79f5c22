use crate::graphics::PixelPos;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(PixelPos),
    LineTo(PixelPos),
}

impl PathCommand {
    pub fn pos(&self) -> PixelPos {
        match self {
            PathCommand::MoveTo(pos) | PathCommand::LineTo(pos) => *pos,
        }
    }
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathCommand::MoveTo(pos) => write!(f, "M{pos}"),
            PathCommand::LineTo(pos) => write!(f, "L{pos}"),
        }
    }
}

/// A captured stroke: one `MoveTo` followed by `LineTo`s in capture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    commands: Vec<PathCommand>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn move_to(&mut self, pos: PixelPos) {
        self.commands.push(PathCommand::MoveTo(pos));
    }

    fn line_to(&mut self, pos: PixelPos) {
        self.commands.push(PathCommand::LineTo(pos));
    }

    /// None for an empty path.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let capacity = self.commands.len() + 1;
        let mut builder = tiny_skia::PathBuilder::with_capacity(capacity, capacity);
        for command in self.commands.iter() {
            match command {
                PathCommand::MoveTo(pos) => builder.move_to(pos.x, pos.y),
                PathCommand::LineTo(pos) => builder.line_to(pos.x, pos.y),
            }
        }

        // a lone MoveTo doesn't survive PathBuilder::finish, double it up so round caps still
        // produce a dot
        if self.commands.len() == 1 {
            let pos = self.commands[0].pos();
            builder.line_to(pos.x, pos.y);
        }

        builder.finish()
    }
}

/// Owns the in-progress stroke.
#[derive(Debug, Default)]
pub struct PathAccumulator {
    path: StrokePath,
}

impl PathAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    pub fn start_stroke(&mut self, x: f32, y: f32) {
        self.path = StrokePath::new();
        self.path.move_to(PixelPos { x, y });
    }

    /// Appending to an empty path anchors the stroke at that point instead.
    pub fn append_point(&mut self, x: f32, y: f32) {
        let pos = PixelPos { x, y };
        if self.path.is_empty() {
            log::debug!("no stroke started, anchoring at {pos}");
            self.path.move_to(pos);
        } else {
            self.path.line_to(pos);
        }
    }

    pub fn finish(&mut self) -> StrokePath {
        std::mem::take(&mut self.path)
    }
}
