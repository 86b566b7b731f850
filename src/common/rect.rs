/// Axis-aligned rectangle in the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Containment test, half-open: the left and bottom edges belong
    /// to the rect, the right and top edges do not.
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= self.x && u < self.right() && v >= self.y && v < self.top()
    }
}
