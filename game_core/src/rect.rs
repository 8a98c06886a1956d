/// Integer screen-space rectangle
///
/// Gameplay positions are continuous; rects are derived from them on demand
/// by rounding to the nearest pixel and are never stored back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a continuous top-left corner, rounding half away from zero
    pub fn from_continuous(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
            w: w as i32,
            h: h as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test; rects that only touch along an edge do not
    /// intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
