/// A point in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Left edge, the equivalent of a bounding client rect's `left`
    pub fn left(&self) -> f32 {
        self.min[0]
    }

    /// Check whether a point lies inside the rectangle (max edges exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x < self.max[0]
            && point.y >= self.min[1]
            && point.y < self.max[1]
    }
}
