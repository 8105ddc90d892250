use crate::primitives::Rect;

/// Size specification that can be fixed or relative to the parent
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    /// Fixed size in pixels
    Fixed(f32),
    /// Relative size as a fraction of parent (0.0 to 1.0)
    Relative(f32),
}

impl Size {
    /// Create a fixed size in pixels
    pub const fn px(pixels: f32) -> Self {
        Self::Fixed(pixels)
    }

    /// Create a relative size as a fraction of the parent (0.0 to 1.0)
    pub const fn fraction(fraction: f32) -> Self {
        Self::Relative(fraction)
    }

    /// Resolve the size given the parent's dimension
    pub fn resolve(&self, parent_size: f32) -> f32 {
        match self {
            Size::Fixed(px) => *px,
            Size::Relative(fraction) => parent_size * fraction,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::Relative(1.0)
    }
}

/// How an element arranges its children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// Children are stacked at the content origin (overlapping)
    #[default]
    Stack,
    /// Children are arranged horizontally (left to right)
    Horizontal,
    /// Children are arranged vertically (top to bottom)
    Vertical,
}

/// Position offset from the parent's origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Computed layout information after tree traversal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputedLayout {
    /// Absolute position in viewport coordinates
    pub rect: Rect,
}

impl ComputedLayout {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}
