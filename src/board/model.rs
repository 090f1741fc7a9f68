use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Pen palette. Serialized as lowercase color names so a committed stroke
/// round-trips through the outbound `{color, points}` record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenColor {
    Red,
    Green,
    Blue,
}

impl PenColor {
    pub const ALL: [PenColor; 3] = [PenColor::Red, PenColor::Green, PenColor::Blue];

    /// CSS named-color values, matching what a 2D canvas would paint for
    /// the same name.
    pub const fn rgba(self) -> Rgba {
        match self {
            PenColor::Red => Rgba::rgba(255, 0, 0, 255),
            PenColor::Green => Rgba::rgba(0, 128, 0, 255),
            PenColor::Blue => Rgba::rgba(0, 0, 255, 255),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PenColor::Red => "red",
            PenColor::Green => "green",
            PenColor::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: PenColor,
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn begin(color: PenColor, start: Point) -> Self {
        Self {
            color,
            points: vec![start],
        }
    }
}
