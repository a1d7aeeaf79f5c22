use std::fmt::{Display, Formatter};

/// RGBA, straight alpha.
pub type Color = [u8; 4];

pub trait ColorExt {
    const BLACK: Color = [0, 0, 0, 255];
    const PAPER: Color = [254, 253, 251, 255];

    fn from_argb(argb: u32) -> Self;
    fn to_argb(&self) -> u32;
    fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self;
    fn to_skia(&self) -> tiny_skia::Color;
}

impl ColorExt for Color {
    fn from_argb(argb: u32) -> Color {
        let [a, r, g, b] = argb.to_be_bytes();
        [r, g, b, a]
    }

    fn to_argb(&self) -> u32 {
        u32::from_be_bytes([self[3], self[0], self[1], self[2]])
    }

    /// components outside 0..=1 are clamped, alpha is always opaque
    fn from_rgb_f32(r: f32, g: f32, b: f32) -> Color {
        let channel = |c: f32| (c.clamp(0., 1.) * 255.).round() as u8;
        [channel(r), channel(g), channel(b), 255]
    }

    fn to_skia(&self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self[0], self[1], self[2], self[3])
    }
}

macro_rules! coordinate_types {
    ($($Coord:ident),*) => {$(
        #[derive(Default, Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $Coord {
            pub x: f32,
            pub y: f32,
        }

        impl $Coord {
            pub fn new(x: f32, y: f32) -> Self {
                Self { x, y }
            }
        }

        impl Display for $Coord {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.02},{:.02}", self.x, self.y)
            }
        }
    )*};
}

coordinate_types!(PixelPos);

impl From<(f32, f32)> for PixelPos {
    fn from((x, y): (f32, f32)) -> Self {
        PixelPos { x, y }
    }
}

/// Axis-aligned rectangle in surface-local pixels.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_point(pos: PixelPos) -> Self {
        Rect::new(pos.x, pos.y, pos.x, pos.y)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn outset(&self, margin: f32) -> Rect {
        Rect {
            left: self.left - margin,
            top: self.top - margin,
            right: self.right + margin,
            bottom: self.bottom + margin,
        }
    }

    /// Truncates toward zero, the same way a host's integer invalidate call would.
    pub fn to_pixels(&self) -> (i32, i32, i32, i32) {
        (
            self.left as i32,
            self.top as i32,
            self.right as i32,
            self.bottom as i32,
        )
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.02},{:.02})-({:.02},{:.02})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn argb_channels() {
        let color = Color::from_argb(0x80_11_22_33);
        assert_eq!(color, [0x11, 0x22, 0x33, 0x80]);
        assert_eq!(color.to_argb(), 0x80_11_22_33);
        assert_eq!(Color::from_argb(0xff_00_00_00), Color::BLACK);
    }

    #[test]
    fn float_components() {
        assert_eq!(Color::from_rgb_f32(1., 0., 0.5), [255, 0, 128, 255]);
        assert_eq!(Color::from_rgb_f32(2., -1., 0.), [255, 0, 0, 255]);
    }

    #[test]
    fn outset_rect() {
        let rect = Rect::new(10., 10., 15., 12.).outset(5.);
        assert_eq!(rect, Rect::new(5., 5., 20., 17.));
        assert_eq!(rect.width(), 15.);
        assert_eq!(rect.height(), 12.);
        assert_eq!(rect.to_pixels(), (5, 5, 20, 17));
    }
}
