use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8 }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Sequential blues, light to dark (ColorBrewer "Blues", 9 classes).
const BLUES: [Rgb; 9] = [
    Rgb::hex(0xf7fbff), Rgb::hex(0xdeebf7), Rgb::hex(0xc6dbef),
    Rgb::hex(0x9ecae1), Rgb::hex(0x6baed6), Rgb::hex(0x4292c6),
    Rgb::hex(0x2171b5), Rgb::hex(0x08519c), Rgb::hex(0x08306b),
];

/// Diverging blue-yellow-red, low values blue (ColorBrewer "RdYlBu", 10 classes, reversed).
const BU_YL_RD: [Rgb; 10] = [
    Rgb::hex(0x313695), Rgb::hex(0x4575b4), Rgb::hex(0x74add1), Rgb::hex(0xabd9e9),
    Rgb::hex(0xe0f3f8), Rgb::hex(0xfee090), Rgb::hex(0xfdae61), Rgb::hex(0xf46d43),
    Rgb::hex(0xd73027), Rgb::hex(0xa50026),
];

/// Fixed discrete palettes; the palette length is the number of color buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Blues,
    RdYlBu,
}

impl Palette {
    pub fn colors(&self) -> &'static [Rgb] {
        match self {
            Palette::Blues => &BLUES,
            Palette::RdYlBu => &BU_YL_RD,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.colors().len() }

    #[inline] pub fn is_empty(&self) -> bool { self.colors().is_empty() }
}
