use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    /// Neutral gray every control in this crate tints with.
    pub const GRAY: Color = Color::Rgb {
        r: 142,
        g: 142,
        b: 147,
    };

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

/// A color painted at a given opacity.
///
/// Controls express their visual state purely through fill opacity, so the
/// host only needs to composite `color` at `opacity` over whatever is below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
    pub opacity: f32,
}

impl Fill {
    pub fn new(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Composite this fill over an opaque background, in linear light.
    pub fn composite_over(&self, background: Rgb) -> Rgb {
        use palette::{LinSrgb, Srgb};

        let color = self.color.to_rgb();
        let fg: LinSrgb = Srgb::new(color.r, color.g, color.b)
            .into_format::<f32>()
            .into_linear();
        let bg: LinSrgb = Srgb::new(background.r, background.g, background.b)
            .into_format::<f32>()
            .into_linear();

        let a = self.opacity;
        let mixed = LinSrgb::new(
            bg.red + (fg.red - bg.red) * a,
            bg.green + (fg.green - bg.green) * a,
            bg.blue + (fg.blue - bg.blue) * a,
        );
        let out: Srgb = Srgb::from_linear(mixed);
        let (r, g, b) = out.into_format::<u8>().into_components();

        Rgb::new(r, g, b)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
