use crate::color::Rgb;

/// Returns the red component of a packed `0xRRGGBB` color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn red(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Returns the green component of a packed `0xRRGGBB` color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn green(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Returns the blue component of a packed `0xRRGGBB` color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn blue(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Pack three channels into a `0xRRGGBB` value
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: red(color),
        g: green(color),
        b: blue(color),
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack_color(color.r, color.g, color.b)
}

/// Halve every channel of the color
///
/// Applied repeatedly this produces a fading trail.
#[inline]
pub const fn dim(color: Rgb) -> Rgb {
    Rgb {
        r: color.r >> 1,
        g: color.g >> 1,
        b: color.b >> 1,
    }
}

/// Linear interpolation between two colors at `index` out of `total` steps
///
/// Each channel is computed as `(a * (total - index) + b * index) / total`,
/// multiplying before dividing to keep the truncation error small.
/// `index == 0` yields `a` and `index == total` yields `b`. A zero `total`
/// yields `a`.
pub fn fade_color(a: Rgb, b: Rgb, index: usize, total: usize) -> Rgb {
    if total == 0 {
        return a;
    }
    let index = index.min(total);
    Rgb {
        r: fade_channel(a.r, b.r, index, total),
        g: fade_channel(a.g, b.g, index, total),
        b: fade_channel(a.b, b.b, index, total),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn fade_channel(a: u8, b: u8, index: usize, total: usize) -> u8 {
    let mixed = usize::from(a) * (total - index) + usize::from(b) * index;
    // The weights sum to `total`, so the quotient never exceeds 255
    (mixed / total) as u8
}
