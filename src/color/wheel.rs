use crate::color::Rgb;

/// Width of a single band of the color wheel
const BAND: u8 = 85;

/// Map a 0-255 position to a fully saturated color
///
/// The colors transition red -> green -> blue -> back to red. The position
/// is inverted first, then mapped through three 85-wide bands where two
/// channels ramp in opposite directions and the third stays at zero, so
/// neighbouring positions never differ by more than 3 per channel.
pub const fn wheel(position: u8) -> Rgb {
    let pos = 255 - position;
    if pos < BAND {
        return Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        };
    }
    if pos < BAND * 2 {
        let pos = pos - BAND;
        return Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        };
    }
    let pos = pos - BAND * 2;
    Rgb {
        r: pos * 3,
        g: 255 - pos * 3,
        b: 0,
    }
}
