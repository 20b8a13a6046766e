//! Farb-Kennlinien
//!
//! [`Lerp`]-Implementierung für [`RGB8`] (kanalweise Interpolation) plus
//! Paletten-Konstanten. Typischer Einsatz: Temperatur → Anzeigefarbe für
//! Status-LEDs.

use rgb::RGB8;

use crate::lookup::{Lookup, SliceLookup};
use crate::rom::{RomDecode, RomReader};
use crate::traits::Lerp;

/// Farb-Kennlinie über beliebigem Backend
pub type ColorLookup<T, S> = Lookup<T, RGB8, S>;

/// Farb-Kennlinie über einer geborgten Slice-Tabelle
pub type SliceColorLookup<'a, T> = SliceLookup<'a, T, RGB8>;

// Paletten-Grundfarben
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const YELLOW: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 0,
};
pub const CYAN: RGB8 = RGB8 {
    r: 0,
    g: 255,
    b: 255,
};
pub const MAGENTA: RGB8 = RGB8 {
    r: 255,
    g: 0,
    b: 255,
};
pub const MAROON: RGB8 = RGB8 { r: 128, g: 0, b: 0 };

/// Kanalweise Interpolation mit Begrenzung auf den u8-Bereich
///
/// Das Clamping vor der Truncation ist nötig, weil Extrapolation
/// (Verhältnis außerhalb `[0, 1]`) Kanäle rechnerisch unter 0 oder
/// über 255 treiben kann.
fn lerp_channel(a: u8, b: u8, ratio: f64) -> u8 {
    let blended = a as f64 + ratio * (b as f64 - a as f64);
    blended.clamp(0.0, 255.0) as u8
}

impl Lerp for RGB8 {
    fn lerp(a: Self, b: Self, ratio: f64) -> Self {
        RGB8 {
            r: lerp_channel(a.r, b.r, ratio),
            g: lerp_channel(a.g, b.g, ratio),
            b: lerp_channel(a.b, b.b, ratio),
        }
    }
}

/// 3 Bytes im ROM: r, g, b
impl RomDecode for RGB8 {
    const WIDTH: usize = 3;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        RGB8 {
            r: rom.read_byte(address),
            g: rom.read_byte(address + 1),
            b: rom.read_byte(address + 2),
        }
    }
}
