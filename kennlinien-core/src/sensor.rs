//! Sensor-Datentypen
//!
//! Kombinierte Messwerte, die als Tabellen-Wert oder Filter-Eingang
//! dienen können.

use crate::traits::Lerp;

/// Kombinierter Temperatur/Feuchte-Messwert (z.B. SHT31, DHT22)
///
/// Interpoliert komponentenweise und lässt sich damit direkt als
/// Kennlinien-Wert oder durch [`Exponential`](crate::filter::Exponential)
/// glätten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempHumidity {
    /// Temperatur in °C
    pub temperature: f32,
    /// Relative Feuchte in %
    pub humidity: f32,
}

impl TempHumidity {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

impl Lerp for TempHumidity {
    fn lerp(a: Self, b: Self, ratio: f64) -> Self {
        Self {
            temperature: Lerp::lerp(a.temperature, b.temperature, ratio),
            humidity: Lerp::lerp(a.humidity, b.humidity, ratio),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for TempHumidity {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TempHumidity {{ {}°C, {}% }}",
            self.temperature,
            self.humidity
        )
    }
}
