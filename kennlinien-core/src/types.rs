//! Core Types für Kennlinien-Tabellen
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Ein Stützpunkt einer Kennlinie: Roh-Messwert → physikalischer Wert
///
/// `raw` ist typischerweise ein ADC-Rohwert, `value` der zugehörige
/// physikalische Wert (Temperatur, Druck, Farbe, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T, V> {
    pub raw: T,
    pub value: V,
}

impl<T, V> Entry<T, V> {
    /// Erstellt einen Stützpunkt (auch in `const`-Tabellen verwendbar)
    pub const fn new(raw: T, value: V) -> Self {
        Self { raw, value }
    }
}

/// Suchmodus zwischen zwei Stützpunkten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LookupMode {
    /// Wert des näher liegenden Stützpunkts (bei Gleichstand der frühere)
    Nearest,
    /// Lineare Interpolation zwischen den Nachbar-Stützpunkten
    #[default]
    Interpolate,
}

/// Verhalten außerhalb des Tabellenbereichs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BoundsMode {
    /// Wert des Randstützpunkts zurückgeben
    #[default]
    Clamp,
    /// Über die zwei äußersten Stützpunkte hinaus extrapolieren
    Extrapolate,
}

/// Fehler-Typ für Tabellen-Zugriffe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Index liegt außerhalb der Tabelle
    IndexOutOfRange,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl<T: defmt::Format, V: defmt::Format> defmt::Format for Entry<T, V> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Entry {{ raw: {}, value: {} }}", self.raw, self.value)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LookupMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LookupMode::Nearest => defmt::write!(fmt, "Nearest"),
            LookupMode::Interpolate => defmt::write!(fmt, "Interpolate"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BoundsMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BoundsMode::Clamp => defmt::write!(fmt, "Clamp"),
            BoundsMode::Extrapolate => defmt::write!(fmt, "Extrapolate"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LookupError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LookupError::IndexOutOfRange => defmt::write!(fmt, "IndexOutOfRange"),
        }
    }
}
