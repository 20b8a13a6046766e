//! Kern-Traits der Kennlinien-Bibliothek
//!
//! Diese Traits definieren die Schnittstellen zwischen Tabelle,
//! Speicher-Backend und Wertetyp ohne konkrete Implementierung.

use crate::types::Entry;

/// Trait für Rohwert-Typen (die Suchachse der Tabelle)
///
/// Rohwerte müssen total geordnet sein und sich für die Verhältnis-Rechnung
/// verlustarm nach `f64` wandeln lassen. Implementiert für alle primitiven
/// Zahlentypen.
pub trait Scalar: Copy + PartialOrd {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

/// Trait für interpolierbare Wertetypen
///
/// `lerp(a, b, 0.0)` ergibt `a`, `lerp(a, b, 1.0)` ergibt `b`. Das Verhältnis
/// darf außerhalb von `[0, 1]` liegen (Extrapolation).
///
/// # Implementierungen
/// - **Zahlentypen:** Rechnung in `f64`, Rückwandlung schneidet
///   Nachkommastellen ab (Truncation Richtung Null)
/// - **Farben:** [`RGB8`](rgb::RGB8) interpoliert kanalweise, siehe `color`
/// - **Eigene Typen:** z.B. [`TempHumidity`](crate::sensor::TempHumidity)
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, ratio: f64) -> Self;
}

// Ein Makro für beide Traits: ein pauschales `impl<V: Scalar> Lerp for V`
// würde mit den Implementierungen für RGB8 und andere Wertetypen kollidieren.
macro_rules! impl_numeric {
    ($($num:ty),+ $(,)?) => {
        $(
            impl Scalar for $num {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $num
                }
            }

            impl Lerp for $num {
                fn lerp(a: Self, b: Self, ratio: f64) -> Self {
                    ((a as f64) + ratio * ((b as f64) - (a as f64))) as $num
                }
            }
        )+
    };
}

impl_numeric!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Trait für Tabellen-Backends
///
/// Abstrahiert den Zugriff auf die Stützpunkt-Folge. Einträge werden by value
/// geliefert, weil ROM-Backends keine Referenzen herausgeben können (jeder
/// Zugriff dekodiert den Eintrag neu).
///
/// # Implementierungen
/// - **RAM:** `&[Entry]`, `[Entry; N]`, `heapless::Vec<Entry, N>`
/// - **ROM:** [`RomTable`](crate::rom::RomTable)
pub trait TableStorage<T, V> {
    /// Anzahl der Stützpunkte
    fn len(&self) -> usize;

    /// Liefert den Stützpunkt am Index, `None` außerhalb der Tabelle
    fn entry(&self, index: usize) -> Option<Entry<T, V>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(&self) -> Option<Entry<T, V>> {
        self.entry(0)
    }

    fn last(&self) -> Option<Entry<T, V>> {
        match self.len() {
            0 => None,
            n => self.entry(n - 1),
        }
    }
}
