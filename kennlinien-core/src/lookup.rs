//! Interpolierende Kennlinien-Tabelle
//!
//! Bildet Roh-Messwerte über eine Stützpunkt-Tabelle auf physikalische
//! Werte ab: binäre Suche, wahlweise Interpolation oder nächster Nachbar,
//! konfigurierbares Randverhalten.

use core::marker::PhantomData;

use crate::math;
use crate::traits::{Lerp, Scalar, TableStorage};
use crate::types::{BoundsMode, Entry, LookupError, LookupMode};

/// Kennlinie über einer geborgten Slice-Tabelle
pub type SliceLookup<'a, T, V> = Lookup<T, V, &'a [Entry<T, V>]>;

/// Interpolierende Lookup-Tabelle
///
/// Die Tabelle muss streng monoton steigende oder fallende Rohwerte haben;
/// die Richtung wird pro Abfrage aus den ersten beiden Einträgen erkannt.
/// Unsortierte Tabellen sind eine Vorbedingungs-Verletzung und liefern
/// unspezifizierte (aber panicfreie) Ergebnisse; in Debug-Builds prüfen
/// Konstruktoren und [`set_table`](Lookup::set_table) die Monotonie.
///
/// Beide Modi ([`LookupMode`], [`BoundsMode`]) sind zur Laufzeit umschaltbar.
#[derive(Debug, Clone)]
pub struct Lookup<T, V, S> {
    table: S,
    lookup_mode: LookupMode,
    bounds_mode: BoundsMode,
    _marker: PhantomData<(T, V)>,
}

impl<T, V, S> Lookup<T, V, S>
where
    T: Scalar,
    V: Lerp + Default,
    S: TableStorage<T, V>,
{
    /// Erstellt eine Kennlinie mit Default-Modi (Interpolation, Clamp)
    pub fn new(table: S) -> Self {
        Self::with_modes(table, LookupMode::default(), BoundsMode::default())
    }

    /// Erstellt eine Kennlinie mit expliziten Modi
    pub fn with_modes(table: S, lookup_mode: LookupMode, bounds_mode: BoundsMode) -> Self {
        debug_assert!(
            is_monotonic(&table),
            "Kennlinie muss streng monoton sein"
        );
        Self {
            table,
            lookup_mode,
            bounds_mode,
            _marker: PhantomData,
        }
    }

    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup_mode
    }

    pub fn set_lookup_mode(&mut self, mode: LookupMode) {
        self.lookup_mode = mode;
    }

    pub fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    pub fn set_bounds_mode(&mut self, mode: BoundsMode) {
        self.bounds_mode = mode;
    }

    /// Tauscht die Tabelle zur Laufzeit aus, die Modi bleiben erhalten
    pub fn set_table(&mut self, table: S) {
        debug_assert!(
            is_monotonic(&table),
            "Kennlinie muss streng monoton sein"
        );
        self.table = table;
    }

    pub fn table(&self) -> &S {
        &self.table
    }

    /// Anzahl der Stützpunkte
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Eine Kennlinie ohne Stützpunkte ist nicht nutzbar
    pub fn valid(&self) -> bool {
        !self.table.is_empty()
    }

    /// Geprüfter Zugriff auf einen Stützpunkt
    ///
    /// # Fehlerbehandlung
    /// Gibt `LookupError::IndexOutOfRange` zurück, wenn der Index außerhalb
    /// der Tabelle liegt
    pub fn entry(&self, index: usize) -> Result<Entry<T, V>, LookupError> {
        self.table.entry(index).ok_or(LookupError::IndexOutOfRange)
    }

    /// Kleinster Rohwert der Tabelle, `None` wenn leer
    pub fn min_raw(&self) -> Option<T> {
        if self.is_ascending() {
            self.table.first().map(|entry| entry.raw)
        } else {
            self.table.last().map(|entry| entry.raw)
        }
    }

    /// Größter Rohwert der Tabelle, `None` wenn leer
    pub fn max_raw(&self) -> Option<T> {
        if self.is_ascending() {
            self.table.last().map(|entry| entry.raw)
        } else {
            self.table.first().map(|entry| entry.raw)
        }
    }

    /// Prüft die Monotonie-Vorbedingung der aktuellen Tabelle
    pub fn is_monotonic(&self) -> bool {
        is_monotonic(&self.table)
    }

    /// Bildet einen Rohwert auf den physikalischen Wert ab
    ///
    /// - leere Tabelle → `V::default()`
    /// - ein Stützpunkt → dessen Wert, unabhängig vom Rohwert
    /// - exakter Treffer → Tabellenwert ohne Interpolation
    /// - außerhalb der Tabelle → [`BoundsMode`] entscheidet
    /// - sonst → [`LookupMode`] entscheidet zwischen nächstem Nachbarn
    ///   (bei Gleichstand der frühere Eintrag) und linearer Interpolation
    ///
    /// # Beispiele
    ///
    /// ```
    /// use kennlinien_core::{Entry, Lookup};
    ///
    /// // NTC-Kennlinie: ADC-Rohwert → Temperatur in °C
    /// let table = [
    ///     Entry::new(1000_i32, -10.0_f32),
    ///     Entry::new(2000, 20.0),
    ///     Entry::new(3000, 50.0),
    /// ];
    /// let lookup = Lookup::new(&table[..]);
    /// assert_eq!(lookup.raw_to_value(1500), 5.0);
    /// ```
    pub fn raw_to_value(&self, raw: T) -> V {
        let len = self.table.len();
        let Some(first) = self.table.first() else {
            return V::default();
        };
        if len == 1 {
            return first.value;
        }

        let ascending = self.is_ascending();
        let position = self.insertion_index(raw, ascending, len);

        // Unterhalb der Tabelle (bzw. exakt auf dem ersten Stützpunkt)
        if position == 0 {
            return match self.bounds_mode {
                BoundsMode::Clamp => first.value,
                BoundsMode::Extrapolate => match (self.table.entry(0), self.table.entry(1)) {
                    (Some(a), Some(b)) => Self::interpolate(a, b, raw),
                    _ => first.value,
                },
            };
        }

        // Oberhalb der Tabelle
        if position >= len {
            let Some(last) = self.table.last() else {
                return V::default();
            };
            return match self.bounds_mode {
                BoundsMode::Clamp => last.value,
                BoundsMode::Extrapolate => match self.table.entry(len - 2) {
                    Some(before_last) => Self::interpolate(before_last, last, raw),
                    None => last.value,
                },
            };
        }

        let (Some(previous), Some(current)) =
            (self.table.entry(position - 1), self.table.entry(position))
        else {
            return V::default();
        };

        // Exakter Treffer, keine Interpolation
        if current.raw == raw {
            return current.value;
        }

        match self.lookup_mode {
            LookupMode::Nearest => {
                let to_previous = math::abs(raw.to_f64() - previous.raw.to_f64());
                let to_current = math::abs(current.raw.to_f64() - raw.to_f64());
                // Bei Gleichstand gewinnt der Eintrag mit dem kleineren Index
                if to_previous <= to_current {
                    previous.value
                } else {
                    current.value
                }
            }
            LookupMode::Interpolate => Self::interpolate(previous, current, raw),
        }
    }

    fn is_ascending(&self) -> bool {
        is_ascending_table(&self.table)
    }

    /// Partition Point: erster Index, dessen Rohwert in Tabellenrichtung
    /// nicht mehr vor `raw` liegt. 0 = unterhalb, `len` = oberhalb.
    fn insertion_index(&self, raw: T, ascending: bool, len: usize) -> usize {
        let mut low = 0;
        let mut high = len;
        while low < high {
            let mid = low + (high - low) / 2;
            let Some(probe) = self.table.entry(mid) else {
                return len;
            };
            let before = if ascending {
                probe.raw < raw
            } else {
                probe.raw > raw
            };
            if before {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    fn interpolate(a: Entry<T, V>, b: Entry<T, V>, raw: T) -> V {
        let span = b.raw.to_f64() - a.raw.to_f64();
        // Exakter Vergleich, kein Epsilon: auch Stützstellen dichter als
        // jede Toleranz werden interpoliert. 0.0 entsteht nur bei identischen
        // Rohwerten (inklusive in f64 zusammenfallender Integer-Schlüssel).
        if span == 0.0 {
            return a.value;
        }
        let ratio = (raw.to_f64() - a.raw.to_f64()) / span;
        V::lerp(a.value, b.value, ratio)
    }
}

fn is_ascending_table<T, V, S>(table: &S) -> bool
where
    T: Scalar,
    S: TableStorage<T, V>,
{
    match (table.entry(0), table.entry(1)) {
        (Some(a), Some(b)) => a.raw < b.raw,
        _ => true,
    }
}

/// Prüft eine Tabelle auf streng monotone Rohwerte
///
/// Nützlich, um Tabellen aus unsicherer Quelle vor dem Aufbau einer
/// [`Lookup`] zu validieren.
pub fn is_monotonic<T, V, S>(table: &S) -> bool
where
    T: Scalar,
    S: TableStorage<T, V>,
{
    let len = table.len();
    if len < 2 {
        return true;
    }
    let ascending = is_ascending_table(table);
    for index in 1..len {
        let (Some(previous), Some(current)) = (table.entry(index - 1), table.entry(index)) else {
            return false;
        };
        let ordered = if ascending {
            previous.raw < current.raw
        } else {
            previous.raw > current.raw
        };
        if !ordered {
            return false;
        }
    }
    true
}
