//! Signal-Filter für Sensor-Rohwerte
//!
//! Glättung und Ausreißer-Entfernung vor dem Kennlinien-Lookup,
//! typische Kette: ADC-Rohwert → Filter → [`Lookup`](crate::lookup::Lookup).

use heapless::Deque;

use crate::traits::{Lerp, Scalar};

/// Gemeinsame Schnittstelle aller Filter
///
/// Filter sind zustandsbehaftet: `update` nimmt den nächsten Messwert
/// und liefert den gefilterten Wert, `reset` verwirft die Historie
/// (z.B. nach einem Sensor-Neustart).
pub trait Filter<T> {
    fn update(&mut self, value: T) -> T;
    fn reset(&mut self);
}

// ============================================================================
// Exponentielle Glättung (EMA)
// ============================================================================

const SMOOTHING_MIN: f64 = 0.001;
const SMOOTHING_MAX: f64 = 1.0;

/// Exponentieller Glättungsfilter
///
/// `gefiltert = alt + alpha * (neu - alt)`. Kleines `alpha` glättet stark
/// und reagiert träge, `alpha = 1.0` reicht Messwerte unverändert durch.
/// Der erste Messwert wird ungefiltert übernommen.
///
/// Funktioniert über [`Lerp`] auch für nicht-arithmetische Werte wie
/// [`RGB8`](rgb::RGB8) (weiche Farbübergänge).
#[derive(Debug, Clone)]
pub struct Exponential<T> {
    smoothing: f64,
    state: Option<T>,
}

impl<T> Exponential<T> {
    /// Erstellt den Filter; `smoothing` wird auf `[0.001, 1.0]` begrenzt
    pub fn new(smoothing: f64) -> Self {
        Self {
            smoothing: smoothing.clamp(SMOOTHING_MIN, SMOOTHING_MAX),
            state: None,
        }
    }

    /// Wirksamer Glättungsfaktor
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}

impl<T: Lerp> Filter<T> for Exponential<T> {
    fn update(&mut self, value: T) -> T {
        let next = match self.state {
            Some(previous) => T::lerp(previous, value, self.smoothing),
            None => value,
        };
        self.state = Some(next);
        next
    }

    fn reset(&mut self) {
        self.state = None;
    }
}

// ============================================================================
// Median-Filter (Ausreißer-Entfernung)
// ============================================================================

/// Median dreier Werte über ein Sortiernetz (2-3 Vergleiche)
pub fn median_of_3<T: Copy + PartialOrd>(mut a: T, mut b: T, mut c: T) -> T {
    if a > b {
        core::mem::swap(&mut a, &mut b);
    }
    if b > c {
        core::mem::swap(&mut b, &mut c);
    }
    if a > b {
        core::mem::swap(&mut a, &mut b);
    }
    b
}

/// Median fünfer Werte ohne vollständige Sortierung
pub fn median_of_5<T: Copy + PartialOrd>(mut a: T, mut b: T, mut c: T, mut d: T, e: T) -> T {
    if a > b {
        core::mem::swap(&mut a, &mut b);
    }
    if c > d {
        core::mem::swap(&mut c, &mut d);
    }
    if a > c {
        core::mem::swap(&mut a, &mut c);
    }
    if b > d {
        core::mem::swap(&mut b, &mut d);
    }
    // a ist jetzt das Minimum der ersten vier, d deren Maximum
    if e < a {
        // e und d scheiden aus, a ist Minimum von {a, b, c}
        if b > c { c } else { b }
    } else if e > d {
        // e und a scheiden aus, d ist Maximum von {b, c, d}
        if b > c { b } else { c }
    } else {
        // a und d scheiden aus
        median_of_3(b, c, e)
    }
}

/// Median-Filter über die letzten 3 Messwerte
///
/// Entfernt einzelne Spitzen-Ausreißer. Aufwärmphase: der erste Messwert
/// wird durchgereicht, bei zwei Werten kommt deren Mittel.
#[derive(Debug, Clone)]
pub struct Median3<T> {
    window: Deque<T, 3>,
}

impl<T> Median3<T> {
    pub const fn new() -> Self {
        Self {
            window: Deque::new(),
        }
    }
}

impl<T> Default for Median3<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lerp + PartialOrd> Filter<T> for Median3<T> {
    fn update(&mut self, value: T) -> T {
        if self.window.is_full() {
            self.window.pop_front();
        }
        // Platz wurde gerade freigemacht
        let _ = self.window.push_back(value);

        let mut samples = [value; 3];
        for (slot, sample) in samples.iter_mut().zip(self.window.iter()) {
            *slot = *sample;
        }
        match self.window.len() {
            0 | 1 => value,
            2 => T::lerp(samples[0], samples[1], 0.5),
            _ => median_of_3(samples[0], samples[1], samples[2]),
        }
    }

    fn reset(&mut self) {
        self.window.clear();
    }
}

/// Median-Filter über die letzten 5 Messwerte
///
/// Robuster als [`Median3`] (verkraftet zwei aufeinanderfolgende
/// Ausreißer), dafür mehr Verzögerung. Aufwärmphase wie bei [`Median3`],
/// ab drei Werten Median des bisherigen Fensters.
#[derive(Debug, Clone)]
pub struct Median5<T> {
    window: Deque<T, 5>,
}

impl<T> Median5<T> {
    pub const fn new() -> Self {
        Self {
            window: Deque::new(),
        }
    }
}

impl<T> Default for Median5<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lerp + PartialOrd> Filter<T> for Median5<T> {
    fn update(&mut self, value: T) -> T {
        if self.window.is_full() {
            self.window.pop_front();
        }
        let _ = self.window.push_back(value);

        let mut samples = [value; 5];
        for (slot, sample) in samples.iter_mut().zip(self.window.iter()) {
            *slot = *sample;
        }
        match self.window.len() {
            0 | 1 => value,
            2 => T::lerp(samples[0], samples[1], 0.5),
            3 => median_of_3(samples[0], samples[1], samples[2]),
            // vier Werte: Median der letzten drei, der älteste bleibt außen vor
            4 => median_of_3(samples[1], samples[2], samples[3]),
            _ => median_of_5(samples[0], samples[1], samples[2], samples[3], samples[4]),
        }
    }

    fn reset(&mut self) {
        self.window.clear();
    }
}

// ============================================================================
// Gleitender Mittelwert
// ============================================================================

/// Gleitender Mittelwert über die letzten `N` Messwerte
///
/// Die laufende Summe wird in `f64` geführt, damit lange Fenster mit
/// großen Rohwerten nicht überlaufen.
#[derive(Debug, Clone)]
pub struct MovingAverage<T, const N: usize> {
    window: Deque<T, N>,
    sum: f64,
}

impl<T, const N: usize> MovingAverage<T, N> {
    pub const fn new() -> Self {
        Self {
            window: Deque::new(),
            sum: 0.0,
        }
    }
}

impl<T, const N: usize> Default for MovingAverage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, const N: usize> Filter<T> for MovingAverage<T, N> {
    fn update(&mut self, value: T) -> T {
        if self.window.is_full() {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest.to_f64();
            }
        }
        if self.window.push_back(value).is_ok() {
            self.sum += value.to_f64();
        }
        T::from_f64(self.sum / self.window.len() as f64)
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use rgb::RGB8;

    // ========================================================================
    // Median-Helfer
    // ========================================================================

    #[test]
    fn test_median_of_3() {
        assert_eq!(median_of_3(1, 2, 3), 2);
        assert_eq!(median_of_3(3, 1, 2), 2);
        assert_eq!(median_of_3(2, 3, 1), 2);
        assert_eq!(median_of_3(5, 5, 1), 5);
    }

    #[test]
    fn test_median_of_5() {
        assert_eq!(median_of_5(1, 2, 3, 4, 5), 3);
        assert_eq!(median_of_5(5, 4, 3, 2, 1), 3);
        // e unterhalb des Minimums der ersten vier
        assert_eq!(median_of_5(3, 4, 5, 6, 1), 4);
        // e oberhalb des Maximums der ersten vier
        assert_eq!(median_of_5(3, 4, 5, 6, 9), 5);
        // e in der Mitte
        assert_eq!(median_of_5(3, 9, 5, 6, 4), 5);
        assert_eq!(median_of_5(2, 2, 2, 9, 0), 2);
    }

    // ========================================================================
    // Median3 / Median5
    // ========================================================================

    #[test]
    fn test_median3_warmup_and_spike() {
        let mut filter = Median3::new();
        assert_eq!(filter.update(10), 10); // erster Wert roh
        assert_eq!(filter.update(100), 55); // Mittel der ersten beiden
        assert_eq!(filter.update(11), 11); // Ausreißer 100 fällt raus
    }

    #[test]
    fn test_median3_sliding_window() {
        let mut filter = Median3::new();
        filter.update(1);
        filter.update(2);
        filter.update(3);
        // Fenster ist jetzt [2, 3, 4]
        assert_eq!(filter.update(4), 3);
    }

    #[test]
    fn test_median3_reset() {
        let mut filter = Median3::new();
        filter.update(1);
        filter.update(2);
        filter.reset();
        assert_eq!(filter.update(50), 50);
    }

    #[test]
    fn test_median5_warmup_stages() {
        let mut filter = Median5::new();
        assert_eq!(filter.update(5), 5);
        assert_eq!(filter.update(1), 3); // (5 + 1) / 2
        assert_eq!(filter.update(9), 5); // median(5, 1, 9)
        assert_eq!(filter.update(3), 3); // median(1, 9, 3), ältester ignoriert
        assert_eq!(filter.update(7), 5); // median(5, 1, 9, 3, 7)
    }

    #[test]
    fn test_median5_survives_double_spike() {
        let mut filter = Median5::new();
        for sample in [10, 11, 10, 11, 10] {
            filter.update(sample);
        }
        // zwei aufeinanderfolgende Ausreißer verfälschen den Median nicht
        filter.update(200);
        assert_eq!(filter.update(201), 11);
    }

    // ========================================================================
    // Exponentielle Glättung
    // ========================================================================

    #[test]
    fn test_exponential_first_value_passes_through() {
        let mut filter = Exponential::new(0.25);
        assert_eq!(filter.update(80.0_f32), 80.0);
    }

    #[test]
    fn test_exponential_converges() {
        let mut filter = Exponential::new(0.5);
        assert_eq!(filter.update(0.0_f32), 0.0);
        assert_eq!(filter.update(100.0), 50.0);
        assert_eq!(filter.update(100.0), 75.0);
        assert_eq!(filter.update(100.0), 87.5);
    }

    #[test]
    fn test_exponential_clamps_smoothing_factor() {
        assert_eq!(Exponential::<f32>::new(5.0).smoothing(), 1.0);
        assert_eq!(Exponential::<f32>::new(-1.0).smoothing(), 0.001);

        // alpha = 1.0: Messwerte unverändert durchreichen
        let mut filter = Exponential::new(5.0);
        filter.update(10.0_f32);
        assert_eq!(filter.update(90.0), 90.0);
    }

    #[test]
    fn test_exponential_integer_truncates() {
        let mut filter = Exponential::new(0.5);
        assert_eq!(filter.update(10_i32), 10);
        assert_eq!(filter.update(21), 15); // 10 + 0.5 * 11 = 15.5 → 15
    }

    #[test]
    fn test_exponential_smooths_colors() {
        let mut filter = Exponential::new(0.5);
        assert_eq!(filter.update(BLACK), BLACK);
        assert_eq!(
            filter.update(WHITE),
            RGB8 {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_exponential_reset() {
        let mut filter = Exponential::new(0.1);
        filter.update(1000.0_f32);
        filter.reset();
        assert_eq!(filter.update(5.0), 5.0);
    }

    // ========================================================================
    // Gleitender Mittelwert
    // ========================================================================

    #[test]
    fn test_moving_average_partial_window() {
        let mut filter: MovingAverage<f32, 3> = MovingAverage::new();
        assert_eq!(filter.update(3.0), 3.0);
        assert_eq!(filter.update(6.0), 4.5);
        assert_eq!(filter.update(9.0), 6.0);
    }

    #[test]
    fn test_moving_average_slides() {
        let mut filter: MovingAverage<f32, 3> = MovingAverage::new();
        filter.update(3.0);
        filter.update(6.0);
        filter.update(9.0);
        // 3.0 fällt aus dem Fenster: (6 + 9 + 12) / 3
        assert_eq!(filter.update(12.0), 9.0);
    }

    #[test]
    fn test_moving_average_integer_truncates() {
        let mut filter: MovingAverage<i32, 2> = MovingAverage::new();
        filter.update(1);
        assert_eq!(filter.update(2), 1); // 1.5 → 1
    }

    #[test]
    fn test_moving_average_reset() {
        let mut filter: MovingAverage<f32, 4> = MovingAverage::new();
        filter.update(100.0);
        filter.update(200.0);
        filter.reset();
        assert_eq!(filter.update(7.0), 7.0);
    }
}
