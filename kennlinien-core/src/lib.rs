//! Kennlinien Core - Platform-agnostic Lookup-Tables und Filter
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie bildet Roh-Messwerte (ADC, Widerstand, ...) über interpolierende
//! Stützpunkt-Tabellen auf physikalische Werte ab und stellt die
//! passenden Vorfilter bereit.

#![no_std]

pub mod color;
pub mod filter;
pub mod lookup;
pub mod math;
pub mod rom;
pub mod sensor;
pub mod storage;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use color::{ColorLookup, SliceColorLookup};
pub use filter::{Exponential, Filter, Median3, Median5, MovingAverage};
pub use lookup::{Lookup, SliceLookup, is_monotonic};
pub use rom::{RomDecode, RomReader, RomTable};
pub use sensor::TempHumidity;
pub use traits::{Lerp, Scalar, TableStorage};
pub use types::{BoundsMode, Entry, LookupError, LookupMode};
