//! Tabellen-Backends im RAM
//!
//! [`TableStorage`]-Implementierungen für Slices, Arrays und
//! `heapless::Vec`. ROM-Backends liegen im Modul [`rom`](crate::rom).

use crate::traits::TableStorage;
use crate::types::Entry;

/// Geborgte Tabelle, z.B. eine `const`-Tabelle im Flash/RAM
impl<T: Copy, V: Copy> TableStorage<T, V> for &[Entry<T, V>] {
    fn len(&self) -> usize {
        <[Entry<T, V>]>::len(self)
    }

    fn entry(&self, index: usize) -> Option<Entry<T, V>> {
        self.get(index).copied()
    }
}

/// Tabelle als eigenes Array (die Lookup-Instanz besitzt die Daten)
impl<T: Copy, V: Copy, const N: usize> TableStorage<T, V> for [Entry<T, V>; N] {
    fn len(&self) -> usize {
        N
    }

    fn entry(&self, index: usize) -> Option<Entry<T, V>> {
        self.get(index).copied()
    }
}

/// Wachsende Tabelle mit fester Kapazität (geordnetes Anfügen beim Aufbau)
impl<T: Copy, V: Copy, const N: usize> TableStorage<T, V> for heapless::Vec<Entry<T, V>, N> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn entry(&self, index: usize) -> Option<Entry<T, V>> {
        self.as_slice().get(index).copied()
    }
}

/// Geborgtes Backend: die Tabelle gehört jemand anderem
impl<T, V, S: TableStorage<T, V>> TableStorage<T, V> for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn entry(&self, index: usize) -> Option<Entry<T, V>> {
        (**self).entry(index)
    }
}
