//! ROM-residente Tabellen
//!
//! Backend für Stützpunkte, die nicht im RAM liegen, sondern in einem
//! externen oder memory-mapped Nur-Lese-Speicher (Flash, EEPROM, PROGMEM).
//! Jeder Zugriff dekodiert den Eintrag neu über einen [`RomReader`].

use core::marker::PhantomData;

use crate::traits::TableStorage;
use crate::types::Entry;

/// Trait für Nur-Lese-Speicher mit Byte-Adressierung
///
/// Mehrbyte-Zugriffe sind Little-Endian aus Einzelbytes zusammengesetzt;
/// Backends mit breiterem Bus können sie überschreiben.
pub trait RomReader {
    /// Liest ein Byte an der Adresse
    fn read_byte(&self, address: usize) -> u8;

    /// Liest 16 Bit (Little-Endian)
    fn read_word(&self, address: usize) -> u16 {
        u16::from_le_bytes([self.read_byte(address), self.read_byte(address + 1)])
    }

    /// Liest 32 Bit (Little-Endian)
    fn read_dword(&self, address: usize) -> u32 {
        u32::from_le_bytes([
            self.read_byte(address),
            self.read_byte(address + 1),
            self.read_byte(address + 2),
            self.read_byte(address + 3),
        ])
    }
}

/// Memory-mapped ROM: ein Byte-Blob, z.B. aus `include_bytes!`
///
/// Zugriffe außerhalb des Blobs liefern 0 statt zu panicen, analog zum
/// Verhalten der übrigen Backends (Zugriff daneben → Default-Wert).
impl RomReader for [u8] {
    fn read_byte(&self, address: usize) -> u8 {
        self.get(address).copied().unwrap_or(0)
    }
}

/// Trait für Typen, die sich aus einem ROM dekodieren lassen
///
/// `WIDTH` ist die Breite im ROM in Bytes; Einträge liegen dicht gepackt.
pub trait RomDecode: Sized {
    const WIDTH: usize;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self;
}

impl RomDecode for u8 {
    const WIDTH: usize = 1;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_byte(address)
    }
}

impl RomDecode for i8 {
    const WIDTH: usize = 1;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_byte(address) as i8
    }
}

impl RomDecode for u16 {
    const WIDTH: usize = 2;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_word(address)
    }
}

impl RomDecode for i16 {
    const WIDTH: usize = 2;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_word(address) as i16
    }
}

impl RomDecode for u32 {
    const WIDTH: usize = 4;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_dword(address)
    }
}

impl RomDecode for i32 {
    const WIDTH: usize = 4;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        rom.read_dword(address) as i32
    }
}

impl RomDecode for f32 {
    const WIDTH: usize = 4;

    fn decode<R: RomReader + ?Sized>(rom: &R, address: usize) -> Self {
        f32::from_bits(rom.read_dword(address))
    }
}

/// ROM-residente Kennlinien-Tabelle
///
/// Adaptiert `(rom, base, len)` an [`TableStorage`]: Eintrag `i` liegt bei
/// `base + i * (T::WIDTH + V::WIDTH)`, erst der Rohwert, dann der Wert.
pub struct RomTable<'a, R: ?Sized, T, V> {
    rom: &'a R,
    base: usize,
    len: usize,
    _marker: PhantomData<(T, V)>,
}

impl<'a, R: ?Sized, T, V> RomTable<'a, R, T, V> {
    /// Erstellt eine Tabellen-Sicht auf `len` Einträge ab `base`
    pub const fn new(rom: &'a R, base: usize, len: usize) -> Self {
        Self {
            rom,
            base,
            len,
            _marker: PhantomData,
        }
    }
}

// Manuell statt derive: R selbst muss nicht Clone sein
impl<R: ?Sized, T, V> Clone for RomTable<'_, R, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized, T, V> Copy for RomTable<'_, R, T, V> {}

impl<R, T, V> TableStorage<T, V> for RomTable<'_, R, T, V>
where
    R: RomReader + ?Sized,
    T: RomDecode,
    V: RomDecode,
{
    fn len(&self) -> usize {
        self.len
    }

    fn entry(&self, index: usize) -> Option<Entry<T, V>> {
        if index >= self.len {
            return None;
        }
        // Geprüfte Adressrechnung: Überlauf zählt als außerhalb der Tabelle
        let stride = T::WIDTH.checked_add(V::WIDTH)?;
        let raw_address = index
            .checked_mul(stride)
            .and_then(|offset| self.base.checked_add(offset))?;
        let value_address = raw_address.checked_add(T::WIDTH)?;
        Some(Entry {
            raw: T::decode(self.rom, raw_address),
            value: V::decode(self.rom, value_address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_byte_and_out_of_range() {
        let rom: &[u8] = &[0xAA, 0xBB];
        assert_eq!(rom.read_byte(0), 0xAA);
        assert_eq!(rom.read_byte(1), 0xBB);
        assert_eq!(rom.read_byte(2), 0);
    }

    #[test]
    fn test_read_word_dword_little_endian() {
        let rom: &[u8] = &[0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(rom.read_word(0), 0x1234);
        assert_eq!(rom.read_dword(2), 0x12345678);
    }

    #[test]
    fn test_decode_primitives() {
        let rom: &[u8] = &[0xFF, 0x2C, 0x01, 0xFE, 0xFF];
        assert_eq!(u8::decode(rom, 0), 0xFF);
        assert_eq!(i8::decode(rom, 0), -1);
        assert_eq!(u16::decode(rom, 1), 300);
        assert_eq!(i16::decode(rom, 3), -2);
    }

    #[test]
    fn test_decode_f32() {
        let rom = 2.5_f32.to_le_bytes();
        assert_eq!(f32::decode(&rom[..], 0), 2.5);
    }

    #[test]
    fn test_rom_table_entries() {
        // Zwei Einträge (u16 raw, u8 value): (100, 10), (200, 20)
        let blob: &[u8] = &[0x64, 0x00, 0x0A, 0xC8, 0x00, 0x14];
        let table: RomTable<'_, [u8], u16, u8> = RomTable::new(blob, 0, 2);

        assert_eq!(TableStorage::len(&table), 2);
        assert_eq!(table.entry(0), Some(Entry::new(100, 10)));
        assert_eq!(table.entry(1), Some(Entry::new(200, 20)));
        assert_eq!(table.entry(2), None);
        assert_eq!(table.first(), Some(Entry::new(100, 10)));
        assert_eq!(table.last(), Some(Entry::new(200, 20)));
    }

    #[test]
    fn test_rom_table_with_base_offset() {
        // Header-Bytes vor der Tabelle
        let blob: &[u8] = &[0xDE, 0xAD, 0x64, 0x00, 0x0A];
        let table: RomTable<'_, [u8], u16, u8> = RomTable::new(blob, 2, 1);
        assert_eq!(table.entry(0), Some(Entry::new(100, 10)));
    }

    #[test]
    fn test_rom_table_address_overflow_is_out_of_range() {
        let blob: &[u8] = &[0x00];

        // base am oberen Rand des Adressraums
        let at_end: RomTable<'_, [u8], u16, u8> = RomTable::new(blob, usize::MAX, 2);
        assert_eq!(at_end.entry(0), None);
        assert_eq!(at_end.entry(1), None);
        assert_eq!(at_end.last(), None);

        // index * stride läuft über
        let huge: RomTable<'_, [u8], u16, u8> = RomTable::new(blob, 0, usize::MAX);
        assert_eq!(huge.entry(usize::MAX / 2), None);
    }
}
