//! UTF-16 code units to codepoints, one scan step at a time
//!
//! Surrogate pairs collapse into one codepoint. Anything malformed becomes
//! `?` and is reported through [`Malformation`]; decoding itself never fails.

/// Stand-in for malformed input
pub const REPLACEMENT: char = '?';

const HIGH_SURROGATE_START: u16 = 0xD800;
const LOW_SURROGATE_START: u16 = 0xDC00;
const SURROGATE_END: u16 = 0xE000;

/// What was wrong with the units at one scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// High surrogate at the end of the text
    MissingLowSurrogate { high: u16 },
    /// High surrogate followed by something other than a low surrogate
    InvalidLowSurrogate { high: u16, next: u16 },
    /// Low surrogate without a preceding high surrogate
    UnpairedLowSurrogate { low: u16 },
}

/// One decoded codepoint and how many code units it consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub ch: char,
    /// Index of the first code unit
    pub index: usize,
    /// 1, or 2 for a surrogate pair
    pub units: usize,
    pub malformed: Option<Malformation>,
}

/// Iterator over the codepoints of a UTF-16 slice
#[derive(Debug, Clone)]
pub struct CodepointDecoder<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> CodepointDecoder<'a> {
    pub fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }

    /// Code units not scanned yet
    pub fn remaining(&self) -> usize {
        self.units.len() - self.pos
    }

    fn replaced(&mut self, malformation: Malformation) -> Decoded {
        let decoded = Decoded {
            ch: REPLACEMENT,
            index: self.pos,
            units: 1,
            malformed: Some(malformation),
        };
        self.pos += 1;
        decoded
    }
}

impl Iterator for CodepointDecoder<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        let unit = *self.units.get(self.pos)?;

        if !is_surrogate(unit) {
            // BMP units outside the surrogate block are always scalar values
            let ch = char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT);
            let decoded = Decoded {
                ch,
                index: self.pos,
                units: 1,
                malformed: None,
            };
            self.pos += 1;
            return Some(decoded);
        }

        if is_low_surrogate(unit) {
            return Some(self.replaced(Malformation::UnpairedLowSurrogate { low: unit }));
        }

        let Some(&next) = self.units.get(self.pos + 1) else {
            return Some(self.replaced(Malformation::MissingLowSurrogate { high: unit }));
        };
        if !is_low_surrogate(next) {
            return Some(self.replaced(Malformation::InvalidLowSurrogate { high: unit, next }));
        }

        let decoded = Decoded {
            ch: combine_surrogates(unit, next),
            index: self.pos,
            units: 2,
            malformed: None,
        };
        self.pos += 2;
        Some(decoded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining.div_ceil(2), Some(remaining))
    }
}

/// Combine a high and a low surrogate into the codepoint they encode
pub fn combine_surrogates(high: u16, low: u16) -> char {
    let codepoint = 0x10000
        + (u32::from(high - HIGH_SURROGATE_START) * 0x400)
        + u32::from(low - LOW_SURROGATE_START);
    char::from_u32(codepoint).unwrap_or(REPLACEMENT)
}

pub fn is_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..SURROGATE_END).contains(&unit)
}

pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..LOW_SURROGATE_START).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..SURROGATE_END).contains(&unit)
}
