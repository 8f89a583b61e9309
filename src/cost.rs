//! Cost model for global alignment over the ACGT alphabet.
//!
//! Bases are encoded into two bits through a lookup table, and the
//! substitution matrix is a flat 16-entry array indexed by `x << 2 | y`.
//! Nothing in this crate assumes the matrix is symmetric; the default
//! instantiation happens to be.
use crate::AlignError;
use serde::{Deserialize, Serialize};

/// Gap marker appearing in aligned output sequences.
pub const GAP: u8 = b'_';

pub(crate) const ADENINE: u8 = 0b00;
pub(crate) const CYTOSINE: u8 = 0b01;
pub(crate) const GUANINE: u8 = 0b10;
pub(crate) const THYMINE: u8 = 0b11;
// Anything outside the alphabet.
pub(crate) const INVALID: u8 = 0b100;

const fn lookup_table() -> [u8; 256] {
    let mut slots = [INVALID; 256];
    slots[b'A' as usize] = ADENINE;
    slots[b'a' as usize] = ADENINE;
    slots[b'C' as usize] = CYTOSINE;
    slots[b'c' as usize] = CYTOSINE;
    slots[b'G' as usize] = GUANINE;
    slots[b'g' as usize] = GUANINE;
    slots[b'T' as usize] = THYMINE;
    slots[b't' as usize] = THYMINE;
    slots
}
const LOOKUP_TABLE: [u8; 256] = lookup_table();

const BASES: [u8; 4] = *b"ACGT";

pub(crate) const fn encode_base(base: u8) -> u8 {
    LOOKUP_TABLE[base as usize]
}

pub(crate) const fn decode_base(encoded: u8) -> u8 {
    BASES[encoded as usize]
}

// Row x, column y, in ACGT order.
const DEFAULT_SUB: [u32; 16] = [
    0, 110, 48, 94, //
    110, 0, 118, 48, //
    48, 118, 0, 110, //
    94, 48, 110, 0,
];
const DEFAULT_GAP: u32 = 30;

/// Substitution matrix plus a linear gap cost.
///
/// The default model is the fixed table this crate was written around
/// (gap 30, transitions cheaper than transversions). Alternative models
/// can be constructed with [`CostModel::new`]; every solver takes the
/// model by reference, so instances with different costs coexist freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    sub: [u32; 16],
    gap: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            sub: DEFAULT_SUB,
            gap: DEFAULT_GAP,
        }
    }
}

impl CostModel {
    /// `sub` is indexed by `x << 2 | y` with A,C,G,T encoded as 0..4.
    pub fn new(sub: [u32; 16], gap: u32) -> Self {
        Self { sub, gap }
    }
    pub fn gap(&self) -> u32 {
        self.gap
    }
    // Substitution cost on already-encoded bases.
    pub(crate) fn sub(&self, x: u8, y: u8) -> u32 {
        self.sub[(x << 2 | y) as usize]
    }
    /// Substitution cost on raw bases, e.g. `b'A'` vs `b'c'`.
    /// Fails instead of guessing a cost when a byte is outside ACGT.
    pub fn substitution(&self, a: u8, b: u8) -> Result<u32, AlignError> {
        match (encode_base(a), encode_base(b)) {
            (INVALID, _) => Err(AlignError::UnsupportedSymbol(a as char)),
            (_, INVALID) => Err(AlignError::UnsupportedSymbol(b as char)),
            (x, y) => Ok(self.sub(x, y)),
        }
    }
    /// Validate and two-bit encode a raw sequence. Empty input is fine;
    /// any byte outside ACGT (case-insensitive) is an error.
    pub fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, AlignError> {
        seq.iter()
            .map(|&base| match encode_base(base) {
                INVALID => Err(AlignError::UnsupportedSymbol(base as char)),
                encoded => Ok(encoded),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn default_table() {
        let model = CostModel::default();
        assert_eq!(model.gap(), 30);
        for &base in BASES.iter() {
            assert_eq!(model.substitution(base, base).unwrap(), 0);
        }
        assert_eq!(model.substitution(b'A', b'C').unwrap(), 110);
        assert_eq!(model.substitution(b'A', b'G').unwrap(), 48);
        assert_eq!(model.substitution(b'A', b'T').unwrap(), 94);
        assert_eq!(model.substitution(b'C', b'G').unwrap(), 118);
        assert_eq!(model.substitution(b'C', b'T').unwrap(), 48);
        assert_eq!(model.substitution(b'G', b'T').unwrap(), 110);
        // The default happens to be symmetric.
        for &a in BASES.iter() {
            for &b in BASES.iter() {
                assert_eq!(
                    model.substitution(a, b).unwrap(),
                    model.substitution(b, a).unwrap()
                );
            }
        }
    }
    #[test]
    fn lower_case_is_accepted() {
        let model = CostModel::default();
        assert_eq!(model.substitution(b'a', b'g').unwrap(), 48);
        assert_eq!(model.encode(b"acgt").unwrap(), model.encode(b"ACGT").unwrap());
    }
    #[test]
    fn unsupported_symbol() {
        let model = CostModel::default();
        assert_eq!(
            model.substitution(b'N', b'A'),
            Err(AlignError::UnsupportedSymbol('N'))
        );
        assert_eq!(
            model.encode(b"ACGU"),
            Err(AlignError::UnsupportedSymbol('U'))
        );
        assert!(model.encode(b"").unwrap().is_empty());
    }
}
