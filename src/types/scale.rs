//! Scale table of base frequencies.
//!
//! The table holds one chromatic octave starting at C2. Octave multipliers
//! are applied by the mapper, so only the twelve base notes live here.

use serde::{Deserialize, Serialize};

/// Number of notes in the scale table.
pub const SCALE_LEN: usize = 12;

/// Base frequencies (Hz) of the default chromatic octave, C2 through B2.
pub const CHROMATIC_C2: [f64; SCALE_LEN] = [
    65.41, 69.395, 73.415, 77.78, 82.405, 87.305, 92.5, 98.0, 103.825, 110.0, 116.52, 123.47,
];

/// A read-only table of twelve base frequencies.
///
/// Harmonic indices into the table are 1-based, matching the mapper's
/// bucket numbering where bucket 0 wraps to the top entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTable {
    notes: [f64; SCALE_LEN],
}

impl ScaleTable {
    /// Creates a table from explicit frequencies.
    pub const fn new(notes: [f64; SCALE_LEN]) -> Self {
        Self { notes }
    }

    /// The default chromatic octave.
    pub const fn chromatic() -> Self {
        Self::new(CHROMATIC_C2)
    }

    /// Returns the base frequency for a 1-based harmonic index.
    ///
    /// Returns `None` for 0 or indices past the end of the table.
    pub fn frequency(&self, harmonic: u8) -> Option<f64> {
        let index = usize::from(harmonic).checked_sub(1)?;
        self.notes.get(index).copied()
    }

    /// Returns all base frequencies in order.
    pub fn notes(&self) -> &[f64; SCALE_LEN] {
        &self.notes
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::chromatic()
    }
}
