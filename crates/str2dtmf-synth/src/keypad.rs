//! DTMF keypad symbols and their frequency pairs.
//!
//! The table is the standard 4x4 telephone keypad grid plus a pause symbol
//! (`,`) that renders as silence. Rows select the low-group frequency, columns
//! the high-group frequency:
//!
//! ```text
//!           1209  1336  1477  1633
//!     697     1     2     3     A
//!     770     4     5     6     B
//!     852     7     8     9     C
//!     941     *     0     #     D
//! ```

use serde::{Deserialize, Serialize};

/// Low-group (row) frequencies in Hz.
pub const ROW_FREQUENCIES: [u32; 4] = [697, 770, 852, 941];

/// High-group (column) frequencies in Hz.
pub const COLUMN_FREQUENCIES: [u32; 4] = [1209, 1336, 1477, 1633];

/// A recognized DTMF input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DtmfSymbol {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    A,
    B,
    C,
    D,
    Star,
    Pound,
    /// Renders as silence for the length of a tone.
    Pause,
}

impl DtmfSymbol {
    /// Every recognized symbol, in keypad order followed by the pause.
    pub const ALL: [DtmfSymbol; 17] = [
        DtmfSymbol::Digit1,
        DtmfSymbol::Digit2,
        DtmfSymbol::Digit3,
        DtmfSymbol::A,
        DtmfSymbol::Digit4,
        DtmfSymbol::Digit5,
        DtmfSymbol::Digit6,
        DtmfSymbol::B,
        DtmfSymbol::Digit7,
        DtmfSymbol::Digit8,
        DtmfSymbol::Digit9,
        DtmfSymbol::C,
        DtmfSymbol::Star,
        DtmfSymbol::Digit0,
        DtmfSymbol::Pound,
        DtmfSymbol::D,
        DtmfSymbol::Pause,
    ];

    /// Maps an input character to a symbol, ignoring ASCII case.
    ///
    /// Returns `None` for anything outside `0-9`, `A-D`, `*`, `#` and `,`.
    pub fn from_char(c: char) -> Option<Self> {
        let symbol = match c.to_ascii_uppercase() {
            '0' => DtmfSymbol::Digit0,
            '1' => DtmfSymbol::Digit1,
            '2' => DtmfSymbol::Digit2,
            '3' => DtmfSymbol::Digit3,
            '4' => DtmfSymbol::Digit4,
            '5' => DtmfSymbol::Digit5,
            '6' => DtmfSymbol::Digit6,
            '7' => DtmfSymbol::Digit7,
            '8' => DtmfSymbol::Digit8,
            '9' => DtmfSymbol::Digit9,
            'A' => DtmfSymbol::A,
            'B' => DtmfSymbol::B,
            'C' => DtmfSymbol::C,
            'D' => DtmfSymbol::D,
            '*' => DtmfSymbol::Star,
            '#' => DtmfSymbol::Pound,
            ',' => DtmfSymbol::Pause,
            _ => return None,
        };
        Some(symbol)
    }

    /// Canonical (uppercase) character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            DtmfSymbol::Digit0 => '0',
            DtmfSymbol::Digit1 => '1',
            DtmfSymbol::Digit2 => '2',
            DtmfSymbol::Digit3 => '3',
            DtmfSymbol::Digit4 => '4',
            DtmfSymbol::Digit5 => '5',
            DtmfSymbol::Digit6 => '6',
            DtmfSymbol::Digit7 => '7',
            DtmfSymbol::Digit8 => '8',
            DtmfSymbol::Digit9 => '9',
            DtmfSymbol::A => 'A',
            DtmfSymbol::B => 'B',
            DtmfSymbol::C => 'C',
            DtmfSymbol::D => 'D',
            DtmfSymbol::Star => '*',
            DtmfSymbol::Pound => '#',
            DtmfSymbol::Pause => ',',
        }
    }

    /// Keypad grid position as `(row, column)`, or `None` for the pause.
    fn grid_position(self) -> Option<(usize, usize)> {
        let pos = match self {
            DtmfSymbol::Digit1 => (0, 0),
            DtmfSymbol::Digit2 => (0, 1),
            DtmfSymbol::Digit3 => (0, 2),
            DtmfSymbol::A => (0, 3),
            DtmfSymbol::Digit4 => (1, 0),
            DtmfSymbol::Digit5 => (1, 1),
            DtmfSymbol::Digit6 => (1, 2),
            DtmfSymbol::B => (1, 3),
            DtmfSymbol::Digit7 => (2, 0),
            DtmfSymbol::Digit8 => (2, 1),
            DtmfSymbol::Digit9 => (2, 2),
            DtmfSymbol::C => (2, 3),
            DtmfSymbol::Star => (3, 0),
            DtmfSymbol::Digit0 => (3, 1),
            DtmfSymbol::Pound => (3, 2),
            DtmfSymbol::D => (3, 3),
            DtmfSymbol::Pause => return None,
        };
        Some(pos)
    }

    /// Returns the `(low, high)` frequency pair in Hz.
    ///
    /// The pause symbol returns `(0, 0)`.
    pub fn frequencies(self) -> (u32, u32) {
        match self.grid_position() {
            Some((row, col)) => (ROW_FREQUENCIES[row], COLUMN_FREQUENCIES[col]),
            None => (0, 0),
        }
    }

    /// Whether this symbol produces silence instead of a tone.
    pub fn is_pause(self) -> bool {
        self == DtmfSymbol::Pause
    }
}

impl std::fmt::Display for DtmfSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
