#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DtmfError, Result};

/*
DTMF Keypad
===========

Each key sounds one frequency from the row (low) group and one from the
column (high) group at the same time:

              1209 Hz  1336 Hz  1477 Hz
    697 Hz  │   1        2        3
    770 Hz  │   4        5        6
    852 Hz  │   7        8        9
    941 Hz  │   *        0        #

The full standard has a fourth column at 1633 Hz for the A-D keys. Telephone
keypads don't carry it, and neither does this table: A-D are treated like
any other unknown character.

The table is static data; lookups never allocate and the pairs are copied
out by value.
*/

/// Row (low group) frequencies, top to bottom.
pub const ROW_HZ: [f32; 4] = [697.0, 770.0, 852.0, 941.0];

/// Column (high group) frequencies, left to right.
pub const COLUMN_HZ: [f32; 3] = [1209.0, 1336.0, 1477.0];

static KEYPAD: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// Every supported symbol, in keypad order.
pub const SYMBOLS: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

/// The two frequencies sounded together for one key.
///
/// `f1` is the row (low group) frequency, `f2` the column (high group).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPair {
    pub f1: f32,
    pub f2: f32,
}

impl FrequencyPair {
    /// North American dial tone. Not a keypad symbol; used as the initial
    /// configuration of a fresh tone source.
    pub const DIAL_TONE: FrequencyPair = FrequencyPair::new(350.0, 440.0);

    pub const fn new(f1: f32, f2: f32) -> Self {
        Self { f1, f2 }
    }
}

/// Resolve a keypad symbol to its frequency pair.
///
/// Returns `None` for anything outside `0-9`, `*` and `#`.
pub fn lookup(symbol: char) -> Option<FrequencyPair> {
    KEYPAD.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|&key| key == symbol)
            .map(|column| FrequencyPair::new(ROW_HZ[row], COLUMN_HZ[column]))
    })
}

/// Like [`lookup`], but unknown symbols are an error.
pub fn require(symbol: char) -> Result<FrequencyPair> {
    lookup(symbol).ok_or(DtmfError::UnknownSymbol(symbol))
}
