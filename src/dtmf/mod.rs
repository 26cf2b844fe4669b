//! The DTMF keypad: symbols and their frequency pairs.

mod table;

pub use table::{lookup, require, FrequencyPair, COLUMN_HZ, ROW_HZ, SYMBOLS};
