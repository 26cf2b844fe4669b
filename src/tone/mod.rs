//! A single two-frequency tone: its signal chain and the stateful source
//! that starts and stops it.

mod chain;
mod source;

pub use chain::{ToneChain, ToneShape};
pub use source::{ActiveTone, ToneSource, ToneState};
