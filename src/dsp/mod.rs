//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, so they can run
//! directly inside the audio callback. They stay focused on the
//! signal-processing math; the graph layer handles composition.

/// Constant gain staging.
pub mod amplify;
/// Low-pass state-variable filter.
pub mod filter;
/// Sample-wise summing of two signals.
pub mod mix;
/// Sine phase accumulator.
pub mod oscillator;
