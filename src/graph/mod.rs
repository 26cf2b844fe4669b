//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with block-based rendering.
//! The `extensions` module adds fluent helpers so a tone chain reads in
//! signal-flow order.

/// Constant gain stage.
pub mod amplify;
/// Fluent combinators (`.sum()`, `.gain()`, `.through()`).
pub mod extensions;
/// Low-pass filter node.
pub mod filter;
/// Parallel summing of two sources.
pub mod mix;
/// Core traits shared by all graph nodes.
pub mod node;
/// Fixed-frequency sine source.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, RenderCtx};
