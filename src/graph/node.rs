/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz). Oscillators with a fixed frequency
///   ignore it; it is mostly useful when driving a primitive directly.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            frequency: 0.0,
        }
    }

    /// Create context for a direct frequency
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Source nodes overwrite `out`; processing nodes (filters, gain) transform
/// it in place.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Return the node to its initial state (phase, filter memory).
    ///
    /// Default implementation does nothing (stateless nodes).
    fn reset(&mut self) {}
}
