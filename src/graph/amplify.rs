use crate::{
    dsp::amplify::apply_gain,
    graph::node::{GraphNode, RenderCtx},
};

/// Scale a source by a constant factor.
pub struct Gain<N> {
    pub source: N,
    pub gain: f32,
}

impl<N> Gain<N> {
    pub fn new(source: N, gain: f32) -> Self {
        Self { source, gain }
    }
}

impl<N: GraphNode> GraphNode for Gain<N> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        apply_gain(out, self.gain);
    }

    fn reset(&mut self) {
        self.source.reset();
    }
}
