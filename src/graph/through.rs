use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first
(source) into the second (effect), which processes the buffer in place.

  Through: [Source] ──→ [Effect] ──→ output

The tone chain ends with one of these:

  pair.gain(0.25).through(FilterNode::lowpass(8_000.0))
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn reset(&mut self) {
        self.source.reset();
        self.filter.reset();
    }
}
