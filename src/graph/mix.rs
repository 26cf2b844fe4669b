use crate::{
    dsp::mix::sum_into,
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Summing
================

Sum renders two sources and adds them, the way connecting two oscillators to
one gain input behaves on an analog mixer or a browser audio graph.

  Sum: [Source A] ────┬──→ (+) ──→ output
       [Source B] ────┘

1. Render source A into the output buffer
2. Render source B into a scratch buffer
3. Add scratch into output

The scratch buffer is allocated once at construction (MAX_BLOCK_SIZE
frames), so rendering never allocates. Callers must not render blocks
larger than MAX_BLOCK_SIZE.

Because nothing is weighted, the sum of two unit sines peaks at 2.0; follow
it with `.gain()` to bring it back into range:

  OscNode::sine(697.0)
      .sum(OscNode::sine(1209.0))
      .gain(0.25)
*/

pub struct Sum<A, B> {
    pub source_a: A,
    pub source_b: B,
    temp_buffer: Vec<f32>,
}

impl<A, B> Sum<A, B> {
    pub fn new(source_a: A, source_b: B) -> Self {
        Sum {
            source_a,
            source_b,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<A: GraphNode, B: GraphNode> GraphNode for Sum<A, B> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source_a.render_block(out, ctx);

        let frames = &mut self.temp_buffer[..out.len()];
        frames.fill(0.0);
        self.source_b.render_block(frames, ctx);

        sum_into(out, frames);
    }

    fn reset(&mut self) {
        self.source_a.reset();
        self.source_b.reset();
    }
}
