use crate::dsp::oscillator::OscillatorBlock;
use crate::graph::node::{GraphNode, RenderCtx};

/// Fixed-frequency sine source.
///
/// Each DTMF tone owns two of these, one per frequency group.
pub struct OscNode {
    osc: OscillatorBlock,
    frequency: f32,
}

impl OscNode {
    pub fn sine(frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::sine(),
            frequency,
        }
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let fixed = RenderCtx {
            frequency: self.frequency,
            ..*ctx
        };
        self.osc.render(out, &fixed);
    }

    fn reset(&mut self) {
        self.osc.reset();
    }
}
