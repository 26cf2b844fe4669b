#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dtmf::FrequencyPair,
    graph::{
        amplify::Gain, extensions::NodeExt, filter::FilterNode, mix::Sum, oscillator::OscNode,
        through::Through, GraphNode, RenderCtx,
    },
    MAX_BLOCK_SIZE,
};

/*
Tone Chain
==========

One DTMF tone is this graph:

    [sine f1] ──┐
                ├──→ (+) ──→ [gain 0.25] ──→ [lowpass 8 kHz] ──→ output
    [sine f2] ──┘

A chain is built fresh for every tone and thrown away when the tone stops,
so each tone starts at zero phase with a clean filter state. The chain owns
everything it needs to render (including the sample rate), which lets it be
handed to an audio thread as a single value.
*/

/// Level and shaping applied to every tone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneShape {
    /// Scale applied to the summed pair (keeps two unit sines from clipping).
    pub gain: f32,
    /// Low-pass cutoff in Hz.
    pub cutoff_hz: f32,
}

impl Default for ToneShape {
    fn default() -> Self {
        Self {
            gain: 0.25,
            cutoff_hz: 8_000.0,
        }
    }
}

type ChainGraph = Through<Gain<Sum<OscNode, OscNode>>, FilterNode>;

pub struct ToneChain {
    pair: FrequencyPair,
    shape: ToneShape,
    ctx: RenderCtx,
    graph: ChainGraph,
}

impl ToneChain {
    pub fn new(pair: FrequencyPair, shape: ToneShape, sample_rate: f32) -> Self {
        let graph = OscNode::sine(pair.f1)
            .sum(OscNode::sine(pair.f2))
            .gain(shape.gain)
            .through(FilterNode::lowpass(shape.cutoff_hz));

        Self {
            pair,
            shape,
            ctx: RenderCtx::new(sample_rate),
            graph,
        }
    }

    pub fn pair(&self) -> FrequencyPair {
        self.pair
    }

    pub fn shape(&self) -> ToneShape {
        self.shape
    }

    pub fn sample_rate(&self) -> f32 {
        self.ctx.sample_rate
    }

    /// Render any number of frames at the chain's own sample rate.
    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = self.ctx;
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.graph.render_block(block, &ctx);
        }
    }
}
