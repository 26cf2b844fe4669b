use std::f32::consts::PI;

use crate::graph::node::RenderCtx;

/*
Low-Pass Shaping Stage
======================

Two summed sines are already band-limited, but the tone is switched on and
off abruptly, and those edges splash energy across the whole spectrum. A
gentle low-pass after the gain stage softens that splash without touching
the DTMF band (697 - 1477 Hz).

The filter is a 2-pole TPT ("topology-preserving transform") state-variable
filter. Only the low-pass output is used.

    g = tan(PI * cutoff / sample_rate)     prewarped integrator gain
    k = 2 - 2 * resonance                  damping (k = 2 is critically damped)

    h  = 1 / (1 + g * (g + k))
    v3 = x - ic2
    v1 = h * (ic1 + g * v3)               band-pass
    v2 = ic2 + g * v1                     low-pass
    ic1 = 2 * v1 - ic1
    ic2 = 2 * v2 - ic2

The cutoff is clamped below Nyquist before prewarping; `tan` diverges at
sample_rate / 2, which would otherwise blow the state up on low sample rates
(an 8 kHz cutoff on an 8 kHz telephony stream, for example).
*/

const MAX_CUTOFF_RATIO: f32 = 0.45;

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    pub cutoff_hz: f32,
    pub resonance: f32,
}

impl SVFilter {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            resonance: 0.0,
        }
    }

    #[inline]
    fn compute_g(&self, ctx: &RenderCtx) -> f32 {
        let cutoff = self
            .cutoff_hz
            .clamp(1.0, ctx.sample_rate * MAX_CUTOFF_RATIO);
        (PI * cutoff / ctx.sample_rate).tan()
    }

    #[inline]
    pub fn next_sample(&mut self, sample: f32, k: f32, g: f32) -> f32 {
        let h = 1.0 / (1.0 + g * (g + k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;

        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;

        v2
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.compute_g(ctx);
        let k = 2.0 - (2.0 * self.resonance);

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, k, g);
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    pub fn set_cutoff(&mut self, cutoff: f32) {
        self.cutoff_hz = cutoff;
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance;
    }
}
