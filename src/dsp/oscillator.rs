use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Sine Phase Accumulator
======================

A DTMF tone is two pure sines, so the only waveform needed here is the sine.
The oscillator keeps a phase in radians and advances it by a fixed step each
sample:

    step  = TAU * frequency / sample_rate
    y[n]  = sin(phase)
    phase = (phase + step) mod TAU

Wrapping the phase every sample keeps it small, so `sin` stays accurate even
after minutes of continuous output (an unwrapped f32 phase loses precision
quickly once it grows past a few thousand radians).

Example: 697 Hz at 48 kHz
  step = 6.2832 * 697 / 48000 ≈ 0.0912 rad/sample
  one cycle ≈ 68.9 samples
*/

pub struct OscillatorBlock {
    phase: f32,
}

impl OscillatorBlock {
    pub fn sine() -> Self {
        Self { phase: 0.0 }
    }

    /// Fill `out` with a unit-amplitude sine at `ctx.frequency`.
    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let step = TAU * ctx.frequency / ctx.sample_rate;

        for sample in out.iter_mut() {
            *sample = self.phase.sin();
            self.phase += step;
            if self.phase >= TAU {
                self.phase -= TAU;
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Default for OscillatorBlock {
    fn default() -> Self {
        Self::sine()
    }
}
