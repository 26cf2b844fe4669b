//! Gain staging.

/*
Gain
====

Two unit sines summed together peak at 2.0, well past full scale. The tone
chain scales the sum by a fixed factor (0.25 by default) before it reaches
the output so the pair never clips:

    |sin(a) + sin(b)| <= 2.0
    2.0 * 0.25        =  0.5   (-6 dBFS headroom)

The operation is stateless; each output sample depends only on the input
sample at the same index.
*/

/// Multiply a signal by a constant gain factor (in-place).
///
/// # Arguments
/// * `signal` - The signal buffer to modify in-place
/// * `gain` - The gain factor (0.0 = silence, 1.0 = unchanged)
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}
