//! Signal summing.

/*
Summing
=======

A DTMF tone connects both oscillators to the same gain stage, which simply
adds them. No crossfade weights are applied here; level control happens in
the gain stage that follows.

    output[n] = a[n] + b[n]
*/

/// Add `other` into `out` sample-by-sample.
///
/// # Panics
/// Panics in debug builds if the slices have different lengths.
#[inline]
pub fn sum_into(out: &mut [f32], other: &[f32]) {
    debug_assert_eq!(out.len(), other.len());

    for (o, &b) in out.iter_mut().zip(other.iter()) {
        *o += b;
    }
}
