//! Run-length encoding of quantized (rounded-to-integer) coefficients,
//! feeding an unsigned [`IntStream`] for run lengths and a signed one for
//! values.

use crate::bits::{BitSink, BitSource};
use crate::error::Error;
use crate::intstream::IntStream;

/// Round every sample to the nearest integer, then emit the sample count
/// followed by `(run_length - 1, value)` pairs for each maximal run of
/// equal values.
pub fn encode_rle(
    values: &[f32],
    lengths: &mut IntStream,
    magnitudes: &mut IntStream,
    sink: &mut BitSink,
) -> Result<(), Error> {
    lengths.put_uint(sink, values.len() as u32)?;
    let rounded: Vec<i32> = values.iter().map(|v| v.round() as i32).collect();
    let mut i = 0;
    while i < rounded.len() {
        let value = rounded[i];
        let mut run = 1usize;
        while i + run < rounded.len() && rounded[i + run] == value {
            run += 1;
        }
        log::trace!("rle run of {} at offset {}: value {}", run, i, value);
        lengths.put_uint(sink, (run - 1) as u32)?;
        magnitudes.put_sint(sink, value)?;
        i += run;
    }
    Ok(())
}

/// Inverse of [`encode_rle`].
pub fn decode_rle(
    lengths: &mut IntStream,
    magnitudes: &mut IntStream,
    src: &mut BitSource,
) -> Result<Vec<i32>, Error> {
    let n = lengths.get_uint(src)? as usize;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let run = lengths.get_uint(src)? as usize + 1;
        let value = magnitudes.get_sint(src)?;
        out.resize(out.len() + run, value);
    }
    out.truncate(n);
    Ok(out)
}
