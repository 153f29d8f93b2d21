//! Cyclic time shifting
//!
//! Rotates a sequence in place: a positive shift moves samples to the right
//! (delay) and wraps the tail around to the front, a negative shift moves
//! them to the left (advance).

use snafu::Snafu;
use tracing::trace;

#[derive(Debug, Snafu, PartialEq)]
pub enum TimeShiftError {
    /// Shift amount is not a whole number of samples
    #[snafu(display("Shift amount {n} is not a whole number of samples"))]
    NonIntegralShift { n: f64 },
}

/// Cyclically shift `seq` right by `n` samples.
///
/// `n` arrives as a float because shift estimates are usually computed in
/// floating point; it must still be a whole number. A fractional or
/// non-finite `n` is rejected and `seq` is left untouched.
///
/// # Example
/// ```
/// use cellscan_dsp::tshift;
///
/// let mut v = [1, 2, 3, 4, 5];
/// tshift::tshift(&mut v, 2.0)?;
/// assert_eq!(v, [4, 5, 1, 2, 3]);
/// # Ok::<(), cellscan_dsp::TimeShiftError>(())
/// ```
pub fn tshift<T: Copy>(seq: &mut [T], n: f64) -> Result<(), TimeShiftError> {
    if !n.is_finite() || n != n.floor() {
        return Err(TimeShiftError::NonIntegralShift { n });
    }
    if seq.is_empty() {
        return Ok(());
    }
    // Reduce first: whole floats beyond isize::MAX would saturate in the cast
    let len = seq.len() as isize;
    let mut shift = n.rem_euclid(len as f64) as isize;
    // Rotate the short way round to keep the scratch copy small
    if shift > len / 2 {
        shift -= len;
    }
    tshift_by(seq, shift);
    Ok(())
}

/// Cyclically shift `seq` right by `n` samples (left for negative `n`).
///
/// Uses O(|n|) scratch space. Shifts of a full length or more wrap modulo
/// `seq.len()`.
pub fn tshift_by<T: Copy>(seq: &mut [T], n: isize) {
    let len = seq.len();
    if len == 0 || n == 0 {
        return;
    }

    let mut shift = n;
    if n.unsigned_abs() >= len {
        shift = n % len as isize;
        trace!(n, len, shift, "Shift wraps modulo sequence length");
        if shift == 0 {
            return;
        }
    }

    if shift > 0 {
        let ni = shift as usize;
        // Save the tail that falls off the right end
        let saved = seq[len - ni..].to_vec();
        seq.copy_within(0..len - ni, ni);
        seq[..ni].copy_from_slice(&saved);
    } else {
        let ni = shift.unsigned_abs();
        // Save the head that falls off the left end
        let saved = seq[..ni].to_vec();
        seq.copy_within(ni..len, 0);
        seq[len - ni..].copy_from_slice(&saved);
    }
}
