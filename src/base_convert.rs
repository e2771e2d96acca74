use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The value does not fit in the requested number of output digits.
    Overflow,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => write!(f, "Value does not fit in the output digit array"),
        }
    }
}

/// Rewrites a big-endian digit value array from one base into another.
///
/// `input` is read as a numeral in `in_base` and the same value is written
/// into `output` as a numeral in `out_base`, left-padded with zeros to fill
/// `output` exactly. Works for any pair of bases from 2 to 256; the Base36
/// codec uses it for the 36/256 pair only.
///
/// Fails with [`Error::Overflow`] when the value is `out_base ^ output.len()`
/// or larger, in which case the contents of `output` are unspecified.
///
/// # Panics
///
/// Panics if either base lies outside 2..=256. Input digits must be smaller
/// than `in_base`; this is only checked by debug assertions.
pub fn convert(input: &[u8], in_base: usize, output: &mut [u8], out_base: usize) -> Result<(), Error> {
    assert!((2..=256).contains(&in_base), "in_base out of range");
    assert!((2..=256).contains(&out_base), "out_base out of range");

    let in_base = in_base as u64;
    let out_base = out_base as u64;

    output.fill(0);

    // Fold as many input digits as possible into each carry so the inner loop
    // runs once per word instead of once per digit. `word_base * out_base`
    // must stay below u64::MAX, since `carry` peaks just under that product
    // during the multiply-accumulate step.
    let mut word_len = 1usize;
    let mut word_base = in_base; // in_base ^ word_len
    while word_base <= u64::MAX / (in_base * out_base) {
        word_len += 1;
        word_base *= in_base;
    }

    // leftmost output position written so far; everything left of it is zero
    let mut out_used = output.len();

    // the first word may be short so that word boundaries line up with the
    // end of the input
    let (head, tail) = input.split_at(input.len() % word_len);
    let words = std::iter::once(head)
        .filter(|word| !word.is_empty())
        .chain(tail.chunks_exact(word_len));

    for word in words {
        let mut carry = 0u64;
        for &digit in word {
            debug_assert!((digit as u64) < in_base, "input digit not below in_base");
            carry = carry * in_base + digit as u64;
        }

        // scale the digits already in place by word_base while distributing
        // the carry from least to most significant position
        for position in (0..output.len()).rev() {
            carry += output[position] as u64 * word_base;
            output[position] = (carry % out_base) as u8;
            carry /= out_base;

            // positions left of out_used still hold zero, so once the carry
            // runs out there is nothing further to scale
            if carry == 0 && position <= out_used {
                out_used = position;
                break;
            }
        }
        if carry != 0 {
            return Err(Error::Overflow);
        }
    }

    Ok(())
}
