pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::{decode, decode_into, Decoder};
pub use encode::{encode, encode_into, Encoder};

/// Width of the binary representation.
pub const BYTE_LEN: usize = 16;

/// Width of the textual representation. 25 is the tight choice for 128 bits:
/// 36^25 > 2^128 > 36^24, so every byte array encodes, while some 25-digit
/// strings name values beyond 2^128 - 1 and fail to decode.
pub const TEXT_LEN: usize = 25;

pub const ALPHABET: Alphabet<36> = match Alphabet::case_insensitive(b"0123456789abcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const ALPHABET_UPPER: Alphabet<36> = match Alphabet::case_insensitive(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

#[cfg(test)]
mod tests {
    use super::{Decoder, Encoder, ALPHABET_UPPER, TEXT_LEN};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trips(bytes in any::<[u8; 16]>()) {
            let text = super::encode(&bytes);
            prop_assert_eq!(text.len(), TEXT_LEN);
            prop_assert_eq!(super::decode(&text), Ok(bytes));
        }

        #[test]
        fn uppercase_round_trips(bytes in any::<[u8; 16]>()) {
            let encoder = Encoder::new(&ALPHABET_UPPER);
            let decoder = Decoder::new(&ALPHABET_UPPER);
            let text = encoder.encode(&bytes);
            prop_assert_eq!(decoder.decode(&text), Ok(bytes));
            // either case policy reads the other's output
            prop_assert_eq!(super::decode(&text), Ok(bytes));
        }

        #[test]
        fn preserves_byte_order(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
            prop_assert_eq!(a.cmp(&b), super::encode(&a).cmp(&super::encode(&b)));
        }
    }
}
