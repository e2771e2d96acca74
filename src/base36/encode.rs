use super::{Alphabet, ALPHABET, BYTE_LEN, TEXT_LEN};
use crate::base_convert;

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<36>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<36>) -> Self {
        Self { alphabet }
    }

    /// Writes the 25-digit Base36 rendition of `input` into `output`. Cannot
    /// fail: 25 Base36 digits cover every 128-bit value.
    pub fn encode_into(&self, input: &[u8; BYTE_LEN], output: &mut [u8; TEXT_LEN]) {
        let mut digit_values = [0u8; TEXT_LEN];
        base_convert::convert(input, 256, &mut digit_values, 36).expect("36^25 exceeds 2^128");
        for (character, &value) in output.iter_mut().zip(digit_values.iter()) {
            *character = self.alphabet.encode(value as usize);
        }
    }

    pub fn encode(&self, input: &[u8; BYTE_LEN]) -> String {
        let mut output = [0u8; TEXT_LEN];
        self.encode_into(input, &mut output);
        unsafe { String::from_utf8_unchecked(output.to_vec()) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: &[u8; BYTE_LEN]) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: &[u8; BYTE_LEN], output: &mut [u8; TEXT_LEN]) {
    Encoder::default().encode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::super::ALPHABET_UPPER;
    use super::Encoder;
    use hex_literal::hex;

    #[test]
    fn encode() {
        assert_eq!(super::encode(&[0u8; 16]), "0000000000000000000000000");
        assert_eq!(super::encode(&[0xff; 16]), "f5lxx1zz5pnorynqglhzmsp33");
        assert_eq!(
            super::encode(&hex!("017fee7fef417e2b3432ac2ec553687c")),
            "0372hg16csmsm50l8dikcvukc"
        );
        assert_eq!(
            super::encode(&hex!("017fee7fef427e2b346c0ff414bbcffd")),
            "0372hg16cy3nowracls909wcd"
        );
        assert_eq!(
            super::encode(&hex!("017fef39c2641ba56a9483188841e05a")),
            "0372ijojuxuhjsfkeryi2mrtm"
        );
        assert_eq!(super::encode(&hex!("00000000000000000000000000000001")), "0000000000000000000000001");
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 25];
        super::encode_into(&[0xff; 16], &mut output);
        assert_eq!(&output, b"f5lxx1zz5pnorynqglhzmsp33");
    }

    #[test]
    fn encode_uppercase() {
        let encoder = Encoder::new(&ALPHABET_UPPER);
        assert_eq!(encoder.encode(&[0xff; 16]), "F5LXX1ZZ5PNORYNQGLHZMSP33");
        assert_eq!(
            encoder.encode(&hex!("017fee7fef417e2b3432ac2ec553687c")),
            "0372HG16CSMSM50L8DIKCVUKC"
        );
    }
}
