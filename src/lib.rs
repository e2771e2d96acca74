//! Base36 codec for 128-bit values: 16 bytes to a canonical, sortable
//! 25-character string and back, built on a general digit-array radix
//! converter for any pair of bases from 2 to 256.

pub mod base36;
pub mod base_common;
pub mod base_convert;
