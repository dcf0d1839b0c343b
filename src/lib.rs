//! Base32 codec over the RFC 4648 alphabet: upper-case `A-Z2-7`, `=`
//! padding. Encoding optionally emits padding; decoding validates
//! malformed and non-canonical input and optionally enforces the exact
//! padding run length.

pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decode_strict, Decoder};
pub use encode::{encode, encode_into, encode_with_padding, Encoder};

/// The 32 alphabet characters; the character at index `i` encodes the
/// 5-bit value `i`.
pub const CHARACTERS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Reserved character padding encoded text to a whole group, never a
/// member of the alphabet.
pub const PADDING_CHARACTER: u8 = b'=';

pub const ALPHABET: Alphabet = match Alphabet::new(CHARACTERS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

const BITS_PER_BYTE: usize = 8;
const BITS_PER_CHARACTER: usize = 5;

// A group is the smallest unit aligning byte and character boundaries:
// 5 bytes = 8 characters = 40 bits.
const BYTES_PER_GROUP: usize = 5;
const CHARACTERS_PER_GROUP: usize = 8;

// Padding run length indexed by the number of bytes missing from the
// final 5-byte group.
const PADDING_LENGTHS: [usize; 5] = [0, 1, 3, 4, 6];
