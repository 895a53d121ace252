//! test utilities

use bytes::BytesMut;
use random_fast_rng::{FastRng, Random};

/// compare two arrays for equality
/// Returns true if arrays have the same length and corresponding elements are "equal"
/// ```
/// use hexseal_test_util::arrays_eq;
/// let first: Vec<u8> = vec![1,2,3,4,5];
/// let mut second: Vec<u8> = Vec::new();
/// second.extend_from_slice(&first);
/// assert!(arrays_eq(&first, &second));
/// ```
pub fn arrays_eq<T: PartialEq>(a1: &[T], a2: &[T]) -> bool {
    a1.len() == a2.len() && a1.iter().zip(a2.iter()).all(|(a, b)| a == b)
}

/// Create a BytesMut buffer and fill with random data.
/// This does not generate cryptographically secure RNGs. Do NOT use this to generate keys,
/// except for unit tests.
/// ```
/// use hexseal_test_util::random_bytes;
/// const BUF_LEN:usize = 128;
/// let data = random_bytes(BUF_LEN);
/// assert!(data.len() == BUF_LEN);
/// ```
pub fn random_bytes(len: usize) -> BytesMut {
    let mut buf = BytesMut::zeroed(len);
    FastRng::new().fill_bytes(buf.as_mut());
    buf
}

/// Fill buffer with random (English) word-like text
/// ```
/// use hexseal_test_util::random_fill_text;
/// use random_fast_rng::FastRng;
/// const BUF_LEN:usize = 256;
/// let mut rng = FastRng::new();
/// let mut buf = vec![0u8; BUF_LEN];
/// random_fill_text(&mut rng, &mut buf);
/// ```
pub fn random_fill_text(rng: &mut FastRng, buf: &mut [u8]) {
    // this string must be 32 chars (or longer) for bitmask below to work
    const ENGLISH_TEXT_CHARS: &[u8] = b"abcdefghijklmnoprstuvwxyz   etao";
    for b in buf.iter_mut() {
        *b = ENGLISH_TEXT_CHARS[rng.get_u8() as usize & 31]
    }
}

/// Random word-like ascii text of `len` characters
/// ```
/// use hexseal_test_util::random_text;
/// assert_eq!(random_text(40).len(), 40);
/// ```
pub fn random_text(len: usize) -> String {
    let mut rng = FastRng::new();
    let mut buf = vec![0u8; len];
    random_fill_text(&mut rng, &mut buf);
    // every byte came from an ascii table
    buf.into_iter().map(char::from).collect()
}

/// Replace the hex digit at `pos` with a different hex digit.
/// Used to simulate tampering with one character of an envelope field.
/// ```
/// use hexseal_test_util::flip_hex_char;
/// assert_eq!(flip_hex_char("00ff", 1), "01ff");
/// assert_eq!(flip_hex_char("00ff", 3), "00fe");
/// ```
pub fn flip_hex_char(s: &str, pos: usize) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i != pos {
                c
            } else if c == '0' {
                '1'
            } else if c.is_ascii_hexdigit() {
                // any hex digit other than '0' maps to a different one
                if c == 'f' || c == 'F' {
                    'e'
                } else {
                    '0'
                }
            } else {
                '0'
            }
        })
        .collect()
}
