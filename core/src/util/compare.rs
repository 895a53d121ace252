//! Constant-time comparison for integrity tags and key bytes

/// Compare two strings (or byte slices) without branching on the position of the first difference.
///
/// Returns early only when the lengths differ, since tag length is not secret.
/// For equal lengths every byte pair is xor-ed into one accumulator, and the
/// strings are equal iff the accumulator is zero after the full pass.
///
/// ```
///   use hexseal::util::constant_time_eq;
///   assert!(constant_time_eq("a1b2", "a1b2"));
///   assert!(!constant_time_eq("a1b2", "a1b3"));
///   assert!(!constant_time_eq("a1b2", "a1b"));
/// ```
pub fn constant_time_eq<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != b.len() {
        return false;
    }
    let mut acc: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    // keep the optimizer from turning the loop into an early-exit compare
    std::hint::black_box(acc) == 0
}
