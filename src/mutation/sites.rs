/// The double-substitution site pairs for a ring of `len` positions.
///
/// Adjacent index pairs (i, i+1) for i in [0, len-2], plus the wrap-around
/// pair (0, len-1) that closes the ring. Exactly `len` pairs for `len >= 2`.
pub fn ring_pairs(len: usize) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..len.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    if len >= 2 {
        pairs.push((0, len - 1));
    }
    pairs
}
