/// Last `n` elements of `data` in original order.
/// Shorter inputs come back whole, so the result length is `min(len, n)`.
pub fn trailing<T>(data: &[T], n: usize) -> &[T] {
    &data[data.len().saturating_sub(n)..]
}

/// true iff every element is strictly greater than the one before it.
pub fn is_strictly_increasing<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] < pair[1])
}
