#[inline]
pub fn fill<T: Clone>(seq: &mut [T], value: T) {
    seq.fill(value);
}

pub fn fill_n<T: Clone>(seq: &[T], value: T, n: usize) -> Vec<T> {
    let split = n.min(seq.len());
    let mut out = Vec::with_capacity(seq.len());
    out.resize(split, value);
    out.extend_from_slice(&seq[split..]);
    out
}

pub fn map_n<T, F>(seq: &[T], f: F, n: usize) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    let split = n.min(seq.len());
    let mut out = Vec::with_capacity(seq.len());
    out.extend(seq[..split].iter().map(f));
    out.extend_from_slice(&seq[split..]);
    out
}

/// Positive `n` moves elements toward higher indices, negative `n` toward lower
/// ones: `rotate_copy(&[1, 2, 3, 4, 5], 2) == [4, 5, 1, 2, 3]`.
pub fn rotate_copy<T: Clone>(seq: &[T], n: isize) -> Vec<T> {
    let len = seq.len();
    if len == 0 {
        return Vec::new();
    }

    let right = rotation_amount(n, len);
    let split = len - right;
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&seq[split..]);
    out.extend_from_slice(&seq[..split]);
    out
}

#[inline]
fn rotation_amount(n: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    let len_i = len as i128;
    (n as i128).rem_euclid(len_i) as usize
}

/// Keeps the leading `len - n` elements and pads the tail with `None`:
/// `shift_left(&[1, 2, 3, 4, 5], 2) == [Some(1), Some(2), Some(3), None, None]`
pub fn shift_left<T: Clone>(seq: &[T], n: usize) -> Vec<Option<T>> {
    let kept = seq.len().saturating_sub(n);
    let mut out = Vec::with_capacity(seq.len());
    out.extend(seq[..kept].iter().cloned().map(Some));
    out.resize(seq.len(), None);
    out
}

/// Keeps the leading `len - n` elements and pads the head with `None`:
/// `shift_right(&[1, 2, 3, 4, 5], 2) == [None, None, Some(1), Some(2), Some(3)]`
pub fn shift_right<T: Clone>(seq: &[T], n: usize) -> Vec<Option<T>> {
    let kept = seq.len().saturating_sub(n);
    let mut out = Vec::with_capacity(seq.len());
    out.resize(seq.len() - kept, None);
    out.extend(seq[..kept].iter().cloned().map(Some));
    out
}
