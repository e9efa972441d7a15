use crate::algorithms::sentinel::equal_to;

#[inline]
pub fn mismatch<'a, 'b, T, U>(a: &'a [T], b: &'b [U]) -> Option<(&'a T, &'b U)>
where
    T: PartialEq<U>,
{
    mismatch_by(a, b, equal_to)
}

pub fn mismatch_by<'a, 'b, T, U, P>(
    a: &'a [T],
    b: &'b [U],
    mut pred: P,
) -> Option<(&'a T, &'b U)>
where
    P: FnMut(&T, &U) -> bool,
{
    a.iter().zip(b).find(|&(x, y)| !pred(x, y))
}

#[inline]
pub fn find<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|x| x == target)
}

#[inline]
pub fn find_if<T, P>(seq: &[T], pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().position(pred)
}

#[inline]
pub fn find_if_not<T, P>(seq: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().position(|x| !pred(x))
}

#[inline]
fn matches_at<T, U, P>(hay: &[T], needle: &[U], start: usize, pred: &mut P) -> bool
where
    P: FnMut(&T, &U) -> bool,
{
    debug_assert!(start + needle.len() <= hay.len());
    hay[start..start + needle.len()]
        .iter()
        .zip(needle)
        .all(|(x, y)| pred(x, y))
}

#[inline]
pub fn find_end<T, U>(hay: &[T], needle: &[U]) -> Option<usize>
where
    T: PartialEq<U>,
{
    find_end_by(hay, needle, equal_to)
}

pub fn find_end_by<T, U, P>(hay: &[T], needle: &[U], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    let last_start = hay.len() - needle.len();
    (0..=last_start)
        .rev()
        .find(|&start| matches_at(hay, needle, start, &mut pred))
}

#[inline]
pub fn find_first_of<T, U>(hay: &[T], values: &[U]) -> Option<usize>
where
    T: PartialEq<U>,
{
    find_first_of_by(hay, values, equal_to)
}

pub fn find_first_of_by<T, U, P>(hay: &[T], values: &[U], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    if values.is_empty() {
        return None;
    }
    hay.iter().position(|x| values.iter().any(|v| pred(x, v)))
}

#[inline]
pub fn adjacent_find<T: PartialEq>(seq: &[T]) -> Option<usize> {
    adjacent_find_by(seq, equal_to)
}

pub fn adjacent_find_by<T, P>(seq: &[T], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &T) -> bool,
{
    seq.windows(2).position(|w| pred(&w[0], &w[1]))
}

#[inline]
pub fn search<T, U>(hay: &[T], needle: &[U]) -> Option<usize>
where
    T: PartialEq<U>,
{
    search_by(hay, needle, equal_to)
}

pub fn search_by<T, U, P>(hay: &[T], needle: &[U], mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    let last_start = hay.len() - needle.len();
    (0..=last_start).find(|&start| matches_at(hay, needle, start, &mut pred))
}

#[inline]
pub fn search_n<T: PartialEq>(seq: &[T], value: &T, n: usize) -> Option<usize> {
    search_n_by(seq, value, n, equal_to)
}

pub fn search_n_by<T, U, P>(seq: &[T], value: &U, n: usize, mut pred: P) -> Option<usize>
where
    P: FnMut(&T, &U) -> bool,
{
    if n == 0 || n > seq.len() {
        return None;
    }

    let mut run = 0_usize;
    for (i, x) in seq.iter().enumerate() {
        if pred(x, value) {
            run += 1;
            if run == n {
                return Some(i + 1 - n);
            }
        } else {
            run = 0;
        }
    }
    None
}
