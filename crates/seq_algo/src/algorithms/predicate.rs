/// An empty slice yields `false`.
#[inline]
pub fn all_of<T, P>(seq: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !seq.is_empty() && seq.iter().all(|x| pred(x))
}

#[inline]
pub fn any_of<T, P>(seq: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.iter().any(|x| pred(x))
}

#[inline]
pub fn none_of<T, P>(seq: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    !seq.iter().any(|x| pred(x))
}

#[inline]
pub fn for_each<T, F>(seq: &[T], f: F)
where
    F: FnMut(&T),
{
    seq.iter().for_each(f);
}

#[inline]
pub fn for_each_n<T, F>(seq: &[T], f: F, n: usize)
where
    F: FnMut(&T),
{
    let end = n.min(seq.len());
    seq[..end].iter().for_each(f);
}

#[inline]
pub fn transform<T, F>(seq: &mut [T], f: F)
where
    F: FnMut(&T) -> T,
{
    let len = seq.len();
    transform_n(seq, f, len);
}

pub fn transform_n<T, F>(seq: &mut [T], mut f: F, n: usize)
where
    F: FnMut(&T) -> T,
{
    let end = n.min(seq.len());
    for slot in &mut seq[..end] {
        *slot = f(&*slot);
    }
}

#[inline]
pub fn count<T: PartialEq>(seq: &[T], target: &T) -> usize {
    seq.iter().filter(|&x| x == target).count()
}

#[inline]
pub fn count_if<T, P>(seq: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|&x| pred(x)).count()
}

#[inline]
pub fn count_if_not<T, P>(seq: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|&x| !pred(x)).count()
}
