//! Lazy copy adaptors.
//!
//! Every adaptor owns its source iterator. Built from `slice.iter()` it
//! borrows the slice and can be restarted by cloning; built from an owned
//! collection it snapshots that collection. A single-pass source stays
//! single-pass.

use std::iter::FusedIterator;

#[derive(Clone, Debug)]
pub struct CopyReplace<I: Iterator> {
    iter: I,
    old: I::Item,
    new: I::Item,
}

impl<I> Iterator for CopyReplace<I>
where
    I: Iterator,
    I::Item: PartialEq + Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        Some(if item == self.old { self.new.clone() } else { item })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for CopyReplace<I>
where
    I: DoubleEndedIterator,
    I::Item: PartialEq + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.next_back()?;
        Some(if item == self.old { self.new.clone() } else { item })
    }
}

impl<I> ExactSizeIterator for CopyReplace<I>
where
    I: ExactSizeIterator,
    I::Item: PartialEq + Clone,
{
}

impl<I> FusedIterator for CopyReplace<I>
where
    I: FusedIterator,
    I::Item: PartialEq + Clone,
{
}

#[derive(Clone, Debug)]
pub struct CopyReplaceIf<I: Iterator, P> {
    iter: I,
    pred: P,
    new: I::Item,
    replace_when: bool,
}

impl<I, P> CopyReplaceIf<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn apply(&mut self, item: I::Item) -> I::Item {
        if (self.pred)(&item) == self.replace_when {
            self.new.clone()
        } else {
            item
        }
    }
}

impl<I, P> Iterator for CopyReplaceIf<I, P>
where
    I: Iterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        Some(self.apply(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, P> DoubleEndedIterator for CopyReplaceIf<I, P>
where
    I: DoubleEndedIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.next_back()?;
        Some(self.apply(item))
    }
}

impl<I, P> ExactSizeIterator for CopyReplaceIf<I, P>
where
    I: ExactSizeIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> FusedIterator for CopyReplaceIf<I, P>
where
    I: FusedIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
}

#[derive(Clone, Debug)]
pub struct CopyExcept<I: Iterator> {
    iter: I,
    value: I::Item,
}

impl<I> Iterator for CopyExcept<I>
where
    I: Iterator,
    I::Item: PartialEq,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let value = &self.value;
        self.iter.find(|item| item != value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I> DoubleEndedIterator for CopyExcept<I>
where
    I: DoubleEndedIterator,
    I::Item: PartialEq,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let value = &self.value;
        self.iter.rfind(|item| item != value)
    }
}

impl<I> FusedIterator for CopyExcept<I>
where
    I: FusedIterator,
    I::Item: PartialEq,
{
}

#[derive(Clone, Debug)]
pub struct CopyExceptIf<I, P> {
    iter: I,
    pred: P,
    omit_when: bool,
}

impl<I, P> Iterator for CopyExceptIf<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let pred = &mut self.pred;
        let omit_when = self.omit_when;
        self.iter.find(|item| pred(item) != omit_when)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> DoubleEndedIterator for CopyExceptIf<I, P>
where
    I: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let pred = &mut self.pred;
        let omit_when = self.omit_when;
        self.iter.rfind(|item| pred(item) != omit_when)
    }
}

impl<I, P> FusedIterator for CopyExceptIf<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

pub fn copy_replace<I>(src: I, old: I::Item, new: I::Item) -> CopyReplace<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq + Clone,
{
    CopyReplace {
        iter: src.into_iter(),
        old,
        new,
    }
}

pub fn copy_replace_if<I, P>(src: I, pred: P, new: I::Item) -> CopyReplaceIf<I::IntoIter, P>
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    CopyReplaceIf {
        iter: src.into_iter(),
        pred,
        new,
        replace_when: true,
    }
}

pub fn copy_replace_if_not<I, P>(
    src: I,
    pred: P,
    new: I::Item,
) -> CopyReplaceIf<I::IntoIter, P>
where
    I: IntoIterator,
    I::Item: Clone,
    P: FnMut(&I::Item) -> bool,
{
    CopyReplaceIf {
        iter: src.into_iter(),
        pred,
        new,
        replace_when: false,
    }
}

pub fn copy_except<I>(src: I, value: I::Item) -> CopyExcept<I::IntoIter>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    CopyExcept {
        iter: src.into_iter(),
        value,
    }
}

pub fn copy_except_if<I, P>(src: I, pred: P) -> CopyExceptIf<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    CopyExceptIf {
        iter: src.into_iter(),
        pred,
        omit_when: true,
    }
}

pub fn copy_except_if_not<I, P>(src: I, pred: P) -> CopyExceptIf<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    CopyExceptIf {
        iter: src.into_iter(),
        pred,
        omit_when: false,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn copy_replace_known_cases() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(copy_replace(empty, 1, 2).count(), 0);
        assert_eq!(copy_replace([1, 2, 3, 4], 5, 6).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(copy_replace([1, 2, 3, 4], 4, 6).collect::<Vec<_>>(), [1, 2, 3, 6]);
        assert_eq!(copy_replace([7, 1, 7, 7], 7, 0).collect::<Vec<_>>(), [0, 1, 0, 0]);
    }

    #[test]
    fn copy_replace_if_known_cases() {
        let empty: [i32; 0] = [];
        assert_eq!(copy_replace_if(empty, |&x| x == 0, 2).count(), 0);
        assert_eq!(
            copy_replace_if([1, 2, 3, 4], |&x| x == 0, 6).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(
            copy_replace_if([1, 2, 3, 4], |&x| x == 4, 6).collect::<Vec<_>>(),
            [1, 2, 3, 6]
        );
        assert_eq!(
            copy_replace_if_not([1, 2, 3, 4], |&x| x < 5, 6).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(
            copy_replace_if_not([1, 2, 3, 4], |&x| x < 4, 6).collect::<Vec<_>>(),
            [1, 2, 3, 6]
        );
    }

    #[test]
    fn copy_except_known_cases() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(copy_except(empty, 2).count(), 0);
        assert_eq!(copy_except([1, 2, 3, 4], 5).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(copy_except([1, 2, 3, 4], 4).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(copy_except([4, 1, 4, 4, 2], 4).collect::<Vec<_>>(), [1, 2]);

        assert_eq!(
            copy_except_if([1, 2, 3, 4], |&x| x == 0).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(copy_except_if([1, 2, 3, 4], |&x| x == 4).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(
            copy_except_if_not([1, 2, 3, 4], |&x| x < 5).collect::<Vec<_>>(),
            [1, 2, 3, 4]
        );
        assert_eq!(
            copy_except_if_not([1, 2, 3, 4], |&x| x < 4).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn borrowed_source_is_restartable() {
        let seq = vec![1, 2, 3, 2, 1];
        let replaced = copy_replace(seq.iter(), &2, &9);
        let first = replaced.clone().copied().collect::<Vec<_>>();
        let second = replaced.copied().collect::<Vec<_>>();
        assert_eq!(first, [1, 9, 3, 9, 1]);
        assert_eq!(first, second);
        assert_eq!(seq, [1, 2, 3, 2, 1]);
    }

    #[test]
    fn replace_preserves_length_and_reverses() {
        let seq = [1, 2, 3, 4, 5];
        let replaced = copy_replace_if(seq.iter().copied(), |&x| x % 2 == 0, 0);
        assert_eq!(replaced.len(), seq.len());
        assert_eq!(replaced.rev().collect::<Vec<_>>(), [5, 0, 3, 0, 1]);

        let kept = copy_except_if(seq.iter().copied(), |&x| x % 2 == 0);
        assert_eq!(kept.rev().collect::<Vec<_>>(), [5, 3, 1]);
    }

    #[test]
    fn independent_adaptors_over_one_source() {
        let seq = [1, 2, 3, 4];
        let mut a = copy_except(seq.iter(), &1);
        let mut b = copy_except(seq.iter(), &4);
        assert_eq!(a.next(), Some(&2));
        assert_eq!(b.next(), Some(&1));
        assert_eq!(a.next(), Some(&3));
        assert_eq!(b.next(), Some(&2));
    }

    #[test]
    fn single_pass_source_is_consumed_lazily() {
        let mut calls = 0;
        let src = (0..10).inspect(|_| calls += 1);
        let mut it = copy_replace(src, 3, 30);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        drop(it);
        assert_eq!(calls, 2);
    }

    #[test]
    fn copy_except_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[0_usize, 1, 8, 100] {
            let seq = (0..size)
                .map(|_| rng.random_range(0..4_u8))
                .collect::<Vec<_>>();
            for x in 0..4 {
                let once = copy_except(seq.iter().copied(), x).collect::<Vec<_>>();
                let twice = copy_except(once.iter().copied(), x).collect::<Vec<_>>();
                assert_eq!(once, twice);
                assert!(once.len() <= seq.len());
                assert!(!once.contains(&x));
            }
        }
    }
}
