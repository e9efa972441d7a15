pub const NOT_FOUND: isize = -1;

#[inline]
pub fn to_sentinel(index: Option<usize>) -> isize {
    match index {
        Some(i) => {
            debug_assert!(i <= isize::MAX as usize);
            i as isize
        }
        None => NOT_FOUND,
    }
}

#[inline]
pub fn equal_to<T: PartialEq<U> + ?Sized, U: ?Sized>(a: &T, b: &U) -> bool {
    a == b
}
