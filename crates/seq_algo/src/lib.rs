//! Generic sequence-algorithm primitives over slices and iterators.
//!
//! Conventions shared by every operation:
//!
//! - Index results are `Option<usize>`; `None` means "not found" and is also
//!   the answer for empty inputs. [`to_sentinel`] maps it onto the integer
//!   form where [`NOT_FOUND`] (`-1`) is the only out-of-range value.
//! - Comparator-taking searches come in pairs: `op` uses [`equal_to`],
//!   `op_by` takes an explicit binary predicate.
//! - Only operations taking `&mut [T]` mutate their input. Everything else
//!   returns a new `Vec` or a lazy adaptor.
//! - `rotate_copy` with positive `n` moves elements toward higher indices.
//!   `shift_left`/`shift_right` both keep the leading `len - n` elements and
//!   pad the trailing/leading `n` slots with `None`.
//!
//! Nothing here holds shared state. Callers that share a sequence across
//! threads must serialize mutation of it themselves.

mod algorithms;

pub use algorithms::copy::{
    CopyExcept, CopyExceptIf, CopyReplace, CopyReplaceIf, copy_except, copy_except_if,
    copy_except_if_not, copy_replace, copy_replace_if, copy_replace_if_not,
};
pub use algorithms::predicate::{
    all_of, any_of, count, count_if, count_if_not, for_each, for_each_n, none_of, transform,
    transform_n,
};
pub use algorithms::rearrange::{fill, fill_n, map_n, rotate_copy, shift_left, shift_right};
pub use algorithms::search::{
    adjacent_find, adjacent_find_by, find, find_end, find_end_by, find_first_of,
    find_first_of_by, find_if, find_if_not, mismatch, mismatch_by, search, search_by, search_n,
    search_n_by,
};
pub use algorithms::sentinel::{NOT_FOUND, equal_to, to_sentinel};
