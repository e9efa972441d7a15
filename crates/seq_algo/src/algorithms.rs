pub mod copy;
pub mod predicate;
pub mod rearrange;
pub mod search;
pub mod sentinel;
