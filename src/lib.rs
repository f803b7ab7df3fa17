//! Lazy sequence combinators.
//!
//! A [`Producer`] describes a possibly infinite sequence. It can be driven
//! push style with [`Producer::for_each`], or pulled one value at a time
//! through a [`Cursor`]. Combinators ([`limit`], [`zip`]) build new producers
//! out of existing ones, and [`reduce`] folds a producer into a single value.

pub mod producer;
pub mod cursor;
pub mod sources;
pub mod generate;
pub mod limit;
pub mod zip;
pub mod fold;

#[cfg(test)]
pub mod proptest;

pub use crate::producer::{Producer,PairProducer,Run};
pub use crate::cursor::{Cursor,pull};
pub use crate::sources::{numbers,numbers_from,ints_from_to,fibs,values,all};
pub use crate::generate::{Generate,generate};
pub use crate::limit::{Limit,limit,limit2};
pub use crate::zip::{Zip,zip};
pub use crate::fold::{Halted,reduce,reduce_to_vec};
