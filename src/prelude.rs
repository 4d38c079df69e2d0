//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use enumerable::prelude::*;
//!
//! let groups = Sequence::of(&[1, 2, 3]).group_by(|n| n % 2).into_sequence();
//! assert_eq!(groups.count(), 2);
//! ```

pub use crate::{
    Enumerable, Enumerator, Equality, IndexedEnumerable, IntoSequence, RandomAccess, Sequence,
};
