// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elements of a sortable collection.

use alloc::string::String;

/// An element that can be lifted and reordered.
///
/// The id must be unique within the collection for the duration of a drag
/// session. The label is only used for announcements.
pub trait SortableItem {
    /// Stable identifier of the element.
    fn id(&self) -> &str;

    /// Human-readable label of the element.
    fn label(&self) -> &str;
}

/// A ready-made [`SortableItem`] carrying opaque payload data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sortable<T> {
    /// Stable identifier.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Caller payload.
    pub data: T,
}

impl<T> Sortable<T> {
    /// Create an element.
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data,
        }
    }
}

impl<T> SortableItem for Sortable<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Index of the element with `id`, if present.
#[must_use]
pub fn position_of<T: SortableItem>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(feature = "hashbrown")]
pub use unique::{DuplicateIdError, validate_unique_ids};

#[cfg(feature = "hashbrown")]
mod unique {
    use alloc::string::String;
    use core::fmt;

    use hashbrown::HashMap;

    use super::SortableItem;

    /// Error returned by [`validate_unique_ids`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct DuplicateIdError {
        /// The repeated id.
        pub id: String,
        /// Index of the first element with this id.
        pub first: usize,
        /// Index of the repeat.
        pub second: usize,
    }

    impl fmt::Display for DuplicateIdError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "id {:?} appears at both index {} and index {}",
                self.id, self.first, self.second
            )
        }
    }

    impl core::error::Error for DuplicateIdError {}

    /// Check that every id in `items` is unique.
    ///
    /// # Errors
    ///
    /// Returns the first repeated id together with both indices.
    pub fn validate_unique_ids<T: SortableItem>(items: &[T]) -> Result<(), DuplicateIdError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(&first) = seen.get(item.id()) {
                return Err(DuplicateIdError {
                    id: item.id().into(),
                    first,
                    second: index,
                });
            }
            seen.insert(item.id(), index);
        }
        Ok(())
    }
}
