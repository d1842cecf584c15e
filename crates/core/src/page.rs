//! 1-based page numbers for the paginated status listing.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::CoreError;

/// A page index into the server's execution-status collection.
///
/// Pages start at 1; page size is chosen by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Returns [`CoreError::Validation`] for page 0.
    pub fn new(page: u32) -> Result<Self, CoreError> {
        NonZeroU32::new(page)
            .map(Self)
            .ok_or_else(|| CoreError::Validation("page numbers start at 1".to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The following page, or `None` once `u32::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
