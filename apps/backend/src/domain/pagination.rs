//! Page arithmetic for the listing endpoints.

use crate::errors::domain::{DomainError, ValidationKind};

/// Rows per listing page.
pub const PAGE_SIZE: u64 = 100;

/// Largest offset a query may carry.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Zero-based page index, validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page(u64);

impl Page {
    pub fn new(index: i64) -> Result<Self, DomainError> {
        let index = u64::try_from(index).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidPage,
                format!("page must be zero or greater, got {index}"),
            )
        })?;
        // Offsets are bound as signed 64-bit integers by the store drivers
        let in_range = index
            .checked_mul(PAGE_SIZE)
            .is_some_and(|offset| offset <= MAX_OFFSET);
        if !in_range {
            return Err(DomainError::validation(
                ValidationKind::InvalidPage,
                format!("page {index} is out of range"),
            ));
        }
        Ok(Self(index))
    }

    pub fn index(self) -> u64 {
        self.0
    }

    pub fn offset(self) -> u64 {
        // Bounded by the check in `new`
        self.0.saturating_mul(PAGE_SIZE)
    }

    pub fn limit(self) -> u64 {
        PAGE_SIZE
    }
}

/// Category listing reports full pages only: `total / 100`.
pub fn category_page_count(total: u64) -> u64 {
    total / PAGE_SIZE
}

/// Clue listing reports `total / 100 + 1`, counting every clue.
pub fn clue_page_count(total: u64) -> u64 {
    total / PAGE_SIZE + 1
}
