//! List queries over a blocklist
//!
//! Sorting is stable: entries are ordered by `(created_at, id)` so that two
//! blocks created in the same millisecond keep their insertion order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_types::{BlockEntry, PageRequest, TargetKind};

use crate::error::RegistryError;

/// Sort order accepted by list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// `createdAt`: oldest first
    #[default]
    CreatedAtAsc,
    /// `-createdAt`: newest first
    CreatedAtDesc,
}

impl SortKey {
    /// Sorts entries in place.
    pub fn sort(self, entries: &mut [BlockEntry]) {
        entries.sort_by_key(|entry| (entry.created_at, entry.id));
        if self == Self::CreatedAtDesc {
            entries.reverse();
        }
    }
}

impl FromStr for SortKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(Self::CreatedAtAsc),
            "-createdAt" => Ok(Self::CreatedAtDesc),
            other => Err(RegistryError::InvalidQuery(format!(
                "unsupported sort: {other}"
            ))),
        }
    }
}

/// Paginated, optionally kind-filtered blocklist query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub offset: usize,
    /// `None` falls back to the configured default page size.
    pub limit: Option<usize>,
    pub sort: SortKey,
    /// Restrict to account or server targets.
    pub kind: Option<TargetKind>,
}

impl ListQuery {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn sorted(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn of_kind(mut self, kind: TargetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Resolves the page window, capping the limit at `max_page_size`.
    pub fn page(&self, default_page_size: usize, max_page_size: usize) -> Result<PageRequest, RegistryError> {
        let limit = match self.limit {
            Some(0) => {
                return Err(RegistryError::InvalidQuery(
                    "limit must be at least 1".to_string(),
                ))
            }
            Some(limit) => limit.min(max_page_size),
            None => default_page_size,
        };
        Ok(PageRequest::new(self.offset, limit))
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: None,
            sort: SortKey::default(),
            kind: None,
        }
    }
}
