//! Flat content filtering
//!
//! An item is kept iff its author is neither blocked directly nor hosted on
//! a blocked server. Items whose author cannot be resolved are kept. Authors
//! qualified with the home host are matched as local accounts.

use shared_types::{Authored, EffectiveBlockSet, Host, Page, PageRequest};

pub struct VisibilityFilter {
    local_host: Host,
}

impl VisibilityFilter {
    pub fn new(local_host: Host) -> Self {
        Self { local_host }
    }

    /// Visible items in their original order. The input is left untouched.
    pub fn filter<T: Authored + Clone>(&self, items: &[T], set: &EffectiveBlockSet) -> Vec<T> {
        items
            .iter()
            .filter(|item| !set.blocks_author_on(item.author(), &self.local_host))
            .cloned()
            .collect()
    }

    /// Filters first, then windows, so `total` counts visible items only.
    pub fn filter_page<T: Authored + Clone>(
        &self,
        items: &[T],
        set: &EffectiveBlockSet,
        page: PageRequest,
    ) -> Page<T> {
        page.apply(self.filter(items, set))
    }
}
