//! Memoized comparison.
//!
//! Holds the most recent [`Comparison`] keyed on the content ids of its two
//! documents. Asking again with the same pair returns the stored result;
//! changing either document recomputes and replaces it.

use std::sync::Arc;

use spotdiff_types::{Document, DocumentId};
use tracing::debug;

use crate::comparison::{compare, Comparison};

#[derive(Debug, Default)]
pub struct DiffCache {
    entry: Option<((DocumentId, DocumentId), Arc<Comparison>)>,
    hits: u64,
    misses: u64,
}

impl DiffCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the comparison of `a` against `b`, computing it on a miss.
    pub fn get_or_compute(&mut self, a: &Document, b: &Document) -> Arc<Comparison> {
        let key = (a.id(), b.id());
        if let Some((cached_key, cmp)) = &self.entry {
            if *cached_key == key {
                self.hits += 1;
                debug!(a = %key.0.short_hex(), b = %key.1.short_hex(), "diff cache hit");
                return Arc::clone(cmp);
            }
        }

        self.misses += 1;
        debug!(a = %key.0.short_hex(), b = %key.1.short_hex(), "diff cache miss");
        let cmp = Arc::new(compare(a, b));
        self.entry = Some((key, Arc::clone(&cmp)));
        cmp
    }

    /// The cached comparison, if any.
    pub fn current(&self) -> Option<Arc<Comparison>> {
        self.entry.as_ref().map(|(_, cmp)| Arc::clone(cmp))
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
