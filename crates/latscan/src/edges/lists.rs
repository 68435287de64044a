//! Edge partitions over the workspace arena.
//!
//! Layout (index ranges, in order):
//! `[retired | inactive | active | pending]`, followed by unused slots.
//! Moving an edge between neighbouring partitions is a swap plus a boundary
//! bump; nothing is allocated or relinked.

use std::ops::Range;

use super::types::Edge;

/// Retired / inactive / active / pending partition of a built edge list.
#[derive(Debug)]
pub struct EdgeLists<'a> {
    edges: &'a mut [Edge],
    inactive: usize,
    active: usize,
    pending: usize,
    len: usize,
}

impl<'a> EdgeLists<'a> {
    /// All of `edges[..len]` starts out pending.
    pub fn new(edges: &'a mut [Edge], len: usize) -> Self {
        debug_assert!(len <= edges.len());
        Self {
            edges,
            inactive: 0,
            active: 0,
            pending: 0,
            len,
        }
    }

    /// Inactive edges rejoin the front of the active list (no resort).
    #[inline]
    pub fn recombine(&mut self) {
        self.active = self.inactive;
    }

    /// Drop active edge `i` for good. The inactive list must be empty.
    pub fn retire(&mut self, i: usize) {
        debug_assert_eq!(self.inactive, self.active, "retire with live inactive edges");
        debug_assert!(self.active_range().contains(&i));
        self.edges.swap(i, self.active);
        self.active += 1;
        self.inactive += 1;
    }

    /// Move active edge `i` to the inactive list for the rest of this row.
    pub fn deactivate(&mut self, i: usize) {
        debug_assert!(self.active_range().contains(&i));
        self.edges.swap(i, self.active);
        self.active += 1;
    }

    #[inline]
    pub fn peek_pending(&self) -> Option<&Edge> {
        self.pending_slice().first()
    }

    /// The front pending edge becomes the last active edge; returns its index.
    pub fn take_pending(&mut self) -> Option<usize> {
        (self.pending < self.len).then(|| {
            self.pending += 1;
            self.pending - 1
        })
    }

    /// Stable insertion sort of the active list by intercept.
    pub fn sort_active(&mut self) {
        let active = &mut self.edges[self.active..self.pending];
        for k in 1..active.len() {
            let mut j = k;
            while j > 0 && active[j - 1].intercept_ceil() > active[j].intercept_ceil() {
                active.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    #[inline]
    pub fn active_range(&self) -> Range<usize> {
        self.active..self.pending
    }

    #[inline]
    pub fn edge(&self, i: usize) -> &Edge {
        &self.edges[i]
    }

    #[inline]
    pub fn edge_mut(&mut self, i: usize) -> &mut Edge {
        &mut self.edges[i]
    }

    #[inline]
    pub fn retired(&self) -> &[Edge] {
        &self.edges[..self.inactive]
    }

    #[inline]
    pub fn inactive_slice(&self) -> &[Edge] {
        &self.edges[self.inactive..self.active]
    }

    #[inline]
    pub fn active_slice(&self) -> &[Edge] {
        &self.edges[self.active..self.pending]
    }

    #[inline]
    pub fn active_mut(&mut self) -> &mut [Edge] {
        &mut self.edges[self.active..self.pending]
    }

    #[inline]
    pub fn pending_slice(&self) -> &[Edge] {
        &self.edges[self.pending..self.len]
    }

    /// Number of edges under management (all partitions).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
