//! Reconstruction of the chosen intervals from DP bookkeeping.
//!
//! Engines keep a *successor* relation over endpoint positions: the successor
//! of `p` is the first interval of an optimal chain restricted to `[p, ..)`.
//! Following successors from position 0 yields the top-level chosen
//! intervals; each of those expands into the chosen intervals nested inside
//! it, snapshotted by [`WitnessStore::assemble_contained_independent_set`]
//! at the moment its right endpoint was scanned.
//!
//! Nested lists are linked through a single arena and share identical tails,
//! so expanding an answer of `k` intervals touches exactly `k` links.

use crate::interval::{Interval, Weight};
use crate::model::IntervalModel;
use crate::utils::is_independent;

/// Successor relation over endpoint positions.
pub trait Successors {
    /// Index of the first interval of the optimal chain starting at or after
    /// position `p`, or `None` if that chain is empty.
    fn successor(&self, model: &IntervalModel, p: usize) -> Option<usize>;
}

/// One explicit successor slot per endpoint position.
#[derive(Clone, Debug)]
pub struct DenseSuccessors {
    slots: Vec<Option<usize>>,
}

impl DenseSuccessors {
    /// Slots for positions `[0, len)`, all empty.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Chain at `p` starts with `index`.
    #[inline]
    pub fn set(&mut self, p: usize, index: Option<usize>) {
        self.slots[p] = index;
    }

    /// Position `p` continues the chain of position `from`.
    #[inline]
    pub fn inherit(&mut self, p: usize, from: usize) {
        self.slots[p] = self.slots[from];
    }
}

impl Successors for DenseSuccessors {
    #[inline]
    fn successor(&self, _model: &IntervalModel, p: usize) -> Option<usize> {
        self.slots.get(p).copied().flatten()
    }
}

/// One link of a nested chain: `interval`, then the chain at `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ChainLink {
    interval: usize,
    next: Option<usize>,
}

/// Per-interval lists of directly nested chosen intervals.
///
/// Lists are singly linked through a shared arena, so an interval whose
/// chain continues the same way inside several (necessarily crossing)
/// containers is stored once and referenced by all of them.
#[derive(Clone, Debug)]
pub struct WitnessStore {
    links: Vec<ChainLink>,
    /// Most recent link created for each interval.
    latest: Vec<Option<usize>>,
    /// First link of each interval's nested list.
    heads: Vec<Option<usize>>,
    chain: Vec<usize>,
}

impl WitnessStore {
    pub fn new(num_intervals: usize) -> Self {
        Self {
            links: Vec::with_capacity(num_intervals),
            latest: vec![None; num_intervals],
            heads: vec![None; num_intervals],
            chain: Vec::new(),
        }
    }

    /// Snapshot the optimal chain strictly inside `interval`.
    ///
    /// Must be called once per interval, when its right endpoint is scanned
    /// and before the DP absorbs it: at that moment every interval nested in
    /// it is finalized and the successors over `(left, right)` describe an
    /// optimal packing of its interior.
    pub fn assemble_contained_independent_set<S: Successors>(
        &mut self,
        model: &IntervalModel,
        interval: &Interval,
        successors: &S,
    ) {
        let mut chain = std::mem::take(&mut self.chain);
        chain.clear();
        let mut p = interval.left() + 1;
        while p < interval.right() {
            let Some(next) = successors.successor(model, p) else {
                break;
            };
            let chained = model.interval(next);
            debug_assert!(
                interval.contains(chained),
                "chain inside {interval:?} escaped through {chained:?}"
            );
            chain.push(next);
            p = chained.right() + 1;
        }

        // Build back to front so every link can reuse an identical tail.
        let mut head = None;
        for &index in chain.iter().rev() {
            head = Some(self.link(index, head));
        }
        self.heads[interval.index()] = head;
        self.chain = chain;
    }

    fn link(&mut self, interval: usize, next: Option<usize>) -> usize {
        if let Some(id) = self.latest[interval] {
            if self.links[id].next == next {
                return id;
            }
        }
        let id = self.links.len();
        self.links.push(ChainLink { interval, next });
        self.latest[interval] = Some(id);
        id
    }

    /// Chosen intervals directly nested inside `index`, left to right.
    pub fn nested(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = self.heads[index];
        std::iter::from_fn(move || {
            let link = self.links[cursor?];
            cursor = link.next;
            Some(link.interval)
        })
    }

    /// Number of stored links across all nested lists.
    #[inline]
    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Walk the top-level chain from position 0 and expand every chosen
    /// interval depth-first. The result is sorted by left endpoint.
    ///
    /// `expected_size` pre-sizes the output; it is capped at the model size.
    ///
    /// # Panics
    /// Panics if the reconstructed intervals cross, which means the DP state
    /// was corrupted.
    pub fn build_independent_set<S: Successors>(
        &self,
        model: &IntervalModel,
        successors: &S,
        expected_size: usize,
    ) -> Vec<Interval> {
        let mut chosen = Vec::with_capacity(expected_size.min(model.len()));
        let mut stack = Vec::new();
        let mut p = 0;
        while let Some(top) = successors.successor(model, p) {
            stack.push(top);
            while let Some(index) = stack.pop() {
                chosen.push(*model.interval(index));
                stack.extend(self.nested(index));
            }
            p = model.interval(top).right() + 1;
        }
        chosen.sort_unstable_by_key(Interval::left);

        assert!(
            is_independent(&chosen),
            "reconstructed witness set contains crossing intervals"
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(size = chosen.len(), links = self.links.len(), "reconstructed independent set");

        chosen
    }
}

/// Capacity hint for [`WitnessStore::build_independent_set`]: the optimum
/// divided by the lightest positive weight bounds the answer size.
pub fn expected_size(model: &IntervalModel, optimum: Weight) -> usize {
    let lightest = model
        .intervals()
        .iter()
        .map(Interval::weight)
        .filter(|&w| w > 0)
        .min()
        .unwrap_or(1);
    usize::try_from(optimum / lightest).unwrap_or(usize::MAX)
}
