//! Index-stable container for the active clusters of an agglomerative run.
//!
//! Clusters live in fixed slots. Merging moves the absorbed slot's members into
//! the kept slot and empties the absorbed slot; no other slot moves. Algorithms
//! refer to clusters by *position* (the k-th active slot), which reproduces the
//! ordering of a list with middle deletion while every slot id stays valid
//! for the whole run.

/// The active clusters of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Partition {
    slots: Vec<Option<Vec<usize>>>,
    active: usize,
}

impl Partition {
    /// One singleton cluster per index in `0..n`.
    pub(crate) fn singletons(n: usize) -> Self {
        Self {
            slots: (0..n).map(|i| Some(vec![i])).collect(),
            active: n,
        }
    }

    /// Number of active clusters.
    pub(crate) fn len(&self) -> usize {
        self.active
    }

    /// Slot ids of the active clusters, in position order.
    pub(crate) fn active_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| c.as_ref().map(|_| slot))
            .collect()
    }

    /// Members of an active slot.
    pub(crate) fn members(&self, slot: usize) -> &[usize] {
        self.slots[slot].as_deref().unwrap_or(&[])
    }

    /// Move every member of `absorbed` into `kept` and retire `absorbed`.
    ///
    /// Returns the size of the merged cluster. A merge of a slot with itself, or
    /// involving a retired slot, leaves the partition unchanged.
    pub(crate) fn merge(&mut self, kept: usize, absorbed: usize) -> usize {
        if kept == absorbed || self.slots[kept].is_none() {
            return self.members(kept).len();
        }
        let Some(moved) = self.slots[absorbed].take() else {
            return self.members(kept).len();
        };
        self.active -= 1;
        let target = self.slots[kept].get_or_insert_with(Vec::new);
        target.extend(moved);
        target.len()
    }

    /// Compact the active clusters into a plain list, in position order.
    pub(crate) fn into_clusters(self) -> Vec<Vec<usize>> {
        self.slots.into_iter().flatten().collect()
    }
}

/// One label per clustered index, numbered by cluster position.
///
/// `clusters` must cover `0..n` exactly once, as every partition returned by
/// this crate does.
pub fn labels_from_clusters(clusters: &[Vec<usize>]) -> Vec<usize> {
    let n = clusters.iter().map(Vec::len).sum();
    let mut labels = vec![0; n];
    for (label, members) in clusters.iter().enumerate() {
        for &i in members {
            if let Some(slot) = labels.get_mut(i) {
                *slot = label;
            }
        }
    }
    labels
}
