//! Per-submesh triangle index buckets.

/// Dense map from submesh index to an append-only triangle index list.
///
/// Referencing submesh `k` allocates every bucket `0..=k` that does not exist
/// yet, so gaps become empty lists. Buckets are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submeshes {
    buckets: Vec<Vec<usize>>,
}

impl Submeshes {
    pub const fn new() -> Self {
        Submeshes {
            buckets: Vec::new(),
        }
    }

    /// The bucket for `submesh`, grown on first reference.
    ///
    /// Submesh indices are dense material slots: every bucket below `submesh`
    /// is allocated too, so a huge index allocates that many empty lists.
    ///
    /// # Panics
    ///
    /// Panics if `submesh` is `usize::MAX`.
    pub fn bucket_mut(&mut self, submesh: usize) -> &mut Vec<usize> {
        assert!(submesh < usize::MAX, "submesh index {} out of range", submesh);
        if self.buckets.len() <= submesh {
            self.buckets.resize_with(submesh + 1, Vec::new);
        }
        &mut self.buckets[submesh]
    }

    pub fn get(&self, submesh: usize) -> Option<&[usize]> {
        self.buckets.get(submesh).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// `(submesh index, indices)` in ascending submesh order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }

    pub fn triangle_count(&self) -> usize {
        self.buckets.iter().map(|b| b.len() / 3).sum()
    }

}

impl From<Vec<Vec<usize>>> for Submeshes {
    fn from(buckets: Vec<Vec<usize>>) -> Self {
        Submeshes { buckets }
    }
}
