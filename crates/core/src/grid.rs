//! Append-only parcel store.
//!
//! The grid is shared between the ingestion pipeline and the render loop,
//! possibly on different threads. Appends never mutate a published sequence:
//! the writer builds the complete next sequence and swaps it in, so a reader
//! holding a [`GridSnapshot`] always sees either all or none of a batch.
//! Concurrent appenders are serialized; none of them loses its batch.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::types::Parcel;

/// Shared handle to the parcel store. Cloning is cheap and yields a handle to
/// the same store.
#[derive(Clone, Default)]
pub struct Grid {
    published: Arc<RwLock<Arc<[Parcel]>>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `batch` after the current contents, preserving its order.
    ///
    /// Returns the number of parcels appended. An empty batch leaves the
    /// published snapshot untouched.
    pub fn append_batch(&self, batch: Vec<Parcel>) -> usize {
        let added = batch.len();
        if added == 0 {
            return 0;
        }

        // Only one upgradable guard exists at a time, so appenders queue up
        // here while readers keep taking snapshots of the current sequence.
        let current = self.published.upgradable_read();
        let mut next = Vec::with_capacity(current.len() + added);
        next.extend_from_slice(&current);
        next.extend(batch);

        *RwLockUpgradableReadGuard::upgrade(current) = next.into();
        added
    }

    /// Current contents. The snapshot stays valid (and unchanged) for as long
    /// as it is held, regardless of later appends.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot(Arc::clone(&self.published.read()))
    }

    pub fn len(&self) -> usize {
        self.published.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid").field("len", &self.len()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} parcels", self.len())
    }
}

/// Immutable view of the grid at one point in time.
#[derive(Debug, Clone)]
pub struct GridSnapshot(Arc<[Parcel]>);

impl Deref for GridSnapshot {
    type Target = [Parcel];

    fn deref(&self) -> &[Parcel] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a GridSnapshot {
    type Item = &'a Parcel;
    type IntoIter = std::slice::Iter<'a, Parcel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
