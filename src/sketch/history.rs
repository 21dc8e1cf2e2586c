use crate::surface::RasterSnapshot;

/// One surface snapshot per completed stroke.
///
/// Its length is what undo consults; the pixels themselves are never restored
/// because undo redraws from the recorded segments.
#[derive(Debug, Default)]
pub struct UndoHistory {
    snapshots: Vec<RasterSnapshot>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: RasterSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<RasterSnapshot> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot taken after the most recent completed stroke.
    pub fn last(&self) -> Option<&RasterSnapshot> {
        self.snapshots.last()
    }
}
