//! Transfer-payload contract and file extraction.

use std::cell::RefCell;
use std::rc::Rc;

use crate::FileDescriptor;

/// Platform handle to the data carried by a drag gesture.
///
/// Implementations behave like shared handles: clones observe the same buffer, and
/// [`TransferPayload::clear`] takes `&self` because the platform owns the storage.
pub trait TransferPayload {
    /// Number of generic drag items (files, strings, and so on) in the payload.
    fn item_count(&self) -> usize;

    /// Number of files in the payload.
    fn file_count(&self) -> usize;

    /// File at `index`, or `None` when the platform cannot resolve it.
    fn file_at(&self, index: usize) -> Option<FileDescriptor>;

    /// Clears the platform transfer buffer.
    fn clear(&self);
}

/// Converts `payload` into descriptors, preserving platform order.
///
/// No filtering, deduplication, or validation is applied.
pub fn extract_files<P: TransferPayload + ?Sized>(payload: &P) -> Vec<FileDescriptor> {
    (0..payload.file_count())
        .filter_map(|index| payload.file_at(index))
        .collect()
}

#[derive(Debug, Default)]
struct MemoryTransferState {
    extra_items: usize,
    files: Vec<FileDescriptor>,
    clear_count: usize,
}

#[derive(Debug, Clone, Default)]
/// In-memory transfer payload for tests and non-browser hosts.
///
/// Every file counts as one item; [`MemoryTransfer::with_extra_items`] adds non-file items such
/// as dragged text.
pub struct MemoryTransfer {
    inner: Rc<RefCell<MemoryTransferState>>,
}

impl MemoryTransfer {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload carrying `files` in order.
    pub fn with_files(files: impl IntoIterator<Item = FileDescriptor>) -> Self {
        let transfer = Self::new();
        transfer.inner.borrow_mut().files = files.into_iter().collect();
        transfer
    }

    /// Adds `count` non-file items to the payload.
    pub fn with_extra_items(self, count: usize) -> Self {
        self.inner.borrow_mut().extra_items += count;
        self
    }

    /// Number of times the buffer was cleared.
    pub fn clear_count(&self) -> usize {
        self.inner.borrow().clear_count
    }

    /// Returns `true` once the buffer has been cleared at least once.
    pub fn is_cleared(&self) -> bool {
        self.clear_count() > 0
    }
}

impl TransferPayload for MemoryTransfer {
    fn item_count(&self) -> usize {
        let state = self.inner.borrow();
        state.files.len() + state.extra_items
    }

    fn file_count(&self) -> usize {
        self.inner.borrow().files.len()
    }

    fn file_at(&self, index: usize) -> Option<FileDescriptor> {
        self.inner.borrow().files.get(index).cloned()
    }

    fn clear(&self) {
        let mut state = self.inner.borrow_mut();
        state.files.clear();
        state.extra_items = 0;
        state.clear_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_payload_extracts_nothing() {
        assert!(extract_files(&MemoryTransfer::new()).is_empty());
    }

    #[test]
    fn extraction_preserves_platform_order_and_duplicates() {
        let files = vec![
            FileDescriptor::new("b.png", 1, 1),
            FileDescriptor::new("a.png", 2, 2),
            FileDescriptor::new("b.png", 1, 1),
        ];
        let transfer = MemoryTransfer::with_files(files.clone());
        assert_eq!(extract_files(&transfer), files);
    }

    #[test]
    fn clones_share_the_buffer() {
        let transfer = MemoryTransfer::with_files([FileDescriptor::new("a", 1, 1)]);
        let handle = transfer.clone();
        handle.clear();
        assert_eq!(transfer.file_count(), 0);
        assert_eq!(transfer.clear_count(), 1);
    }

    #[test]
    fn extra_items_count_without_files() {
        let transfer = MemoryTransfer::new().with_extra_items(2);
        assert_eq!(transfer.item_count(), 2);
        assert_eq!(transfer.file_count(), 0);
    }

    struct SparseTransfer;

    impl TransferPayload for SparseTransfer {
        fn item_count(&self) -> usize {
            3
        }

        fn file_count(&self) -> usize {
            3
        }

        fn file_at(&self, index: usize) -> Option<FileDescriptor> {
            (index != 1).then(|| FileDescriptor::new(format!("f{index}"), 0, 0))
        }

        fn clear(&self) {}
    }

    #[test]
    fn unresolvable_entries_are_skipped() {
        let names: Vec<String> = extract_files(&SparseTransfer)
            .into_iter()
            .map(|file| file.name)
            .collect();
        assert_eq!(names, vec!["f0".to_string(), "f2".to_string()]);
    }
}
