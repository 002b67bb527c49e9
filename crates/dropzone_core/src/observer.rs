//! Optional observer hooks notified by a [`DropRegion`](crate::DropRegion).

use crate::FileDescriptor;

/// Receiver of drop-region notifications.
///
/// Every hook has an empty default, so implementors only override what they care about.
pub trait DropObserver {
    /// The region's drag state changed; `active` is the new flag.
    fn drag_state_changed(&mut self, _active: bool) {}

    /// A drag moved over the region.
    fn drag(&mut self) {}

    /// A drag entered the region.
    fn drag_in(&mut self) {}

    /// A drag left the region.
    fn drag_out(&mut self) {}

    /// A drag was released over the region.
    fn dropped(&mut self) {}

    /// One or more files were dropped, in transfer order.
    fn files_dropped(&mut self, _files: Vec<FileDescriptor>) {}
}

#[derive(Debug, Default, Clone, Copy)]
/// Observer that ignores every notification.
pub struct NoopObserver;

impl DropObserver for NoopObserver {}

type Hook = Box<dyn FnMut()>;

#[derive(Default)]
/// Observer assembled from independently optional closures.
///
/// Unset hooks are skipped silently.
pub struct DropHooks {
    on_drag_state_change: Option<Box<dyn FnMut(bool)>>,
    on_drag: Option<Hook>,
    on_drag_in: Option<Hook>,
    on_drag_out: Option<Hook>,
    on_drop: Option<Hook>,
    on_files_drop: Option<Box<dyn FnMut(Vec<FileDescriptor>)>>,
}

impl DropHooks {
    /// Creates a hook set with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drag-state hook.
    pub fn on_drag_state_change(mut self, hook: impl FnMut(bool) + 'static) -> Self {
        self.on_drag_state_change = Some(Box::new(hook));
        self
    }

    /// Sets the drag-over hook.
    pub fn on_drag(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_drag = Some(Box::new(hook));
        self
    }

    /// Sets the drag-enter hook.
    pub fn on_drag_in(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_drag_in = Some(Box::new(hook));
        self
    }

    /// Sets the drag-leave hook.
    pub fn on_drag_out(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_drag_out = Some(Box::new(hook));
        self
    }

    /// Sets the drop hook.
    pub fn on_drop(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_drop = Some(Box::new(hook));
        self
    }

    /// Sets the files-dropped hook.
    pub fn on_files_drop(mut self, hook: impl FnMut(Vec<FileDescriptor>) + 'static) -> Self {
        self.on_files_drop = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for DropHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropHooks")
            .field("on_drag_state_change", &self.on_drag_state_change.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_in", &self.on_drag_in.is_some())
            .field("on_drag_out", &self.on_drag_out.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .field("on_files_drop", &self.on_files_drop.is_some())
            .finish()
    }
}

impl DropObserver for DropHooks {
    fn drag_state_changed(&mut self, active: bool) {
        if let Some(hook) = self.on_drag_state_change.as_mut() {
            hook(active);
        }
    }

    fn drag(&mut self) {
        if let Some(hook) = self.on_drag.as_mut() {
            hook();
        }
    }

    fn drag_in(&mut self) {
        if let Some(hook) = self.on_drag_in.as_mut() {
            hook();
        }
    }

    fn drag_out(&mut self) {
        if let Some(hook) = self.on_drag_out.as_mut() {
            hook();
        }
    }

    fn dropped(&mut self) {
        if let Some(hook) = self.on_drop.as_mut() {
            hook();
        }
    }

    fn files_dropped(&mut self, files: Vec<FileDescriptor>) {
        if let Some(hook) = self.on_files_drop.as_mut() {
            hook(files);
        }
    }
}
