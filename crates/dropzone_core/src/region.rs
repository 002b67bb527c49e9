//! Gesture handling for one drop region.
//!
//! [`DropRegion`] ties the [`DragStateMachine`] and [`extract_files`] together and forwards the
//! outcome of each gesture to a [`DropObserver`].

use std::cell::Cell;

use crate::{
    extract_files, DragInput, DragState, DragStateMachine, DropObserver, DropZoneConfig,
    MemoryTransfer, TransferPayload,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Drag gestures a region listens for.
pub enum GestureKind {
    /// Drag entered the region.
    Enter,
    /// Drag moved over the region.
    Over,
    /// Drag left the region.
    Leave,
    /// Drag released over the region.
    Drop,
}

impl GestureKind {
    /// All gestures in binding order.
    pub const ALL: [Self; 4] = [Self::Enter, Self::Leave, Self::Over, Self::Drop];

    /// DOM event name for the gesture.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "dragenter",
            Self::Over => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }
}

/// Platform event delivered for a drag gesture.
pub trait GestureEvent {
    /// Transfer payload type carried by the event.
    type Transfer: TransferPayload;

    /// Suppresses the platform default (navigating to the dropped file).
    fn prevent_default(&self);

    /// Stops the event from reaching enclosing elements.
    fn stop_propagation(&self);

    /// Transfer payload, when the platform attached one.
    fn transfer(&self) -> Option<Self::Transfer>;
}

#[derive(Debug, Default)]
/// In-memory gesture event recording which suppression calls it received.
pub struct MemoryGestureEvent {
    transfer: Option<MemoryTransfer>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl MemoryGestureEvent {
    /// Event without a transfer payload.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Event carrying `transfer`.
    pub fn with_transfer(transfer: MemoryTransfer) -> Self {
        Self {
            transfer: Some(transfer),
            ..Self::default()
        }
    }

    /// Whether `prevent_default` was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Whether `stop_propagation` was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

impl GestureEvent for MemoryGestureEvent {
    type Transfer = MemoryTransfer;

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    fn transfer(&self) -> Option<MemoryTransfer> {
        self.transfer.clone()
    }
}

#[derive(Debug)]
/// Drag state plus observer for one screen region.
pub struct DropRegion<O> {
    machine: DragStateMachine,
    observer: O,
    config: DropZoneConfig,
}

impl<O: DropObserver> DropRegion<O> {
    /// Creates an idle region with the default configuration.
    pub fn new(observer: O) -> Self {
        Self::with_config(observer, DropZoneConfig::default())
    }

    /// Creates an idle region with `config`.
    pub fn with_config(observer: O, config: DropZoneConfig) -> Self {
        Self {
            machine: DragStateMachine::new(),
            observer,
            config,
        }
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.machine.state()
    }

    /// Whether a drag is currently active over the region.
    pub fn is_active(&self) -> bool {
        self.machine.is_active()
    }

    /// Active configuration.
    pub fn config(&self) -> &DropZoneConfig {
        &self.config
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the region and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Sends the current state to the observer when `report_initial_state` is configured.
    pub fn report_initial_state(&mut self) {
        if self.config.report_initial_state {
            self.observer.drag_state_changed(self.machine.is_active());
        }
    }

    /// Handles one gesture and returns the number of files delivered to the observer.
    pub fn handle<E: GestureEvent + ?Sized>(&mut self, kind: GestureKind, event: &E) -> usize {
        event.prevent_default();
        if self.config.stop_propagation {
            event.stop_propagation();
        }

        match kind {
            GestureKind::Enter => {
                self.observer.drag_in();
                let has_items = event
                    .transfer()
                    .is_some_and(|transfer| transfer.item_count() > 0);
                self.transition(DragInput::Enter { has_items });
                0
            }
            GestureKind::Leave => {
                self.observer.drag_out();
                self.transition(DragInput::Leave);
                0
            }
            GestureKind::Over => {
                self.observer.drag();
                self.transition(DragInput::Over);
                0
            }
            GestureKind::Drop => {
                self.transition(DragInput::Drop);
                self.observer.dropped();
                self.deliver_files(event)
            }
        }
    }

    fn deliver_files<E: GestureEvent + ?Sized>(&mut self, event: &E) -> usize {
        let Some(transfer) = event.transfer() else {
            return 0;
        };
        if transfer.file_count() == 0 {
            return 0;
        }
        let files = extract_files(&transfer);
        let delivered = files.len();
        self.observer.files_dropped(files);
        if self.config.clear_transfer_on_drop {
            transfer.clear();
        }
        delivered
    }

    fn transition(&mut self, input: DragInput) {
        if let Some(next) = self.machine.apply(input) {
            self.observer.drag_state_changed(next.is_active());
        }
    }
}
