//! Headless drag-and-drop contracts shared by the browser adapters and UI components.
//!
//! The crate owns the drag-state machine, transfer-payload extraction, the drop-region gesture
//! handler, and the surface binding lifecycle. Nothing here touches the DOM: concrete browser
//! bindings live in `dropzone_web` and the Leptos components in `dropzone_ui`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod descriptor;
pub mod listing;
pub mod machine;
pub mod observer;
pub mod region;
pub mod surface;
pub mod transfer;

pub use config::DropZoneConfig;
pub use descriptor::FileDescriptor;
pub use listing::{drop_summary, file_label, size_in_kb};
pub use machine::{DragInput, DragState, DragStateMachine};
pub use observer::{DropHooks, DropObserver, NoopObserver};
pub use region::{DropRegion, GestureEvent, GestureKind, MemoryGestureEvent};
pub use surface::{mount_region, GestureHandler, GestureSurface, MountedRegion};
pub use transfer::{extract_files, MemoryTransfer, TransferPayload};
