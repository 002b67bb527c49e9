//! Browser (`web-sys`) implementations of the [`dropzone_core`] gesture contracts.
//!
//! - [`WebTransfer`] wraps a `DataTransfer` as a [`dropzone_core::TransferPayload`].
//! - [`WebDragEvent`] wraps a `DragEvent` as a [`dropzone_core::GestureEvent`].
//! - [`ElementSurface`] registers DOM listeners on an element as a
//!   [`dropzone_core::GestureSurface`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod event;
mod surface;
mod transfer;

pub use error::SurfaceError;
pub use event::WebDragEvent;
pub use surface::ElementSurface;
pub use transfer::{descriptor_from_file, WebTransfer};
