use dropzone_core::GestureEvent;

use crate::WebTransfer;

#[derive(Debug, Clone)]
/// Browser `DragEvent` exposed as a gesture event.
pub struct WebDragEvent {
    event: web_sys::DragEvent,
}

impl WebDragEvent {
    /// Wraps `event`.
    pub fn new(event: web_sys::DragEvent) -> Self {
        Self { event }
    }

    /// Underlying browser event.
    pub fn raw(&self) -> &web_sys::DragEvent {
        &self.event
    }
}

impl GestureEvent for WebDragEvent {
    type Transfer = WebTransfer;

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn stop_propagation(&self) {
        self.event.stop_propagation();
    }

    fn transfer(&self) -> Option<WebTransfer> {
        self.event.data_transfer().map(WebTransfer::new)
    }
}
