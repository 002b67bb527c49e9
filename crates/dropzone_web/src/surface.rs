use std::collections::BTreeMap;

use dropzone_core::{GestureHandler, GestureKind, GestureSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::{SurfaceError, WebDragEvent};

type DragListener = Closure<dyn FnMut(web_sys::DragEvent)>;

/// DOM element whose drag events feed a drop region.
///
/// The surface owns the JS closures it registers. Unbinding (or dropping the surface) removes
/// the listener from the element before the closure is released.
pub struct ElementSurface {
    target: web_sys::EventTarget,
    listeners: BTreeMap<GestureKind, DragListener>,
}

impl ElementSurface {
    /// Creates a surface over `target` with no listeners bound.
    pub fn new(target: &web_sys::EventTarget) -> Self {
        Self {
            target: target.clone(),
            listeners: BTreeMap::new(),
        }
    }

    /// Gestures that currently have a DOM listener.
    pub fn bound_gestures(&self) -> impl Iterator<Item = GestureKind> + '_ {
        self.listeners.keys().copied()
    }

    fn detach(&self, kind: GestureKind, listener: &DragListener) {
        let _ = self.target.remove_event_listener_with_callback(
            kind.event_name(),
            listener.as_ref().unchecked_ref(),
        );
    }
}

impl GestureSurface for ElementSurface {
    type Event = WebDragEvent;
    type Error = SurfaceError;

    fn bind(
        &mut self,
        kind: GestureKind,
        mut handler: GestureHandler<WebDragEvent>,
    ) -> Result<(), SurfaceError> {
        self.unbind(kind);
        let listener = DragListener::wrap(Box::new(move |event: web_sys::DragEvent| {
            handler(&WebDragEvent::new(event));
        }));
        self.target
            .add_event_listener_with_callback(kind.event_name(), listener.as_ref().unchecked_ref())
            .map_err(|err| SurfaceError::Bind {
                event: kind.event_name(),
                message: format!("{err:?}"),
            })?;
        self.listeners.insert(kind, listener);
        Ok(())
    }

    fn unbind(&mut self, kind: GestureKind) {
        if let Some(listener) = self.listeners.remove(&kind) {
            self.detach(kind, &listener);
        }
    }
}

impl Drop for ElementSurface {
    fn drop(&mut self) {
        for (kind, listener) in std::mem::take(&mut self.listeners) {
            self.detach(kind, &listener);
        }
    }
}

impl std::fmt::Debug for ElementSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementSurface")
            .field("bound", &self.listeners.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
