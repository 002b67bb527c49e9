//! Listener lifecycle for binding a [`DropRegion`] to a platform surface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{DragState, DropObserver, DropRegion, GestureEvent, GestureKind};

/// Handler invoked by a surface for one gesture kind.
pub type GestureHandler<E> = Box<dyn FnMut(&E)>;

/// A screen region able to deliver drag gestures.
pub trait GestureSurface {
    /// Event type delivered to handlers.
    type Event: GestureEvent;
    /// Error raised when a listener cannot be registered.
    type Error;

    /// Registers `handler` for `kind`, replacing any previous handler for that kind.
    ///
    /// # Errors
    ///
    /// Returns the platform error when registration fails; nothing is bound in that case.
    fn bind(
        &mut self,
        kind: GestureKind,
        handler: GestureHandler<Self::Event>,
    ) -> Result<(), Self::Error>;

    /// Removes the handler for `kind`. Unbinding an unbound kind is a no-op.
    fn unbind(&mut self, kind: GestureKind);
}

/// A region whose gesture listeners are bound to a surface.
///
/// Dropping the value unbinds every listener it registered.
pub struct MountedRegion<S: GestureSurface, O> {
    surface: S,
    region: Rc<RefCell<DropRegion<O>>>,
    bound: Vec<GestureKind>,
}

/// Binds `region` to every gesture of `surface`.
///
/// When binding succeeds the observer receives the initial state (if configured).
///
/// # Errors
///
/// Returns the surface's error for the first gesture that fails to bind. Gestures bound before
/// the failure are unbound again before returning.
pub fn mount_region<S, O>(
    surface: S,
    region: DropRegion<O>,
) -> Result<MountedRegion<S, O>, S::Error>
where
    S: GestureSurface + 'static,
    O: DropObserver + 'static,
{
    let mut mounted = MountedRegion {
        surface,
        region: Rc::new(RefCell::new(region)),
        bound: Vec::with_capacity(GestureKind::ALL.len()),
    };
    for kind in GestureKind::ALL {
        let region = Rc::clone(&mounted.region);
        mounted.surface.bind(
            kind,
            Box::new(move |event: &S::Event| {
                // A hook that synchronously re-dispatches a gesture must not re-enter the region.
                if let Ok(mut region) = region.try_borrow_mut() {
                    region.handle(kind, event);
                }
            }),
        )?;
        mounted.bound.push(kind);
    }
    if let Ok(mut region) = mounted.region.try_borrow_mut() {
        region.report_initial_state();
    }
    Ok(mounted)
}

impl<S: GestureSurface, O: DropObserver> MountedRegion<S, O> {
    /// Current drag state of the mounted region.
    pub fn state(&self) -> DragState {
        self.region.borrow().state()
    }

    /// Whether a drag is active over the mounted region.
    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Gestures currently bound on the surface.
    pub fn bound_gestures(&self) -> &[GestureKind] {
        &self.bound
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unbinds every listener.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<S: GestureSurface, O> Drop for MountedRegion<S, O> {
    fn drop(&mut self) {
        for kind in self.bound.drain(..) {
            self.surface.unbind(kind);
        }
    }
}

impl<S: GestureSurface, O> std::fmt::Debug for MountedRegion<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedRegion")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::region::MemoryGestureEvent;
    use crate::{DropHooks, FileDescriptor, MemoryTransfer};
    use pretty_assertions::assert_eq;

    type Handlers = Rc<RefCell<BTreeMap<GestureKind, GestureHandler<MemoryGestureEvent>>>>;

    #[derive(Default, Clone)]
    struct FakeSurface {
        handlers: Handlers,
        fail_on: Option<GestureKind>,
    }

    impl FakeSurface {
        fn failing_on(kind: GestureKind) -> Self {
            Self {
                fail_on: Some(kind),
                ..Self::default()
            }
        }

        fn bound(&self) -> Vec<GestureKind> {
            self.handlers.borrow().keys().copied().collect()
        }

        fn dispatch(&self, kind: GestureKind, event: &MemoryGestureEvent) -> bool {
            let Some(mut handler) = self.handlers.borrow_mut().remove(&kind) else {
                return false;
            };
            handler(event);
            self.handlers.borrow_mut().insert(kind, handler);
            true
        }
    }

    impl GestureSurface for FakeSurface {
        type Event = MemoryGestureEvent;
        type Error = String;

        fn bind(
            &mut self,
            kind: GestureKind,
            handler: GestureHandler<MemoryGestureEvent>,
        ) -> Result<(), String> {
            if self.fail_on == Some(kind) {
                return Err(format!("cannot bind {}", kind.event_name()));
            }
            self.handlers.borrow_mut().insert(kind, handler);
            Ok(())
        }

        fn unbind(&mut self, kind: GestureKind) {
            self.handlers.borrow_mut().remove(&kind);
        }
    }

    #[test]
    fn mount_binds_all_gestures_and_reports_initial_state() {
        let surface = FakeSurface::default();
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = reports.clone();
        let hooks =
            DropHooks::new().on_drag_state_change(move |active| sink.borrow_mut().push(active));
        let mounted = mount_region(surface.clone(), DropRegion::new(hooks)).expect("mount");
        assert_eq!(mounted.bound_gestures(), &GestureKind::ALL);
        assert_eq!(surface.bound().len(), 4);
        assert_eq!(mounted.state(), DragState::Idle);
        assert_eq!(*reports.borrow(), vec![false]);
    }

    #[test]
    fn dispatched_gestures_reach_the_region() {
        let surface = FakeSurface::default();
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let sink = dropped.clone();
        let hooks = DropHooks::new().on_files_drop(move |files| sink.borrow_mut().extend(files));
        let mounted = mount_region(surface.clone(), DropRegion::new(hooks)).expect("mount");

        let file = FileDescriptor::new("a.txt", 2000, 1);
        let transfer = MemoryTransfer::with_files([file.clone()]);
        let enter = MemoryGestureEvent::with_transfer(transfer.clone());
        surface.dispatch(GestureKind::Enter, &enter);
        assert!(mounted.is_active());
        surface.dispatch(GestureKind::Drop, &MemoryGestureEvent::with_transfer(transfer));
        assert!(!mounted.is_active());
        assert_eq!(*dropped.borrow(), vec![file]);
    }

    #[test]
    fn unmount_removes_every_binding() {
        let surface = FakeSurface::default();
        let fired = Rc::new(RefCell::new(0usize));
        let counter = fired.clone();
        let hooks = DropHooks::new().on_drag(move || *counter.borrow_mut() += 1);
        let mounted = mount_region(surface.clone(), DropRegion::new(hooks)).expect("mount");

        assert!(surface.dispatch(GestureKind::Over, &MemoryGestureEvent::bare()));
        mounted.unmount();

        assert!(surface.bound().is_empty());
        for kind in GestureKind::ALL {
            assert!(!surface.dispatch(kind, &MemoryGestureEvent::bare()));
        }
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn failed_bind_rolls_back_earlier_bindings() {
        let surface = FakeSurface::failing_on(GestureKind::Over);
        let reported = Rc::new(RefCell::new(false));
        let flag = reported.clone();
        let hooks = DropHooks::new().on_drag_state_change(move |_| *flag.borrow_mut() = true);

        let err = mount_region(surface.clone(), DropRegion::new(hooks)).expect_err("bind fails");

        assert_eq!(err, "cannot bind dragover");
        assert!(surface.bound().is_empty());
        assert!(!*reported.borrow());
    }
}
