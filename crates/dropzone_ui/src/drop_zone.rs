use std::cell::RefCell;
use std::rc::Rc;

use dropzone_core::{
    mount_region, DropHooks, DropRegion, DropZoneConfig, FileDescriptor, MountedRegion,
};
use dropzone_web::ElementSurface;
use leptos::*;

use crate::{bool_token, merge_layout_class};

type MountedZone = MountedRegion<ElementSurface, DropHooks>;

#[component]
/// Region accepting dragged files.
///
/// Gesture listeners are bound when the root element loads and removed when the component is
/// cleaned up, so no callback fires after unmount. Every callback is optional.
pub fn DropZone(
    /// Drag state changed; receives the new active flag.
    #[prop(optional, into)]
    on_drag_state_change: Option<Callback<bool>>,
    /// A drag moved over the zone.
    #[prop(optional, into)]
    on_drag: Option<Callback<()>>,
    /// A drag entered the zone.
    #[prop(optional, into)]
    on_drag_in: Option<Callback<()>>,
    /// A drag left the zone.
    #[prop(optional, into)]
    on_drag_out: Option<Callback<()>>,
    /// A drag was released over the zone.
    #[prop(optional, into)]
    on_drop: Option<Callback<()>>,
    /// Files were dropped, in transfer order. Not called for drops without files.
    #[prop(optional, into)]
    on_files_drop: Option<Callback<Vec<FileDescriptor>>>,
    /// Behaviour switches; defaults to [`DropZoneConfig::DEFAULT`].
    #[prop(optional)]
    config: Option<DropZoneConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let zone_ref = create_node_ref::<html::Div>();
    let drag_active = create_rw_signal(false);
    let mounted: Rc<RefCell<Option<MountedZone>>> = Rc::default();

    let mount_slot = Rc::clone(&mounted);
    zone_ref.on_load(move |zone| {
        let hooks = DropHooks::new()
            .on_drag_state_change(move |active| {
                drag_active.set(active);
                if let Some(callback) = on_drag_state_change {
                    callback.call(active);
                }
            })
            .on_drag(move || {
                if let Some(callback) = on_drag {
                    callback.call(());
                }
            })
            .on_drag_in(move || {
                if let Some(callback) = on_drag_in {
                    callback.call(());
                }
            })
            .on_drag_out(move || {
                if let Some(callback) = on_drag_out {
                    callback.call(());
                }
            })
            .on_drop(move || {
                if let Some(callback) = on_drop {
                    callback.call(());
                }
            })
            .on_files_drop(move |files| {
                if config.debug_log {
                    logging::log!("drop zone received {} file(s)", files.len());
                }
                if let Some(callback) = on_files_drop {
                    callback.call(files);
                }
            });

        let surface = ElementSurface::new(&zone);
        match mount_region(surface, DropRegion::with_config(hooks, config)) {
            Ok(region) => {
                if config.debug_log {
                    logging::log!("drop zone mounted");
                }
                *mount_slot.borrow_mut() = Some(region);
            }
            Err(err) => logging::warn!("drop zone listener bind failed: {err}"),
        }
    });

    on_cleanup(move || {
        if let Some(region) = mounted.borrow_mut().take() {
            region.unmount();
            if config.debug_log {
                logging::log!("drop zone unmounted");
            }
        }
    });

    view! {
        <div
            node_ref=zone_ref
            class=merge_layout_class("ui-drop-zone", layout_class)
            data-ui-primitive="true"
            data-ui-kind="drop-zone"
            data-ui-drag-active=move || bool_token(drag_active.get())
        >
            {children()}
        </div>
    }
}
