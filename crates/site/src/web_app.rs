use dropzone_core::{DropZoneConfig, FileDescriptor};
use dropzone_ui::{DropSummary, DropZone, FileList};
use leptos::*;
use leptos_meta::*;

/// Query parameter that turns on drop-zone console logging.
const DEBUG_QUERY_PARAM: &str = "debug-drop";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let drop_active = create_rw_signal(false);
    let files = create_rw_signal(Vec::<FileDescriptor>::new());
    let config = zone_config(&location_search());

    view! {
        <Title text="Drop Zone" />
        <Meta name="description" content="Drag files onto the page to list them." />

        <main class="site-root">
            <div class=move || wrapper_class(drop_active.get())>
                <DropZone
                    config=config
                    on_drag_state_change=Callback::new(move |active: bool| drop_active.set(active))
                    on_files_drop=Callback::new(move |dropped: Vec<FileDescriptor>| {
                        files.set(dropped)
                    })
                >
                    <h2>"Drop your files here"</h2>
                    <DropSummary count=Signal::derive(move || files.with(Vec::len)) />
                    <FileList files=files />
                </DropZone>
            </div>
        </main>
    }
}

/// Class list for the zone wrapper; `dropZoneActive` is added while a drag hovers the zone.
pub fn wrapper_class(active: bool) -> &'static str {
    if active {
        "dropZoneWrapper dropZoneActive"
    } else {
        "dropZoneWrapper"
    }
}

fn zone_config(search: &str) -> DropZoneConfig {
    DropZoneConfig {
        debug_log: has_query_flag(search, DEBUG_QUERY_PARAM),
        ..DropZoneConfig::DEFAULT
    }
}

fn has_query_flag(search: &str, flag: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
            (key == flag).then_some(value)
        })
        .any(|value| !matches!(value, "0" | "false" | "off"))
}

fn location_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_gains_active_class_during_drag() {
        assert_eq!(wrapper_class(false), "dropZoneWrapper");
        assert_eq!(wrapper_class(true), "dropZoneWrapper dropZoneActive");
    }

    #[test]
    fn debug_flag_is_read_from_query() {
        assert!(zone_config("?debug-drop").debug_log);
        assert!(zone_config("?open=x&debug-drop=1").debug_log);
        assert!(!zone_config("?debug-drop=off").debug_log);
        assert!(!zone_config("").debug_log);
        assert!(!zone_config("?debug-dropped=1").debug_log);
    }

    #[test]
    fn query_config_keeps_other_defaults() {
        let config = zone_config("?debug-drop");
        assert!(config.stop_propagation);
        assert!(config.clear_transfer_on_drop);
        assert!(config.report_initial_state);
    }
}
