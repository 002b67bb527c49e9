//! Leptos components for the drag-and-drop file picker.
//!
//! [`DropZone`] binds a [`dropzone_core::DropRegion`] to its root `<div>` on mount and unbinds it
//! on cleanup. [`FileList`] and [`DropSummary`] are pure renderers for the dropped files.
//! Components follow the `data-ui-*` attribute contract used by the shell CSS.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod drop_zone;
mod file_list;

pub use drop_zone::DropZone;
pub use file_list::{DropSummary, FileList};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-drop-zone", None), "ui-drop-zone");
        assert_eq!(merge_layout_class("ui-drop-zone", Some("")), "ui-drop-zone");
        assert_eq!(
            merge_layout_class("ui-drop-zone", Some("wide")),
            "ui-drop-zone wide"
        );
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
