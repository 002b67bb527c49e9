use dropzone_core::{drop_summary, file_label, size_in_kb, FileDescriptor};
use leptos::*;

use crate::merge_layout_class;

#[component]
/// Renders dropped files as `name (Nkb)` list items.
///
/// An empty sequence renders an empty list; the "no files" caption is [`DropSummary`]'s job.
pub fn FileList(
    #[prop(into)] files: Signal<Vec<FileDescriptor>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-file-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="file-list"
        >
            <For
                each=move || files.get().into_iter().enumerate()
                key=|(index, file)| (*index, file.list_key())
                children=|(_, file)| {
                    let label = file_label(&file);
                    let size = format!("({}kb)", size_in_kb(file.size));
                    view! {
                        <li aria-label=label>
                            <span>{file.name}</span>
                            " "
                            <span>{size}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
/// Caption with the dropped-file count, or the "no files" indicator.
pub fn DropSummary(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <h3 class="ui-drop-summary" data-ui-kind="drop-summary">
            {move || drop_summary(count.get())}
        </h3>
    }
}
