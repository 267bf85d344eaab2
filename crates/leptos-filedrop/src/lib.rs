//! Leptos FileDrop Utilities
//!
//! Drop-target plumbing for file uploads using HTML5 drag events.
//! A drop zone tracks a hover flag for styling and hands dropped files
//! to a callback; the same callback is used for the hidden file picker.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// Files are currently dragged over the zone
    pub over_read: ReadSignal<bool>,
    pub over_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (over_read, over_write) = signal(false);
    FileDropSignals { over_read, over_write }
}

/// Collect a `FileList` into owned handles, in list order
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// True if the drag carries files (as opposed to text or elements)
fn carries_files(ev: &web_sys::DragEvent) -> bool {
    ev.data_transfer()
        .map(|dt| dt.types().iter().any(|t| t.as_string().as_deref() == Some("Files")))
        .unwrap_or(false)
}

/// Create dragover handler: marks the zone active and allows the drop
pub fn make_on_dragover(drop: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if !carries_files(&ev) {
            return;
        }
        ev.prevent_default();
        if !drop.over_read.get_untracked() {
            drop.over_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(drop: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        drop.over_write.set(false);
    }
}

/// Create drop handler delivering the dropped files
pub fn make_on_drop<F>(drop: FileDropSignals, on_files: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(Vec<web_sys::File>) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drop.over_write.set(false);
        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            on_files(files);
        }
    }
}

/// Create change handler for an `<input type="file">` picker.
/// The input is reset afterwards so picking the same file again fires again.
pub fn make_on_pick<F>(on_files: F) -> impl Fn(web_sys::Event) + Clone + 'static
where
    F: Fn(Vec<web_sys::File>) + Clone + 'static,
{
    move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let files = files_from_list(input.files());
        input.set_value("");
        if !files.is_empty() {
            on_files(files);
        }
    }
}

/// Open the file picker behind a drop zone
pub fn open_picker(input: &web_sys::HtmlInputElement) {
    input.click();
}

/// Bind document-level guards so a file dropped next to the zone
/// does not make the browser navigate away to the file
pub fn bind_global_drop_guard() {
    use wasm_bindgen::closure::Closure;

    let guard = Closure::<dyn FnMut(web_sys::DragEvent)>::new(move |ev: web_sys::DragEvent| {
        if carries_files(&ev) {
            ev.prevent_default();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("dragover", guard.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("drop", guard.as_ref().unchecked_ref());
        }
    }
    guard.forget();
}
