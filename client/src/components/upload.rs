//! Portrait upload: a hidden file input behind a styled button.
//!
//! The selected file is read as a data URL off the main thread by the
//! browser's `FileReader`; the session validates the media type once the
//! read completes. The reader guard must outlive the read, so it is parked
//! in a local stored value until the callback fires.

use leptos::prelude::*;
use pads::payload::ACCEPTED_MEDIA_TYPES;
use pads::session::EditorSession;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadButton() -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let reader_guard = StoredValue::new_local(None::<gloo_file::callbacks::FileReader>);

    let accept = ACCEPTED_MEDIA_TYPES.join(",");

    let on_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again later.
        input.set_value("");

        let file = gloo_file::File::from(file);
        let guard = gloo_file::callbacks::read_as_data_url(&file, move |result| {
            match result {
                Ok(data_url) => session.update(|s| {
                    if let Err(err) = s.load_original(&data_url) {
                        log::warn!("upload rejected: {err}");
                        s.report_input_error(err.to_string());
                    }
                }),
                Err(err) => {
                    log::warn!("file read failed: {err}");
                    session.update(|s| s.report_input_error(format!("failed to read file: {err}")));
                }
            }
        });
        // Replacing the previous guard cancels any still-pending read.
        reader_guard.set_value(Some(guard));
    };

    view! {
        <div class="upload">
            <input
                class="upload__input"
                type="file"
                accept=accept
                node_ref=input_ref
                on:change=on_change
            />
            <button class="btn" on:click=on_click>
                "Upload portrait"
            </button>
        </div>
    }
}
