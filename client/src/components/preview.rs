//! Side-by-side original and edited image slots.

use leptos::prelude::*;
use pads::session::EditorSession;

#[component]
pub fn ImagePreviews() -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();

    // Memoized so the img nodes only update when the image itself changes,
    // not on every pad drag tick.
    let original_url =
        Memo::new(move |_| session.with(|s| s.original().map(|image| image.to_data_url())));
    let edited_url =
        Memo::new(move |_| session.with(|s| s.edited().map(|image| image.to_data_url())));
    let in_flight = move || session.with(|s| s.request().is_in_flight());

    view! {
        <section class="previews">
            <figure class="previews__slot">
                <figcaption class="previews__caption">"Original"</figcaption>
                {move || match original_url.get() {
                    Some(url) => {
                        view! { <img class="previews__image" src=url alt="Original portrait"/> }
                            .into_any()
                    }
                    None => {
                        view! { <div class="previews__empty">"No portrait loaded"</div> }
                            .into_any()
                    }
                }}
            </figure>
            <figure class="previews__slot">
                <figcaption class="previews__caption">"Edited"</figcaption>
                {move || {
                    if in_flight() {
                        return view! {
                            <div class="previews__empty previews__empty--busy">
                                "Generating..."
                            </div>
                        }
                        .into_any();
                    }
                    match edited_url.get() {
                        Some(url) => {
                            view! { <img class="previews__image" src=url alt="Edited portrait"/> }
                                .into_any()
                        }
                        None => {
                            view! { <div class="previews__empty">"Nothing generated yet"</div> }
                                .into_any()
                        }
                    }
                }}
            </figure>
        </section>
    }
}
