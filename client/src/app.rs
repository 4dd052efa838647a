//! Root component: session context, page layout, and the action bar.

use leptos::prelude::*;
use pads::pad::PadKind;
use pads::session::EditorSession;

use crate::actions;
use crate::components::pad::DirectionalPad;
use crate::components::preview::ImagePreviews;
use crate::components::upload::UploadButton;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(EditorSession::new());
    provide_context(session);

    let can_generate = move || session.with(|s| s.can_generate());
    let in_flight = move || session.with(|s| s.request().is_in_flight());
    let error = move || session.with(|s| s.request().error().map(str::to_owned));

    let on_generate = move |_| actions::run_generation(session);
    let on_reset = move |_| session.update(EditorSession::reset);

    view! {
        <main class="app">
            <header class="app__header">
                <h1 class="app__title">"PosePad"</h1>
                <p class="app__tagline">
                    "Upload a portrait, aim the pads, and generate an edited pose."
                </p>
            </header>

            <ImagePreviews/>

            <section class="app__pads">
                <DirectionalPad kind=PadKind::Gaze/>
                <DirectionalPad kind=PadKind::Head/>
                <DirectionalPad kind=PadKind::Body/>
            </section>

            <section class="app__actions">
                <UploadButton/>
                <button
                    class="btn btn--primary"
                    disabled=move || !can_generate()
                    on:click=on_generate
                >
                    {move || if in_flight() { "Generating..." } else { "Generate" }}
                </button>
                <button class="btn" on:click=on_reset>
                    "Reset pads"
                </button>
            </section>

            {move || {
                error().map(|message| view! { <div class="app__error">{message}</div> })
            }}
        </main>
    }
}
