//! Directional pad widget: a circular surface with a draggable handle.
//!
//! POINTER HANDLING
//! ================
//! Pointer capture on pointerdown routes the whole gesture to the surface
//! element, so the drag keeps tracking even when the cursor leaves the
//! circle. All geometry lives in `pads`; this component only converts
//! pointer events into center-relative offsets and renders the result.

use leptos::prelude::*;
use pads::pad::PadKind;
use pads::session::EditorSession;

use crate::util::pointer::offset_from_center;

#[component]
pub fn DirectionalPad(kind: PadKind) -> impl IntoView {
    let session = expect_context::<RwSignal<EditorSession>>();
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    let config = kind.config();
    let surface_style = format!(
        "width: {}px; height: {}px;",
        config.outer_diameter, config.outer_diameter
    );
    let handle_diameter = config.handle_diameter;
    let is_body = kind == PadKind::Body;

    let handle_style = move || {
        let offset = session.with(|s| s.pad(kind).offset());
        format!(
            "width: {handle_diameter}px; height: {handle_diameter}px; \
             transform: translate({}px, {}px);",
            offset.x, offset.y
        )
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let Some(surface) = surface_ref.get_untracked() else {
            return;
        };
        if surface.set_pointer_capture(ev.pointer_id()).is_err() {
            log::warn!("pointer capture failed for {} pad", kind.label());
        }
        let raw = offset_from_center(&ev, &surface);
        session.update(|s| {
            let pad = s.pad_mut(kind);
            pad.begin();
            pad.drag_to(raw);
        });
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !session.with_untracked(|s| s.pad(kind).is_dragging()) {
            return;
        }
        let Some(surface) = surface_ref.get_untracked() else {
            return;
        };
        let raw = offset_from_center(&ev, &surface);
        session.update(|s| s.pad_mut(kind).drag_to(raw));
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if !session.with_untracked(|s| s.pad(kind).is_dragging()) {
            return;
        }
        if let Some(surface) = surface_ref.get_untracked() {
            // Release errors are harmless; capture dies with the pointer anyway.
            let _released = surface.release_pointer_capture(ev.pointer_id());
        }
        session.update(|s| s.pad_mut(kind).end());
    };

    view! {
        <div class="pad" class:pad--body=is_body>
            <span class="pad__label">{kind.label()}</span>
            <div
                class="pad__surface"
                node_ref=surface_ref
                style=surface_style
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
            >
                <div class="pad__handle" style=handle_style></div>
            </div>
        </div>
    }
}
