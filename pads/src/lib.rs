//! Core logic for the PosePad portrait editor.
//!
//! UI-framework-independent: pad drag sessions, prompt composition, the
//! image payload codec, and the editor session state machine. The Leptos
//! client and the axum server both build on this crate; nothing in here
//! touches the browser or the network, so everything is unit-testable on
//! the native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pad`] | Pad geometry, offsets, and the per-pad drag state machine |
//! | [`prompt`] | Offsets -> instruction string for the image model |
//! | [`payload`] | Self-describing encoded image payloads (data URLs) |
//! | [`session`] | Editor session: image slots and the request lifecycle |
//! | [`api`] | Wire types for the generation endpoint |
//! | [`consts`] | Shared numeric constants (pad sizes, thresholds) |

pub mod api;
pub mod consts;
pub mod pad;
pub mod payload;
pub mod prompt;
pub mod session;
