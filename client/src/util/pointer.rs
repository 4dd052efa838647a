//! Pointer geometry helpers.

use pads::pad::Offset;

/// Center-relative pointer vector for a pad surface element, in CSS pixels.
///
/// Uses the element's live bounding rect so the math stays correct when the
/// page scrolls or the layout shifts mid-gesture.
pub fn offset_from_center(ev: &leptos::ev::PointerEvent, element: &web_sys::HtmlDivElement) -> Offset {
    let rect = element.get_bounding_client_rect();
    let center_x = rect.x() + rect.width() * 0.5;
    let center_y = rect.y() + rect.height() * 0.5;
    Offset::new(f64::from(ev.client_x()) - center_x, f64::from(ev.client_y()) - center_y)
}
