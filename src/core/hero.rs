/// Parallax only kicks in above this viewport width.
pub const PARALLAX_MIN_VIEWPORT_PX: f64 = 1024.0;
/// Total travel across the viewport; the content moves ±half of it.
pub const PARALLAX_TRAVEL_PX: f64 = 30.0;

/// Translation of the hero content for a pointer at (`client_x`, `client_y`),
/// or `None` on narrow viewports where the content stays put.
pub fn parallax_offset(
    client_x: f64,
    client_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> Option<(f64, f64)> {
    if viewport_width <= PARALLAX_MIN_VIEWPORT_PX || viewport_height <= 0.0 {
        return None;
    }
    Some((
        (client_x / viewport_width - 0.5) * PARALLAX_TRAVEL_PX,
        (client_y / viewport_height - 0.5) * PARALLAX_TRAVEL_PX,
    ))
}
