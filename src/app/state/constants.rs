use std::time::Duration;

/// Limits and defaults for viewer controls.
pub(crate) const MIN_ZOOM: f32 = 0.5;
pub(crate) const MAX_ZOOM: f32 = 1.4;
/// Step applied by a double-activation, up to `MAX_ZOOM`, then reset to 1.
pub(crate) const ZOOM_STEP: f32 = 0.2;
pub(crate) const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);
pub(crate) const DOUBLE_CLICK_SLOP_PX: f32 = 6.0;
/// Base page size before zoom is applied.
pub(crate) const PAGE_WIDTH_PX: f32 = 360.0;
pub(crate) const PAGE_HEIGHT_PX: f32 = 480.0;
