//! Viewer options and the event reducer.
//!
//! The windowing layer translates toolkit events into [`ViewerEvent`] values
//! and acts on the [`EventOutcome`] returned by [`reduce`]; all option-update
//! logic lives here, independent of any GUI toolkit.

use crate::colormap::Colormap;
use crate::config::{DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE};

/// Render options for the displayed image. Replaced wholesale on every
/// accepted event, never partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixel block size per array cell, in `1..=MAX_PIXEL_SIZE`.
    pub pixel_size: u32,
    /// Colormap applied to the sample values.
    pub colormap: Colormap,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            colormap: Colormap::ALL[0],
        }
    }
}

/// UI events produced by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Pixel size control changed to the given value.
    PixelSizeChanged(u32),
    /// A colormap was selected from the menu.
    ColormapSelected(Colormap),
    /// Explicit close action or window-manager close.
    CloseRequested,
}

/// Outcome of applying an event to the current options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Options changed; the image must be re-rendered.
    Updated(RenderOptions),
    /// No observable change; keep the current image.
    Unchanged,
    /// Tear down the window and return control to the caller.
    Close,
}

/// Apply a viewer event to the current options.
///
/// Out-of-range pixel sizes and no-op selections are reported as
/// [`EventOutcome::Unchanged`] so the caller never re-renders needlessly.
pub fn reduce(options: RenderOptions, event: &ViewerEvent) -> EventOutcome {
    match *event {
        ViewerEvent::PixelSizeChanged(pixel_size) => {
            if pixel_size < 1 || pixel_size > MAX_PIXEL_SIZE || pixel_size == options.pixel_size {
                return EventOutcome::Unchanged;
            }
            EventOutcome::Updated(RenderOptions {
                pixel_size,
                ..options
            })
        }
        ViewerEvent::ColormapSelected(colormap) => {
            if colormap == options.colormap {
                return EventOutcome::Unchanged;
            }
            EventOutcome::Updated(RenderOptions { colormap, ..options })
        }
        ViewerEvent::CloseRequested => EventOutcome::Close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pixel_size: u32, colormap: Colormap) -> RenderOptions {
        RenderOptions {
            pixel_size,
            colormap,
        }
    }

    #[test]
    fn test_pixel_size_change_updates_options() {
        let current = options(1, Colormap::Plasma);
        let outcome = reduce(current, &ViewerEvent::PixelSizeChanged(3));
        assert_eq!(outcome, EventOutcome::Updated(options(3, Colormap::Plasma)));
    }

    #[test]
    fn test_out_of_range_pixel_size_is_ignored() {
        let current = options(2, Colormap::Plasma);
        assert_eq!(
            reduce(current, &ViewerEvent::PixelSizeChanged(0)),
            EventOutcome::Unchanged
        );
        assert_eq!(
            reduce(current, &ViewerEvent::PixelSizeChanged(MAX_PIXEL_SIZE + 1)),
            EventOutcome::Unchanged
        );
    }

    #[test]
    fn test_noop_events_are_unchanged() {
        let current = options(2, Colormap::Viridis);
        assert_eq!(
            reduce(current, &ViewerEvent::PixelSizeChanged(2)),
            EventOutcome::Unchanged
        );
        assert_eq!(
            reduce(current, &ViewerEvent::ColormapSelected(Colormap::Viridis)),
            EventOutcome::Unchanged
        );
    }

    #[test]
    fn test_colormap_selection_updates_options() {
        let current = options(4, Colormap::Plasma);
        let outcome = reduce(current, &ViewerEvent::ColormapSelected(Colormap::Turbo));
        assert_eq!(outcome, EventOutcome::Updated(options(4, Colormap::Turbo)));
    }

    #[test]
    fn test_close_request_closes() {
        let current = RenderOptions::default();
        assert_eq!(
            reduce(current, &ViewerEvent::CloseRequested),
            EventOutcome::Close
        );
    }

    #[test]
    fn test_default_options_match_config() {
        let defaults = RenderOptions::default();
        assert_eq!(defaults.pixel_size, DEFAULT_PIXEL_SIZE);
        assert_eq!(defaults.colormap, Colormap::ALL[0]);
    }
}
