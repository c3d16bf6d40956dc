//! Fit-to-viewport scale math. Pure and total: a container that has not
//! been laid out yet (zero or negative width) resolves to scale 1, never
//! NaN or a negative factor.

use serde::{Deserialize, Serialize};

/// Layout constants for the preview container. The narrow-viewport
/// threshold and paddings are tunable configuration, not semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLayout {
    /// Below this viewport width scaling is disabled entirely and the
    /// host is expected to allow native scrolling — a shrunk page is
    /// unreadable on small screens.
    pub narrow_viewport_px: f64,
    /// Viewports narrower than this reserve the compact padding.
    pub compact_breakpoint_px: f64,
    pub compact_padding_px: f64,
    pub wide_padding_px: f64,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        PreviewLayout {
            narrow_viewport_px: 1024.0,
            compact_breakpoint_px: 1280.0,
            compact_padding_px: 32.0,
            wide_padding_px: 64.0,
        }
    }
}

impl PreviewLayout {
    /// Padding reserved around the page at a given viewport width.
    pub fn reserved_padding(&self, viewport_width: f64) -> f64 {
        if viewport_width < self.compact_breakpoint_px {
            self.compact_padding_px
        } else {
            self.wide_padding_px
        }
    }

    /// `scale = min(1, (container_width - padding) / page_width_px)`.
    /// The page only ever scales down to fit, never up past 1:1.
    pub fn fit_scale(
        &self,
        container_width: f64,
        viewport_width: f64,
        page_width_px: f64,
    ) -> f64 {
        if viewport_width < self.narrow_viewport_px {
            return 1.0;
        }
        if container_width <= 0.0 || page_width_px <= 0.0 {
            return 1.0;
        }
        let available = container_width - self.reserved_padding(viewport_width);
        if available <= 0.0 {
            return 1.0;
        }
        (available / page_width_px).min(1.0)
    }
}
