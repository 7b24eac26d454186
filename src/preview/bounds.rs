use crate::geometry::Size;

/// Largest elastic excursion past the pan range, in logical pixels.
pub(crate) const BASE_MAX_OVERPAN: f32 = 20.0;
/// Fraction of an overpanned drag distance that survives as visible offset.
pub(crate) const OVERPAN_RESISTANCE: f32 = 0.2;
/// Portrait images cap the overpan allowance at this share of viewport width.
const PORTRAIT_OVERPAN_SHARE: f32 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanBounds {
    /// How far the image can legally pan left of the resting position.
    pub max_pan_width: f32,
    pub overpan_resistance: f32,
    /// Allowance for the elastic excursion.
    // todo: clamp_offset never consults this, only the resistance factor.
    //  decide whether excursions should also be hard-capped at max_overpan
    pub max_overpan: f32,
}

impl PanBounds {
    pub fn compute(displayed: Size, viewport: Size) -> Self {
        let max_pan_width = (displayed.width - viewport.width).max(0.0);

        // portrait images have little or no horizontal slack, so their elastic
        // excursion scales with the viewport instead of the fixed allowance
        let max_overpan = if displayed.is_portrait() {
            BASE_MAX_OVERPAN.min(viewport.width * PORTRAIT_OVERPAN_SHARE)
        } else {
            BASE_MAX_OVERPAN
        };

        PanBounds {
            max_pan_width,
            overpan_resistance: OVERPAN_RESISTANCE,
            max_overpan,
        }
    }
}
