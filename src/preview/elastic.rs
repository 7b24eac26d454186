use crate::preview::bounds::PanBounds;

/// Maps a raw drag offset to the offset actually rendered, damping movement
/// past either pan bound. Runs on every drag-change event, so it must stay
/// allocation-free.
pub fn clamp_offset(raw: f32, bounds: &PanBounds) -> f32 {
    if raw > 0.0 {
        // past the left edge; the whole raw value is damped
        raw * bounds.overpan_resistance
    } else if raw < -bounds.max_pan_width {
        // past the right edge; only the excess is damped
        // todo: the branches disagree on what gets damped (whole value vs
        //  excess). this matches the shipped drag feel; check whether
        //  symmetry was intended before touching either formula
        let excess = raw.abs() - bounds.max_pan_width;
        -bounds.max_pan_width - excess * bounds.overpan_resistance
    } else {
        raw
    }
}
