// SPDX-License-Identifier: MPL-2.0
//! Scroll-spy: decides which nav link is highlighted, and when the
//! scroll-triggered reveals arm.

use crate::page::{PageGeometry, Section};

/// Fraction of the viewport forming the spy band. A section is a candidate
/// while it overlaps the top half of the viewport, matching a bottom margin
/// of minus half the viewport height.
pub const SPY_BAND_FRACTION: f32 = 0.5;

/// A section arms its reveal once at least this fraction of it is visible.
pub const REVEAL_THRESHOLD: f32 = 0.12;

/// Returns the section whose nav link should be highlighted for the given
/// scroll offset.
///
/// Every section overlapping the spy band is a candidate; the last one in
/// page order wins. This mirrors observer batch delivery on the original
/// page and is deliberately implementation-defined when several sections
/// share the band.
pub fn active_section(geometry: &PageGeometry, scroll_y: f32) -> Option<Section> {
    let band_top = scroll_y;
    let band_bottom = scroll_y + geometry.viewport_height() * SPY_BAND_FRACTION;

    let mut active = None;
    for section in geometry.sections() {
        let (Some(top), Some(height)) = (
            geometry.offset_of(section),
            geometry.height_of(section),
        ) else {
            continue;
        };
        let bottom = top + height;
        if top < band_bottom && bottom > band_top {
            active = Some(section);
        }
    }
    active
}

/// Whether a section's reveal threshold is crossed at the given offset.
pub fn reveal_crossed(geometry: &PageGeometry, section: Section, scroll_y: f32) -> bool {
    geometry.visible_fraction(section, scroll_y) >= REVEAL_THRESHOLD
}
