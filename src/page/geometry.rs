// SPDX-License-Identifier: MPL-2.0
//! Pixel geometry of the page.
//!
//! Section heights are derived from the window size and the content counts,
//! and the same numbers drive both layout (fixed-height section containers)
//! and scroll math (nav targets, scroll-spy, reveal thresholds). Keeping one
//! source of truth is what makes the scroll offsets exact.

use crate::content::Portfolio;
use crate::page::Section;
use crate::ui::design_tokens::sizing;
use iced::Size;

/// Breathing room left between the sticky header and a scrolled-to section.
pub const SCROLL_GAP: f32 = 8.0;

/// Vertical padding above and below each section's body.
pub const SECTION_PADDING: f32 = 48.0;
/// Height reserved for a section heading and the gap under it.
pub const TITLE_BLOCK: f32 = 72.0;
/// Height of one skill row (label, percent, and bar).
pub const SKILL_ROW: f32 = 56.0;
/// Height of one project card.
pub const CARD_HEIGHT: f32 = 180.0;
/// Vertical gap between card rows.
pub const CARD_GUTTER: f32 = 24.0;
/// Fixed height of the contact section, form and footer included.
pub const CONTACT_HEIGHT: f32 = 560.0;
/// The hero never shrinks below this, however small the window.
pub const HERO_MIN: f32 = 360.0;

/// Number of project-grid columns for a given window width.
pub fn columns(width: f32) -> usize {
    if width >= 1000.0 {
        3
    } else if width >= 640.0 {
        2
    } else {
        1
    }
}

/// Heights and offsets of the sections present on the page.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    window: Size,
    entries: Vec<(Section, f32)>,
}

impl PageGeometry {
    pub fn new(window: Size, content: &Portfolio) -> Self {
        let mut entries = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let height = match section {
                Section::About => (window.height - sizing::HEADER_HEIGHT).max(HERO_MIN),
                Section::Skills => {
                    if content.skills.is_empty() {
                        continue;
                    }
                    SECTION_PADDING * 2.0
                        + TITLE_BLOCK
                        + content.skills.len() as f32 * SKILL_ROW
                }
                Section::Projects => {
                    if content.projects.is_empty() {
                        continue;
                    }
                    let cols = columns(window.width);
                    let rows = content.projects.len().div_ceil(cols);
                    SECTION_PADDING * 2.0
                        + TITLE_BLOCK
                        + rows as f32 * (CARD_HEIGHT + CARD_GUTTER)
                }
                Section::Contact => CONTACT_HEIGHT,
            };
            entries.push((section, height));
        }

        Self { window, entries }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn header_height(&self) -> f32 {
        sizing::HEADER_HEIGHT
    }

    /// Height of the scrollable area under the sticky header.
    pub fn viewport_height(&self) -> f32 {
        (self.window.height - sizing::HEADER_HEIGHT).max(0.0)
    }

    /// Total height of the page content.
    pub fn content_height(&self) -> f32 {
        self.entries.iter().map(|(_, h)| h).sum()
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height()).max(0.0)
    }

    /// Sections present on the page, in page order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.entries.iter().any(|(s, _)| *s == section)
    }

    pub fn height_of(&self, section: Section) -> Option<f32> {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, h)| *h)
    }

    /// Top of the section within the page content, in content coordinates.
    pub fn offset_of(&self, section: Section) -> Option<f32> {
        let mut top = 0.0;
        for (s, height) in &self.entries {
            if *s == section {
                return Some(top);
            }
            top += height;
        }
        None
    }

    /// Scroll offset a nav link should land on: the section's top minus the
    /// sticky-header allowance, clamped to the reachable range. `None` when
    /// the section is not on the page (the press becomes a no-op).
    pub fn scroll_target(&self, section: Section) -> Option<f32> {
        let top = self.offset_of(section)?;
        Some((top - (self.header_height() + SCROLL_GAP)).clamp(0.0, self.max_scroll()))
    }

    /// Fraction of the section's own height currently inside the viewport,
    /// in `0.0..=1.0`. Absent sections report 0.
    pub fn visible_fraction(&self, section: Section, scroll_y: f32) -> f32 {
        let (Some(top), Some(height)) = (self.offset_of(section), self.height_of(section)) else {
            return 0.0;
        };
        if height <= 0.0 {
            return 0.0;
        }
        let bottom = top + height;
        let view_top = scroll_y;
        let view_bottom = scroll_y + self.viewport_height();
        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        (overlap / height).min(1.0)
    }
}
