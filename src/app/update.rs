// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Handlers receive an [`UpdateContext`] with mutable references into the
//! relevant `App` state instead of capturing it implicitly, which keeps each
//! behavior testable on its own and the borrow structure explicit.

use super::{view, Message};
use crate::anim::{CountUp, ScrollTween, Stagger};
use crate::content::Portfolio;
use crate::page::{spy, PageGeometry, Section};
use crate::ui::contact_form;
use crate::ui::header;
use iced::widget::{operation, scrollable::RelativeOffset};
use iced::{Size, Task};
use std::time::Instant;

/// Mutable view into the `App` state a handler may touch.
pub struct UpdateContext<'a> {
    pub header: &'a mut header::State,
    pub form: &'a mut contact_form::State,
    pub geometry: &'a mut PageGeometry,
    pub content: &'a Portfolio,
    pub scroll_y: &'a mut f32,
    pub active_section: &'a mut Option<Section>,
    pub header_elevated: &'a mut bool,
    pub skills_anim: &'a mut Option<Vec<CountUp>>,
    pub stagger: &'a mut Option<Stagger>,
    pub scroll_tween: &'a mut Option<ScrollTween>,
    pub last_tick: &'a mut Option<Instant>,
    pub reduce_motion: bool,
}

/// Handles header interaction: menu toggling and nav-link activation.
pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(ctx.header, message) {
        header::Event::None => Task::none(),
        header::Event::Navigate(section) => {
            // A link whose section is not on the page is a no-op; the press
            // is still consumed.
            let Some(target) = ctx.geometry.scroll_target(section) else {
                return Task::none();
            };

            if ctx.reduce_motion {
                *ctx.scroll_tween = None;
                handle_page_scrolled(ctx, target);
                return scroll_task(ctx.geometry, target);
            }

            *ctx.scroll_tween = Some(ScrollTween::new(*ctx.scroll_y, target));
            // New animation epoch; the first tick measures from here.
            *ctx.last_tick = None;
            Task::none()
        }
    }
}

/// Handles form input and submission, scheduling the simulated send.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_form::Message,
) -> Task<Message> {
    match ctx.form.update(message) {
        contact_form::Event::None => Task::none(),
        contact_form::Event::ScheduleSend => Task::perform(
            async { tokio::time::sleep(contact_form::SEND_DELAY).await },
            |()| Message::Form(contact_form::Message::SendCompleted),
        ),
    }
}

/// Builds the task that moves the page scrollable to an absolute offset.
///
/// The scrollable operation API addresses positions relatively, so the
/// offset is mapped against the reachable scroll range.
pub fn scroll_task(geometry: &PageGeometry, offset: f32) -> Task<Message> {
    let max = geometry.max_scroll();
    let y = if max > 0.0 {
        (offset / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(view::page_scroll_id(), RelativeOffset { x: 0.0, y })
}

/// Reacts to a scroll offset change: header shadow, scroll-spy, reveals.
pub fn handle_page_scrolled(ctx: &mut UpdateContext<'_>, scroll_y: f32) {
    *ctx.scroll_y = scroll_y;
    *ctx.header_elevated = scroll_y > header::ELEVATION_THRESHOLD;
    *ctx.active_section = spy::active_section(ctx.geometry, scroll_y);
    check_reveals(ctx);
}

/// Recomputes geometry and layout mode after a window resize.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.geometry = PageGeometry::new(size, ctx.content);
    ctx.header.compact = size.width < header::COMPACT_WIDTH;
    if !ctx.header.compact {
        ctx.header.menu_open = false;
    }
    // A taller window can expose sections that were off-screen before.
    *ctx.active_section = spy::active_section(ctx.geometry, *ctx.scroll_y);
    check_reveals(ctx);
}

/// Arms the one-shot reveals whose visibility threshold is crossed.
///
/// Both reveals are latches: once `Some`, they are never reset, so repeated
/// crossings never replay an animation.
pub fn check_reveals(ctx: &mut UpdateContext<'_>) {
    if ctx.skills_anim.is_none()
        && spy::reveal_crossed(ctx.geometry, Section::Skills, *ctx.scroll_y)
    {
        let counters = ctx
            .content
            .skills
            .iter()
            .map(|skill| {
                if ctx.reduce_motion {
                    CountUp::instant(skill.level_percent())
                } else {
                    CountUp::new(skill.level_percent())
                }
            })
            .collect();
        *ctx.skills_anim = Some(counters);
        *ctx.last_tick = None;
    }

    if ctx.stagger.is_none()
        && spy::reveal_crossed(ctx.geometry, Section::Projects, *ctx.scroll_y)
    {
        let count = ctx.content.projects.len();
        *ctx.stagger = Some(if ctx.reduce_motion {
            Stagger::instant(count)
        } else {
            Stagger::new(count)
        });
        *ctx.last_tick = None;
    }
}
