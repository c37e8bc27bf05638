// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen: the sticky header above the scrollable page body, with the
//! toast overlay stacked on top.

use super::Message;
use crate::anim::{CountUp, Stagger};
use crate::content::Portfolio;
use crate::i18n::I18n;
use crate::page::{PageGeometry, Section};
use crate::ui::contact_form::State as FormState;
use crate::ui::header::{self, State as HeaderState};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections;
use crate::ui::theming::ColorScheme;
use iced::widget::{scrollable, Column, Id, Stack};
use iced::{Element, Length};

/// Identifier of the page scrollable, shared between the view and the
/// smooth-scroll tasks.
pub fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Portfolio,
    pub geometry: &'a PageGeometry,
    pub header: &'a HeaderState,
    pub active_section: Option<Section>,
    pub header_elevated: bool,
    pub skills_anim: Option<&'a [CountUp]>,
    pub stagger: Option<&'a Stagger>,
    pub form: &'a FormState,
    pub scheme: &'a ColorScheme,
    pub notifications: &'a Manager,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        state: ctx.header,
        sections: ctx.geometry.sections().collect(),
        active: ctx.active_section,
        elevated: ctx.header_elevated,
        brand: &ctx.content.profile.name,
    })
    .map(Message::Header);

    let body = sections::page(sections::ViewContext {
        i18n: ctx.i18n,
        content: ctx.content,
        geometry: ctx.geometry,
        skills_anim: ctx.skills_anim,
        stagger: ctx.stagger,
        form: ctx.form,
        scheme: ctx.scheme,
    })
    .map(Message::Form);

    let page = scrollable(body)
        .id(page_scroll_id())
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Column::new()
        .push(header_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(toasts).into()
}
