// SPDX-License-Identifier: MPL-2.0
//! Sticky header with the page navigation.
//!
//! In wide windows the nav links sit in a row next to the brand name. Below
//! [`COMPACT_WIDTH`] the links collapse behind a menu toggle with an expanded
//! flag, and picking a link closes the menu again before the page scrolls.

use crate::i18n::I18n;
use crate::page::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Window width below which the nav collapses behind the menu toggle.
pub const COMPACT_WIDTH: f32 = 720.0;

/// Scroll offset past which the header casts a shadow.
pub const ELEVATION_THRESHOLD: f32 = 20.0;

/// Header state: layout mode and whether the compact menu is expanded.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub compact: bool,
    pub menu_open: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the page to the given section.
    Navigate(Section),
}

/// Process a header message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::LinkPressed(section) => {
            // Close the compact menu and reset its expanded flag before the
            // scroll starts.
            state.menu_open = false;
            Event::Navigate(section)
        }
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Sections actually present on the page, in page order.
    pub sections: Vec<Section>,
    /// Section whose link is highlighted by the scroll-spy.
    pub active: Option<Section>,
    /// Whether the header casts a shadow (page is scrolled).
    pub elevated: bool,
    /// Brand text on the left.
    pub brand: &'a str,
}

/// Render the header bar, plus the dropdown when the compact menu is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_bar(&ctx));

    if ctx.state.compact && ctx.state.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_owned()).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .push(brand)
        .push(iced::widget::space::horizontal());

    if ctx.state.compact {
        let toggle = button(Text::new(ctx.i18n.tr("nav-menu-toggle")))
            .on_press(Message::ToggleMenu)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::menu_item);
        row = row.push(toggle);
    } else {
        for section in &ctx.sections {
            row = row.push(build_link(ctx, *section));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header(ctx.elevated))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(spacing::XXS);

    for section in &ctx.sections {
        let item = button(Text::new(ctx.i18n.tr(section.nav_key())))
            .on_press(Message::LinkPressed(*section))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::menu_item);
        menu = menu.push(item);
    }

    Container::new(menu)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::menu_panel)
        .into()
}

fn build_link<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let active = ctx.active == Some(section);

    button(Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY))
        .on_press(Message::LinkPressed(section))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_link(active))
        .into()
}
