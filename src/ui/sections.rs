// SPDX-License-Identifier: MPL-2.0
//! The scrollable page body: hero, skills, projects, and contact sections.
//!
//! Every section is rendered inside a fixed-height container whose height
//! comes from [`PageGeometry`], so the pixels on screen and the scroll math
//! agree by construction. Only the contact form emits messages; the rest of
//! the page is static content plus animation state.

use crate::anim::{CountUp, Stagger};
use crate::content::{Portfolio, Project, Skill};
use crate::i18n::I18n;
use crate::page::{geometry, PageGeometry, Section};
use crate::ui::contact_form::{self, State as FormState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Portfolio,
    pub geometry: &'a PageGeometry,
    /// Percent-label animations, one per skill; `None` until the skills
    /// section has revealed.
    pub skills_anim: Option<&'a [CountUp]>,
    /// Card cascade; `None` until the projects section has revealed.
    pub stagger: Option<&'a Stagger>,
    pub form: &'a FormState,
    pub scheme: &'a ColorScheme,
}

/// Render the whole page body, top to bottom.
pub fn page<'a>(ctx: ViewContext<'a>) -> Element<'a, contact_form::Message> {
    let mut column = Column::new().width(Length::Fill);

    for section in ctx.geometry.sections() {
        let height = ctx
            .geometry
            .height_of(section)
            .unwrap_or(geometry::CONTACT_HEIGHT);
        let body: Element<'a, contact_form::Message> = match section {
            Section::About => hero(&ctx),
            Section::Skills => skills(&ctx),
            Section::Projects => projects(&ctx),
            Section::Contact => contact(&ctx),
        };

        column = column.push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(height)),
        );
    }

    column.into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, contact_form::Message> {
    let profile = &ctx.content.profile;

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(profile.name.clone()).size(typography::TITLE_XL))
        .push(Text::new(profile.tagline.clone()).size(typography::BODY_LG));

    let mut details = Vec::new();
    if let Some(location) = &profile.location {
        details.push(location.clone());
    }
    if let Some(email) = &profile.email {
        details.push(email.clone());
    }
    if !details.is_empty() {
        let muted = ctx.scheme.text_muted;
        column = column.push(
            Text::new(details.join(" · "))
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style { color: Some(muted) }),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, contact_form::Message> {
    Container::new(Text::new(label).size(typography::TITLE_LG))
        .height(Length::Fixed(geometry::TITLE_BLOCK))
        .into()
}

fn skills<'a>(ctx: &ViewContext<'a>) -> Element<'a, contact_form::Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .push(section_title(ctx.i18n.tr("skills-title")));

    for (index, skill) in ctx.content.skills.iter().enumerate() {
        let anim = ctx.skills_anim.and_then(|anims| anims.get(index));
        column = column.push(skill_row(skill, anim));
    }

    Container::new(column)
        .padding([geometry::SECTION_PADDING, spacing::LG])
        .width(Length::Fill)
        .into()
}

fn skill_row<'a>(
    skill: &Skill,
    anim: Option<&CountUp>,
) -> Element<'a, contact_form::Message> {
    // The fill jumps straight to its target on reveal; only the label counts.
    let fill_percent = if anim.is_some() {
        skill.level_percent()
    } else {
        0
    };
    let label_percent = anim.map(CountUp::display).unwrap_or(0);

    let caption = Row::new()
        .push(Text::new(skill.name.clone()).size(typography::BODY))
        .push(iced::widget::space::horizontal())
        .push(Text::new(format!("{label_percent}%")).size(typography::BODY));

    let track: Element<'a, contact_form::Message> = match fill_percent {
        0 => Container::new(Space::new().width(Length::Fill).height(0.0))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_TRACK))
            .style(styles::container::progress_track)
            .into(),
        100 => Container::new(
            Container::new(Space::new().width(Length::Fill).height(0.0))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PROGRESS_TRACK))
                .style(styles::container::progress_fill),
        )
        .width(Length::Fill)
        .style(styles::container::progress_track)
        .into(),
        percent => {
            let fill = Container::new(Space::new().width(Length::Fill).height(0.0))
                .width(Length::FillPortion(percent as u16))
                .height(Length::Fixed(sizing::PROGRESS_TRACK))
                .style(styles::container::progress_fill);
            let rest = Space::new().width(Length::FillPortion(100 - percent as u16)).height(0.0);

            Container::new(Row::new().push(fill).push(rest))
                .width(Length::Fill)
                .style(styles::container::progress_track)
                .into()
        }
    };

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(caption)
            .push(track),
    )
    .height(Length::Fixed(geometry::SKILL_ROW))
    .width(Length::Fill)
    .into()
}

fn projects<'a>(ctx: &ViewContext<'a>) -> Element<'a, contact_form::Message> {
    let cols = geometry::columns(ctx.geometry.window().width);

    let mut column = Column::new()
        .width(Length::Fill)
        .push(section_title(ctx.i18n.tr("projects-title")));

    for (row_index, chunk) in ctx.content.projects.chunks(cols).enumerate() {
        let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
        for (col_index, project) in chunk.iter().enumerate() {
            let index = row_index * cols + col_index;
            let visible = ctx
                .stagger
                .map(|stagger| stagger.is_visible(index))
                .unwrap_or(false);
            row = row.push(project_card(project, visible, ctx.scheme));
        }
        // Pad the last row so its cards keep the same width as full rows.
        for _ in chunk.len()..cols {
            row = row.push(Space::new().width(Length::FillPortion(1)).height(0.0));
        }

        column = column.push(
            Container::new(row).height(Length::Fixed(
                geometry::CARD_HEIGHT + geometry::CARD_GUTTER,
            )),
        );
    }

    Container::new(column)
        .padding([geometry::SECTION_PADDING, spacing::LG])
        .width(Length::Fill)
        .into()
}

fn project_card<'a>(
    project: &Project,
    visible: bool,
    scheme: &ColorScheme,
) -> Element<'a, contact_form::Message> {
    if !visible {
        // Reserve the slot; the card cascades in later.
        return Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::FillPortion(1))
            .height(Length::Fixed(geometry::CARD_HEIGHT))
            .style(styles::container::card_hidden)
            .into();
    }

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(project.title.clone()).size(typography::TITLE_MD))
        .push(Text::new(project.summary.clone()).size(typography::BODY));

    if !project.tags.is_empty() {
        let mut tags = Row::new().spacing(spacing::XXS);
        let muted = scheme.text_muted;
        for tag in &project.tags {
            tags = tags.push(
                Container::new(
                    Text::new(tag.clone())
                        .size(typography::CAPTION)
                        .style(move |_theme: &Theme| text::Style { color: Some(muted) }),
                )
                .padding([spacing::XXS / 2.0, spacing::XS])
                .style(styles::container::tag),
            );
        }
        body = body.push(tags);
    }

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(geometry::CARD_HEIGHT))
        .style(styles::container::card)
        .into()
}

fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, contact_form::Message> {
    let muted = ctx.scheme.text_muted;

    let form = contact_form::view(contact_form::ViewContext {
        i18n: ctx.i18n,
        state: ctx.form,
        scheme: ctx.scheme,
    });

    let year = chrono::Local::now().year();
    let footer = Text::new(format!(
        "© {year} {} · {}",
        ctx.content.profile.name,
        ctx.i18n.tr("footer-rights")
    ))
    .size(typography::CAPTION)
    .style(move |_theme: &Theme| text::Style { color: Some(muted) });

    let column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(section_title(ctx.i18n.tr("contact-title")))
        .push(
            Text::new(ctx.i18n.tr("contact-intro"))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style { color: Some(muted) }),
        )
        .push(form)
        .push(Space::new().width(0.0).height(Length::Fill))
        .push(Container::new(footer).align_x(Horizontal::Center).width(Length::Fill));

    Container::new(column)
        .padding([geometry::SECTION_PADDING, spacing::LG])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim;
    use iced::Size;

    fn context_parts() -> (I18n, Portfolio, ColorScheme, FormState) {
        (
            I18n::default(),
            Portfolio::default(),
            ColorScheme::dark(),
            FormState::new(),
        )
    }

    #[test]
    fn page_renders_before_any_reveal() {
        let (i18n, content, scheme, form) = context_parts();
        let geometry = PageGeometry::new(Size::new(1000.0, 764.0), &content);
        let _element = page(ViewContext {
            i18n: &i18n,
            content: &content,
            geometry: &geometry,
            skills_anim: None,
            stagger: None,
            form: &form,
            scheme: &scheme,
        });
    }

    #[test]
    fn page_renders_with_running_animations() {
        let (i18n, content, scheme, form) = context_parts();
        let geometry = PageGeometry::new(Size::new(1000.0, 764.0), &content);
        let mut anims: Vec<CountUp> = content
            .skills
            .iter()
            .map(|s| CountUp::new(s.level_percent()))
            .collect();
        for a in &mut anims {
            a.advance(anim::COUNT_STEP * 10);
        }
        let mut stagger = Stagger::new(content.projects.len());
        stagger.advance(anim::STAGGER_STEP);

        let _element = page(ViewContext {
            i18n: &i18n,
            content: &content,
            geometry: &geometry,
            skills_anim: Some(&anims),
            stagger: Some(&stagger),
            form: &form,
            scheme: &scheme,
        });
    }

    #[test]
    fn page_renders_without_optional_sections() {
        let (i18n, mut content, scheme, form) = context_parts();
        content.skills.clear();
        content.projects.clear();
        let geometry = PageGeometry::new(Size::new(500.0, 400.0), &content);
        let _element = page(ViewContext {
            i18n: &i18n,
            content: &content,
            geometry: &geometry,
            skills_anim: None,
            stagger: None,
            form: &form,
            scheme: &scheme,
        });
    }
}
