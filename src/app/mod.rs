// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page behaviors.
//!
//! The `App` struct wires together the independent page behaviors (smooth
//! scroll, scroll-spy, reveals, contact form, header shadow) and translates
//! messages into side effects like scroll tasks and the simulated send. The
//! behaviors share no state with each other; they communicate only through
//! the fields held here.

pub mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::anim::{CountUp, ScrollTween, Stagger};
use crate::config;
use crate::content::{self, Portfolio};
use crate::i18n::I18n;
use crate::page::{PageGeometry, Section};
use crate::ui::contact_form;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 764;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state bridging page behaviors, localization, and
/// user preferences.
pub struct App {
    pub i18n: I18n,
    content: Portfolio,
    theme_mode: ThemeMode,
    /// Whether reveal animations snap to their final state.
    reduce_motion: bool,
    scheme: ColorScheme,
    header: header::State,
    form: contact_form::State,
    geometry: PageGeometry,
    /// Current vertical offset of the page scrollable.
    scroll_y: f32,
    /// Section highlighted by the scroll-spy.
    active_section: Option<Section>,
    header_elevated: bool,
    /// Percent-label animations; `Some` once the skills reveal has fired.
    skills_anim: Option<Vec<CountUp>>,
    /// Card cascade; `Some` once the projects reveal has fired.
    stagger: Option<Stagger>,
    /// In-flight smooth scroll, if any.
    scroll_tween: Option<ScrollTween>,
    /// Baseline of the tick delta measurement.
    last_tick: Option<Instant>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("scroll_y", &self.scroll_y)
            .field("active_section", &self.active_section)
            .field("form_status", &self.form.status())
            .finish()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let content = Portfolio::default();
        let geometry = PageGeometry::new(default_window_size(), &content);
        Self {
            i18n: I18n::default(),
            content,
            theme_mode: ThemeMode::System,
            reduce_motion: false,
            scheme: ColorScheme::for_mode(ThemeMode::System),
            header: header::State::new(),
            form: contact_form::State::new(),
            geometry,
            scroll_y: 0.0,
            active_section: Some(Section::About),
            header_elevated: false,
            skills_anim: None,
            stagger: None,
            scroll_tween: None,
            last_tick: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from config, CLI flags, and the
    /// portfolio content document.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (portfolio, content_warning) =
            content::load(flags.content_path.as_ref().map(PathBuf::from));

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            reduce_motion: config.motion.reduce_motion.unwrap_or(false),
            scheme: ColorScheme::for_mode(config.general.theme_mode),
            ..Self::default()
        };
        app.content = portfolio;
        app.geometry = PageGeometry::new(default_window_size(), &app.content);
        app.header.compact = (WINDOW_DEFAULT_WIDTH as f32) < header::COMPACT_WIDTH;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = content_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // Sections can already satisfy their reveal threshold in a tall
        // window before any scrolling happens.
        update::handle_page_scrolled(&mut app.update_context(), 0.0);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {}", self.content.profile.name, app_name)
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if self.theme_mode.is_dark() {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.animations_active(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut self.update_context(), header_message)
            }
            Message::Form(form_message) => {
                update::handle_form_message(&mut self.update_context(), form_message)
            }
            Message::PageScrolled(offset) => {
                update::handle_page_scrolled(&mut self.update_context(), offset);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut self.update_context(), size);
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    /// Advances every running animation by the time since the previous tick
    /// and drives the scrollable while a smooth scroll is in flight.
    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous),
            // First tick of an animation epoch only sets the baseline.
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);

        if let Some(counters) = &mut self.skills_anim {
            for counter in counters.iter_mut() {
                counter.advance(dt);
            }
        }
        if let Some(stagger) = &mut self.stagger {
            stagger.advance(dt);
        }

        self.notifications.tick();

        let mut scrolled_to = None;
        if let Some(tween) = &mut self.scroll_tween {
            tween.advance(dt);
            scrolled_to = Some(tween.value());
            if tween.is_done() {
                self.scroll_tween = None;
            }
        }

        if let Some(offset) = scrolled_to {
            // Keep the model in sync immediately; the widget catches up via
            // the task.
            update::handle_page_scrolled(&mut self.update_context(), offset);
            return update::scroll_task(&self.geometry, offset);
        }

        Task::none()
    }

    /// Whether any animation still needs ticks at animation cadence.
    fn animations_active(&self) -> bool {
        self.scroll_tween.is_some()
            || self
                .skills_anim
                .as_ref()
                .is_some_and(|counters| counters.iter().any(|c| !c.is_done()))
            || self.stagger.as_ref().is_some_and(|s| !s.is_done())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            header: &mut self.header,
            form: &mut self.form,
            geometry: &mut self.geometry,
            content: &self.content,
            scroll_y: &mut self.scroll_y,
            active_section: &mut self.active_section,
            header_elevated: &mut self.header_elevated,
            skills_anim: &mut self.skills_anim,
            stagger: &mut self.stagger,
            scroll_tween: &mut self.scroll_tween,
            last_tick: &mut self.last_tick,
            reduce_motion: self.reduce_motion,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            content: &self.content,
            geometry: &self.geometry,
            header: &self.header,
            active_section: self.active_section,
            header_elevated: self.header_elevated,
            skills_anim: self.skills_anim.as_deref(),
            stagger: self.stagger.as_ref(),
            form: &self.form,
            scheme: &self.scheme,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{COUNT_DURATION, SCROLL_DURATION, STAGGER_STEP};
    use crate::page::geometry::SCROLL_GAP;
    use crate::ui::contact_form::{Rejection, Status};
    use crate::ui::design_tokens::sizing;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    /// Drives a complete animation frame: a baseline tick followed by one
    /// carrying the given elapsed time.
    fn advance(app: &mut App, elapsed: Duration) {
        let t0 = Instant::now();
        let _ = app.update(Message::Tick(t0));
        let _ = app.update(Message::Tick(t0 + elapsed));
    }

    #[test]
    fn new_starts_at_top_of_page() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.scroll_y, 0.0);
            assert_eq!(app.active_section, Some(Section::About));
            assert!(!app.header_elevated);
            assert_eq!(app.form.status(), Status::Idle);
            // The hero fills the viewport, so nothing below has revealed yet.
            assert!(app.skills_anim.is_none());
            assert!(app.stagger.is_none());
        });
    }

    #[test]
    fn corrupted_config_surfaces_a_warning_toast() {
        with_temp_config_dir(|config_root| {
            fs::write(config_root.join("settings.toml"), "not = valid = toml")
                .expect("write corrupt config");

            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn scrolling_past_threshold_elevates_header() {
        let mut app = App::default();

        let _ = app.update(Message::PageScrolled(21.0));
        assert!(app.header_elevated);

        let _ = app.update(Message::PageScrolled(20.0));
        assert!(!app.header_elevated);

        let _ = app.update(Message::PageScrolled(0.0));
        assert!(!app.header_elevated);
    }

    #[test]
    fn nav_link_starts_smooth_scroll_toward_section_top() {
        let mut app = App::default();

        let _ = app.update(Message::Header(header::Message::LinkPressed(
            Section::Skills,
        )));

        let tween = app.scroll_tween.as_ref().expect("tween should start");
        let expected = app.geometry.offset_of(Section::Skills).unwrap()
            - (sizing::HEADER_HEIGHT + SCROLL_GAP);
        assert_eq!(app.geometry.scroll_target(Section::Skills), Some(expected));
        assert_eq!(tween.value(), 0.0);
        assert!(app.animations_active());

        advance(&mut app, SCROLL_DURATION);

        assert!(app.scroll_tween.is_none());
        assert_eq!(app.scroll_y, expected);
        assert_eq!(app.active_section, Some(Section::Skills));
    }

    #[test]
    fn nav_link_to_absent_section_is_a_no_op() {
        let mut app = App::default();
        app.content.projects.clear();
        app.geometry = PageGeometry::new(default_window_size(), &app.content);

        let _ = app.update(Message::Header(header::Message::LinkPressed(
            Section::Projects,
        )));

        assert!(app.scroll_tween.is_none());
        assert_eq!(app.scroll_y, 0.0);
    }

    #[test]
    fn compact_menu_closes_before_navigation() {
        let mut app = App::default();
        app.header.compact = true;
        app.header.menu_open = true;

        let _ = app.update(Message::Header(header::Message::LinkPressed(
            Section::Contact,
        )));

        assert!(!app.header.menu_open);
        assert!(app.scroll_tween.is_some());
    }

    #[test]
    fn skills_reveal_arms_when_section_becomes_visible() {
        let mut app = App::default();
        let target = app.geometry.scroll_target(Section::Skills).unwrap();

        let _ = app.update(Message::PageScrolled(target));

        let counters = app.skills_anim.as_ref().expect("reveal should arm");
        assert_eq!(counters.len(), app.content.skills.len());
        assert!(counters.iter().all(|c| c.display() == 0));
    }

    #[test]
    fn percent_labels_reach_targets_after_full_duration() {
        let mut app = App::default();
        let target = app.geometry.scroll_target(Section::Skills).unwrap();
        let _ = app.update(Message::PageScrolled(target));

        advance(&mut app, COUNT_DURATION);

        let counters = app.skills_anim.as_ref().unwrap();
        let expected: Vec<u8> = app
            .content
            .skills
            .iter()
            .map(|s| s.level_percent())
            .collect();
        let displays: Vec<u8> = counters.iter().map(CountUp::display).collect();
        assert_eq!(displays, expected);
        assert!(counters.iter().all(CountUp::is_done));
    }

    #[test]
    fn reveal_fires_at_most_once_across_repeated_crossings() {
        let mut app = App::default();
        let target = app.geometry.scroll_target(Section::Skills).unwrap();

        let _ = app.update(Message::PageScrolled(target));
        advance(&mut app, COUNT_DURATION);

        // Scroll away and back across the threshold.
        let _ = app.update(Message::PageScrolled(0.0));
        let _ = app.update(Message::PageScrolled(target));

        let counters = app.skills_anim.as_ref().unwrap();
        assert!(
            counters.iter().all(CountUp::is_done),
            "re-crossing must not restart finished counters"
        );
    }

    #[test]
    fn project_cards_cascade_in_index_order() {
        let mut app = App::default();
        let target = app.geometry.scroll_target(Section::Projects).unwrap();
        let _ = app.update(Message::PageScrolled(target));

        let stagger = app.stagger.as_ref().expect("cascade should arm");
        assert!(stagger.is_visible(0));
        assert!(!stagger.is_visible(1));

        advance(&mut app, STAGGER_STEP);
        let stagger = app.stagger.as_ref().unwrap();
        assert!(stagger.is_visible(1));
        assert!(!stagger.is_visible(2));

        let project_count = app.content.projects.len() as u32;
        advance(
            &mut app,
            STAGGER_STEP * project_count,
        );
        let stagger = app.stagger.as_ref().unwrap();
        assert!(stagger.is_done());
    }

    #[test]
    fn resize_reevaluates_reveal_thresholds() {
        let mut app = App::default();
        // One-column layout stretches the projects section, keeping its
        // visible fraction under the reveal threshold at this offset.
        let _ = app.update(Message::WindowResized(Size::new(500.0, 764.0)));
        let _ = app.update(Message::PageScrolled(492.0));
        assert!(app.skills_anim.is_some());
        assert!(app.stagger.is_none());

        // Three columns shrink the section; the same offset now shows more
        // than the threshold and the cascade arms without further scrolling.
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 764.0)));
        assert!(app.stagger.is_some());
    }

    #[test]
    fn resize_toggles_compact_mode_and_closes_menu() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized(Size::new(600.0, 764.0)));
        assert!(app.header.compact);

        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert!(app.header.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(1100.0, 764.0)));
        assert!(!app.header.compact);
        assert!(!app.header.menu_open);
    }

    #[test]
    fn valid_form_submission_flows_to_sent_and_clears_fields() {
        let mut app = App::default();
        let _ = app.update(Message::Form(contact_form::Message::NameChanged(
            "Adi".into(),
        )));
        let _ = app.update(Message::Form(contact_form::Message::EmailChanged(
            "adi@example.com".into(),
        )));
        let _ = app.update(Message::Form(contact_form::Message::MessageChanged(
            "Halo!".into(),
        )));

        let _ = app.update(Message::Form(contact_form::Message::Submit));
        assert_eq!(app.form.status(), Status::Sending);

        // Simulate the send delay elapsing.
        let _ = app.update(Message::Form(contact_form::Message::SendCompleted));
        assert_eq!(app.form.status(), Status::Sent);
        assert!(app.form.name.is_empty());
        assert!(app.form.email.is_empty());
        assert!(app.form.message.is_empty());
    }

    #[test]
    fn honeypot_content_rejects_submission_as_spam() {
        let mut app = App::default();
        let _ = app.update(Message::Form(contact_form::Message::NameChanged(
            "Adi".into(),
        )));
        let _ = app.update(Message::Form(contact_form::Message::EmailChanged(
            "adi@example.com".into(),
        )));
        let _ = app.update(Message::Form(contact_form::Message::MessageChanged(
            "Halo!".into(),
        )));
        let _ = app.update(Message::Form(contact_form::Message::WebsiteChanged(
            "filled-by-a-bot".into(),
        )));

        let _ = app.update(Message::Form(contact_form::Message::Submit));
        assert_eq!(app.form.status(), Status::Rejected(Rejection::Spam));
    }

    #[test]
    fn reduce_motion_snaps_reveals_and_scrolls() {
        let mut app = App::default();
        app.reduce_motion = true;

        let target = app.geometry.scroll_target(Section::Skills).unwrap();
        let _ = app.update(Message::Header(header::Message::LinkPressed(
            Section::Skills,
        )));

        // No tween; the scroll and reveal land immediately.
        assert!(app.scroll_tween.is_none());
        assert_eq!(app.scroll_y, target);
        let counters = app.skills_anim.as_ref().expect("reveal should arm");
        assert!(counters.iter().all(CountUp::is_done));
    }

    #[test]
    fn animations_go_quiet_after_finishing() {
        let mut app = App::default();
        assert!(!app.animations_active());

        let target = app.geometry.scroll_target(Section::Projects).unwrap();
        let _ = app.update(Message::PageScrolled(target));
        assert!(app.animations_active());

        advance(&mut app, COUNT_DURATION + SCROLL_DURATION);
        assert!(!app.animations_active());
    }

    #[test]
    fn title_combines_profile_name_and_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "Adi Pratama - Folio");
    }

    #[test]
    fn explicit_theme_modes_map_directly() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn view_renders_in_default_state() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn view_renders_with_running_animations_and_toasts() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::warning("test-key"));
        let target = app.geometry.scroll_target(Section::Projects).unwrap();
        let _ = app.update(Message::PageScrolled(target));
        advance(&mut app, STAGGER_STEP);

        let _element = app.view();
    }
}
