// SPDX-License-Identifier: MPL-2.0
//! `folio` is a single-page portfolio presenter built with the Iced GUI
//! framework.
//!
//! It renders a personal portfolio as one smoothly scrolling page (hero,
//! skills, projects, contact) with scroll-spy navigation, scroll-triggered
//! animations, and a validated contact form, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod anim;
pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod page;
pub mod ui;
