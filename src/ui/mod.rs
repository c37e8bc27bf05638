// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`header`] - Sticky header with nav links, compact menu, scroll shadow
//! - [`sections`] - The scrollable page body (hero, skills, projects, contact)
//! - [`contact_form`] - Form state machine with validation and simulated send
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod contact_form;
pub mod design_tokens;
pub mod header;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
