// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the "state down, messages up" pattern: each exposes a
//! `State`, a `Message`, an `Event` reported to the parent, and a view.
//!
//! # Components
//!
//! - [`sheet`] - draggable wallet sheet with loyalty cards and QR code
//! - [`floating_menu`] - radial menu of placeholder features
//! - [`map`] - stylized shop map with selectable pins
//! - [`modal_sheet`] - shop detail and "coming soon" sheets
//! - [`top_bar`] - profile and settings buttons
//! - [`notifications`] - toast notifications
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - springs and interpolation
//! - [`styles`] - centralized widget styles
//! - [`design_tokens`] - colors, spacing, sizing
//! - [`theme`] - semantic colors
//! - [`theming`] - light/dark/system theme mode
//! - [`icons`] - embedded SVG icons

pub mod animation;
pub mod design_tokens;
pub mod floating_menu;
pub mod icons;
pub mod map;
pub mod modal_sheet;
pub mod notifications;
pub mod sheet;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod top_bar;
