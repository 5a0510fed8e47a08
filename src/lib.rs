// SPDX-License-Identifier: MPL-2.0
//! `coffee_wallet` is a coffee-shop loyalty wallet built with the Iced GUI
//! framework.
//!
//! A map of shops sits under a draggable wallet sheet holding the loyalty
//! cards and a QR code. The sheet position logic lives in
//! [`ui::sheet::SheetController`] and is independent of rendering.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
