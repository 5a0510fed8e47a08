// SPDX-License-Identifier: MPL-2.0
//! Domain types with no UI dependencies.
//!
//! - [`loyalty`]: coffee shops, their coordinates and loyalty cards

pub mod loyalty;
