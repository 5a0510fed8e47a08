// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Info and success toasts disappear after 3 s, warnings after 5 s, errors
//! stay until dismissed. At most three are shown at once; the rest wait in a
//! queue.
//!
//! - [`notification`] - a toast and its severity
//! - [`manager`] - visible slots and queue
//! - [`toast`] - rendering

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
