// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Shop map with the wallet sheet and the floating menu.
    #[default]
    Map,
    /// Illustration backdrop with the wallet sheet only.
    Wallet,
}

impl Screen {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Screen::Map => Screen::Wallet,
            Screen::Wallet => Screen::Map,
        }
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "map" => Ok(Screen::Map),
            "wallet" => Ok(Screen::Wallet),
            other => Err(format!("unknown screen: {other}")),
        }
    }
}
