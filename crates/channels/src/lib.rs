//! Channel registry for the dispatch notification service.
//!
//! The set of valid delivery channels is closed and known at compile time.
//! Adding a destination is a code change, which keeps the channel space
//! auditable and stops a typo'd name from silently posting to an unknown
//! server route.

use {
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// A named delivery destination on the notification server.
///
/// The wire form is the lowercase name (`"sugar"`, `"mbank"`, `"lab"`,
/// `"commits"`); any other string is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sugar,
    MBank,
    Lab,
    Commits,
}

impl Channel {
    /// Every registered channel, in declared order.
    pub const ALL: [Channel; 4] = [
        Channel::Sugar,
        Channel::MBank,
        Channel::Lab,
        Channel::Commits,
    ];

    /// Complete fixed list of valid channels.
    #[must_use]
    pub fn all() -> &'static [Channel] {
        &Self::ALL
    }

    /// Canonical wire name of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sugar => "sugar",
            Self::MBank => "mbank",
            Self::Lab => "lab",
            Self::Commits => "commits",
        }
    }

    /// True iff `name` is the wire form of a registered channel.
    ///
    /// Pure membership test; no I/O, no side effects.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == name)
    }

    /// Wire names of every registered channel, in declared order.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = InvalidChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidChannel {
                name: s.to_string(),
            })
    }
}

/// A channel name that is not in the registry.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid channel: {name}; must be one of: {}", Channel::names().join(", "))]
pub struct InvalidChannel {
    /// The rejected name, verbatim.
    pub name: String,
}
