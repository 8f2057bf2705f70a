//! LwM2M operation commands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifier::{Identifier, IdentifierEntry};

/// Device management and reporting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Command {
    #[serde(rename = "read")]
    Read = 0,
    #[serde(rename = "write")]
    Write = 1,
    #[serde(rename = "discover")]
    Discover = 2,
    #[serde(rename = "writeAttrs")]
    WriteAttrs = 3,
    #[serde(rename = "execute")]
    Execute = 4,
    #[serde(rename = "observe")]
    Observe = 5,
    #[serde(rename = "notify")]
    Notify = 6,
    #[serde(rename = "ping")]
    Ping = 7,
    #[serde(rename = "identify")]
    Identify = 8,
    #[serde(rename = "unknown")]
    Unknown = 255,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Read,
        Command::Write,
        Command::Discover,
        Command::WriteAttrs,
        Command::Execute,
        Command::Observe,
        Command::Notify,
        Command::Ping,
        Command::Identify,
        Command::Unknown,
    ];

    /// Canonical key.
    pub const fn key(self) -> &'static str {
        match self {
            Command::Read => "read",
            Command::Write => "write",
            Command::Discover => "discover",
            Command::WriteAttrs => "writeAttrs",
            Command::Execute => "execute",
            Command::Observe => "observe",
            Command::Notify => "notify",
            Command::Ping => "ping",
            Command::Identify => "identify",
            Command::Unknown => "unknown",
        }
    }

    /// Numeric command code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.key() == key)
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| u32::from(cmd.code()) == code)
    }

    /// Look up a command by key or code, following the dictionary convention
    /// for all-digit keys.
    pub fn lookup(id: &Identifier) -> Option<Self> {
        match id {
            Identifier::Numeric(n) => Self::from_code(*n),
            Identifier::Key(key) => {
                Self::from_key(key).or_else(|| id.as_number().and_then(Self::from_code))
            }
        }
    }

    pub fn entry(self) -> IdentifierEntry {
        IdentifierEntry::new(self.key(), self.code().into())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_bidirectional() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_key(cmd.key()), Some(cmd));
            assert_eq!(Command::from_code(cmd.code().into()), Some(cmd));
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(Command::Read.code(), 0);
        assert_eq!(Command::WriteAttrs.code(), 3);
        assert_eq!(Command::Identify.code(), 8);
        assert_eq!(Command::Unknown.code(), 255);
        assert_eq!(Command::from_code(9), None);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Command::lookup(&Identifier::from("observe")), Some(Command::Observe));
        assert_eq!(Command::lookup(&Identifier::from(4)), Some(Command::Execute));
        assert_eq!(Command::lookup(&Identifier::from("7")), Some(Command::Ping));
        assert_eq!(Command::lookup(&Identifier::from("Observe")), None);
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Command::WriteAttrs).unwrap();
        assert_eq!(json, r#""writeAttrs""#);
        let cmd: Command = serde_json::from_str(r#""notify""#).unwrap();
        assert_eq!(cmd, Command::Notify);
    }
}
