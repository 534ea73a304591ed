// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Execution mode of a [`ZoneParser`](crate::ZoneParser).

use std::env;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::ParseZoneError;

/// Environment variable read by [`ExecutionMode::from_env`].
pub const MODE_VAR: &str = "PARSE_ZONE_MODE";

/// How a parser treats values that are not strings.
///
/// In [`Strict`](ExecutionMode::Strict) mode such a value is coerced to its
/// string form before parsing. In [`Lenient`](ExecutionMode::Lenient) mode
/// parsing goes ahead best-effort on that same form. Both modes log a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    /// Production.
    Strict,
    #[default]
    Lenient,
}

impl ExecutionMode {
    /// Read the mode from `PARSE_ZONE_MODE`. An unset or unknown value is
    /// [`Lenient`](ExecutionMode::Lenient).
    pub fn from_env() -> Self {
        match env::var(MODE_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{e}, falling back to {}", ExecutionMode::default());
                ExecutionMode::default()
            }),
            Err(_) => ExecutionMode::default(),
        }
    }

    pub fn is_strict(self) -> bool {
        self == ExecutionMode::Strict
    }
}

impl FromStr for ExecutionMode {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "strict" => Ok(ExecutionMode::Strict),
            "development" | "test" | "lenient" | "" => Ok(ExecutionMode::Lenient),
            _ => Err(ParseZoneError::UnknownMode(s.to_owned())),
        }
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Strict => write!(f, "strict"),
            ExecutionMode::Lenient => write!(f, "lenient"),
        }
    }
}
