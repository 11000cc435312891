//! Station identity.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named station in the network.
///
/// Stations carry no metadata beyond their name. Equality and hashing are
/// by exact string match: `"Bishan"`, `"bishan"` and `" Bishan"` are three
/// different stations. Trimming is the loader's job, not this type's.
///
/// # Examples
///
/// ```
/// use route_server::domain::Station;
///
/// let bishan = Station::new("Bishan");
/// assert_eq!(bishan.as_str(), "Bishan");
/// assert_ne!(bishan, Station::new("bishan"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    /// Create a station from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the station, returning its name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({:?})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
