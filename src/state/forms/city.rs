//! Closed set of selectable cities

use crate::error::FormError;
use std::fmt;
use std::str::FromStr;

/// Placeholder shown while no city is selected
pub const CITY_PLACEHOLDER: &str = "Select a city";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Bengaluru,
    Mangaluru,
    Tumkuru,
    Mysuru,
}

impl City {
    pub const ALL: [City; 4] = [City::Bengaluru, City::Mangaluru, City::Tumkuru, City::Mysuru];

    pub fn as_str(self) -> &'static str {
        match self {
            City::Bengaluru => "Bengaluru",
            City::Mangaluru => "Mangaluru",
            City::Tumkuru => "Tumkuru",
            City::Mysuru => "Mysuru",
        }
    }

    /// Step through `[unselected, Bengaluru, .., Mysuru]` from `current`, wrapping.
    ///
    /// Returns `None` for the unselected slot. A value outside the closed set
    /// is treated as unselected.
    pub fn cycle(current: &str, forward: bool) -> Option<City> {
        // Slot 0 is the placeholder, slots 1..=4 are the cities
        let slots = City::ALL.len() + 1;
        let position = current
            .parse::<City>()
            .ok()
            .and_then(|city| City::ALL.iter().position(|c| *c == city))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        next.checked_sub(1).map(|i| City::ALL[i])
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| FormError::UnknownCity(s.to_string()))
    }
}
