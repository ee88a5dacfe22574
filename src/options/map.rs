//! Playable maps.

use std::fmt;

/// A map the platform can host a game on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    Skeld,
    MiraHQ,
    Polus,
    Airship,
}

impl MapType {
    /// Every known map, in platform order.
    pub const ALL: [MapType; 4] = [
        MapType::Skeld,
        MapType::MiraHQ,
        MapType::Polus,
        MapType::Airship,
    ];

    /// Display name as the platform spells it.
    pub fn name(self) -> &'static str {
        match self {
            MapType::Skeld => "Skeld",
            MapType::MiraHQ => "MiraHQ",
            MapType::Polus => "Polus",
            MapType::Airship => "Airship",
        }
    }

    /// Look up a map by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(name))
    }

    /// Comma separated list of every map name.
    pub fn listing() -> String {
        Self::ALL.map(MapType::name).join(", ")
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
