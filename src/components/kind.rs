//! Static catalog of component kinds.

use serde::{Deserialize, Serialize};

use crate::circuit::CurrentKind;

/// The kinds of components a user can place on the canvas.
///
/// Every kind has exactly two terminals. The two source kinds carry a
/// supply tag: a [`Battery`](Self::Battery) energizes DC circuits, an
/// [`AcSource`](Self::AcSource) energizes AC circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// DC power source
    Battery,
    /// AC power source
    AcSource,
    /// Light bulb
    Bulb,
    /// Fan
    Fan,
    /// Electric kettle
    Kettle,
    /// Television
    Tv,
    /// Switch (can break the circuit when open)
    Switch,
    /// Resistor
    Resistor,
    /// Fuse
    Fuse,
}

impl ComponentKind {
    /// All kinds in the catalog, in palette order.
    pub const ALL: [ComponentKind; 9] = [
        Self::Battery,
        Self::AcSource,
        Self::Bulb,
        Self::Fan,
        Self::Kettle,
        Self::Tv,
        Self::Switch,
        Self::Resistor,
        Self::Fuse,
    ];

    /// The supply kind this component provides, if it is a power source.
    pub fn source_kind(&self) -> Option<CurrentKind> {
        match self {
            Self::Battery => Some(CurrentKind::Dc),
            Self::AcSource => Some(CurrentKind::Ac),
            _ => None,
        }
    }

    /// Whether this kind is a power source.
    pub fn is_source(&self) -> bool {
        self.source_kind().is_some()
    }

    /// Number of terminals. Every catalog kind has two.
    pub fn terminal_count(&self) -> usize {
        2
    }

    /// Human-readable name for reports and tooltips.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Battery => "Battery",
            Self::AcSource => "AC Source",
            Self::Bulb => "Bulb",
            Self::Fan => "Fan",
            Self::Kettle => "Kettle",
            Self::Tv => "TV",
            Self::Switch => "Switch",
            Self::Resistor => "Resistor",
            Self::Fuse => "Fuse",
        }
    }

    /// Parse a kind from its description-file keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "battery" => Some(Self::Battery),
            "acsource" | "ac_source" => Some(Self::AcSource),
            "bulb" => Some(Self::Bulb),
            "fan" => Some(Self::Fan),
            "kettle" => Some(Self::Kettle),
            "tv" => Some(Self::Tv),
            "switch" => Some(Self::Switch),
            "resistor" => Some(Self::Resistor),
            "fuse" => Some(Self::Fuse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kinds() {
        assert_eq!(ComponentKind::Battery.source_kind(), Some(CurrentKind::Dc));
        assert_eq!(ComponentKind::AcSource.source_kind(), Some(CurrentKind::Ac));
        assert_eq!(ComponentKind::Bulb.source_kind(), None);
        assert!(ComponentKind::Battery.is_source());
        assert!(!ComponentKind::Switch.is_source());
    }

    #[test]
    fn test_terminal_count() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.terminal_count(), 2);
        }
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(
            ComponentKind::from_keyword("battery"),
            Some(ComponentKind::Battery)
        );
        assert_eq!(
            ComponentKind::from_keyword("AcSource"),
            Some(ComponentKind::AcSource)
        );
        assert_eq!(
            ComponentKind::from_keyword("ac_source"),
            Some(ComponentKind::AcSource)
        );
        assert_eq!(ComponentKind::from_keyword("transistor"), None);
    }
}
