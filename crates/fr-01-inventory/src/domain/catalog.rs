//! # Kind Catalog
//!
//! Named kind queries the inventory registry answers for its siblings.
//! Each catalog entry exists in two flavours: the plain listing and an
//! `...ExceptId` listing that leaves out one asset.

use super::value_objects::AssetKind;

/// A named kind query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Catalog {
    /// All servers.
    Servers,
    /// All robots.
    Robots,
    /// All sensors.
    Sensors,
    /// Sensors followed by robots.
    SensorsAndRobots,
}

impl Catalog {
    /// Every catalog entry.
    pub const ALL: [Catalog; 4] = [
        Catalog::Servers,
        Catalog::Robots,
        Catalog::Sensors,
        Catalog::SensorsAndRobots,
    ];

    /// Kinds listed, in result order.
    pub fn kinds(self) -> &'static [AssetKind] {
        match self {
            Catalog::Servers => &[AssetKind::Server],
            Catalog::Robots => &[AssetKind::Robot],
            Catalog::Sensors => &[AssetKind::Sensor],
            Catalog::SensorsAndRobots => &[AssetKind::Sensor, AssetKind::Robot],
        }
    }

    /// Exported function name of the plain listing.
    pub fn function(self) -> &'static str {
        match self {
            Catalog::Servers => "GetServerAssets",
            Catalog::Robots => "GetRobotAssets",
            Catalog::Sensors => "GetSensorAssets",
            Catalog::SensorsAndRobots => "GetSensorAndRobotAssets",
        }
    }

    /// Exported function name of the exclusion listing.
    pub fn except_function(self) -> &'static str {
        match self {
            Catalog::Servers => "GetServerAssetsExceptId",
            Catalog::Robots => "GetRobotAssetsExceptId",
            Catalog::Sensors => "GetSensorAssetsExceptId",
            Catalog::SensorsAndRobots => "GetSensorAndRobotAssetsExceptId",
        }
    }

    /// Resolve a function name; the flag is true for exclusion listings.
    pub fn from_function(name: &str) -> Option<(Catalog, bool)> {
        Catalog::ALL.into_iter().find_map(|entry| {
            if entry.function() == name {
                Some((entry, false))
            } else if entry.except_function() == name {
                Some((entry, true))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_resolve() {
        for entry in Catalog::ALL {
            assert_eq!(Catalog::from_function(entry.function()), Some((entry, false)));
            assert_eq!(Catalog::from_function(entry.except_function()), Some((entry, true)));
        }
        assert_eq!(Catalog::from_function("GetDroneAssets"), None);
    }

    #[test]
    fn test_union_order() {
        assert_eq!(
            Catalog::SensorsAndRobots.kinds(),
            &[AssetKind::Sensor, AssetKind::Robot]
        );
    }
}
