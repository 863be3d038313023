use std::fmt;
use std::str::FromStr;

/// Road classes to include when downloading a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkType {
    /// Every public and private road or path
    #[default]
    All,
    /// Every public road or path
    AllPublic,
    /// Drivable public streets, service roads excluded
    Drive,
    /// Drivable public streets including service roads
    DriveService,
    /// Streets and paths usable by pedestrians
    Walk,
    /// Streets and paths usable by cyclists
    Bike,
}

const PRIVATE_ACCESS: &str = r#"["access"!~"private"]"#;

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::All => "all",
            NetworkType::AllPublic => "all_public",
            NetworkType::Drive => "drive",
            NetworkType::DriveService => "drive_service",
            NetworkType::Walk => "walk",
            NetworkType::Bike => "bike",
        }
    }

    /// Overpass QL tag filter selecting the ways of this network type
    pub fn overpass_filter(&self) -> String {
        let base = match self {
            NetworkType::All => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|construction|no|planned|platform|proposed|raceway|razed"]"#
            }
            NetworkType::AllPublic => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|construction|no|planned|platform|proposed|raceway|razed"]["service"!~"private"]"#
            }
            NetworkType::Drive => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|bridleway|bus_guideway|construction|corridor|cycleway|elevator|escalator|footway|no|path|pedestrian|planned|platform|proposed|raceway|razed|service|steps|track"]["motor_vehicle"!~"no"]["motorcar"!~"no"]["service"!~"alley|driveway|emergency_access|parking|parking_aisle|private"]"#
            }
            NetworkType::DriveService => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|bridleway|bus_guideway|construction|corridor|cycleway|elevator|escalator|footway|no|path|pedestrian|planned|platform|proposed|raceway|razed|steps|track"]["motor_vehicle"!~"no"]["motorcar"!~"no"]["service"!~"emergency_access|parking|parking_aisle|private"]"#
            }
            NetworkType::Walk => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|bus_guideway|construction|cycleway|motor|no|planned|platform|proposed|raceway|razed"]["foot"!~"no"]["service"!~"private"]"#
            }
            NetworkType::Bike => {
                r#"["highway"]["area"!~"yes"]["highway"!~"abandoned|bus_guideway|construction|corridor|elevator|escalator|footway|motor|no|planned|platform|proposed|raceway|razed|steps"]["bicycle"!~"no"]["service"!~"private"]"#
            }
        };

        match self {
            NetworkType::All => base.to_string(),
            _ => format!("{}{}", base, PRIVATE_ACCESS),
        }
    }

    /// Whether one-way tags are ignored and every way is traversable both ways
    pub fn is_bidirectional(&self) -> bool {
        matches!(self, NetworkType::Walk)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(NetworkType::All),
            "all_public" => Ok(NetworkType::AllPublic),
            "drive" => Ok(NetworkType::Drive),
            "drive_service" => Ok(NetworkType::DriveService),
            "walk" => Ok(NetworkType::Walk),
            "bike" => Ok(NetworkType::Bike),
            other => Err(format!("Unknown network type: {}", other)),
        }
    }
}
