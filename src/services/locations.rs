use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TRANSIT_MINUTES: i32 = 5;
pub const DEFAULT_IMAGE: &str = "default.jpeg";

/// Delivery destinations served on campus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Location {
    #[serde(rename = "Lucas Hall")]
    LucasHall,
    #[serde(rename = "scdi")]
    Scdi,
    #[serde(rename = "Alameda Hall")]
    AlamedaHall,
    #[serde(rename = "Kenna Hall")]
    KennaHall,
    #[serde(rename = "Finn Residence Hall")]
    FinnResidenceHall,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::LucasHall,
        Location::Scdi,
        Location::AlamedaHall,
        Location::KennaHall,
        Location::FinnResidenceHall,
    ];

    /// Name used on the wire and stored on the order row.
    pub fn human_readable(&self) -> &'static str {
        match self {
            Location::LucasHall => "Lucas Hall",
            Location::Scdi => "scdi",
            Location::AlamedaHall => "Alameda Hall",
            Location::KennaHall => "Kenna Hall",
            Location::FinnResidenceHall => "Finn Residence Hall",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn get_enum_from_str(value: &str) -> Option<Location> {
        Location::ALL
            .into_iter()
            .find(|location| location.human_readable() == value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human_readable())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationInfo {
    pub transit_minutes: i32,
    pub image_name: String,
}

/// Read-only lookup from destination to its transit time and image asset.
#[derive(Clone, Debug)]
pub struct LocationTable {
    entries: HashMap<Location, LocationInfo>,
    default_transit_minutes: i32,
    default_image: String,
}

impl LocationTable {
    pub fn new(
        entries: HashMap<Location, LocationInfo>,
        default_transit_minutes: i32,
        default_image: impl Into<String>,
    ) -> Self {
        Self {
            entries,
            default_transit_minutes,
            default_image: default_image.into(),
        }
    }

    pub fn campus() -> Self {
        let entries = [
            (Location::LucasHall, 7, "lucas_hall.jpeg"),
            (Location::Scdi, 3, "scdi.jpeg"),
            (Location::AlamedaHall, 6, "alameda_hall.jpeg"),
            (Location::KennaHall, 3, "kenna_hall.jpeg"),
            (Location::FinnResidenceHall, 6, "finn_hall.jpeg"),
        ]
        .into_iter()
        .map(|(location, transit_minutes, image)| {
            (
                location,
                LocationInfo {
                    transit_minutes,
                    image_name: image.to_string(),
                },
            )
        })
        .collect();

        Self::new(entries, DEFAULT_TRANSIT_MINUTES, DEFAULT_IMAGE)
    }

    /// Returns the location only when it is both a known name and present in
    /// this table.
    pub fn resolve(&self, name: &str) -> Option<Location> {
        Location::get_enum_from_str(name).filter(|location| self.entries.contains_key(location))
    }

    pub fn info(&self, location: Location) -> Option<&LocationInfo> {
        self.entries.get(&location)
    }

    pub fn transit_minutes(&self, name: &str) -> i32 {
        self.resolve(name)
            .and_then(|location| self.info(location))
            .map(|info| info.transit_minutes)
            .unwrap_or(self.default_transit_minutes)
    }

    pub fn image_name(&self, name: &str) -> &str {
        self.resolve(name)
            .and_then(|location| self.info(location))
            .map(|info| info.image_name.as_str())
            .unwrap_or(self.default_image.as_str())
    }

    pub fn image_url(&self, static_prefix: &str, name: &str) -> String {
        format!(
            "{}/{}",
            static_prefix.trim_end_matches('/'),
            self.image_name(name)
        )
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::campus()
    }
}
