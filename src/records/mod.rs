//! Sample safety records and their card projections.
//!
//! Records are flat, immutable rows baked into the bundle; each page
//! projects its record type into [`CardFields`] for the shared grid.
//! There is no identity beyond the display title and no relationships
//! between records.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

/// Display projection of one record: what the grid actually renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFields {
    /// Card header line.
    pub title: String,
    /// Large primary value.
    pub primary: String,
    /// Small secondary line under the primary value.
    pub secondary: String,
}

/// A reported high-crime area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CrimeZone {
    pub area: &'static str,
    pub risk_level: &'static str,
    pub crime_type: &'static str,
    pub location: &'static str,
}

impl CrimeZone {
    pub fn card(&self) -> CardFields {
        CardFields {
            title: self.area.to_owned(),
            primary: self.risk_level.to_owned(),
            secondary: format!("{} - {}", self.location, self.crime_type),
        }
    }
}

pub const CRIME_ZONES: &[CrimeZone] = &[
    CrimeZone {
        area: "Central Business District",
        risk_level: "High",
        crime_type: "Theft",
        location: "Cape Town",
    },
    CrimeZone {
        area: "Sandton",
        risk_level: "Medium",
        crime_type: "Burglary",
        location: "Johannesburg",
    },
    CrimeZone {
        area: "Umhlanga",
        risk_level: "Low",
        crime_type: "Vehicle Theft",
        location: "Durban",
    },
];

/// An open missing-person report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MissingPerson {
    pub name: &'static str,
    pub age: u32,
    pub last_seen: &'static str,
    pub location: &'static str,
}

impl MissingPerson {
    pub fn card(&self) -> CardFields {
        CardFields {
            title: self.name.to_owned(),
            primary: format!("{} years old", self.age),
            secondary: format!("Last seen: {} in {}", self.last_seen, self.location),
        }
    }
}

pub const MISSING_PERSONS: &[MissingPerson] = &[
    MissingPerson { name: "John Doe", age: 35, last_seen: "2023-06-15", location: "Cape Town" },
    MissingPerson { name: "Jane Smith", age: 28, last_seen: "2023-06-14", location: "Johannesburg" },
    MissingPerson { name: "Mike Johnson", age: 42, last_seen: "2023-06-13", location: "Durban" },
];

/// A weather warning currently in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WeatherAlert {
    pub kind: &'static str,
    pub severity: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
}

impl WeatherAlert {
    pub fn card(&self) -> CardFields {
        CardFields {
            title: self.kind.to_owned(),
            primary: self.severity.to_owned(),
            secondary: format!("{} - Duration: {}", self.location, self.duration),
        }
    }
}

pub const WEATHER_ALERTS: &[WeatherAlert] = &[
    WeatherAlert { kind: "Heavy Rain", severity: "High", location: "Cape Town", duration: "6 hours" },
    WeatherAlert {
        kind: "Strong Winds",
        severity: "Medium",
        location: "Johannesburg",
        duration: "3 hours",
    },
    WeatherAlert { kind: "Heatwave", severity: "High", location: "Durban", duration: "2 days" },
];

/// A road segment closed to traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RoadClosure {
    pub road: &'static str,
    pub reason: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
}

impl RoadClosure {
    pub fn card(&self) -> CardFields {
        CardFields {
            title: self.road.to_owned(),
            primary: self.reason.to_owned(),
            secondary: format!("{} - Duration: {}", self.location, self.duration),
        }
    }
}

pub const ROAD_CLOSURES: &[RoadClosure] = &[
    RoadClosure { road: "N1 Highway", reason: "Construction", duration: "2 weeks", location: "Cape Town" },
    RoadClosure { road: "M1 Motorway", reason: "Accident", duration: "3 hours", location: "Johannesburg" },
    RoadClosure { road: "R102", reason: "Flooding", duration: "Unknown", location: "Durban" },
];
