//! Route views.

pub mod crime_zones;
pub mod dashboard;
pub mod missing_persons;
pub mod road_closures;
pub mod settings;
pub mod weather_alerts;
