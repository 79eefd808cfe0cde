//! Drivable-way classification and speed derivation.

use log::error;

/// `highway` values accepted as drivable by a passenger car.
/// `unclassified` is intentionally excluded; residential and service
/// roads have no `_link` variants.
const DRIVABLE: [&str; 12] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "service",
    "motorway_link",
    "trunk_link",
    "primary_link",
    "secondary_link",
    "tertiary_link",
];

pub(crate) fn is_drivable(highway: Option<&str>) -> bool {
    highway.is_some_and(|class| DRIVABLE.contains(&class))
}

/// Default speed (mph) per road class.
fn default_speed(class: &str) -> Option<u32> {
    match class {
        "motorway" | "motorway_link" | "trunk" | "trunk_link" => Some(55),
        "primary" | "primary_link" => Some(35),
        "secondary" | "secondary_link" | "tertiary" | "tertiary_link" | "residential" => Some(25),
        "service" => Some(15),
        _ => None,
    }
}

/// Derives a way's speed in miles per hour, always at least 1.
///
/// A `maxspeed` value that parses as a positive integer wins outright.
/// Otherwise the class table decides; a class with no table entry is
/// reported and falls back to 25. The ` mph` suffix is stripped from the
/// `highway` value before lookup, never from `maxspeed`; unit-suffixed
/// `maxspeed` values therefore fail the integer parse and use the table.
pub(crate) fn way_speed(highway: &str, maxspeed: Option<&str>) -> u32 {
    let class = highway.replacen(" mph", "", 1);

    if let Some(speed) = maxspeed
        .and_then(|raw| raw.parse::<u32>().ok())
        .filter(|speed| *speed > 0)
    {
        return speed;
    }

    match default_speed(&class) {
        Some(speed) => speed,
        None => {
            error!("Missing speed default value for {class}");
            25
        }
    }
}
