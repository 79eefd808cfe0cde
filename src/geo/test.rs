use geo::Point;

use crate::geo::{haversine_distance, index_key, MEAN_EARTH_RADIUS_KM};

#[test]
fn coincident_points_have_zero_distance() {
    let point = Point::new(-75.5277, 39.1582);
    assert_eq!(haversine_distance(point, point), 0.0);
}

#[test]
fn one_degree_of_longitude_at_the_equator() {
    let origin = Point::new(0.0, 0.0);
    let east = Point::new(1.0, 0.0);

    let expected = MEAN_EARTH_RADIUS_KM * std::f64::consts::TAU / 360.0;
    let distance = haversine_distance(origin, east);

    assert!(
        (distance - expected).abs() < 1e-9,
        "expected {expected} km, got {distance} km"
    );
}

#[test]
fn distance_is_symmetric() {
    let wilmington = Point::new(-75.5466, 39.7459);
    let dover = Point::new(-75.5244, 39.1582);

    let out = haversine_distance(wilmington, dover);
    let back = haversine_distance(dover, wilmington);

    assert!((out - back).abs() < 1e-12);
    assert!(out > 60.0 && out < 70.0, "Wilmington-Dover is ~65 km, got {out}");
}

#[test]
fn index_key_is_lat_then_lon() {
    let point = Point::new(-75.5, 39.7);
    assert_eq!(index_key(point), [39.7, -75.5]);
}
