use geo::Point;

use crate::geo::MEAN_EARTH_RADIUS_KM;

/// Great-circle distance between two points in kilometers, computed with
/// the haversine formula over a spherical Earth.
pub fn haversine_distance(lhs: Point<f64>, rhs: Point<f64>) -> f64 {
    let (l_lng, l_lat) = lhs.x_y();
    let (r_lng, r_lat) = rhs.x_y();

    let delta_lat = (r_lat - l_lat).to_radians();
    let delta_lng = (r_lng - l_lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + l_lat.to_radians().cos() * r_lat.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();
    MEAN_EARTH_RADIUS_KM * c
}
