use geo::Point;

use crate::server::error::ServerError;
use crate::server::r#match::parse_points;

#[test]
fn parses_a_semicolon_separated_trace() {
    let points = parse_points("39.7459,-75.5466;39.1582,-75.5244").expect("could not parse");

    assert_eq!(
        points,
        vec![
            Point::new(-75.5466, 39.7459),
            Point::new(-75.5244, 39.1582),
        ]
    );
}

#[test]
fn parses_a_single_pair() {
    let points = parse_points("0.001,0.002").expect("could not parse");
    assert_eq!(points, vec![Point::new(0.002, 0.001)]);
}

#[test]
fn rejects_pairs_without_a_comma() {
    assert!(matches!(
        parse_points("39.7459;-75.5466"),
        Err(ServerError::InvalidPoint(_))
    ));
}

#[test]
fn rejects_unparseable_coordinates() {
    assert!(matches!(
        parse_points("lat,lon"),
        Err(ServerError::InvalidPoint(_))
    ));
    assert!(matches!(
        parse_points("39.7459,-75.5466;,"),
        Err(ServerError::InvalidPoint(_))
    ));
}
