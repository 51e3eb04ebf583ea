use spotfinder_core::{Location, LocationValidationError, UNSAVED_LOCATION_ID};

#[test]
fn new_location_is_unsaved() {
    let location = Location::new("Toronto Zoo", 43.8206, -79.1847);

    assert_eq!(location.id, UNSAVED_LOCATION_ID);
    assert!(!location.is_persisted());
    assert!(Location::with_id(3, "Toronto Zoo", 43.8206, -79.1847).is_persisted());
}

#[test]
fn location_serialization_uses_expected_wire_fields() {
    let location = Location::with_id(12, "Royal Ontario Museum, Toronto", 43.6677, -79.3948);

    let json = serde_json::to_value(&location).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["address"], "Royal Ontario Museum, Toronto");
    assert_eq!(json["latitude"], 43.6677);
    assert_eq!(json["longitude"], -79.3948);

    let decoded: Location = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, location);
}

#[test]
fn validate_accepts_boundary_coordinates() {
    Location::new("North Pole", 90.0, 180.0).validate().unwrap();
    Location::new("South Pole", -90.0, -180.0).validate().unwrap();

    assert_eq!(
        Location::new("Too far north", 90.5, 0.0).validate(),
        Err(LocationValidationError::LatitudeOutOfRange(90.5))
    );
}
