use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn billing_marker_classifies_as_billing() {
    let err = MapError::from_exception(Some(
        "Google Maps JavaScript API error: BillingNotEnabledMapError",
    ));
    assert_eq!(err, MapError::BillingNotEnabled);
    assert!(err.is_billing());
}

#[test]
fn bare_marker_is_enough() {
    assert_eq!(
        MapError::from_exception(Some("BillingNotEnabledMapError")),
        MapError::BillingNotEnabled
    );
}

#[test]
fn other_messages_classify_as_initialization() {
    let err = MapError::from_exception(Some("InvalidKeyMapError"));
    assert_eq!(err, MapError::Initialization("InvalidKeyMapError".to_owned()));
    assert!(!err.is_billing());
}

#[test]
fn messageless_throws_classify_as_unknown() {
    assert_eq!(MapError::from_exception(None), MapError::Unknown);
}

// =============================================================
// Display text
// =============================================================

#[test]
fn billing_error_text() {
    assert_eq!(
        MapError::BillingNotEnabled.to_string(),
        "Google Maps API billing is not enabled for this project."
    );
}

#[test]
fn initialization_error_text_carries_the_message() {
    assert_eq!(
        MapError::Initialization("RefererNotAllowedMapError".to_owned()).to_string(),
        "An error occurred while loading the map: RefererNotAllowedMapError"
    );
}

#[test]
fn unknown_error_text() {
    assert_eq!(
        MapError::Unknown.to_string(),
        "An unknown error occurred while loading the map."
    );
}

#[test]
fn script_load_error_text() {
    assert_eq!(MapError::ScriptLoad.to_string(), "Failed to load Google Maps API");
}
