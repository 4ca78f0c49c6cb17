use super::*;

#[test]
fn remediation_checklist_has_seven_ordered_steps() {
    assert_eq!(REMEDIATION_STEPS.len(), 7);
    assert_eq!(REMEDIATION_STEPS[0], "Go to the Google Cloud Console");
    assert_eq!(
        REMEDIATION_STEPS[6],
        "Verify that the GOOGLE_MAPS_API_KEY environment variable is set correctly"
    );
}

#[test]
fn remediation_links_are_absolute() {
    assert!(ENABLE_BILLING_URL.starts_with("https://console.cloud.google.com/"));
    assert!(BILLING_DOCS_URL.starts_with("https://developers.google.com/"));
}

#[test]
fn placeholder_image_is_a_root_relative_asset() {
    assert_eq!(PLACEHOLDER_IMAGE, "/placeholder.svg");
}
