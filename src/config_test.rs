use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.drawer_id, "mobile-drawer");
    assert_eq!(config.enrollment_bursts, 50);
    assert_eq!(config.contact_bursts, 30);
    assert_eq!(config.burst_stagger_ms, 20);
    assert_eq!(config.confetti_per_burst, 30);
}

#[test]
fn empty_input_yields_defaults() {
    assert_eq!(PageConfig::from_json("  ").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{ "contact_form_id": "reach-us", "contact_bursts": 5 }"#).unwrap();
    assert_eq!(config.contact_form_id, "reach-us");
    assert_eq!(config.contact_bursts, 5);
    assert_eq!(config.enrollment_form_id, "enrollment-form");
}

#[test]
fn unknown_field_is_rejected() {
    let err = PageConfig::from_json(r#"{ "drawer": "x" }"#).unwrap_err();
    assert!(matches!(err, LandingError::Config(_)));
}

#[test]
fn zero_particles_per_burst_is_rejected() {
    let err = PageConfig::from_json(r#"{ "confetti_per_burst": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("confetti_per_burst"));
}

#[test]
fn empty_storage_key_is_rejected() {
    assert!(PageConfig::from_json(r#"{ "theme_storage_key": "" }"#).is_err());
}

#[test]
fn oversized_stagger_is_rejected() {
    let err = PageConfig::from_json(r#"{ "contact_bursts": 3, "burst_stagger_ms": 4000000000 }"#).unwrap_err();
    assert!(err.to_string().contains("burst_stagger_ms"));
}

#[test]
fn oversized_burst_counts_are_rejected() {
    for field in ["enrollment_bursts", "contact_bursts"] {
        let err = PageConfig::from_json(&format!(r#"{{ "{field}": 4000000000 }}"#)).unwrap_err();
        assert!(err.to_string().contains(field), "{err}");
    }
}

#[test]
fn oversized_particle_count_is_rejected() {
    assert!(PageConfig::from_json(r#"{ "confetti_per_burst": 1000000 }"#).is_err());
}

#[test]
fn limits_themselves_are_accepted() {
    let raw = format!(
        r#"{{ "enrollment_bursts": {MAX_BURSTS}, "contact_bursts": 0, "burst_stagger_ms": {MAX_BURST_STAGGER_MS}, "confetti_per_burst": {MAX_CONFETTI_PER_BURST} }}"#
    );
    let config = PageConfig::from_json(&raw).unwrap();
    assert_eq!(config.enrollment_bursts, MAX_BURSTS);
}
