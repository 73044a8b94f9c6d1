use super::*;

fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn valid_contact() -> Fields {
    fields(&[("name", "Ada"), ("phone", "5551234567"), ("email", "a@b.com"), ("message", "hi")])
}

fn validator() -> ContactValidator {
    ContactValidator::new().unwrap()
}

fn contact() -> Intake {
    FormKind::Contact.intake().unwrap()
}

// =============================================================
// Contact validation
// =============================================================

#[test]
fn valid_contact_is_accepted() {
    let submission = validator().validate(&valid_contact()).unwrap();
    assert_eq!(submission.name, "Ada");
    assert_eq!(submission.phone, "5551234567");
    assert_eq!(submission.email, "a@b.com");
    assert_eq!(submission.message, "hi");
}

#[test]
fn empty_name_is_missing() {
    let input = fields(&[("name", ""), ("phone", "5551234567"), ("email", "a@b.com"), ("message", "hi")]);
    assert_eq!(validator().validate(&input), Err(ValidationError::MissingFields));
}

#[test]
fn absent_field_is_missing() {
    let input = fields(&[("name", "Ada"), ("phone", "5551234567"), ("email", "a@b.com")]);
    assert_eq!(validator().validate(&input), Err(ValidationError::MissingFields));
}

#[test]
fn presence_is_checked_before_format() {
    let input = fields(&[("name", ""), ("phone", "12"), ("email", "nope"), ("message", "hi")]);
    assert_eq!(validator().validate(&input), Err(ValidationError::MissingFields));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["plain", "a@b", "a b@c.com", "a@@b.com", "@b.com", "a@b."] {
        let mut input = valid_contact();
        input[2].1 = email.to_owned();
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidEmail), "{email}");
    }
}

#[test]
fn email_is_checked_before_phone() {
    let input = fields(&[("name", "Ada"), ("phone", "12"), ("email", "nope"), ("message", "hi")]);
    assert_eq!(validator().validate(&input), Err(ValidationError::InvalidEmail));
}

#[test]
fn phone_needs_ten_allowed_characters() {
    for phone in ["555123", "555-123-45a7", "phone number"] {
        let mut input = valid_contact();
        input[1].1 = phone.to_owned();
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidPhone), "{phone}");
    }
    for phone in ["+1 (555) 123-4567", "98765 43210", "0123456789"] {
        let mut input = valid_contact();
        input[1].1 = phone.to_owned();
        assert!(validator().validate(&input).is_ok(), "{phone}");
    }
}

#[test]
fn email_rejects_non_ascii_whitespace() {
    for email in ["a\u{a0}b@c.com", "a@b\u{2003}c.com", "a@b.c\u{3000}om", "\u{feff}a@b.com"] {
        let mut input = valid_contact();
        input[2].1 = email.to_owned();
        assert_eq!(validator().validate(&input), Err(ValidationError::InvalidEmail), "{email:?}");
    }
}

#[test]
fn phone_accepts_non_ascii_whitespace_separators() {
    for phone in ["555\u{a0}123\u{a0}4567", "555\u{2009}123\u{2009}4567", "+1\u{202f}(555)\u{202f}1234567"] {
        let mut input = valid_contact();
        input[1].1 = phone.to_owned();
        assert!(validator().validate(&input).is_ok(), "{phone:?}");
    }
}

#[test]
fn phone_still_rejects_other_unicode() {
    let mut input = valid_contact();
    input[1].1 = "555\u{2012}123\u{2012}4567".to_owned();
    assert_eq!(validator().validate(&input), Err(ValidationError::InvalidPhone));
}

#[test]
fn last_duplicate_field_wins() {
    let mut input = valid_contact();
    input.push(("name".to_owned(), "Grace".to_owned()));
    assert_eq!(validator().validate(&input).unwrap().name, "Grace");
}

// =============================================================
// Submission outcomes
// =============================================================

#[test]
fn rejected_contact_produces_no_plan() {
    let input = fields(&[("name", ""), ("phone", "5551234567"), ("email", "a@b.com"), ("message", "hi")]);
    let outcome = contact().submit(&input, &PageConfig::default());
    assert_eq!(outcome, Err(ValidationError::MissingFields));
}

#[test]
fn accepted_contact_schedules_thirty_bursts() {
    let plan = contact().submit(&valid_contact(), &PageConfig::default()).unwrap();
    assert_eq!(plan.panel_html, CONTACT_PANEL);
    assert!(plan.panel_html.contains("Message Sent!"));
    assert_eq!(plan.burst_delays_ms.len(), 30);
    assert_eq!(plan.burst_delays_ms.first(), Some(&0));
    assert_eq!(plan.burst_delays_ms.last(), Some(&580));
}

#[test]
fn accepted_contact_logs_typed_payload() {
    let plan = contact().submit(&valid_contact(), &PageConfig::default()).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&plan.payload).unwrap();
    assert_eq!(payload, serde_json::json!({ "name": "Ada", "phone": "5551234567", "email": "a@b.com", "message": "hi" }));
}

#[test]
fn enrollment_schedules_fifty_bursts_twenty_ms_apart() {
    let input = fields(&[("full_name", "Ada"), ("plan", "pro")]);
    let plan = Intake::Enrollment.submit(&input, &PageConfig::default()).unwrap();
    assert_eq!(plan.panel_html, ENROLLMENT_PANEL);
    assert!(plan.panel_html.contains("Your enrollment is complete."));
    assert_eq!(plan.burst_delays_ms, (0..50).map(|i| i * 20).collect::<Vec<u32>>());
    assert_eq!(plan.payload, r#"{"full_name":"Ada","plan":"pro"}"#);
}

#[test]
fn enrollment_accepts_any_fields() {
    let plan = Intake::Enrollment.submit(&fields(&[("x", "")]), &PageConfig::default()).unwrap();
    assert_eq!(plan.burst_delays_ms.len(), 50);
}

#[test]
fn burst_counts_follow_config() {
    let config = PageConfig { contact_bursts: 3, burst_stagger_ms: 100, ..PageConfig::default() };
    let plan = contact().submit(&valid_contact(), &config).unwrap();
    assert_eq!(plan.burst_delays_ms, vec![0, 100, 200]);
}

#[test]
fn burst_delays_saturate_instead_of_overflowing() {
    let delays = burst_delays(3, 4_000_000_000);
    assert_eq!(delays, vec![0, 4_000_000_000, u32::MAX]);
}

#[test]
fn intake_matches_its_kind() {
    assert_eq!(FormKind::Enrollment.intake().unwrap().kind(), FormKind::Enrollment);
    assert_eq!(contact().kind(), FormKind::Contact);
    assert!(matches!(FormKind::Enrollment.intake().unwrap(), Intake::Enrollment));
}

#[test]
fn panels_keep_their_in_page_links() {
    assert!(ENROLLMENT_PANEL.contains(r##"href="#pricing""##));
    assert!(ENROLLMENT_PANEL.contains(r##"href="#features""##));
    assert!(ENROLLMENT_PANEL.trim_end().ends_with("</div>"));
    assert!(CONTACT_PANEL.contains(r##"href="#enrollment""##));
    assert!(CONTACT_PANEL.contains("https://wa.me/919876543210"));
    assert!(CONTACT_PANEL.trim_end().ends_with("</div>"));
}

#[test]
fn burst_delays_handles_zero_count() {
    assert!(burst_delays(0, 20).is_empty());
}

#[test]
fn fields_json_keeps_last_duplicate() {
    let json = fields_json(&fields(&[("a", "1"), ("a", "2")]));
    assert_eq!(json, serde_json::json!({ "a": "2" }));
}
