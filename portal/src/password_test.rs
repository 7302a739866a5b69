use super::*;

// =============================================================
// evaluate_strength
// =============================================================

#[test]
fn empty_password_meets_no_rule() {
    let req = evaluate_strength("");
    assert_eq!(req, PasswordRequirements::default());
    assert!(!req.is_satisfied());
}

#[test]
fn absent_password_is_evaluated_as_empty() {
    assert_eq!(evaluate_optional(None), evaluate_strength(""));
    assert_eq!(evaluate_optional(Some("Abcdefg1@")), evaluate_strength("Abcdefg1@"));
}

#[test]
fn rules_are_computed_independently() {
    let req = evaluate_strength("abc");
    assert!(!req.min_length);
    assert!(!req.has_upper);
    assert!(req.has_lower);
    assert!(!req.has_number);
    assert!(!req.has_special);

    let req = evaluate_strength("12345678");
    assert!(req.min_length);
    assert!(req.has_number);
    assert!(!req.has_lower);
}

#[test]
fn min_length_boundary_is_eight() {
    assert!(!evaluate_strength("1234567").min_length);
    assert!(evaluate_strength("12345678").min_length);
}

#[test]
fn min_length_counts_utf16_units() {
    // Each emoji is a surrogate pair: four of them are eight units.
    assert!(evaluate_strength("😀😀😀😀").min_length);
    // Accented letters are one unit each.
    assert!(!evaluate_strength("ééééééé").min_length);
}

#[test]
fn letter_classes_are_ascii_only() {
    let req = evaluate_strength("ÉÀÜéàü");
    assert!(!req.has_upper);
    assert!(!req.has_lower);
}

#[test]
fn number_rule_ignores_non_ascii_digits() {
    assert!(!evaluate_strength("٣").has_number);
    assert!(evaluate_strength("x7").has_number);
}

#[test]
fn each_special_character_counts() {
    for c in SPECIAL_CHARS.chars() {
        assert!(evaluate_strength(&c.to_string()).has_special, "{c} should count");
    }
}

#[test]
fn other_punctuation_is_not_special() {
    for s in ["#", "-", "_", ".", " ", "^", "+"] {
        assert!(!evaluate_strength(s).has_special, "{s:?} should not count");
    }
}

#[test]
fn evaluation_is_idempotent() {
    let a = evaluate_strength("Password1@");
    let b = evaluate_strength("Password1@");
    assert_eq!(a, b);
}

// =============================================================
// is_strong
// =============================================================

#[test]
fn is_strong_accepts_all_rules_met() {
    assert!(is_strong("Abcdefg1@"));
    assert!(is_strong("Password1@"));
}

#[test]
fn is_strong_rejects_missing_uppercase() {
    assert!(!is_strong("abcdefg1@"));
}

#[test]
fn is_strong_rejects_short_password() {
    assert!(!is_strong("short1@"));
    assert!(!is_strong("Short1@"));
}

#[test]
fn is_strong_rejects_each_missing_rule() {
    assert!(!is_strong("ABCDEFG1@"));
    assert!(!is_strong("Abcdefgh@"));
    assert!(!is_strong("Abcdefgh1"));
}

// =============================================================
// passwords_match
// =============================================================

#[test]
fn passwords_match_is_exact() {
    assert!(passwords_match("X1", "X1"));
    assert!(!passwords_match("X1", "x1"));
    assert!(!passwords_match("X1 ", "X1"));
    assert!(passwords_match("", ""));
}

// =============================================================
// matches_strong_pattern
// =============================================================

#[test]
fn pattern_agrees_with_itemized_rules_on_single_line_input() {
    for pw in ["Abcdefg1@", "Password1@", "abcdefg1@", "short1@", "ABCDEFG1@", ""] {
        assert_eq!(matches_strong_pattern(pw), is_strong(pw), "disagreement on {pw:?}");
    }
}

#[test]
fn pattern_rejects_line_terminators_that_itemized_rules_accept() {
    for pw in ["Abcd\nefg1@", "Abcd\refg1@", "Abcd\u{2028}efg1@", "Abcd\u{2029}efg1@"] {
        assert!(is_strong(pw));
        assert!(!matches_strong_pattern(pw));
    }
}

#[test]
fn pattern_constant_keeps_browser_syntax() {
    assert!(STRONG_PASSWORD_PATTERN.starts_with("^(?=[^A-Z]*[A-Z])"));
    assert!(STRONG_PASSWORD_PATTERN.ends_with(".{8,}$"));
}

// =============================================================
// PasswordRequirements helpers
// =============================================================

#[test]
fn unmet_lists_failing_rules_in_order() {
    let req = evaluate_strength("abc");
    assert_eq!(
        req.unmet(),
        vec![
            Requirement::MinLength,
            Requirement::HasUpper,
            Requirement::HasNumber,
            Requirement::HasSpecial,
        ]
    );
    assert!(evaluate_strength("Abcdefg1@").unmet().is_empty());
}

#[test]
fn iter_yields_every_rule_once() {
    let req = evaluate_strength("Abcdefg1@");
    let rules: Vec<_> = req.iter().map(|(r, _)| r).collect();
    assert_eq!(rules, Requirement::ALL.to_vec());
    assert!(req.iter().all(|(_, met)| met));
}

#[test]
fn requirement_labels_are_distinct() {
    for (i, a) in Requirement::ALL.iter().enumerate() {
        for (j, b) in Requirement::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
    assert_eq!(Requirement::HasSpecial.to_string(), Requirement::HasSpecial.label());
}

#[test]
fn requirements_serialize_with_snake_case_fields() {
    let json = serde_json::to_value(evaluate_strength("A")).unwrap();
    assert_eq!(json["has_upper"], true);
    assert_eq!(json["min_length"], false);
}

// =============================================================
// PasswordMeter
// =============================================================

#[test]
fn meter_starts_empty() {
    assert!(PasswordMeter::new().last().is_none());
}

#[test]
fn meter_records_latest_evaluation() {
    let mut meter = PasswordMeter::new();
    let first = meter.evaluate("abc");
    assert_eq!(meter.last(), Some(first));

    let second = meter.evaluate("Abcdefg1@");
    assert_eq!(meter.last(), Some(second));
    assert!(second.is_satisfied());
}

#[test]
fn meter_does_not_reuse_previous_result() {
    let mut meter = PasswordMeter::new();
    meter.evaluate("Abcdefg1@");
    let weaker = meter.evaluate("abcdefg1@");
    assert!(!weaker.has_upper);
    assert_eq!(meter.last(), Some(weaker));
}

#[test]
fn meter_reset_clears_snapshot() {
    let mut meter = PasswordMeter::new();
    meter.evaluate("x");
    meter.reset();
    assert!(meter.last().is_none());
}
