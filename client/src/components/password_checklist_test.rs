use super::*;
use portal::{Requirement, evaluate_strength};

#[test]
fn checklist_has_one_row_per_rule() {
    let items = checklist_items(&PasswordRequirements::default());
    assert_eq!(items.len(), Requirement::ALL.len());
    assert!(items.iter().all(|i| !i.met));
    assert_eq!(items[0].label, Requirement::MinLength.label());
}

#[test]
fn checklist_marks_met_rules() {
    let items = checklist_items(&evaluate_strength("abc"));
    let met: Vec<bool> = items.iter().map(|i| i.met).collect();
    assert_eq!(met, vec![false, false, true, false, false]);
}

#[test]
fn item_class_reflects_state() {
    let met = ChecklistItem { label: "x", met: true };
    let unmet = ChecklistItem { label: "x", met: false };
    assert!(met.class().ends_with("--met"));
    assert!(unmet.class().ends_with("--unmet"));
}
