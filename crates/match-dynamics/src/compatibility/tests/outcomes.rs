use crate::compatibility::outcomes::{events, totals};

#[test]
fn table_lists_the_five_scenarios_in_display_order() {
    let events = events();

    let names: Vec<&str> = events.iter().map(|event| event.name).collect();
    assert_eq!(
        names,
        vec![
            "Career Growth",
            "Emotional Burnout",
            "Relocation Willingness",
            "Children / Parenthood",
            "Health Events",
        ]
    );

    let career = &events[0];
    assert_eq!((career.self_delta, career.partner_delta), (3, 2));
    let health = &events[4];
    assert_eq!((health.self_delta, health.partner_delta), (-3, -2));
}

#[test]
fn totals_match_the_fixed_table() {
    let totals = totals();
    assert_eq!(totals.self_total, 4);
    assert_eq!(totals.partner_total, 2);
}

#[test]
fn totals_agree_with_a_fold_over_events() {
    let expected_self: i32 = events().iter().map(|event| event.self_delta).sum();
    let expected_partner: i32 = events().iter().map(|event| event.partner_delta).sum();

    let totals = totals();
    assert_eq!(totals.self_total, expected_self);
    assert_eq!(totals.partner_total, expected_partner);
}

#[test]
fn events_are_restartable() {
    assert_eq!(events(), events());
}
