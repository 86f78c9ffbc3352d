use campusmarg_lib::{plan_route, Error, RouteMode, RouteQuery};

mod common;

#[test]
fn fuzzy_matches_returns_similar_ids() {
    let store = common::campus_store();

    let exact = store.fuzzy_node_matches("R101", 3);
    assert_eq!(exact.first().map(String::as_str), Some("R101"));

    let typo = store.fuzzy_node_matches("R1O1", 3);
    assert!(typo.contains(&"R101".to_string()), "should suggest R101 for R1O1");

    let by_name = store.fuzzy_node_matches("Clasroom 203", 3);
    assert!(by_name.contains(&"R203".to_string()), "names are matched too");
}

#[test]
fn fuzzy_matches_respects_limit() {
    let store = common::campus_store();
    assert!(store.fuzzy_node_matches("R10", 2).len() <= 2);
}

#[test]
fn fuzzy_matches_filters_low_similarity() {
    let store = common::campus_store();
    let none = store.fuzzy_node_matches("CompletelyWrongXYZ", 3);
    assert!(!none.iter().any(|id| id == "R101"));
}

#[test]
fn unknown_node_includes_suggestions() {
    let store = common::campus_store();
    let err = plan_route(&store, &RouteQuery::new("R1O1", "C1", RouteMode::Normal))
        .expect_err("unknown origin");

    assert!(matches!(err, Error::NodeNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("unknown node id: R1O1"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("R101"));
}
