mod common;

use common::{complex_object, paths, throwing_object};
use graphsift::document::node::Value;
use graphsift::search::{search, Criterion, MatchKind, SearchOptions};

#[test]
fn test_exact_string_value() {
    let fx = complex_object();
    let hits = search(&fx.graph, &fx.root, "value", "hello world", &SearchOptions::default()).unwrap();
    assert_eq!(paths(&hits), vec!["stringProp"]);
    assert_eq!(hits[0].matched_type, "string");
    assert_eq!(hits[0].kind, MatchKind::Value);
}

#[test]
fn test_exact_number_value() {
    let fx = complex_object();
    let hits = search(&fx.graph, &fx.root, "value", 42, &SearchOptions::default()).unwrap();
    assert_eq!(paths(&hits), vec!["numberProp", "setObject[2]"]);
    assert!(hits.iter().all(|hit| hit.matched_type == "number"));
}

#[test]
fn test_exact_boolean_value() {
    let fx = complex_object();
    let hits = search(&fx.graph, &fx.root, "value", true, &SearchOptions::default()).unwrap();
    assert_eq!(
        paths(&hits),
        vec![
            "booleanProp",
            "simpleArray[4]",
            "setObject[3]",
            "setObject[4].inSet",
            r#"deepNesting.maps.get("arrayInMap")[2].inArray"#,
        ]
    );
}

#[test]
fn test_deep_value() {
    let fx = complex_object();
    let hits = search(
        &fx.graph,
        &fx.root,
        "value",
        "deep nested value",
        &SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(paths(&hits), vec!["nestedObject.level1.level2.level3.deepValue"]);
}

#[test]
fn test_hidden_and_computed_values() {
    let fx = complex_object();
    let options = SearchOptions::default();

    let hidden = search(&fx.graph, &fx.root, "value", "hidden value", &options).unwrap();
    assert_eq!(paths(&hidden), vec!["hiddenProp"]);

    let computed = search(&fx.graph, &fx.root, "value", "computed value", &options).unwrap();
    assert_eq!(paths(&computed), vec!["computedProp"]);
    assert_eq!(computed[0].value.as_ref(), &Value::from("computed value"));
}

#[test]
fn test_values_inside_maps_and_opaque_fields() {
    let fx = complex_object();
    let options = SearchOptions::default();

    let hits = search(&fx.graph, &fx.root, "value", "in map", &options).unwrap();
    assert_eq!(paths(&hits), vec![r#"mapObject.get("mapKey2").nested"#]);

    let hits = search(&fx.graph, &fx.root, "value", "symbol value 1", &options).unwrap();
    assert_eq!(paths(&hits), vec!["[Symbol(symbolKey1)]"]);

    let hits = search(&fx.graph, &fx.root, "value", "symbol key in map", &options).unwrap();
    assert_eq!(paths(&hits), vec!["mapObject.get(Symbol(symbolKey1))"]);
}

#[test]
fn test_pattern_value() {
    let fx = complex_object();
    let criterion = Criterion::pattern(r"\d+").unwrap();
    let hits = search(&fx.graph, &fx.root, "value", criterion, &SearchOptions::default()).unwrap();
    let found = paths(&hits);

    for expected in [
        "regexTestString",
        "phoneString",
        "dateObject.value",
        "nestedArray[2].value",
        r#"mapObject.get("mapKey1")"#,
        "[Symbol(symbolKey1)]",
        "customInstance.name",
    ] {
        assert!(found.iter().any(|p| p == expected), "missing {}", expected);
    }
    assert!(hits.iter().all(|hit| hit.matched_type == "string"));
    assert!(!found.iter().any(|p| p == "numberProp"));
}

#[test]
fn test_email_pattern() {
    let fx = complex_object();
    let criterion = Criterion::pattern(r"^[^@\s]+@[^@\s]+\.[a-z]+$").unwrap();
    let hits = search(&fx.graph, &fx.root, "value", criterion, &SearchOptions::default()).unwrap();
    assert_eq!(paths(&hits), vec!["emailString"]);
}

#[test]
fn test_value_mode_has_no_key_or_type_hits() {
    let fx = complex_object();
    let hits = search(&fx.graph, &fx.root, "value", "name", &SearchOptions::default()).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_depth_limit_cuts_deep_values() {
    let fx = complex_object();
    let options = SearchOptions::new().with_max_depth(4);
    let hits = search(&fx.graph, &fx.root, "value", "deep nested value", &options).unwrap();
    assert!(hits.is_empty());

    let options = SearchOptions::new().with_max_depth(5);
    let hits = search(&fx.graph, &fx.root, "value", "deep nested value", &options).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_depth_invariant() {
    let fx = complex_object();
    for depth in 1..6 {
        let options = SearchOptions::new().with_max_depth(depth);
        let hits = search(&fx.graph, &fx.root, "all", "string", &options).unwrap();
        assert!(hits.iter().all(|hit| hit.path.len() <= depth));
    }
}

#[test]
fn test_throwing_accessor_does_not_abort() {
    let (graph, root) = throwing_object();
    let hits = search(&graph, &root, "value", "ok", &SearchOptions::default()).unwrap();
    assert_eq!(paths(&hits), vec!["before", "after"]);
}

#[test]
fn test_custom_filter_skips_private_fields() {
    let fx = complex_object();
    let options = SearchOptions::new().with_filter(|_, key| match key {
        graphsift::search::EntryKey::Field(key) => {
            !key.as_name().is_some_and(|name| name.starts_with('_'))
        }
        _ => true,
    });

    let hits = search(&fx.graph, &fx.root, "value", "private data", &options).unwrap();
    assert!(hits.is_empty());

    let hits = search(&fx.graph, &fx.root, "value", "private data", &SearchOptions::default()).unwrap();
    assert_eq!(hits.len(), 5);
}
