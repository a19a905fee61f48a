mod common;

use common::{complex_object, throwing_object};
use graphsift::document::graph::Graph;
use graphsift::document::node::Value;
use graphsift::objpath::{resolve, Parser, Path, PathError, Step};
use graphsift::search::{search, SearchOptions};

fn items_graph() -> (Graph, Value) {
    let mut graph = Graph::new();
    let root = graph.add_record();
    let first = graph.add_record();
    graph.set(first, "id", 1).unwrap();
    let second = graph.add_record();
    graph.set(second, "id", 2).unwrap();
    let items = graph.add_sequence([first, second]);
    graph.set(root, "items", items).unwrap();
    (graph, Value::Node(root))
}

#[test]
fn test_index_then_field() {
    let (graph, target) = items_graph();
    assert_eq!(
        resolve(&graph, &target, "items[1].id").as_deref(),
        Some(&Value::from(2))
    );
}

#[test]
fn test_missing_steps_short_circuit() {
    let mut graph = Graph::new();
    let root = graph.add_record();
    graph.set(root, "a", 1).unwrap();
    let target = Value::Node(root);

    assert!(resolve(&graph, &target, "a.b.c").is_none());
    assert!(resolve(&graph, &target, "missing").is_none());
}

#[test]
fn test_fixture_paths() {
    let fx = complex_object();
    let cases: Vec<(&str, Value)> = vec![
        ("nestedObject.level1.level2.level3.deepNumber", Value::from(999)),
        ("simpleArray[3]", Value::from("array item")),
        ("nestedArray[0][2][1]", Value::from(4)),
        ("nestedArray[1].nested", Value::from("in array")),
        ("[Symbol(symbolKey1)]", Value::from("symbol value 1")),
        ("[Symbol(globalSymbol)]", Value::from("global symbol value")),
        (r#"mapObject.get("mapKey2").nested"#, Value::from("in map")),
        ("mapObject.get(Symbol(symbolKey1))", Value::from("symbol key in map")),
        (r#"mapObject.get("42")"#, Value::from("number key in map")),
        ("circularRef.circularRef.stringProp", Value::from("hello world")),
        ("nestedObject.backRef.numberProp", Value::from(42)),
        ("computedProp", Value::from("computed value")),
        ("hiddenProp", Value::from("hidden value")),
        ("dateObject.value", Value::from("2023-12-25")),
        (r#"deepNesting.maps.get("nestedMap").get("deep")"#, Value::from("very deep")),
        (" customInstance . name ", Value::from("instance1")),
    ];

    for (path, expected) in cases {
        assert_eq!(
            resolve(&fx.graph, &fx.root, path).as_deref(),
            Some(&expected),
            "path {}",
            path
        );
    }
}

#[test]
fn test_unresolvable_fixture_paths() {
    let fx = complex_object();
    for path in [
        "stringProp.length",
        "nullProp.anything",
        "simpleArray[99]",
        "simpleArray.first",
        "mapObject.mapKey1",
        "[Symbol(nope)]",
        "nestedObject[0]",
    ] {
        assert!(resolve(&fx.graph, &fx.root, path).is_none(), "path {}", path);
    }
}

#[test]
fn test_throwing_accessor_resolves_to_none() {
    let (graph, target) = throwing_object();
    assert!(resolve(&graph, &target, "explosive").is_none());
    assert_eq!(
        resolve(&graph, &target, "after").as_deref(),
        Some(&Value::from("ok"))
    );
}

#[test]
fn test_search_paths_round_trip() {
    let fx = complex_object();
    let options = SearchOptions::default();
    for criterion in ["string", "number", "boolean", "object"] {
        let hits = search(&fx.graph, &fx.root, "type", criterion, &options).unwrap();
        assert!(!hits.is_empty());
        for hit in &hits {
            let path = hit.path.to_string();
            assert_eq!(
                resolve(&fx.graph, &fx.root, &path).as_deref(),
                Some(hit.value.as_ref()),
                "path {}",
                path
            );
        }
    }
}

#[test]
fn test_strict_parse_reports_errors() {
    assert_eq!(
        "items[1].id".parse::<Path>(),
        Ok(Path::new(vec![
            Step::Field("items".to_string()),
            Step::Index(1),
            Step::Field("id".to_string()),
        ]))
    );
    assert!(matches!(
        "items[1".parse::<Path>(),
        Err(PathError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        "a..b".parse::<Path>(),
        Err(PathError::EmptySegment { position: 2 })
    ));
}

#[test]
fn test_leading_dot_resolves() {
    let fx = complex_object();
    assert_eq!(
        resolve(&fx.graph, &fx.root, ".customInstance.name"),
        resolve(&fx.graph, &fx.root, "customInstance.name")
    );
    assert!(".customInstance".parse::<Path>().is_ok());
}

#[test]
fn test_lenient_parse_recovers() {
    let path = Parser::parse("a..b]");
    assert_eq!(
        path.steps,
        vec![Step::Field("a".to_string()), Step::Field("b".to_string())]
    );
}

#[test]
fn test_malformed_paths_never_panic() {
    let fx = complex_object();
    for path in ["[", "]", "[[[", "get(", "get()", "[Symbol(", ".", "..a", "a[Symbol(x]]", "\"", "get(\"a", r#"["a\"#, r#"[Symbol("x"#, r#"get(Symbol('"#] {
        let _ = resolve(&fx.graph, &fx.root, path);
    }
}
