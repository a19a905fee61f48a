#![allow(dead_code)]

use graphsift::document::error::AccessError;
use graphsift::document::graph::{Accessor, Graph};
use graphsift::document::node::{Callable, NodeId, OpaqueKey, Value};
use graphsift::MatchResult;

/// A graph exercising every node kind: scalars, nested records, sequences,
/// associative containers, class instances, opaque keys, hidden and computed
/// fields, and two cycles back to the root.
pub struct Fixture {
    pub graph: Graph,
    pub root: Value,
    pub symbol_key1: OpaqueKey,
    pub symbol_key2: OpaqueKey,
    pub global_symbol: OpaqueKey,
}

fn instance(graph: &mut Graph, class: &str, name: &str, value: impl Into<Value>) -> NodeId {
    let id = graph.add_instance(class).unwrap();
    graph.set(id, "name", name).unwrap();
    graph.set(id, "value", value).unwrap();
    graph.set(id, "_private", "private data").unwrap();
    id
}

fn another(graph: &mut Graph, name: &str, value: impl Into<Value>, extra: &str) -> NodeId {
    let id = graph.add_instance("AnotherClass").unwrap();
    graph.set(id, "name", name).unwrap();
    graph.set(id, "value", value).unwrap();
    graph.set(id, "_private", "private data").unwrap();
    graph.set(id, "extra", extra).unwrap();
    id
}

fn date(graph: &mut Graph, text: &str) -> NodeId {
    let id = graph.add_instance("Date").unwrap();
    graph.set_hidden(id, "value", text).unwrap();
    id
}

fn record(graph: &mut Graph, fields: &[(&str, Value)]) -> NodeId {
    let id = graph.add_record();
    for (key, value) in fields {
        graph.set(id, *key, value.clone()).unwrap();
    }
    id
}

pub fn complex_object() -> Fixture {
    let mut graph = Graph::new();
    graph.types_mut().register("CustomClass");
    graph
        .types_mut()
        .register_subclass("AnotherClass", "CustomClass")
        .unwrap();

    let symbol_key1 = OpaqueKey::new("symbolKey1");
    let symbol_key2 = OpaqueKey::new("symbolKey2");
    let global_symbol = graph.shared_key("globalSymbol");

    let root = graph.add_record();
    graph.set(root, "stringProp", "hello world").unwrap();
    graph.set(root, "numberProp", 42).unwrap();
    graph.set(root, "booleanProp", true).unwrap();
    graph.set(root, "nullProp", Value::Null).unwrap();
    graph.set(root, "undefinedProp", Value::Undefined).unwrap();

    graph.set(root, "regexTestString", "test123").unwrap();
    graph.set(root, "emailString", "user@example.com").unwrap();
    graph.set(root, "phoneString", "123-456-7890").unwrap();

    let simple = graph.add_sequence([
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from("array item"),
        Value::from(true),
    ]);
    graph.set(root, "simpleArray", simple).unwrap();

    let inner = graph.add_sequence([3, 4]);
    let first = graph.add_sequence([Value::from(1), Value::from(2), Value::Node(inner)]);
    let in_array = record(&mut graph, &[("nested", Value::from("in array"))]);
    let new_year = date(&mut graph, "2023-01-01");
    let nested_array = graph.add_sequence([first, in_array, new_year]);
    graph.set(root, "nestedArray", nested_array).unwrap();

    let level3 = record(
        &mut graph,
        &[
            ("deepValue", Value::from("deep nested value")),
            ("deepNumber", Value::from(999)),
        ],
    );
    let level2 = record(&mut graph, &[("level3", Value::Node(level3))]);
    let level1 = record(&mut graph, &[("level2", Value::Node(level2))]);
    let branch = record(&mut graph, &[("data", Value::from("branch data"))]);
    let nested_object = record(
        &mut graph,
        &[
            ("level1", Value::Node(level1)),
            ("anotherBranch", Value::Node(branch)),
            ("backRef", Value::Node(root)),
        ],
    );
    graph.set(root, "nestedObject", nested_object).unwrap();

    let in_map = record(&mut graph, &[("nested", Value::from("in map"))]);
    let map = graph.add_map();
    graph.insert_entry(map, "mapKey1", "mapValue1").unwrap();
    graph.insert_entry(map, "mapKey2", in_map).unwrap();
    graph
        .insert_entry(map, symbol_key1.clone(), "symbol key in map")
        .unwrap();
    graph.insert_entry(map, 42, "number key in map").unwrap();
    graph.insert_entry(map, true, "boolean key in map").unwrap();
    graph.set(root, "mapObject", map).unwrap();

    let in_set = record(&mut graph, &[("inSet", Value::from(true))]);
    let set = graph.add_sequence([
        Value::from("set item 1"),
        Value::from("set item 2"),
        Value::from(42),
        Value::from(true),
        Value::Node(in_set),
    ]);
    graph.set(root, "setObject", set).unwrap();

    let christmas = date(&mut graph, "2023-12-25");
    graph.set(root, "dateObject", christmas).unwrap();

    let custom = instance(&mut graph, "CustomClass", "instance1", 100);
    graph.set(root, "customInstance", custom).unwrap();
    let another_instance = another(&mut graph, "instance2", 200, "extra data");
    graph.set(root, "anotherInstance", another_instance).unwrap();

    graph
        .set(root, "functionProp", Callable::new("namedFunction"))
        .unwrap();
    graph
        .set(root, "arrowFunction", Callable::new("arrowFunction"))
        .unwrap();

    graph.set(root, symbol_key1.clone(), "symbol value 1").unwrap();
    graph.set(root, symbol_key2.clone(), "symbol value 2").unwrap();
    graph
        .set(root, global_symbol.clone(), "global symbol value")
        .unwrap();

    graph.set_hidden(root, "hiddenProp", "hidden value").unwrap();
    graph.set(root, "readOnlyProp", "read only value").unwrap();
    graph
        .set(root, "nonConfigurableProp", "non configurable value")
        .unwrap();
    graph
        .set_accessor(
            root,
            "computedProp",
            Accessor::new(|| Ok(Value::from("computed value"))),
        )
        .unwrap();

    graph.set(root, "circularRef", root).unwrap();

    let deep_map = graph.add_map();
    graph.insert_entry(deep_map, "deep", "very deep").unwrap();
    let flag = record(&mut graph, &[("inArray", Value::from(true))]);
    let array_in_map = graph.add_sequence([Value::from(1), Value::from(2), Value::Node(flag)]);
    let maps = graph.add_map();
    graph.insert_entry(maps, "nestedMap", deep_map).unwrap();
    graph.insert_entry(maps, "arrayInMap", array_in_map).unwrap();

    let map_in_array = graph.add_map();
    graph
        .insert_entry(map_in_array, "inArray", "map in array")
        .unwrap();
    let set_in_array = graph.add_sequence(["set in array"]);
    let class_in_array = instance(&mut graph, "CustomClass", "in array", "class in array");
    let arrays = graph.add_sequence([map_in_array, set_in_array, class_in_array]);

    let nested1 = instance(&mut graph, "CustomClass", "nested class 1", "nested value 1");
    let nested2 = another(&mut graph, "nested class 2", "nested value 2", "nested extra");
    let classes = record(
        &mut graph,
        &[
            ("instance1", Value::Node(nested1)),
            ("instance2", Value::Node(nested2)),
        ],
    );

    let deep_nesting = record(
        &mut graph,
        &[
            ("maps", Value::Node(maps)),
            ("arrays", Value::Node(arrays)),
            ("classes", Value::Node(classes)),
        ],
    );
    graph.set(root, "deepNesting", deep_nesting).unwrap();

    Fixture {
        graph,
        root: Value::Node(root),
        symbol_key1,
        symbol_key2,
        global_symbol,
    }
}

/// A record with one field whose computed read always fails, between two
/// readable fields.
pub fn throwing_object() -> (Graph, Value) {
    let mut graph = Graph::new();
    let root = graph.add_record();
    graph.set(root, "before", "ok").unwrap();
    graph
        .set_accessor(
            root,
            "explosive",
            Accessor::new(|| Err(AccessError::new("getter threw"))),
        )
        .unwrap();
    graph.set(root, "after", "ok").unwrap();
    (graph, Value::Node(root))
}

pub fn paths(hits: &[MatchResult<'_>]) -> Vec<String> {
    hits.iter().map(|hit| hit.path.to_string()).collect()
}
