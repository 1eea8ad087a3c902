use proptest::prelude::*;

use ragmap_catalog::{builtin, error::ErrorCode, parse};
use ragmap_core::identifier::Id;

#[test]
fn test_two_node_catalog() {
    let source = r#"
        nodes = ["A", "B"]
        edges = [["A", "B"]]
    "#;

    let catalog = parse(source).expect("Failed to parse");

    assert_eq!(catalog.nodes(), &[Id::new("A"), Id::new("B")]);
    assert_eq!(catalog.edges().len(), 1);
    assert_eq!(catalog.edges()[0].source(), Id::new("A"));
    assert_eq!(catalog.edges()[0].target(), Id::new("B"));
}

#[test]
fn test_tables_for_unlisted_nodes_are_kept() {
    let source = r##"
        nodes = ["A"]

        [tooltips]
        Z = "Never drawn"

        [colors]
        Z = "#123456"
    "##;

    let catalog = parse(source).expect("Failed to parse");

    assert!(!catalog.is_declared(Id::new("Z")));
    assert_eq!(catalog.tooltip(Id::new("Z")), "Never drawn");
    assert_eq!(catalog.color(Id::new("Z")).to_hex(), "#123456");
}

#[test]
fn test_builtin_matches_its_toml_rendition() {
    let builtin = builtin();
    let source = format!(
        "nodes = [{}]\nedges = [{}]\n",
        builtin
            .nodes()
            .iter()
            .map(|id| format!("{:?}", id.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        builtin
            .edges()
            .iter()
            .map(|e| format!("[{:?}, {:?}]", e.source().to_string(), e.target().to_string()))
            .collect::<Vec<_>>()
            .join(", "),
    );

    let parsed = parse(&source).expect("Failed to parse");

    assert_eq!(parsed.nodes(), builtin.nodes());
    assert_eq!(parsed.edges(), builtin.edges());
}

#[test]
fn test_wrong_value_type_is_document_error() {
    let err = parse("nodes = \"A\"").unwrap_err();
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,15}"
}

fn check_node_list_preserved(ids: Vec<String>) -> Result<(), TestCaseError> {
    let source = format!(
        "nodes = [{}]",
        ids.iter()
            .map(|id| format!("{id:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let catalog = parse(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;

    let mut expected: Vec<&str> = Vec::new();
    for id in &ids {
        if !expected.contains(&id.as_str()) {
            expected.push(id);
        }
    }
    let actual: Vec<String> = catalog.nodes().iter().map(Id::to_string).collect();
    prop_assert_eq!(actual, expected);
    Ok(())
}

proptest! {
    #[test]
    fn node_list_preserved(ids in prop::collection::vec(identifier_strategy(), 0..20)) {
        check_node_list_preserved(ids)?;
    }
}
