use super::*;

#[test]
fn test_empty_document() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
    assert!(doc.get("anything").is_none());
}

#[test]
fn test_set_scalar_overwrites() {
    let mut doc = Document::new();
    doc.set_scalar("title", "Aetia");
    doc.set_scalar("title", "Geographika");
    assert_eq!(doc.scalar("title"), Some("Geographika"));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_push_item_creates_list() {
    let mut doc = Document::new();
    doc.push_item("sources", "Strabo");
    doc.push_item("sources", "Ptolemy");
    assert_eq!(
        doc.list("sources"),
        Some(&["Strabo".to_string(), "Ptolemy".to_string()][..])
    );
}

#[test]
fn test_push_item_replaces_scalar() {
    let mut doc = Document::new();
    doc.set_scalar("sources", "none");
    doc.push_item("sources", "Cleomedes");
    assert!(doc.scalar("sources").is_none());
    assert_eq!(doc.list("sources").map(<[String]>::len), Some(1));
}

#[test]
fn test_scalar_replaces_list() {
    let mut doc = Document::new();
    doc.push_item("sources", "Stobaeus");
    doc.set_scalar("sources", "lost");
    assert_eq!(doc.get("sources"), Some(&Value::Scalar("lost".to_string())));
}

#[test]
fn test_value_accessors() {
    let scalar = Value::Scalar("x".to_string());
    let list = Value::List(vec!["y".to_string()]);
    assert_eq!(scalar.as_scalar(), Some("x"));
    assert!(scalar.as_list().is_none());
    assert!(list.as_scalar().is_none());
    assert_eq!(list.as_list().map(<[String]>::len), Some(1));
}

#[test]
fn test_keys_are_sorted() {
    let mut doc = Document::new();
    doc.set_scalar("zeta", "1");
    doc.set_scalar("alpha", "2");
    doc.push_item("mu", "3");
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["alpha", "mu", "zeta"]);
}

#[test]
fn test_serializes_as_plain_json() {
    let mut doc = Document::new();
    doc.set_scalar("title", "Foo");
    doc.push_item("fragments", "alpha");
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"fragments":["alpha"],"title":"Foo"}"#);
}
