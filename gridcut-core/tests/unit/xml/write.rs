use super::*;
use crate::xml::read::parse_document;

#[test]
fn serialization_round_trips_structure() {
    let input = r#"<?xml version="1.0" standalone="no"?>
<mlt version="7.9.0">
  <profile width="1920" height="1080"/>
  <playlist id="p0">
    <property name="shotcut:name">V1 &amp; V2</property>
    <blank length="00:00:01.000"/>
  </playlist>
  <!-- keep me -->
  <tractor id="t0"/>
</mlt>"#;
    let doc = parse_document(input).unwrap();
    let bytes = write_document(&doc).unwrap();
    let reparsed = parse_document(std::str::from_utf8(&bytes).unwrap()).unwrap();
    assert_eq!(doc, reparsed);
}

#[test]
fn serialization_is_deterministic() {
    let doc = parse_document(r#"<mlt><tractor id="t"/></mlt>"#).unwrap();
    assert_eq!(write_document(&doc).unwrap(), write_document(&doc).unwrap());
}

#[test]
fn childless_elements_self_close() {
    let doc = parse_document(r#"<mlt><blank length="0"></blank></mlt>"#).unwrap();
    let out = String::from_utf8(write_document(&doc).unwrap()).unwrap();
    assert!(out.contains(r#"<blank length="0"/>"#));
}

#[test]
fn text_is_escaped_on_write() {
    let doc = XmlDocument {
        decl: None,
        doctype: None,
        root: XmlElement::new("property")
            .with_attr("name", "caption")
            .with_text("a < b & c"),
    };
    let out = String::from_utf8(write_document(&doc).unwrap()).unwrap();
    assert!(out.contains("a &lt; b &amp; c"));
}
