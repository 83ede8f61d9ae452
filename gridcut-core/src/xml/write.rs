use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::foundation::error::GridcutResult;
use crate::xml::tree::{XmlDocument, XmlElement, XmlNode};

// Two-space indent, matching what Shotcut itself writes.
const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 2;

/// Serialize a document tree to bytes.
///
/// Output is deterministic: the same tree always serializes to the same
/// bytes.
pub fn write_document(doc: &XmlDocument) -> GridcutResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), INDENT_CHAR, INDENT_SIZE);
    if let Some(decl) = &doc.decl {
        writer.write_event(Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))?;
    }
    if let Some(doctype) = &doc.doctype {
        writer.write_event(Event::DocType(BytesText::from_escaped(doctype.as_str())))?;
    }
    write_element(&mut writer, &doc.root)?;
    Ok(writer.into_inner().into_inner())
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &XmlElement) -> GridcutResult<()> {
    let mut start = BytesStart::new(el.name());
    for (name, value) in el.attrs() {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    if el.children().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    for child in el.children() {
        match child {
            XmlNode::Element(inner) => write_element(writer, inner)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            XmlNode::Comment(text) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(el.name())))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/xml/write.rs"]
mod tests;
