use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::foundation::error::{GridcutError, GridcutResult};
use crate::xml::tree::{XmlDeclaration, XmlDocument, XmlElement, XmlNode};

/// Parse a complete XML document into an owned tree.
///
/// Attributes, text, comments, the XML declaration, and the DOCTYPE are all
/// preserved; indentation whitespace around text is trimmed, which drops
/// whitespace-only text between elements.
pub fn parse_document(input: &str) -> GridcutResult<XmlDocument> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut decl = None;
    let mut doctype = None;
    let mut root: Option<XmlElement> = None;
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Decl(d) => {
                let version = String::from_utf8_lossy(d.version()?.as_ref()).into_owned();
                let encoding = match d.encoding() {
                    Some(enc) => Some(
                        String::from_utf8_lossy(enc.map_err(quick_xml::Error::from)?.as_ref())
                            .into_owned(),
                    ),
                    None => None,
                };
                let standalone = match d.standalone() {
                    Some(sa) => Some(
                        String::from_utf8_lossy(sa.map_err(quick_xml::Error::from)?.as_ref())
                            .into_owned(),
                    ),
                    None => None,
                };
                decl = Some(XmlDeclaration {
                    version,
                    encoding,
                    standalone,
                });
            }
            Event::DocType(t) => {
                doctype = Some(String::from_utf8_lossy(&t).trim().to_string());
            }
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let el = element_from(&start)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                // quick-xml has already verified the close tag name matches.
                let el = stack.pop().ok_or_else(|| {
                    GridcutError::malformed_project("close tag without matching open tag")
                })?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(t) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push(XmlNode::Text(t.unescape()?.into_owned()));
                }
            }
            Event::CData(c) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push(XmlNode::Text(String::from_utf8_lossy(&c).into_owned()));
                }
            }
            Event::Comment(c) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push(XmlNode::Comment(String::from_utf8_lossy(&c).into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(GridcutError::malformed_project(
            "unclosed element at end of document",
        ));
    }
    let root = root
        .ok_or_else(|| GridcutError::malformed_project("document has no root element"))?;
    Ok(XmlDocument {
        decl,
        doctype,
        root,
    })
}

fn element_from(start: &BytesStart<'_>) -> GridcutResult<XmlElement> {
    let mut el = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        el.set_attr(key, value);
    }
    Ok(el)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    el: XmlElement,
) -> GridcutResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_element(el);
        return Ok(());
    }
    if root.is_some() {
        return Err(GridcutError::malformed_project("more than one root element"));
    }
    *root = Some(el);
    Ok(())
}
