/// One node in an element's ordered child list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element.
    Element(XmlElement),
    /// Character data, stored unescaped.
    Text(String),
    /// A comment, stored without the `<!--`/`-->` markers.
    Comment(String),
}

/// An XML element: name, ordered attributes, ordered children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Builder-style [`set_attr`](Self::set_attr).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text child append.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Ordered attribute list.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Ordered child list.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Append a child node.
    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Append a child element.
    pub fn push_element(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Insert a child element at `index`, shifting later children right.
    pub fn insert_element(&mut self, index: usize, child: XmlElement) {
        self.children.insert(index, XmlNode::Element(child));
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Child elements with the given name, in document order.
    pub fn elements_named<'s, 'n>(
        &'s self,
        name: &'n str,
    ) -> impl Iterator<Item = &'s XmlElement> {
        self.elements().filter(move |el| el.name == name)
    }

    /// First child element with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.elements_named(name).next()
    }

    /// Mutable first child element with the given name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find_map(|node| match node {
            XmlNode::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Index of the first child element with the given name in the child
    /// list, counting non-element nodes.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, XmlNode::Element(el) if el.name == name))
    }

    /// Concatenated content of direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// The `<?xml ...?>` declaration of a parsed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDeclaration {
    /// XML version string, normally `1.0`.
    pub version: String,
    /// Declared encoding, if any.
    pub encoding: Option<String>,
    /// Declared standalone flag, if any.
    pub standalone: Option<String>,
}

/// A full XML document: optional prologue plus one root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    /// XML declaration, preserved from the input when present.
    pub decl: Option<XmlDeclaration>,
    /// DOCTYPE content, preserved from the input when present.
    pub doctype: Option<String>,
    /// Document root element.
    pub root: XmlElement,
}
