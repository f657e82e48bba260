//! Minimal owned XML tree for markup-format responses.

use quick_xml::escape::{escape, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// An XML element with its attributes, text content and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly inside this element.
    /// Whitespace-only text between child elements is dropped.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text content of the first child named `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlElement::text)
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize this element and its subtree back to markup.
    ///
    /// Text is written before the children, so interleaved mixed content is
    /// not reproduced in its original order.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        out.push('>');
        out.push_str(&escape(self.text.as_str()));
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    /// Remove and return the first child with the given tag name.
    pub fn take_child(&mut self, name: &str) -> Option<XmlElement> {
        let idx = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(idx))
    }
}

/// Parse a document into its root element.
///
/// Errors are returned as a human-readable reason.
pub(crate) fn parse_document(body: &[u8]) -> Result<XmlElement, String> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf).map_err(|e| e.to_string())? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or("unexpected closing tag")?;
                if element.text.trim().is_empty() {
                    element.text.clear();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let raw = std::str::from_utf8(&text).map_err(|e| e.to_string())?;
                let unescaped = unescape(raw).map_err(|e| e.to_string())?;
                push_text(&mut stack, &unescaped);
            }
            Event::CData(cdata) => {
                let raw = std::str::from_utf8(&cdata).map_err(|e| e.to_string())?;
                push_text(&mut stack, raw);
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(&reference).map_err(|e| e.to_string())?;
                let entity = format!("&{name};");
                let resolved = unescape(&entity).map_err(|e| e.to_string())?;
                push_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(format!("unclosed element <{}>", open.name));
    }
    root.ok_or_else(|| "document has no root element".to_string())
}

fn open_element(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| e.to_string())?
        .to_string();

    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| e.to_string())?;
        let raw = std::str::from_utf8(&attr.value).map_err(|e| e.to_string())?;
        let value = unescape(raw).map_err(|e| e.to_string())?;
        element
            .attributes
            .push((key.to_string(), value.into_owned()));
    }
    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err("multiple root elements".to_string()),
    }
    Ok(())
}

// Text outside the root element (prolog whitespace) has nowhere to go.
fn push_text(stack: &mut [XmlElement], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let doc = br#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <status_code>200</status_code>
    <data>
        <entry kind="short"><url>http://bit.ly/abc</url></entry>
        <entry kind="long"><url>http://example.com/</url></entry>
    </data>
</response>"#;

        let root = parse_document(doc).unwrap();
        assert_eq!(root.name, "response");
        assert_eq!(root.text, "");
        assert_eq!(root.child_text("status_code"), Some("200"));

        let data = root.child("data").unwrap();
        let entries: Vec<_> = data.children_named("entry").collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].attribute("kind"), Some("short"));
        assert_eq!(entries[1].child_text("url"), Some("http://example.com/"));
    }

    #[test]
    fn test_entities_are_unescaped() {
        let doc = b"<r><t>a &amp; b &lt;c&gt; &#65;</t><u v=\"x&quot;y\"/></r>";
        let root = parse_document(doc).unwrap();
        assert_eq!(root.child_text("t"), Some("a & b <c> A"));
        assert_eq!(root.child("u").unwrap().attribute("v"), Some("x\"y"));
    }

    #[test]
    fn test_cdata_is_kept_verbatim() {
        let root = parse_document(b"<r><![CDATA[<raw> & text]]></r>").unwrap();
        assert_eq!(root.text, "<raw> & text");
    }

    #[test]
    fn test_take_child() {
        let mut root = parse_document(b"<r><a>1</a><b>2</b></r>").unwrap();
        let a = root.take_child("a").unwrap();
        assert_eq!(a.text, "1");
        assert!(root.child("a").is_none());
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_to_xml_escapes_and_reparses() {
        let doc = b"<data><t>a &amp; b</t><u v=\"x&quot;y\"/></data>";
        let root = parse_document(doc).unwrap();

        let markup = root.to_xml();
        assert_eq!(markup, "<data><t>a &amp; b</t><u v=\"x&quot;y\"></u></data>");
        assert_eq!(parse_document(markup.as_bytes()).unwrap(), root);
    }

    #[test]
    fn test_rejects_broken_documents() {
        assert!(parse_document(b"").is_err());
        assert!(parse_document(b"<r><a></r>").is_err());
        assert!(parse_document(b"<r>").is_err());
        assert!(parse_document(b"not xml at all").is_err());
    }
}
