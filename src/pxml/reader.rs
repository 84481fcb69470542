//! Decoding of PXML drawing documents.
//!
//! The reader is an event-driven scan over the document: elements directly
//! under the root are dispatched on their tag name (`dot`, `line`, `rect`)
//! and rebuilt into shapes; anything else, including the whole subtree of an
//! unrecognized element, is skipped.

use crate::common::{Error, Result};
use crate::model::Shape;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Decode a drawing document into its ordered shape sequence.
///
/// Child elements of the root are visited in document order. A recognized
/// tag with a missing or non-integer required attribute fails with
/// [`Error::InvalidAttribute`]; an unrecognized tag is skipped together with
/// its content. Whitespace and attribute order are insignificant. Duplicate
/// attributes on one element are rejected by the underlying parser and
/// surface as [`Error::MalformedDocument`].
///
/// Decoding never touches a [`Drawing`](crate::model::Drawing): the caller
/// adopts the returned sequence via `replace_all` only on success, which is
/// what makes a failed load side-effect free.
///
/// # Examples
///
/// ```
/// use vellum::model::Shape;
///
/// let shapes = vellum::pxml::decode(
///     r#"<drawing>
///   <dot x="12" y="34"/>
///   <line x1="1" y1="2" x2="3" y2="4"/>
/// </drawing>"#,
/// )?;
/// assert_eq!(shapes.len(), 2);
/// assert_eq!(shapes[0], Shape::Dot { x: 12, y: 34 });
/// # Ok::<(), vellum::Error>(())
/// ```
pub fn decode(text: &str) -> Result<Vec<Shape>> {
    let mut reader = Reader::from_str(text);
    let mut buf = Vec::new();

    let mut shapes = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                saw_root = true;
                if depth == 1
                    && let Some(shape) = parse_shape(e)?
                {
                    shapes.push(shape);
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                saw_root = true;
                if depth == 1
                    && let Some(shape) = parse_shape(e)?
                {
                    shapes.push(shape);
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(Error::MalformedDocument(
            "unexpected end of document".to_string(),
        ));
    }
    if !saw_root {
        return Err(Error::MalformedDocument("no root element".to_string()));
    }

    Ok(shapes)
}

/// Read and decode a drawing document from a file.
///
/// The file handle is scoped to the read and released on every exit path;
/// file-system failure surfaces as [`Error::Io`], distinct from the parse
/// errors.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Vec<Shape>> {
    let text = std::fs::read_to_string(path)?;
    decode(&text)
}

/// Rebuild one shape from an element, dispatching on its tag name.
///
/// Returns `Ok(None)` for an unrecognized tag.
fn parse_shape(e: &BytesStart) -> Result<Option<Shape>> {
    match e.name().as_ref() {
        b"dot" => parse_dot(e).map(Some),
        b"line" => parse_line(e).map(Some),
        b"rect" => parse_rect(e).map(Some),
        _ => Ok(None),
    }
}

fn parse_dot(e: &BytesStart) -> Result<Shape> {
    let mut x = None;
    let mut y = None;

    for attr_result in e.attributes() {
        let attr = attr_result?;
        match attr.key.as_ref() {
            b"x" => x = Some(parse_coord("dot", "x", &attr.value)?),
            b"y" => y = Some(parse_coord("dot", "y", &attr.value)?),
            _ => {}
        }
    }

    Ok(Shape::Dot {
        x: require("dot", "x", x)?,
        y: require("dot", "y", y)?,
    })
}

fn parse_line(e: &BytesStart) -> Result<Shape> {
    let mut x1 = None;
    let mut y1 = None;
    let mut x2 = None;
    let mut y2 = None;

    for attr_result in e.attributes() {
        let attr = attr_result?;
        match attr.key.as_ref() {
            b"x1" => x1 = Some(parse_coord("line", "x1", &attr.value)?),
            b"y1" => y1 = Some(parse_coord("line", "y1", &attr.value)?),
            b"x2" => x2 = Some(parse_coord("line", "x2", &attr.value)?),
            b"y2" => y2 = Some(parse_coord("line", "y2", &attr.value)?),
            _ => {}
        }
    }

    Ok(Shape::Line {
        x1: require("line", "x1", x1)?,
        y1: require("line", "y1", y1)?,
        x2: require("line", "x2", x2)?,
        y2: require("line", "y2", y2)?,
    })
}

fn parse_rect(e: &BytesStart) -> Result<Shape> {
    let mut x = None;
    let mut y = None;
    let mut width = None;
    let mut height = None;

    for attr_result in e.attributes() {
        let attr = attr_result?;
        match attr.key.as_ref() {
            b"x" => x = Some(parse_coord("rect", "x", &attr.value)?),
            b"y" => y = Some(parse_coord("rect", "y", &attr.value)?),
            b"width" => width = Some(parse_coord("rect", "width", &attr.value)?),
            b"height" => height = Some(parse_coord("rect", "height", &attr.value)?),
            _ => {}
        }
    }

    Ok(Shape::Rect {
        x: require("rect", "x", x)?,
        y: require("rect", "y", y)?,
        width: require("rect", "width", width)?,
        height: require("rect", "height", height)?,
    })
}

/// Parse one attribute value as a base-10 integer
fn parse_coord(tag: &str, name: &str, raw: &[u8]) -> Result<i32> {
    atoi_simd::parse(raw).map_err(|_| {
        Error::InvalidAttribute(format!(
            "<{}> attribute '{}' is not an integer: '{}'",
            tag,
            name,
            String::from_utf8_lossy(raw)
        ))
    })
}

fn require(tag: &str, name: &str, value: Option<i32>) -> Result<i32> {
    value.ok_or_else(|| {
        Error::InvalidAttribute(format!("<{}> is missing attribute '{}'", tag, name))
    })
}
