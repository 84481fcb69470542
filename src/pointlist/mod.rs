//! The point-only document variant of the simple drawing editor.
//!
//! Documents hold nothing but `<point x=".." y=".."/>` elements under a
//! `<drawing>` root, and the editor saves to a fixed file name. Unlike the
//! PXML decoder, the scan matches `point` elements at any depth and ignores
//! every other tag, `dot`/`line`/`rect` included.

use crate::common::{Error, Result};
use crate::model::Point;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Fixed file name the point-only editor saves to and loads from.
pub const DEFAULT_FILE_NAME: &str = "drawing.xml";

/// Encode a point list as a markup document.
///
/// # Examples
///
/// ```
/// use vellum::model::Point;
///
/// let text = vellum::pointlist::encode(&[Point::new(12, 34)]);
/// assert_eq!(text, "<drawing>\n  <point x=\"12\" y=\"34\"/>\n</drawing>\n");
/// ```
pub fn encode(points: &[Point]) -> String {
    let mut itoa_buf = itoa::Buffer::new();
    let mut buf = String::with_capacity(24 + points.len() * 28);
    buf.push_str("<drawing>\n");

    for point in points {
        buf.push_str("  <point x=\"");
        buf.push_str(itoa_buf.format(point.x));
        buf.push_str("\" y=\"");
        buf.push_str(itoa_buf.format(point.y));
        buf.push_str("\"/>\n");
    }

    buf.push_str("</drawing>\n");
    buf
}

/// Decode the point list of a markup document.
///
/// Only `point` elements are recognized; all other tags are ignored without
/// error. A `point` with a missing or non-integer coordinate fails with
/// [`Error::InvalidAttribute`]; a document that is not well-formed fails
/// with [`Error::MalformedDocument`].
pub fn decode(text: &str) -> Result<Vec<Point>> {
    let mut reader = Reader::from_str(text);
    let mut buf = Vec::new();

    let mut points = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                saw_root = true;
                if e.name().as_ref() == b"point" {
                    points.push(parse_point(e)?);
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                saw_root = true;
                if e.name().as_ref() == b"point" {
                    points.push(parse_point(e)?);
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

    Ok(points)
}

/// Read and decode a point-list document from a file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    decode(&text)
}

/// Encode a point list and write it to a file.
pub fn encode_to_file<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<()> {
    std::fs::write(path, encode(points))?;
    Ok(())
}

fn parse_point(e: &BytesStart) -> Result<Point> {
    let mut x = None;
    let mut y = None;

    for attr_result in e.attributes() {
        let attr = attr_result?;
        match attr.key.as_ref() {
            b"x" => x = Some(parse_coord("x", &attr.value)?),
            b"y" => y = Some(parse_coord("y", &attr.value)?),
            _ => {}
        }
    }

    match (x, y) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        (None, _) => Err(missing("x")),
        (_, None) => Err(missing("y")),
    }
}

fn parse_coord(name: &str, raw: &[u8]) -> Result<i32> {
    atoi_simd::parse(raw).map_err(|_| {
        Error::InvalidAttribute(format!(
            "<point> attribute '{}' is not an integer: '{}'",
            name,
            String::from_utf8_lossy(raw)
        ))
    })
}

fn missing(name: &str) -> Error {
    Error::InvalidAttribute(format!("<point> is missing attribute '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_points() {
        let points = vec![Point::new(0, 0), Point::new(-5, 17), Point::new(399, 1)];
        assert_eq!(decode(&encode(&points)).unwrap(), points);
    }

    #[test]
    fn test_roundtrip_empty() {
        assert_eq!(decode(&encode(&[])).unwrap(), vec![]);
    }

    #[test]
    fn test_decode_ignores_every_other_tag() {
        let text = r#"<drawing>
  <dot x="1" y="2"/>
  <point x="3" y="4"/>
  <rect x="0" y="0" width="9" height="9"/>
  <foo/>
</drawing>"#;
        assert_eq!(decode(text).unwrap(), vec![Point::new(3, 4)]);
    }

    #[test]
    fn test_decode_matches_points_at_any_depth() {
        let text = r#"<drawing><group><point x="1" y="2"/></group></drawing>"#;
        assert_eq!(decode(text).unwrap(), vec![Point::new(1, 2)]);
    }

    #[test]
    fn test_decode_bad_coordinate_is_invalid() {
        assert!(matches!(
            decode(r#"<drawing><point x="one" y="2"/></drawing>"#),
            Err(Error::InvalidAttribute(_))
        ));
        assert!(matches!(
            decode(r#"<drawing><point y="2"/></drawing>"#),
            Err(Error::InvalidAttribute(_))
        ));
    }

    #[test]
    fn test_decode_truncated_document_is_malformed() {
        assert!(matches!(
            decode(r#"<drawing><point x="1"#),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_file_roundtrip_with_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let points = vec![Point::new(12, 34), Point::new(56, 78)];
        encode_to_file(&path, &points).unwrap();
        assert_eq!(decode_file(&path).unwrap(), points);
    }

    #[test]
    fn test_decode_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(dir.path().join(DEFAULT_FILE_NAME)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
