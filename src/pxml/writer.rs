//! Encoding of drawings into PXML documents.
//!
//! Output is built directly into a string buffer; integer attributes are
//! formatted with `itoa` to avoid per-value allocations. The layout is
//! stable (two-space indentation, one self-closing child per shape) but
//! carries no meaning on decode.

use crate::common::Result;
use crate::model::{Drawing, Shape};
use std::path::{Path, PathBuf};

/// Encode a drawing as a PXML document.
///
/// Children appear in drawing order under a single `<drawing>` root.
/// Attribute values are plain decimal integers, so no escaping is needed.
///
/// # Examples
///
/// ```
/// use vellum::model::{Drawing, Shape};
///
/// let mut drawing = Drawing::new();
/// drawing.append(Shape::Dot { x: 12, y: 34 });
/// assert_eq!(
///     vellum::pxml::encode(&drawing),
///     "<drawing>\n  <dot x=\"12\" y=\"34\"/>\n</drawing>\n"
/// );
/// ```
pub fn encode(drawing: &Drawing) -> String {
    let mut buf = String::with_capacity(24 + drawing.len() * 48);
    buf.push_str("<drawing>\n");

    for shape in drawing {
        buf.push_str("  ");
        match *shape {
            Shape::Dot { x, y } => {
                buf.push_str("<dot");
                write_attr(&mut buf, "x", x);
                write_attr(&mut buf, "y", y);
            }
            Shape::Line { x1, y1, x2, y2 } => {
                buf.push_str("<line");
                write_attr(&mut buf, "x1", x1);
                write_attr(&mut buf, "y1", y1);
                write_attr(&mut buf, "x2", x2);
                write_attr(&mut buf, "y2", y2);
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => {
                buf.push_str("<rect");
                write_attr(&mut buf, "x", x);
                write_attr(&mut buf, "y", y);
                write_attr(&mut buf, "width", width);
                write_attr(&mut buf, "height", height);
            }
        }
        buf.push_str("/>\n");
    }

    buf.push_str("</drawing>\n");
    buf
}

/// Encode a drawing and write it to a file.
///
/// The file handle is scoped to the write and released on every exit path.
/// A write failure may leave a partial file behind; callers wanting stronger
/// guarantees should write to a temporary path and rename on success.
pub fn encode_to_file<P: AsRef<Path>>(path: P, drawing: &Drawing) -> Result<()> {
    std::fs::write(path, encode(drawing))?;
    Ok(())
}

/// Append the `.pxml` extension when the user-supplied name lacks it.
///
/// Matches the save dialog flow: `sketch` becomes `sketch.pxml`, and a name
/// with a different extension is appended to rather than rewritten
/// (`sketch.txt` becomes `sketch.txt.pxml`).
pub fn with_pxml_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "pxml") {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".pxml");
        PathBuf::from(name)
    }
}

/// Write one ` name="value"` attribute pair
fn write_attr(buf: &mut String, name: &str, value: i32) {
    let mut itoa_buf = itoa::Buffer::new();
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    buf.push_str(itoa_buf.format(value));
    buf.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_drawing() {
        assert_eq!(encode(&Drawing::new()), "<drawing>\n</drawing>\n");
    }

    #[test]
    fn test_encode_mixed_drawing() {
        let drawing: Drawing = [
            Shape::Dot { x: 12, y: 34 },
            Shape::Line {
                x1: 1,
                y1: 2,
                x2: 3,
                y2: 4,
            },
            Shape::Rect {
                x: 5,
                y: 5,
                width: 10,
                height: 20,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(
            encode(&drawing),
            "<drawing>\n\
             \x20 <dot x=\"12\" y=\"34\"/>\n\
             \x20 <line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\"/>\n\
             \x20 <rect x=\"5\" y=\"5\" width=\"10\" height=\"20\"/>\n\
             </drawing>\n"
        );
    }

    #[test]
    fn test_encode_negative_coordinates() {
        let drawing: Drawing = [Shape::Dot { x: -7, y: 0 }].into_iter().collect();
        assert!(encode(&drawing).contains("<dot x=\"-7\" y=\"0\"/>"));
    }

    #[test]
    fn test_with_pxml_extension_appends_when_missing() {
        assert_eq!(with_pxml_extension("sketch"), PathBuf::from("sketch.pxml"));
        assert_eq!(
            with_pxml_extension("dir/sketch"),
            PathBuf::from("dir/sketch.pxml")
        );
    }

    #[test]
    fn test_with_pxml_extension_keeps_existing() {
        assert_eq!(
            with_pxml_extension("sketch.pxml"),
            PathBuf::from("sketch.pxml")
        );
    }

    #[test]
    fn test_with_pxml_extension_appends_to_other_extensions() {
        assert_eq!(
            with_pxml_extension("sketch.txt"),
            PathBuf::from("sketch.txt.pxml")
        );
    }
}
