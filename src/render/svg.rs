use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::boundary::Boundary;
use crate::geometry::Viewport;
use crate::grid::Hexagon;

/// Write the tiled map as a standalone SVG document.
///
/// One `<path>` per boundary ring (outline only) and one `<polygon>` per
/// hexagon. Each polygon carries its positional `id` and its sequence
/// number in `data-seq`, which is what a presentation layer resolves click
/// events against.
pub fn write_svg(
    path: &Path,
    viewport: &Viewport,
    boundary: &Boundary,
    hexagons: &[Hexagon],
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{:.0}" height="{:.0}">"#,
        viewport.width_px, viewport.height_px, viewport.width_px, viewport.height_px
    )?;

    writeln!(
        writer,
        r##"  <g fill="none" stroke="#888" stroke-width="1">"##
    )?;
    for ring in boundary.rings() {
        write_ring_path(&mut writer, viewport, ring)?;
    }
    writeln!(writer, "  </g>")?;

    writeln!(
        writer,
        r##"  <g fill="#e8e8e8" stroke="#555" stroke-width="0.5">"##
    )?;
    for hex in hexagons {
        write!(
            writer,
            r#"    <polygon id="{}" data-seq="{}" points=""#,
            hex.id, hex.sequence_number
        )?;
        for (i, (x, y)) in hex.corners.iter().enumerate() {
            if i > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{:.2},{:.2}", x, y)?;
        }
        writeln!(writer, r#""/>"#)?;
    }
    writeln!(writer, "  </g>")?;

    writeln!(writer, "</svg>")?;
    writer.flush()?;

    Ok(())
}

fn write_ring_path<W: Write>(writer: &mut W, viewport: &Viewport, ring: &[(f64, f64)]) -> Result<()> {
    if ring.is_empty() {
        return Ok(());
    }
    write!(writer, r#"    <path d=""#)?;
    for (i, &(lon, lat)) in ring.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        write!(
            writer,
            "{}{:.2} {:.2}",
            cmd,
            viewport.x_of(lon),
            viewport.y_of(lat)
        )?;
    }
    writeln!(writer, r#"Z"/>"#)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hex_corners;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> (Viewport, Boundary, Vec<Hexagon>) {
        let boundary = Boundary::new(vec![vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ]]);
        let viewport = Viewport::fit(&boundary, 900.0);
        let hexagons = vec![
            Hexagon {
                id: "hex-1-1".to_string(),
                sequence_number: 1,
                corners: hex_corners(100.0, 100.0, 40.0),
                center_x: 100.0,
                center_y: 100.0,
            },
            Hexagon {
                id: "hex-1-2".to_string(),
                sequence_number: 2,
                corners: hex_corners(170.0, 100.0, 40.0),
                center_x: 170.0,
                center_y: 100.0,
            },
        ];
        (viewport, boundary, hexagons)
    }

    #[test]
    fn test_write_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("map.svg");
        let (viewport, boundary, hexagons) = sample();

        write_svg(&path, &viewport, &boundary, &hexagons).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<svg"));
        assert!(contents.trim_end().ends_with("</svg>"));
        assert_eq!(contents.matches("<polygon").count(), 2);
        assert_eq!(contents.matches("<path").count(), 1);
        assert!(contents.contains(r#"id="hex-1-2""#));
        assert!(contents.contains(r#"data-seq="2""#));
    }

    #[test]
    fn test_write_svg_no_hexagons() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let (viewport, boundary, _) = sample();

        write_svg(&path, &viewport, &boundary, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("<polygon"));
        assert!(contents.contains("<path"));
    }
}
