use std::fs;
use std::path::Path;

use log::info;

use crate::encoding::encodingerror::EncodingError;
use crate::fixture::testcase::FixedSegment;
use crate::math::fixedpoint::fixedpoint::FixedPoint;

/// One row per segment: `c3,c2,c1,c0,x_start,x_end` as plain integers.
pub fn render_segments(segments: &[FixedSegment]) -> String {
    let mut table = String::new();
    for segment in segments {
        let row: Vec<String> = segment.fields().iter().map(|field| field.to_string()).collect();
        table.push_str(&row.join(","));
        table.push('\n');
    }
    table
}

/// Writes the whole table in one call once it is fully rendered.
pub fn write_segments(path: &Path, segments: &[FixedSegment]) -> Result<(), EncodingError> {
    let table = render_segments(segments);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, table)?;
    info!("wrote {} segments to {}", segments.len(), path.display());
    Ok(())
}

pub fn parse_segments(table: &str) -> Result<Vec<FixedSegment>, EncodingError> {
    table
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(row, line)| parse_row(row, line))
        .collect()
}

pub fn read_segments(path: &Path) -> Result<Vec<FixedSegment>, EncodingError> {
    let table = fs::read_to_string(path)?;
    parse_segments(&table)
}

fn parse_row(row: usize, line: &str) -> Result<FixedSegment, EncodingError> {
    let fields = line
        .split(',')
        .enumerate()
        .map(|(field, text)| {
            text.parse::<FixedPoint>()
                .map_err(|source| EncodingError::MalformedField { row, field, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [d, c, b, a, x_start, x_end]: [FixedPoint; 6] = fields
        .try_into()
        .map_err(|fields: Vec<FixedPoint>| EncodingError::FieldCount { row, found: fields.len() })?;
    Ok(FixedSegment::new([d, c, b, a], x_start, x_end))
}
