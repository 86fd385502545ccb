//! Plain-text table rendering for list output.

use std::fmt::Write;

/// Renders left-aligned columns with a dashed rule under the header.
pub(crate) fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths, ' ');
    push_line(&mut out, headers.iter().map(|_| ""), &widths, '-');
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths, ' ');
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize], fill: char) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(fill).take(pad));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}
