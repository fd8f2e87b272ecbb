#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table: header line, dashed rule, rows.
///
/// Numeric cells are right-aligned, everything else left-aligned. When
/// `max_width` is set, the widest columns are shrunk first and overflowing
/// cells are truncated with an ellipsis.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("", String::as_str);
                let text = truncate_text(value, *width);
                let numeric = looks_numeric(&text);
                pad(&text, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let header_line = if options.color {
        format!("\u{1b}[1m{}\u{1b}[0m", header_line.trim_end())
    } else {
        header_line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(rule);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        // Shrink the widest column that is still wider than its header.
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(1))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<Vec<String>> {
        pairs
            .iter()
            .map(|(a, b)| vec![(*a).to_string(), (*b).to_string()])
            .collect()
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let table = render_table(
            &["position", "performance"],
            &rows(&[("Frontend Developer", "4.35"), ("Backend Developer", "4.6")]),
            TableOptions::default(),
        );

        assert_eq!(
            table,
            [
                "position            performance",
                "------------------  -----------",
                "Frontend Developer         4.35",
                "Backend Developer           4.6",
            ]
            .join("\n")
        );
    }

    #[test]
    fn empty_rows_render_headers_only() {
        let table = render_table(&["position", "performance"], &[], TableOptions::default());
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("position  performance"));
    }

    #[test]
    fn max_width_truncates_widest_column() {
        let table = render_table(
            &["position", "performance"],
            &rows(&[("Senior Principal Staff Engineer", "4.5")]),
            TableOptions {
                max_width: Some(25),
                color: false,
            },
        );

        for line in table.lines() {
            assert!(line.chars().count() <= 25, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_header_in_bold() {
        let table = render_table(
            &["position", "performance"],
            &rows(&[("QA", "3")]),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.starts_with("\u{1b}[1mposition"));
        assert!(!table.lines().nth(2).unwrap().contains('\u{1b}'));
    }
}
