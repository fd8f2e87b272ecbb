use std::io::IsTerminal;

use roster_config::OutputConfig;
use roster_core::responses::ReportResponse;

use crate::cli::OutputFormat;

pub mod table;

/// Table preferences from config, adjusted for the current terminal.
///
/// Color needs a TTY and no `NO_COLOR`; width falls back to `COLUMNS`.
#[must_use]
pub fn table_options(config: &OutputConfig) -> table::TableOptions {
    let is_tty = std::io::stdout().is_terminal();
    let max_width = config.max_width.or_else(|| {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40)
    });

    table::TableOptions {
        max_width,
        color: config.color && is_tty && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Render a report response in the requested format.
pub fn render(
    response: &ReportResponse,
    format: OutputFormat,
    options: table::TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Raw => Ok(serde_json::to_string(response)?),
        OutputFormat::Table => {
            let headers = response.headers.each_ref().map(String::as_str);
            Ok(table::render_table(
                &headers,
                &response.table_rows(),
                options,
            ))
        }
    }
}

/// Print a report response to stdout in the requested format.
pub fn output(
    response: &ReportResponse,
    format: OutputFormat,
    options: table::TableOptions,
) -> anyhow::Result<()> {
    let rendered = render(response, format, options)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use super::*;

    fn response() -> ReportResponse {
        let mut rows = IndexMap::new();
        rows.insert("Frontend Developer".to_string(), 4.35);
        rows.insert("Backend Developer".to_string(), 4.6);
        ReportResponse::new("performance", ["position", "performance"], rows)
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&response(), OutputFormat::Json, table::TableOptions::default())
            .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["report"], "performance");
        assert_eq!(parsed["headers"][0], "position");
        assert_eq!(parsed["rows"]["Backend Developer"], 4.6);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&response(), OutputFormat::Raw, table::TableOptions::default())
            .expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_every_group_in_order() {
        let out = render(&response(), OutputFormat::Table, table::TableOptions::default())
            .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("position") && lines[0].contains("performance"));
        assert!(lines[2].starts_with("Frontend Developer"));
        assert!(lines[3].starts_with("Backend Developer"));
    }
}
