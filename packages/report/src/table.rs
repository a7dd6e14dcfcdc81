//! HTML table of the most damaging event categories.
//!
//! Produces a single self-contained HTML file with inline CSS. The footer
//! row carries grand totals over every category, not only the rows shown.

use std::fmt::Write as _;

use storm_damage_analytics_models::{CategorySummary, SummaryTotals};

use crate::format::{escape_html, format_currency, format_thousands};

/// Renders the damage table document.
#[must_use]
pub fn render_damage_table(
    summaries: &[CategorySummary],
    totals: &SummaryTotals,
    title: &str,
) -> String {
    let title = escape_html(title);
    let mut html = String::with_capacity(4096 + summaries.len() * 256);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    writeln!(html, "<title>{title}</title>").unwrap();
    html.push_str("<style>\n");
    html.push_str(INLINE_CSS);
    html.push_str("</style>\n</head>\n<body>\n");
    writeln!(html, "<h1>{title}</h1>").unwrap();

    html.push_str("<table>\n<thead><tr>");
    for heading in [
        "#",
        "Event type",
        "Observations",
        "Fatalities",
        "Injuries",
        "Total damage",
    ] {
        write!(html, "<th>{heading}</th>").unwrap();
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (rank, summary) in summaries.iter().enumerate() {
        writeln!(
            html,
            "<tr><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            rank + 1,
            escape_html(&summary.category),
            format_thousands(summary.observation_count),
            format_thousands(summary.fatalities),
            format_thousands(summary.injuries),
            format_currency(summary.total_damage),
        )
        .unwrap();
    }

    html.push_str("</tbody>\n<tfoot>\n");
    writeln!(
        html,
        "<tr><td></td><td>All categories</td><td class=\"num\">{}</td>\
         <td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
        format_thousands(totals.observation_count),
        format_thousands(totals.fatalities),
        format_thousands(totals.injuries),
        format_currency(totals.total_damage),
    )
    .unwrap();
    html.push_str("</tfoot>\n</table>\n</body>\n</html>\n");

    html
}

const INLINE_CSS: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }
h1 { font-size: 1.4em; }
table { border-collapse: collapse; }
th, td { padding: 4px 12px; border-bottom: 1px solid #ddd; text-align: left; }
th { background: #f2f2f2; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
tfoot td { font-weight: bold; border-top: 2px solid #999; }
";
