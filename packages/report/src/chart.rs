//! SVG horizontal bar chart of casualties per category.
//!
//! Produces a standalone SVG document: category labels on the left, one
//! bar per summary scaled to fatalities plus injuries, and the value
//! printed at the end of each bar.

use std::fmt::Write as _;

use storm_damage_analytics_models::CategorySummary;

use crate::format::{escape_html, format_thousands};

const WIDTH: u32 = 900;
const LABEL_WIDTH: u32 = 220;
const VALUE_MARGIN: u32 = 90;
const TITLE_HEIGHT: u32 = 50;
const AXIS_HEIGHT: u32 = 40;
const ROW_HEIGHT: u32 = 26;
const BAR_GAP: u32 = 6;
const BAR_COLOR: &str = "#b8433a";

/// Renders a casualty bar chart, one bar per summary in the given order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_casualty_chart(summaries: &[CategorySummary], title: &str) -> String {
    let rows = u32::try_from(summaries.len()).unwrap_or(u32::MAX);
    let height = TITLE_HEIGHT + rows.saturating_mul(ROW_HEIGHT) + AXIS_HEIGHT;
    let bar_area = f64::from(WIDTH - LABEL_WIDTH - VALUE_MARGIN);
    let max = summaries
        .iter()
        .map(CategorySummary::casualties)
        .max()
        .unwrap_or(0);

    let mut svg = String::with_capacity(1024 + summaries.len() * 256);

    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{height}\" \
         viewBox=\"0 0 {WIDTH} {height}\" font-family=\"sans-serif\" font-size=\"12\">"
    )
    .unwrap();
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    writeln!(
        svg,
        "<text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>",
        WIDTH / 2,
        escape_html(title)
    )
    .unwrap();

    let mut y = TITLE_HEIGHT;
    for summary in summaries {
        let casualties = summary.casualties();
        let length = if max == 0 {
            0.0
        } else {
            casualties as f64 / max as f64 * bar_area
        };
        let label = escape_html(&summary.category);
        let center = y + ROW_HEIGHT / 2;

        writeln!(
            svg,
            "<text x=\"{}\" y=\"{center}\" text-anchor=\"end\" dominant-baseline=\"middle\">{label}</text>",
            LABEL_WIDTH - 8
        )
        .unwrap();
        writeln!(
            svg,
            "<rect x=\"{LABEL_WIDTH}\" y=\"{}\" width=\"{length:.1}\" height=\"{}\" fill=\"{BAR_COLOR}\">\
             <title>{label}: {}</title></rect>",
            y + BAR_GAP / 2,
            ROW_HEIGHT - BAR_GAP,
            format_thousands(casualties)
        )
        .unwrap();
        writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{center}\" dominant-baseline=\"middle\">{}</text>",
            f64::from(LABEL_WIDTH) + length + 6.0,
            format_thousands(casualties)
        )
        .unwrap();

        y += ROW_HEIGHT;
    }

    writeln!(
        svg,
        "<line x1=\"{LABEL_WIDTH}\" y1=\"{TITLE_HEIGHT}\" x2=\"{LABEL_WIDTH}\" y2=\"{y}\" stroke=\"#333\"/>"
    )
    .unwrap();
    writeln!(
        svg,
        "<text x=\"{:.1}\" y=\"{}\" text-anchor=\"middle\">Fatalities + injuries</text>",
        f64::from(LABEL_WIDTH) + bar_area / 2.0,
        y + AXIS_HEIGHT / 2 + 4
    )
    .unwrap();
    svg.push_str("</svg>\n");

    svg
}
