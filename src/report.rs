// src/report.rs

//! Flat text rendering of accumulated matches.

use crate::search::Match;

/// Render matches as a flat text report, one block per match:
/// unescaped title, link, and the matching labels, followed by a blank line.
pub fn render(matches: &[Match]) -> String {
    let mut output = String::new();
    for m in matches {
        output.push_str(&html_escape::decode_html_entities(&m.item.title));
        output.push('\n');
        output.push_str(&m.item.link);
        output.push('\n');
        output.push_str(&format!("(Matches: {})", m.labels.join(", ")));
        output.push_str("\n\n");
    }
    output
}
