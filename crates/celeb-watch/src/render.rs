//! Plain-text rendering of a snapshot
//!
//! Stats cards, a paginated top-celebrities table and the reactions list.

use std::fmt::Write;

use celeb_core::entities::display_image_url;
use celeb_core::Page;

use crate::snapshot::{CelebrityRow, DashboardSnapshot, ReactionRow, Stats};

const NAME_WIDTH: usize = 24;
const ALIAS_WIDTH: usize = 20;

/// Render the whole dashboard for one page of the ranking
pub fn render_dashboard(snapshot: &DashboardSnapshot, page: Page) -> String {
    let mut out = String::new();
    render_stats(&mut out, &snapshot.stats);
    out.push('\n');
    render_ranking(&mut out, &snapshot.top_celebrities, page);
    out.push('\n');
    render_reactions(&mut out, &snapshot.top_reactions);
    out
}

fn render_stats(out: &mut String, stats: &Stats) {
    let _ = writeln!(
        out,
        "Celebrities: {}  |  Interactions: {}  |  Positive: {}  |  Negative: {}  |  Neutral: {}",
        stats.total_celebrities,
        stats.total_interactions,
        stats.total_positive,
        stats.total_negative,
        stats.total_neutral,
    );
}

fn render_ranking(out: &mut String, rows: &[CelebrityRow], page: Page) {
    let _ = writeln!(out, "Top celebrities");
    if rows.is_empty() {
        let _ = writeln!(out, "  (no data for this range)");
        return;
    }

    let _ = writeln!(
        out,
        "{:>4}  {:<NAME_WIDTH$}  {:<ALIAS_WIDTH$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>9}  Aspects",
        "#", "Name", "Aliases", "Positive", "Negative", "Neutral", "Total", "Reactions",
    );

    let offset = page.offset();
    for (i, row) in page.slice(rows).iter().enumerate() {
        let aliases = row.alias_list().summary().unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>4}  {:<NAME_WIDTH$}  {:<ALIAS_WIDTH$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>9}  {}",
            offset + i + 1,
            truncate(&row.celebrity_name, NAME_WIDTH),
            truncate(&aliases, ALIAS_WIDTH),
            row.total_positive,
            row.total_negative,
            row.total_neutral,
            row.total_interactions,
            row.total_reactions,
            row.main_aspects.join(", "),
        );
    }

    let _ = writeln!(
        out,
        "Page {} of {} ({} celebrities)",
        page.number(),
        page.total_pages(rows.len()).max(1),
        rows.len()
    );
}

fn render_reactions(out: &mut String, rows: &[ReactionRow]) {
    let _ = writeln!(out, "Top reactions");
    if rows.is_empty() {
        let _ = writeln!(out, "  (no reactions for this range)");
        return;
    }
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<NAME_WIDTH$}  {:>9}  {}",
            i + 1,
            truncate(&row.celebrity_name, NAME_WIDTH),
            row.total_reactions,
            display_image_url(row.image_url.as_deref()),
        );
    }
}

/// Cut to `width` characters, marking the cut with an ellipsis
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
