//! Weekly "Wrapped" summary: the dominant emotion color across the current
//! entry list, its share of all entries, and the vibe label for it.
//!
//! Recomputed on every request. Intensity does not contribute.

use serde::Serialize;

use crate::models::emotion::Vibe;
use crate::models::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAggregate {
    pub top_color: String,
    pub percentage: u32,
    pub vibe_name: Vibe,
    pub total_entries: usize,
}

/// Returns `None` for an empty list.
///
/// On equal counts the color that first appears in `entries` wins.
pub fn compute(entries: &[Entry]) -> Option<WeeklyAggregate> {
    if entries.is_empty() {
        return None;
    }

    // Distinct colors in order of first appearance.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(color, _)| *color == entry.emotion_color) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.emotion_color.as_str(), 1)),
        }
    }

    let (top_color, top_count) =
        counts
            .iter()
            .copied()
            .fold(None::<(&str, usize)>, |best, (color, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((color, n)),
            })?;

    let total = entries.len();

    Some(WeeklyAggregate {
        top_color: top_color.to_string(),
        percentage: round_percentage(top_count, total),
        vibe_name: Vibe::for_color(top_color),
        total_entries: total,
    })
}

/// Plain-text summary card handed to a share sink.
pub fn render_card(stats: &WeeklyAggregate) -> String {
    format!(
        "MY WEEK IN MOOD\n{}\n{}% {}\n{} entries\n",
        stats.vibe_name, stats.percentage, stats.top_color, stats.total_entries
    )
}

/// `round(part / total * 100)` with halves rounded up, in integer arithmetic.
fn round_percentage(part: usize, total: usize) -> u32 {
    ((200 * part + total) / (2 * total)) as u32
}
