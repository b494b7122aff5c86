//! Chart Model
//!
//! The single mutable entry series owned by a chart widget, with change
//! detection so the canvas adapter only redraws when something changed.

use super::series::Entry;

/// Holds at most one ordered entry series.
///
/// The first update creates the series; every later update clears and
/// refills it in place. A full replacement that leaves the entries
/// identical reports "unchanged" and triggers no redraw.
#[derive(Debug, Default)]
pub struct ChartModel {
    series: Option<Vec<Entry>>,
}

impl ChartModel {
    pub fn new() -> Self {
        Self { series: None }
    }

    /// Replace the series contents with `entries`.
    ///
    /// Returns `true` when the stored entries changed and the widget needs a
    /// redraw.
    pub fn update(&mut self, entries: Vec<Entry>) -> bool {
        match &mut self.series {
            Some(current) => {
                if *current == entries {
                    return false;
                }
                current.clear();
                current.extend(entries);
                true
            }
            None => {
                self.series = Some(entries);
                true
            }
        }
    }

    /// The current entries, empty before the first update.
    pub fn entries(&self) -> &[Entry] {
        self.series.as_deref().unwrap_or(&[])
    }

    /// Number of series held. Never exceeds one.
    pub fn series_count(&self) -> usize {
        usize::from(self.series.is_some())
    }
}
