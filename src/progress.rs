/*!
 * Progress channel for long documents.
 *
 * Parsers report an integer percentage of timecodes consumed so far.
 * Sinks are purely observational: parsing results never depend on them.
 */

use indicatif::ProgressBar;

/// Receiver of parse progress percentages (0-100)
pub trait ProgressSink {
    /// Called each time the consumed-timecode share changes hands
    fn report(&mut self, percent: u8);

    /// Called once when the parse is done
    fn finish(&mut self) {}
}

/// Sink that discards every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(u8),
{
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that keeps every reported value, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    /// Reported percentages
    pub values: Vec<u8>,
    /// Whether `finish` was called
    pub finished: bool,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&mut self, percent: u8) {
        self.values.push(percent);
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Adapter that drives an indicatif progress bar of length 100
#[derive(Debug, Clone)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// Wrap an existing bar; its length is reset to 100
    pub fn new(bar: ProgressBar) -> Self {
        bar.set_length(100);
        Self { bar }
    }

    /// A bar that never draws, useful for tests and headless runs
    pub fn hidden() -> Self {
        Self::new(ProgressBar::hidden())
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressSink for BarProgress {
    fn report(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }

    fn finish(&mut self) {
        self.bar.finish_with_message("Processing complete");
    }
}

/// Share of consumed timecodes as a percentage, clamped to 100
pub fn percent_of(consumed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (consumed.saturating_mul(100) / total).min(100) as u8
}
