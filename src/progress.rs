// src/progress.rs
/// Lightweight progress reporting for the scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the feed is parsed, with the number of characters.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one character's headshot was fetched and the record built.
    fn item_done(&mut self, _id: &str, _name: &str) {}

    /// Called for the character whose fetch aborted the run.
    fn item_failed(&mut self, _id: &str, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every callback; handy for tests and for callers that want a transcript.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub messages: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.messages.push(s!(msg)); }
    fn item_done(&mut self, id: &str, _name: &str) { self.done.push(s!(id)); }
    fn item_failed(&mut self, id: &str, _name: &str) { self.failed.push(s!(id)); }
    fn finish(&mut self) { self.finished = true; }
}
