/// Yes/no question shown before an edit is thrown away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelPrompt {
    pub title: &'static str,
    pub decline_label: &'static str,
    pub accept_label: &'static str,
}

pub const CANCEL_PROMPT: CancelPrompt = CancelPrompt {
    title: "Are you sure to give up this edit?",
    decline_label: "NO",
    accept_label: "YES",
};

/// Rendering surface driven by a [`FormController`](super::FormController).
///
/// The controller calls these as its state changes; implementations only
/// display. User input flows back as [`FormEvent`](super::FormEvent)s.
pub trait FormView {
    fn show_fields(&mut self, name: &str, creation_time: &str);
    fn set_title(&mut self, title: &str);
    fn set_save_enabled(&mut self, enabled: bool);
    fn present_cancel_prompt(&mut self, prompt: &CancelPrompt);
}

/// Every call a [`RecordingView`] received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Fields { name: String, creation_time: String },
    Title(String),
    SaveEnabled(bool),
    CancelPrompt(&'static str),
}

/// View that records updates instead of drawing them. Useful for headless
/// hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    pub updates: Vec<ViewUpdate>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the save affordance flipped to `enabled`.
    pub fn save_toggles_to(&self, enabled: bool) -> usize {
        self.updates
            .iter()
            .filter(|update| **update == ViewUpdate::SaveEnabled(enabled))
            .count()
    }

    pub fn last_title(&self) -> Option<&str> {
        self.updates.iter().rev().find_map(|update| match update {
            ViewUpdate::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }
}

impl FormView for RecordingView {
    fn show_fields(&mut self, name: &str, creation_time: &str) {
        self.updates.push(ViewUpdate::Fields {
            name: name.to_string(),
            creation_time: creation_time.to_string(),
        });
    }

    fn set_title(&mut self, title: &str) {
        self.updates.push(ViewUpdate::Title(title.to_string()));
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        self.updates.push(ViewUpdate::SaveEnabled(enabled));
    }

    fn present_cancel_prompt(&mut self, prompt: &CancelPrompt) {
        self.updates.push(ViewUpdate::CancelPrompt(prompt.title));
    }
}
