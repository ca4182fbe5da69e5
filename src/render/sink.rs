use crate::game::{RenderSink, Snapshot};

/// Holds the most recent snapshot until the terminal redraws.
///
/// The engine pushes a frame every tick; the draw loop runs on its own timer
/// and always shows the newest frame it finds here.
#[derive(Debug, Default)]
pub struct FrameSlot {
    latest: Option<Snapshot>,
    frames_received: u64,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    pub fn frames_received(&self) -> u64 {
        self.frames_received
    }
}

impl RenderSink for FrameSlot {
    fn render(&mut self, snapshot: &Snapshot) {
        self.latest = Some(snapshot.clone());
        self.frames_received += 1;
    }
}
