use crate::workflow::runner::FrameResult;
use serde::Serialize;
use signalcore::presentation::Announcement;

/// Latest state served to UI clients polling the bridge.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BridgeModel {
    pub frames_seen: usize,
    pub last_frame: Option<FrameResult>,
    pub last_announcement: Option<Announcement>,
}

impl BridgeModel {
    pub fn record(&mut self, result: &FrameResult) {
        self.frames_seen += 1;
        if let Some(announcement) = result.announcement() {
            self.last_announcement = Some(announcement);
        }
        self.last_frame = Some(result.clone());
    }
}
