use anyhow::Context;
use serde::{Deserialize, Serialize};
use signalcore::detection::DetectionFrame;
use signalcore::vision_test::TestResponse;
use std::fs;
use std::path::Path;

/// A recorded sequence of detection frames to replay through the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub frames: Vec<DetectionFrame>,
}

impl Scenario {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario {}", path_ref.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario {}", path_ref.display()))
    }
}

/// Reads a vision-test answer sheet: a YAML list of `{question_id, answer}`.
pub fn load_responses<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TestResponse>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading answers {}", path_ref.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing answers {}", path_ref.display()))
}
