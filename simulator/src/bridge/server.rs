use crate::bridge::model::BridgeModel;
use crate::workflow::runner::{FrameResult, Runner};
use chrono::Utc;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use signalcore::detection::DetectionFrame;
use signalcore::profile::{ColorVisionProfile, ColorVisionType};
use signalcore::vision_test::{analyze, TestResponse};
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    thread,
};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

pub type SharedModel = Arc<RwLock<BridgeModel>>;

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

fn read_model(state: &SharedModel) -> RwLockReadGuard<'_, BridgeModel> {
    state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_model(state: &SharedModel) -> RwLockWriteGuard<'_, BridgeModel> {
    state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Deserialize)]
struct ManualSelection {
    vision_type: ColorVisionType,
}

/// HTTP surface used by the mobile UI:
///
/// * `GET /profile`, `POST /profile` with `{"vision_type": ...}`
/// * `POST /test` with a list of `{question_id, answer}`
/// * `POST /frame` with a detection frame, `GET /frame` for the latest result
pub fn routes(
    runner: Arc<Runner>,
    state: SharedModel,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let get_profile = warp::path("profile")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter.clone())
        .map(|runner: Arc<Runner>| warp::reply::json(&*runner.store().get()));

    let set_profile = warp::path("profile")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(runner_filter.clone())
        .map(|selection: ManualSelection, runner: Arc<Runner>| {
            let profile = ColorVisionProfile::manual(selection.vision_type, Utc::now());
            runner.store().set(profile);
            warp::reply::json(&*runner.store().get())
        });

    let run_test = warp::path("test")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(runner_filter.clone())
        .map(|responses: Vec<TestResponse>, runner: Arc<Runner>| match analyze(&responses) {
            Some(outcome) => {
                runner.store().set(outcome.clone().into_profile(Utc::now()));
                warp::reply::json(&json!({"status": "ok", "outcome": outcome}))
            }
            None => warp::reply::json(&json!({
                "status": "no_result",
                "description": "No answers were recorded; the profile is unchanged."
            })),
        });

    let post_frame = warp::path("frame")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and(runner_filter)
        .map(|frame: DetectionFrame, state: SharedModel, runner: Arc<Runner>| {
            let mut model = write_model(&state);
            let result: FrameResult = runner.execute(&frame, model.last_announcement.as_ref());
            model.record(&result);
            warp::reply::json(&result)
        });

    let get_frame = warp::path("frame")
        .and(warp::path::end())
        .and(warp::get())
        .and(state_filter)
        .map(|state: SharedModel| warp::reply::json(&*read_model(&state)));

    get_profile
        .or(set_profile)
        .or(run_test)
        .or(post_frame)
        .or(get_frame)
}

/// Bridge that hosts the HTTP endpoint on its own runtime thread.
pub struct Bridge {
    state: SharedModel,
}

impl Bridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state: SharedModel = Arc::new(RwLock::new(BridgeModel::default()));
        let filter = routes(runner, state.clone());

        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("bridge runtime failed to start: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(filter).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    /// Seeds the served state with a result produced outside the HTTP path.
    pub fn publish(&self, result: &FrameResult) {
        let mut model = write_model(&self.state);
        model.record(result);
        info!(
            "[bridge] frame {} state {} alerts {}",
            result.timestamp_ms,
            result.state,
            result.alerts.len()
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }
}
