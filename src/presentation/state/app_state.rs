use std::sync::Arc;

use crate::application::ports::{ArtifactStore, JobRegistry};
use crate::application::services::{JobRunner, ProgressStream};
use crate::presentation::config::ScaffoldConfig;

#[derive(Clone)]
pub struct AppState {
    pub runner: JobRunner,
    pub progress: ProgressStream,
    pub registry: Arc<dyn JobRegistry>,
    pub artifacts: Arc<dyn ArtifactStore>,
    pub scaffold_config: ScaffoldConfig,
}
