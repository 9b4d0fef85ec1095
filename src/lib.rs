pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod prettyprint;

pub use crate::application::deploy_recorder::DeployRecorder;
pub use crate::config::app_config::RecorderConfig;
pub use crate::ports::recorder_error::RecorderError;
