pub mod deploy_recorder;
pub mod exit_report;
