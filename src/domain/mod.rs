pub mod a1_notation;
pub mod clock;
pub mod credential;
pub mod deploy_record;
