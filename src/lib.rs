pub mod configuration;
pub mod monitor;
pub mod report;
pub mod sensors;

#[cfg(target_os = "espidf")]
pub mod board;

#[cfg(not(target_os = "espidf"))]
pub mod simulation;
