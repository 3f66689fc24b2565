use std::sync::atomic::AtomicBool;

use ldr_light_monitor::{
    configuration::monitor_configuration::MonitorConfiguration, monitor::Monitor,
};
use log::info;

// Nothing raises it on the device: the loop runs until power loss.
static STOP: AtomicBool = AtomicBool::new(false);

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_svc::hal::peripherals::Peripherals;
    use ldr_light_monitor::board::board::Board;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let config = MonitorConfiguration::default();
    config.validate()?;

    let peripherals = Peripherals::take()?;
    let board = Board::new(&config, peripherals)?;

    info!("LDR light monitor starting");

    let mut monitor = Monitor::new(&config, board.ldr, board.serial, board.pacer);
    monitor.run(&STOP);

    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use ldr_light_monitor::simulation::SimulatedBoard;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MonitorConfiguration::default();
    config.validate()?;

    let board = SimulatedBoard::new(&config);

    info!("LDR light monitor starting with a simulated sensor");

    let mut monitor = Monitor::new(&config, board.ldr, board.serial, board.pacer);
    monitor.run(&STOP);

    Ok(())
}
