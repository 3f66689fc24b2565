use esp_idf_svc::hal::{
    adc::{oneshot::AdcDriver, ADC1},
    gpio::Gpio4,
    peripherals::Peripherals,
};
use log::info;

use crate::configuration::monitor_configuration::MonitorConfiguration;

use super::{ldr_channel::LdrChannel, pacer::FreeRtosPacer, serial_sink::SerialSink};

pub struct Board<'a> {
    pub ldr: LdrChannel<'a, ADC1, Gpio4, AdcDriver<'a, ADC1>>,
    pub serial: SerialSink<'a>,
    pub pacer: FreeRtosPacer,
}

impl Board<'static> {
    /// LDR divider on GPIO4 (ADC1), report output on UART1 TX GPIO0 / RX GPIO1.
    pub fn new(config: &MonitorConfiguration, peripherals: Peripherals) -> anyhow::Result<Self> {
        let pins = peripherals.pins;

        let board = Self {
            ldr: LdrChannel::new(
                AdcDriver::new(peripherals.adc1)?,
                pins.gpio4,
                config.adc_resolution_bits,
            )?,
            serial: SerialSink::new(peripherals.uart1, pins.gpio0, pins.gpio1, config.baud_rate)?,
            pacer: FreeRtosPacer,
        };

        info!("Board ready, serial at {} baud", config.baud_rate);
        Ok(board)
    }
}
