use esp_idf_svc::hal::{
    gpio::{AnyIOPin, InputPin, OutputPin},
    io::Write,
    peripheral::Peripheral,
    uart::{config::Config, Uart, UartDriver},
    units::Hertz,
};
use log::warn;

use crate::monitor::LineSink;

pub struct SerialSink<'a> {
    uart: UartDriver<'a>,
}

impl<'a> SerialSink<'a> {
    pub fn new<UART: Uart>(
        uart: impl Peripheral<P = UART> + 'a,
        tx: impl Peripheral<P = impl OutputPin> + 'a,
        rx: impl Peripheral<P = impl InputPin> + 'a,
        baud_rate: u32,
    ) -> anyhow::Result<Self> {
        let config = Config::default().baudrate(Hertz(baud_rate));

        Ok(Self {
            uart: UartDriver::new(
                uart,
                tx,
                rx,
                Option::<AnyIOPin>::None,
                Option::<AnyIOPin>::None,
                &config,
            )?,
        })
    }
}

impl LineSink for SerialSink<'_> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = self.uart.write_all(format!("{line}\r\n").as_bytes()) {
            warn!("Serial write failed: {e:?}");
        }
    }
}
