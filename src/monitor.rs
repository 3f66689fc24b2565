use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};

use crate::{
    configuration::monitor_configuration::MonitorConfiguration,
    report::ReportFormat,
    sensors::{
        ldr_sensor::{LdrSensor, LightReading},
        sensor::AnalogChannel,
    },
};

/// Line oriented text output, the serial link on hardware.
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

/// Blocking pause between two samples.
pub trait Pacer {
    fn pause_ms(&mut self, ms: u32);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line)
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause_ms(&mut self, ms: u32) {
        (**self).pause_ms(ms)
    }
}

/// Samples the LDR, reports it and waits, forever or until cancelled.
pub struct Monitor<C: AnalogChannel, S: LineSink, P: Pacer> {
    sensor: LdrSensor<C>,
    sink: S,
    pacer: P,
    period_ms: u32,
    report_format: ReportFormat,
}

impl<C: AnalogChannel, S: LineSink, P: Pacer> Monitor<C, S, P> {
    pub fn new(config: &MonitorConfiguration, channel: C, sink: S, pacer: P) -> Self {
        Self {
            sensor: LdrSensor::new(channel, config.adc_resolution_bits, config.polarity),
            sink,
            pacer,
            period_ms: config.period_ms,
            report_format: config.report_format,
        }
    }

    pub fn start(&mut self) {
        self.sink.write_line(self.report_format.banner());
    }

    /// One sample, one report, one pause.
    pub fn tick(&mut self) -> LightReading {
        let reading = self.sensor.read();

        debug!("{}", self.sensor.pretty_print(&reading));

        for line in self.report_format.lines(&reading) {
            self.sink.write_line(&line);
        }

        self.pacer.pause_ms(self.period_ms);

        reading
    }

    /// Banner, then ticks until `cancel` is set. Returns the number of ticks.
    pub fn run(&mut self, cancel: &AtomicBool) -> u64 {
        info!(
            "Sampling every {} ms, full scale {}, {:?} polarity, {:?} report",
            self.period_ms,
            self.sensor.full_scale(),
            self.sensor.polarity(),
            self.report_format
        );

        self.start();

        let mut ticks = 0;
        while !cancel.load(Ordering::Relaxed) {
            self.tick();
            ticks += 1;
        }

        info!("Monitor stopped after {ticks} samples");
        ticks
    }

    pub fn release(self) -> (C, S, P) {
        let Self {
            sensor,
            sink,
            pacer,
            ..
        } = self;
        (sensor.release(), sink, pacer)
    }
}
