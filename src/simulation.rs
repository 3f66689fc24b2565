//! Stand-ins for the board when running on a development machine.

use std::{io::Write, thread, time::Duration};

use log::warn;

use crate::{
    configuration::monitor_configuration::MonitorConfiguration,
    monitor::{LineSink, Pacer},
    sensors::sensor::AnalogChannel,
};

const SWEEP_STEPS: u16 = 20;

/// Triangle sweep between 0 and full scale, like a hand passing over the LDR.
pub struct SweepChannel {
    value: u16,
    step: u16,
    full_scale: u16,
    rising: bool,
}

impl SweepChannel {
    pub fn new(full_scale: u16) -> Self {
        Self {
            value: 0,
            step: (full_scale / SWEEP_STEPS).max(1),
            full_scale,
            rising: true,
        }
    }
}

impl AnalogChannel for SweepChannel {
    fn read_channel(&mut self) -> u16 {
        let sample = self.value;

        if self.rising {
            self.value = self.value.saturating_add(self.step).min(self.full_scale);
            self.rising = self.value < self.full_scale;
        } else {
            self.value = self.value.saturating_sub(self.step);
            self.rising = self.value == 0;
        }

        sample
    }
}

pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(std::io::stdout().lock(), "{line}") {
            warn!("Stdout write failed: {e}");
        }
    }
}

pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

pub struct SimulatedBoard {
    pub ldr: SweepChannel,
    pub serial: StdoutSink,
    pub pacer: ThreadPacer,
}

impl SimulatedBoard {
    pub fn new(config: &MonitorConfiguration) -> Self {
        Self {
            ldr: SweepChannel::new(config.full_scale()),
            serial: StdoutSink,
            pacer: ThreadPacer,
        }
    }
}
