use anyhow::ensure;
use mutually_exclusive_features::exactly_one_of;

use crate::{
    report::ReportFormat,
    sensors::{ldr_sensor, linear_map::Polarity},
};

exactly_one_of!("single-line-report", "split-report");

pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_PERIOD_MS: u32 = 500;
pub const DEFAULT_ADC_RESOLUTION_BITS: u8 = 10;
pub const MAX_ADC_RESOLUTION_BITS: u8 = 16;

#[cfg(feature = "single-line-report")]
pub const DEFAULT_REPORT_FORMAT: ReportFormat = ReportFormat::SingleLine;

#[cfg(feature = "split-report")]
pub const DEFAULT_REPORT_FORMAT: ReportFormat = ReportFormat::Split;

/// Everything the board needs to bring up the LDR channel and the serial sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfiguration {
    pub baud_rate: u32,
    pub period_ms: u32,
    pub adc_resolution_bits: u8,
    pub polarity: Polarity,
    pub report_format: ReportFormat,
}

impl MonitorConfiguration {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.baud_rate > 0, "Serial baud rate must be non-zero");
        ensure!(self.period_ms > 0, "Sampling period must be non-zero");
        ensure!(
            (1..=MAX_ADC_RESOLUTION_BITS).contains(&self.adc_resolution_bits),
            "ADC resolution of {} bits is outside 1..={} bits",
            self.adc_resolution_bits,
            MAX_ADC_RESOLUTION_BITS
        );
        Ok(())
    }

    pub fn full_scale(&self) -> u16 {
        ldr_sensor::full_scale(self.adc_resolution_bits)
    }
}

impl Default for MonitorConfiguration {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            period_ms: DEFAULT_PERIOD_MS,
            adc_resolution_bits: DEFAULT_ADC_RESOLUTION_BITS,
            polarity: Polarity::Direct,
            report_format: DEFAULT_REPORT_FORMAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MonitorConfiguration::default();

        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.period_ms, 500);
        assert_eq!(config.adc_resolution_bits, 10);
        assert_eq!(config.full_scale(), 1023);
        assert_eq!(config.polarity, Polarity::Direct);
        assert_eq!(config.report_format, DEFAULT_REPORT_FORMAT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_baud_rate() {
        let config = MonitorConfiguration {
            baud_rate: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("baud rate"));
    }

    #[test]
    fn rejects_zero_period() {
        let config = MonitorConfiguration {
            period_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn rejects_resolution_out_of_range() {
        for bits in [0, 17, 32] {
            let config = MonitorConfiguration {
                adc_resolution_bits: bits,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains(&format!("{bits} bits")));
        }
    }

    #[test]
    fn accepts_twelve_bit_resolution() {
        let config = MonitorConfiguration {
            adc_resolution_bits: 12,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.full_scale(), 4095);
    }
}
