use crate::sensors::ldr_sensor::LightReading;

/// Layout of the text written to the serial sink for each reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `Raw Value: <raw> | Light Intensity: <pct>%`
    SingleLine,
    /// Label, raw value, separator, percentage and unit, one per line.
    Split,
}

impl ReportFormat {
    pub fn banner(&self) -> &'static str {
        match self {
            ReportFormat::SingleLine => "LDR Light Intensity Monitor Started",
            ReportFormat::Split => "LDR test",
        }
    }

    pub fn lines(&self, reading: &LightReading) -> Vec<String> {
        match self {
            ReportFormat::SingleLine => vec![format!(
                "Raw Value: {} | Light Intensity: {}%",
                reading.raw, reading.percentage
            )],
            ReportFormat::Split => vec![
                "LDRRaw".to_string(),
                reading.raw.to_string(),
                " | light: ".to_string(),
                reading.percentage.to_string(),
                "%".to_string(),
            ],
        }
    }
}
