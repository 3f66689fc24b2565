use super::{
    linear_map::{linear_map, Polarity},
    sensor::AnalogChannel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightReading {
    pub raw: u16,
    pub percentage: u8,
}

pub struct LdrSensor<C: AnalogChannel> {
    channel: C,
    full_scale: u16,
    polarity: Polarity,
}

impl<C: AnalogChannel> LdrSensor<C> {
    pub fn new(channel: C, resolution_bits: u8, polarity: Polarity) -> Self {
        Self {
            channel,
            full_scale: full_scale(resolution_bits),
            polarity,
        }
    }

    pub fn full_scale(&self) -> u16 {
        self.full_scale
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn read_raw_value(&mut self) -> u16 {
        self.channel.read_channel()
    }

    /// Light level for a raw sample. Samples beyond full scale are clamped
    /// first so the result stays within 0..=100.
    pub fn percentage(&self, raw: u16) -> u8 {
        let (out_min, out_max) = self.polarity.output_range();
        let raw = raw.min(self.full_scale);

        linear_map(raw as i32, 0, self.full_scale as i32, out_min, out_max).clamp(0, 100) as u8
    }

    pub fn read(&mut self) -> LightReading {
        let raw = self.read_raw_value();

        LightReading {
            raw,
            percentage: self.percentage(raw),
        }
    }

    pub fn pretty_print(&self, reading: &LightReading) -> String {
        format!(
            "Light level: {}% (raw value: {}/{})",
            reading.percentage, reading.raw, self.full_scale
        )
    }

    pub fn release(self) -> C {
        self.channel
    }
}

/// Largest raw value at the given resolution.
pub fn full_scale(resolution_bits: u8) -> u16 {
    match resolution_bits {
        0 => 0,
        1..=15 => (1u16 << resolution_bits) - 1,
        _ => u16::MAX,
    }
}

/// Bring a sample taken at `from_bits` to the scale of `to_bits`.
pub fn rescale_resolution(raw: u16, from_bits: u8, to_bits: u8) -> u16 {
    if from_bits >= to_bits {
        raw >> (from_bits - to_bits).min(15)
    } else {
        let widened = (raw as u32) << (to_bits - from_bits).min(16);
        widened.min(full_scale(to_bits) as u32) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChannel(u16);

    impl AnalogChannel for FixedChannel {
        fn read_channel(&mut self) -> u16 {
            self.0
        }
    }

    fn sensor(polarity: Polarity) -> LdrSensor<FixedChannel> {
        LdrSensor::new(FixedChannel(0), 10, polarity)
    }

    #[test]
    fn full_scale_per_resolution() {
        assert_eq!(full_scale(10), 1023);
        assert_eq!(full_scale(12), 4095);
        assert_eq!(full_scale(1), 1);
        assert_eq!(full_scale(16), u16::MAX);
    }

    #[test]
    fn rescales_between_resolutions() {
        assert_eq!(rescale_resolution(4095, 12, 10), 1023);
        assert_eq!(rescale_resolution(2048, 12, 10), 512);
        assert_eq!(rescale_resolution(0, 12, 10), 0);
        assert_eq!(rescale_resolution(1023, 10, 10), 1023);
        assert_eq!(rescale_resolution(1023, 10, 12), 4092);
        assert_eq!(rescale_resolution(4095, 12, 16), 65520);
    }

    #[test]
    fn direct_is_non_decreasing_and_bounded() {
        let s = sensor(Polarity::Direct);
        let mut previous = 0;

        for raw in 0..=1023 {
            let pct = s.percentage(raw);
            assert!(pct <= 100, "raw {raw} gave {pct}");
            assert!(pct >= previous, "raw {raw} dropped to {pct}");
            previous = pct;
        }
    }

    #[test]
    fn inverted_is_non_increasing_and_bounded() {
        let s = sensor(Polarity::Inverted);
        let mut previous = 100;

        for raw in 0..=1023 {
            let pct = s.percentage(raw);
            assert!(pct <= 100, "raw {raw} gave {pct}");
            assert!(pct <= previous, "raw {raw} rose to {pct}");
            previous = pct;
        }
    }

    #[test]
    fn extremes() {
        let direct = sensor(Polarity::Direct);
        assert_eq!(direct.percentage(0), 0);
        assert_eq!(direct.percentage(1023), 100);

        let inverted = sensor(Polarity::Inverted);
        assert_eq!(inverted.percentage(0), 100);
        assert_eq!(inverted.percentage(1023), 0);
    }

    #[test]
    fn deterministic() {
        let s = sensor(Polarity::Direct);
        for raw in [0, 1, 511, 512, 777, 1023] {
            assert_eq!(s.percentage(raw), s.percentage(raw));
        }
    }

    #[test]
    fn clamps_samples_beyond_full_scale() {
        let direct = sensor(Polarity::Direct);
        assert_eq!(direct.percentage(4095), 100);

        let inverted = sensor(Polarity::Inverted);
        assert_eq!(inverted.percentage(u16::MAX), 0);
    }

    #[test]
    fn read_reports_raw_and_percentage() {
        let mut s = LdrSensor::new(FixedChannel(512), 10, Polarity::Direct);
        let reading = s.read();
        assert_eq!(
            reading,
            LightReading {
                raw: 512,
                percentage: 50
            }
        );
        assert_eq!(
            s.pretty_print(&reading),
            "Light level: 50% (raw value: 512/1023)"
        );
    }

    #[test]
    fn twelve_bit_resolution() {
        let s = LdrSensor::new(FixedChannel(0), 12, Polarity::Direct);
        assert_eq!(s.full_scale(), 4095);
        assert_eq!(s.percentage(4095), 100);
        assert_eq!(s.percentage(2048), 50);
    }
}
