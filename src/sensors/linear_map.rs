/// Rescale `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Integer arithmetic with truncating division, so `out_min > out_max`
/// inverts the direction. A degenerate input range maps everything to
/// `out_min`. The result is not clamped.
pub fn linear_map(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }

    let scaled = (x as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64);

    (scaled + out_min as i64) as i32
}

/// Which end of the raw range reads as full light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Raw 0 reads 0 %, full scale reads 100 %.
    #[default]
    Direct,
    /// Raw 0 reads 100 %, full scale reads 0 %.
    Inverted,
}

impl Polarity {
    pub fn output_range(&self) -> (i32, i32) {
        match self {
            Polarity::Direct => (0, 100),
            Polarity::Inverted => (100, 0),
        }
    }
}
