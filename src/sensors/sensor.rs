/// A single analog input, already configured as input by the board.
pub trait AnalogChannel {
    /// Raw sample at the resolution the channel was configured for.
    fn read_channel(&mut self) -> u16;
}

impl<C: AnalogChannel + ?Sized> AnalogChannel for &mut C {
    fn read_channel(&mut self) -> u16 {
        (**self).read_channel()
    }
}
