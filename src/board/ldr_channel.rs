use std::borrow::Borrow;

use esp_idf_svc::hal::{
    adc::{
        attenuation,
        oneshot::{config::AdcChannelConfig, AdcChannelDriver, AdcDriver},
        Adc,
    },
    gpio::ADCPin,
};

use crate::sensors::{ldr_sensor::rescale_resolution, sensor::AnalogChannel};

/// Native width of the ESP32 oneshot converter.
const NATIVE_RESOLUTION_BITS: u8 = 12;

pub struct LdrChannel<'a, ADC: Adc + 'a, APin: ADCPin<Adc = ADC>, M: Borrow<AdcDriver<'a, ADC>>> {
    channel: AdcChannelDriver<'a, APin, M>,
    resolution_bits: u8,
}

impl<'a, ADC: Adc + 'a, APin: ADCPin<Adc = ADC>, M: Borrow<AdcDriver<'a, ADC>>>
    LdrChannel<'a, ADC, APin, M>
{
    pub fn new(adc_driver: M, pin_adc: APin, resolution_bits: u8) -> anyhow::Result<Self> {
        Ok(Self {
            channel: AdcChannelDriver::new(
                adc_driver,
                pin_adc,
                &AdcChannelConfig {
                    attenuation: attenuation::DB_11,
                    // Raw counts, not millivolts.
                    calibration: false,
                    ..Default::default()
                },
            )?,
            resolution_bits,
        })
    }
}

impl<'a, ADC: Adc + 'a, APin: ADCPin<Adc = ADC>, M: Borrow<AdcDriver<'a, ADC>>> AnalogChannel
    for LdrChannel<'a, ADC, APin, M>
{
    fn read_channel(&mut self) -> u16 {
        let raw = self.channel.read().unwrap_or(0);
        rescale_resolution(raw, NATIVE_RESOLUTION_BITS, self.resolution_bits)
    }
}
