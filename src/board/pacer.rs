use esp_idf_svc::hal::delay::FreeRtos;

use crate::monitor::Pacer;

pub struct FreeRtosPacer;

impl Pacer for FreeRtosPacer {
    fn pause_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
