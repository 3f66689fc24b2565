pub mod ldr_sensor;
pub mod linear_map;
pub mod sensor;
