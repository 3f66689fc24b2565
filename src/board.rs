pub mod board;
pub mod ldr_channel;
pub mod pacer;
pub mod serial_sink;
