pub mod monitor_configuration;
