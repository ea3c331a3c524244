pub mod host_sensors;
