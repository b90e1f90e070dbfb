pub mod service_status;
