use std::borrow::Cow;

use serde::Serialize;

pub const SERVICE_NAME: &str = "demo-app";

/// Body of `GET /`. Field order is the serialization order.
#[derive(Serialize, Debug)]
pub struct ServiceStatus<'a> {
    service: Cow<'a, str>,
    status: Cow<'a, str>
}

impl<'a> ServiceStatus<'a> {
    pub fn new(service: &'a str, status: &'a str) -> Self {
        Self {
            service: Cow::from(service),
            status: Cow::from(status),
        }
    }
}

impl ServiceStatus<'static> {
    pub fn running() -> Self {
        Self::new(SERVICE_NAME, "running")
    }
}
