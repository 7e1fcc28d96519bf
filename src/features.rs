use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::error::{IdsError, Result};
use crate::schema::FeatureSchema;

pub const MAX_DURATION: u32 = 100;
pub const MAX_BYTES: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Tcp, Protocol::Udp, Protocol::Icmp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Icmp => "icmp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = IdsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            "icmp" => Ok(Protocol::Icmp),
            other => Err(IdsError::InputError(format!(
                "unknown protocol '{}' (expected tcp, udp or icmp)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Http,
    Telnet,
    Ftp,
    Other,
}

impl Service {
    pub const ALL: [Service; 4] = [Service::Http, Service::Telnet, Service::Ftp, Service::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Http => "http",
            Service::Telnet => "telnet",
            Service::Ftp => "ftp",
            Service::Other => "other",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = IdsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Service::Http),
            "telnet" => Ok(Service::Telnet),
            "ftp" => Ok(Service::Ftp),
            "other" => Ok(Service::Other),
            unknown => Err(IdsError::InputError(format!(
                "unknown service '{}' (expected http, telnet, ftp or other)",
                unknown
            ))),
        }
    }
}

/// One simulated network event as entered on the dashboard form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventInput {
    pub duration: u32,
    pub src_bytes: u32,
    pub dst_bytes: u32,
    pub protocol_type: Protocol,
    pub service: Service,
}

impl EventInput {
    pub fn new(
        duration: u32,
        src_bytes: u32,
        dst_bytes: u32,
        protocol_type: Protocol,
        service: Service,
    ) -> Result<Self> {
        if duration > MAX_DURATION {
            return Err(IdsError::InputError(format!(
                "duration {} out of range 0-{}",
                duration, MAX_DURATION
            )));
        }
        if src_bytes > MAX_BYTES {
            return Err(IdsError::InputError(format!(
                "src_bytes {} out of range 0-{}",
                src_bytes, MAX_BYTES
            )));
        }
        if dst_bytes > MAX_BYTES {
            return Err(IdsError::InputError(format!(
                "dst_bytes {} out of range 0-{}",
                dst_bytes, MAX_BYTES
            )));
        }
        Ok(EventInput {
            duration,
            src_bytes,
            dst_bytes,
            protocol_type,
            service,
        })
    }
}

/// Builds the numeric row the classifier consumes: one value per schema
/// column, in schema order, zero everywhere the event carries no signal.
///
/// Columns the schema does not define are skipped silently. The training
/// data decides which columns exist; an event field without a matching
/// column simply contributes nothing.
pub fn build_feature_row(schema: &FeatureSchema, input: &EventInput) -> Vec<f64> {
    let mut row = vec![0.0; schema.len()];

    set_numeric(schema, &mut row, "duration", input.duration);
    set_numeric(schema, &mut row, "src_bytes", input.src_bytes);
    set_numeric(schema, &mut row, "dst_bytes", input.dst_bytes);

    set_one_hot(schema, &mut row, &format!("protocol_type_{}", input.protocol_type));
    set_one_hot(schema, &mut row, &format!("service_{}", input.service));

    row
}

fn set_numeric(schema: &FeatureSchema, row: &mut [f64], name: &str, value: u32) {
    match schema.index_of(name) {
        Some(i) => row[i] = value as f64,
        None => debug!("schema has no numeric column '{}', leaving zero", name),
    }
}

fn set_one_hot(schema: &FeatureSchema, row: &mut [f64], name: &str) {
    match schema.index_of(name) {
        Some(i) => row[i] = 1.0,
        None => warn!("schema has no one-hot column '{}', signal dropped", name),
    }
}
