use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use pnet::datalink::{self, Channel::Ethernet, DataLinkReceiver, NetworkInterface};
use pnet::packet::ethernet::{EtherTypes, EthernetPacket};
use pnet::packet::ipv4::Ipv4Packet;
use pnet::packet::Packet;

use crate::error::{IdsError, Result};

/// Looks up a capture interface by name.
pub fn find_interface(name: &str) -> Result<NetworkInterface> {
    let interfaces = datalink::interfaces();
    interfaces
        .iter()
        .find(|iface| iface.name == name)
        .cloned()
        .ok_or_else(|| {
            let available: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
            IdsError::CaptureError(format!(
                "interface '{}' not found (available: {})",
                name,
                available.join(", ")
            ))
        })
}

/// Opens an Ethernet datalink channel on the interface and returns the
/// receive half.
pub fn open_channel(interface: &NetworkInterface) -> Result<Box<dyn DataLinkReceiver>> {
    match datalink::channel(interface, Default::default()) {
        Ok(Ethernet(_tx, rx)) => Ok(rx),
        Ok(_) => Err(IdsError::CaptureError(format!(
            "unsupported channel type on interface '{}'",
            interface.name
        ))),
        Err(e) => Err(IdsError::CaptureError(format!(
            "failed to open channel on '{}': {}",
            interface.name, e
        ))),
    }
}

/// Counters for one capture run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Frames actually read, which falls short of the budget when the
    /// capture is stopped early.
    pub frames: usize,
    pub ip_packets: usize,
}

/// Reads up to `count` frames from the receiver and invokes `on_ip` with
/// source and destination addresses for every IPv4 frame. Non-IP frames
/// still count toward the frame budget.
///
/// The stop flag is checked between frames so a Ctrl+C handler can end the
/// capture early. Any receive error is fatal and propagates to the caller.
pub fn sniff<F>(
    rx: &mut dyn DataLinkReceiver,
    count: usize,
    stop: &AtomicBool,
    mut on_ip: F,
) -> Result<CaptureSummary>
where
    F: FnMut(Ipv4Addr, Ipv4Addr),
{
    let mut seen = 0usize;
    let mut ip_packets = 0usize;

    while seen < count && !stop.load(Ordering::SeqCst) {
        let frame = rx
            .next()
            .map_err(|e| IdsError::CaptureError(format!("reading packet: {}", e)))?;
        seen += 1;

        let eth = match EthernetPacket::new(frame) {
            Some(eth) => eth,
            None => {
                debug!("frame {} too short for an Ethernet header", seen);
                continue;
            }
        };
        if eth.get_ethertype() != EtherTypes::Ipv4 {
            continue;
        }
        if let Some(ipv4) = Ipv4Packet::new(eth.payload()) {
            on_ip(ipv4.get_source(), ipv4.get_destination());
            ip_packets += 1;
        }
    }

    Ok(CaptureSummary {
        frames: seen,
        ip_packets,
    })
}
