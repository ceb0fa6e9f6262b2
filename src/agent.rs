use crate::config::AgentConfig;
use crate::error::{FrameError, LinkError};
use crate::frame;
use crate::lldpdu::Lldpdu;
use crate::link::{Link, PnetLink};
use crate::tlv::chassisid_tlv::{ChassisIdSubType, ChassisIdTLV, ChassisIdValue};
use crate::tlv::portid_tlv::{PortIdSubtype, PortIdTLV, PortIdValue};
use crate::tlv::ttl_tlv::TtlTLV;
use crate::tlv::Tlv;

use pnet::datalink::MacAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

/// Logger trait
///
/// The protocol-level diagnostic sink: received LLDPDUs, rejected frames and
/// parse errors. Distinct from the process-lifecycle `tracing` facade used
/// by the binary (interface resolution, socket acquisition, shutdown).
pub trait Logger {
    fn log(&mut self, msg: &str);
}

/// The `StdoutLogger`. Used as default logger by the LLDPAgent if no other is provided.
#[derive(Debug, Clone, Default)]
pub struct StdoutLogger {}

impl Logger for StdoutLogger {
    fn log(&mut self, msg: &str) {
        println!("{}", msg);
    }
}

/// LLDP agent
///
/// This is the top-level component. It provides two functions.
///
/// It announces its presence on the network by sending LLDP frames in regular intervals.
/// At the same time it listens for LLDP frames from other network devices.
///
/// If a valid frame is received, its contents will be logged for the administrator.
pub struct LLDPAgent {
    mac_address: MacAddr,
    interface_name: String,
    interval: f32,
    link: Box<dyn Link>,
    logger: Box<dyn Logger>,
    running: Arc<AtomicBool>,
}

impl LLDPAgent {
    /// Sets up the network channel and LLDP agent state.
    ///
    /// Opens a `PnetLink` on `config.interface_name` unless a link was
    /// already injected (tests always inject one).
    pub fn new(config: AgentConfig) -> Result<LLDPAgent, LinkError> {
        let AgentConfig {
            mac_address,
            interface_name,
            interval,
            link,
            logger,
        } = config;

        let link = match link {
            Some(link) => link,
            None => {
                let timeout = Duration::from_secs_f32(interval.max(0.001));
                Box::new(PnetLink::open(&interface_name, timeout)?) as Box<dyn Link>
            }
        };

        let logger = logger.unwrap_or_else(|| Box::new(StdoutLogger::default()) as Box<dyn Logger>);

        Ok(LLDPAgent {
            mac_address,
            interface_name,
            interval,
            link,
            logger,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// A clone of the agent's "keep running" flag, for wiring up an
    /// external interrupt (e.g. a SIGINT handler) that flips it to `false`.
    pub fn running_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// Runs the agent
    ///
    /// This is the main loop of the LLDP agent. It takes care of sending as well as receiving LLDP frames.
    ///
    /// Each pass waits up to the announce interval for a frame. A received frame is validated
    /// (destination multicast, not self-originated, ethertype 0x88CC) and, if it passes, parsed
    /// as an LLDPDU and logged. Frames failing frame-level validation are dropped silently;
    /// frames that parse to a malformed LLDPDU are logged as an error and otherwise ignored.
    ///
    /// After each wait, the agent announces itself if the interval has elapsed.
    ///
    /// If `run_once` is set to `true`, stop after the first LLDPDU has been accepted.
    pub fn run(&mut self, run_once: bool) {
        let mut t_previous = Instant::now();
        let timeout = Duration::from_secs_f32(self.interval.max(0.0));

        while self.running.load(Ordering::SeqCst) {
            match self.link.recv(timeout) {
                Ok(Some(raw_frame)) => match frame::decode(&raw_frame, self.mac_address) {
                    Ok(parsed) => match Lldpdu::decode(&parsed.payload) {
                        Ok(lldpdu) => {
                            self.logger.log(&format!("{}", lldpdu));
                            if run_once {
                                break;
                            }
                        }
                        Err(err) => {
                            self.logger
                                .log(&format!("dropping malformed LLDPDU: {}", err));
                        }
                    },
                    // Not addressed to us, a self-loop, or not LLDP: ignore quietly.
                    Err(FrameError::WrongDestination)
                    | Err(FrameError::SelfOrigin)
                    | Err(FrameError::WrongEthertype)
                    | Err(FrameError::ShortFrame) => {}
                },
                Ok(None) => {}
                Err(err) => {
                    self.logger.log(&format!("link error: {}", err));
                }
            }

            let t_now = Instant::now();
            if (t_now - t_previous).as_secs_f32() > self.interval {
                self.announce();
                t_previous = t_now;
            }
        }
    }

    /// Announces the agent.
    ///
    /// Sends an LLDP frame with an LLDPDU containing:
    /// * the agent's MAC address as its chassis id
    /// * the agent's interface name as port id
    /// * a TTL of 60 seconds
    pub fn announce(&mut self) {
        let init_tlvs: Vec<Tlv> = vec![
            Tlv::ChassisId(ChassisIdTLV::new(
                ChassisIdSubType::MacAddress,
                ChassisIdValue::Mac(self.mac_address.octets().to_vec()),
            )),
            Tlv::PortId(PortIdTLV::new(
                PortIdSubtype::InterfaceName,
                PortIdValue::Text(self.interface_name.clone()),
            )),
            Tlv::Ttl(TtlTLV::new(60)),
        ];

        let lldpdu = Lldpdu::new(init_tlvs);
        let frame_bytes = frame::encode(self.mac_address, &lldpdu.bytes());

        if let Err(err) = self.link.send(&frame_bytes) {
            warn!(%err, "announce failed");
            self.logger.log(&format!("announce failed: {}", err));
        }
    }
}
