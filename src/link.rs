//! The Link abstraction: a narrow capability interface hiding raw packet
//! sockets, interface binding, and promiscuous-mode setup from the agent
//! loop. [`PnetLink`] is the only production implementation; [`ChannelLink`]
//! is an in-memory test double backed by [`std::sync::mpsc`].

use crate::error::LinkError;
use pnet::datalink::Channel::Ethernet;
use pnet::datalink::{self, Config, DataLinkReceiver, DataLinkSender};
use std::io::ErrorKind;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Blocking send/receive over a bound Ethernet interface.
///
/// `recv` never returns an error on a plain timeout; it returns `Ok(None)`
/// instead, matching the spec's "no frame arrived" case.
pub trait Link: Send {
    fn send(&mut self, frame: &[u8]) -> Result<(), LinkError>;
    fn recv(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, LinkError>;

    /// Release the underlying resource. The production implementation's
    /// `Drop` impl makes this redundant but callers that want deterministic
    /// release timing can call it explicitly.
    fn close(self: Box<Self>) {}
}

/// Production `Link`, backed by a raw `pnet` datalink channel in promiscuous
/// mode. The channel's read timeout is fixed at construction time (`pnet`
/// has no notion of a per-call timeout), so it should be set to the agent's
/// poll granularity -- the announce interval.
pub struct PnetLink {
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
}

impl PnetLink {
    pub fn open(interface_name: &str, read_timeout: Duration) -> Result<PnetLink, LinkError> {
        let interface = datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == interface_name)
            .ok_or_else(|| LinkError::NoSuchInterface(interface_name.to_string()))?;

        let config = Config {
            read_timeout: Some(read_timeout),
            promiscuous: true,
            ..Config::default()
        };

        match datalink::channel(&interface, config) {
            Ok(Ethernet(tx, rx)) => Ok(PnetLink { tx, rx }),
            Ok(_) => Err(LinkError::UnsupportedChannel),
            Err(e) => Err(LinkError::Io(e)),
        }
    }
}

impl Link for PnetLink {
    fn send(&mut self, frame: &[u8]) -> Result<(), LinkError> {
        match self.tx.send_to(frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(LinkError::Io(e)),
            None => Ok(()),
        }
    }

    fn recv(&mut self, _timeout: Duration) -> Result<Option<Vec<u8>>, LinkError> {
        match self.rx.next() {
            Ok(frame) => Ok(Some(frame.to_vec())),
            Err(e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::WouldBlock => {
                Ok(None)
            }
            Err(e) => Err(LinkError::Io(e)),
        }
    }
}

/// In-memory `Link` used by the agent's own test suite. Frames sent through
/// this link land on `outgoing`; frames fed into `incoming` are what `recv`
/// yields.
pub struct ChannelLink {
    outgoing: Sender<Vec<u8>>,
    incoming: Receiver<Vec<u8>>,
}

impl ChannelLink {
    pub fn new(outgoing: Sender<Vec<u8>>, incoming: Receiver<Vec<u8>>) -> ChannelLink {
        ChannelLink { outgoing, incoming }
    }
}

impl Link for ChannelLink {
    fn send(&mut self, frame: &[u8]) -> Result<(), LinkError> {
        self.outgoing
            .send(frame.to_vec())
            .map_err(|_| LinkError::UnsupportedChannel)
    }

    fn recv(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, LinkError> {
        match self.incoming.recv_timeout(timeout) {
            Ok(frame) => Ok(Some(frame)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Ok(None),
        }
    }
}
