//! Configuration injected into [`crate::agent::LLDPAgent`].
//!
//! Keeping this as a standalone builder-style struct, rather than a long
//! constructor argument list, is what lets both the binary's CLI parsing and
//! the agent's own tests construct an agent the same way.

use crate::agent::Logger;
use crate::link::Link;
use pnet::datalink::MacAddr;

pub struct AgentConfig {
    pub mac_address: MacAddr,
    pub interface_name: String,
    pub interval: f32,
    pub link: Option<Box<dyn Link>>,
    pub logger: Option<Box<dyn Logger>>,
}

impl AgentConfig {
    pub fn new(mac_address: MacAddr, interface_name: String) -> AgentConfig {
        AgentConfig {
            mac_address,
            interface_name,
            interval: 1.0,
            link: None,
            logger: None,
        }
    }

    pub fn with_interval(mut self, interval: f32) -> AgentConfig {
        self.interval = interval;
        self
    }

    pub fn with_link(mut self, link: Box<dyn Link>) -> AgentConfig {
        self.link = Some(link);
        self
    }

    pub fn with_logger(mut self, logger: Box<dyn Logger>) -> AgentConfig {
        self.logger = Some(logger);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_second_interval_and_no_overrides() {
        let config = AgentConfig::new(MacAddr::new(1, 2, 3, 4, 5, 6), "eth0".into());
        assert_eq!(config.interval, 1.0);
        assert!(config.link.is_none());
        assert!(config.logger.is_none());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = AgentConfig::new(MacAddr::new(1, 2, 3, 4, 5, 6), "eth0".into())
            .with_interval(5.0);
        assert_eq!(config.interval, 5.0);
    }
}
