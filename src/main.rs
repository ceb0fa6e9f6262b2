use clap::Parser;
use lldp_agent::agent::LLDPAgent;
use lldp_agent::config::AgentConfig;
use pnet::datalink::{self, MacAddr};
use std::process;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// A Link Layer Discovery Protocol (IEEE 802.1AB) agent.
///
/// Announces the local interface's identity at a fixed cadence and logs
/// LLDPDUs received from directly-attached neighbors.
#[derive(Parser, Debug)]
#[command(name = "lldp-agent", version, about)]
struct Cli {
    /// Network interface to announce on and listen to.
    #[arg(default_value = "eth0")]
    interface: String,

    /// Seconds between announces.
    #[arg(long, default_value_t = 1.0)]
    interval: f32,

    /// Override the interface's own MAC address (e.g. when it can't be queried).
    #[arg(long)]
    mac: Option<String>,

    /// Exit after the first accepted LLDPDU.
    #[arg(long)]
    run_once: bool,

    /// Raise the tracing filter to `debug`.
    #[arg(short, long)]
    verbose: bool,
}

/// Flag flipped by the SIGINT handler; consulted by the agent's own loop.
static SIGINT_FLAG: std::sync::Mutex<Option<Arc<AtomicBool>>> = std::sync::Mutex::new(None);

extern "C" fn handle_sigint(_signum: i32) {
    if let Ok(guard) = SIGINT_FLAG.lock() {
        if let Some(flag) = guard.as_ref() {
            flag.store(false, Ordering::SeqCst);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mac_address = match &cli.mac {
        Some(mac) => MacAddr::from_str(mac).unwrap_or_else(|_| {
            error!(%mac, "invalid --mac address");
            process::exit(1);
        }),
        None => {
            let interface = datalink::interfaces()
                .into_iter()
                .find(|iface| iface.name == cli.interface)
                .unwrap_or_else(|| {
                    error!(interface = %cli.interface, "interface not found");
                    process::exit(1);
                });
            interface.mac.unwrap_or_else(|| {
                error!(interface = %cli.interface, "interface has no MAC address");
                process::exit(1);
            })
        }
    };

    info!(interface = %cli.interface, %mac_address, "starting LLDP agent");

    let config = AgentConfig::new(mac_address, cli.interface.clone()).with_interval(cli.interval);

    let mut agent = match LLDPAgent::new(config) {
        Ok(agent) => agent,
        Err(err) => {
            error!(%err, "failed to open link");
            process::exit(1);
        }
    };

    if let Ok(mut guard) = SIGINT_FLAG.lock() {
        *guard = Some(agent.running_handle());
    }
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as libc::sighandler_t);
    }

    agent.run(cli.run_once);

    info!("LLDP agent shut down cleanly");
}
