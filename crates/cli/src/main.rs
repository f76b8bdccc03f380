//! 16550 UART model CLI.
//!
//! This binary drives a single UART through its register interface the way a
//! polled guest driver would. It performs:
//! 1. **Echo:** Initialize, then poll LSR and copy every received byte from RBR to THR.
//! 2. **Status:** Initialize and report the register and FIFO state.

use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use uartsim_core::Uart;
use uartsim_core::common::constants::{LSR_DATA_READY, REG_LSR, REG_RBR_THR};
use uartsim_core::config::UartConfig;
use uartsim_core::soc::Device;

#[derive(Parser, Debug)]
#[command(
    name = "uartsim",
    author,
    version,
    about = "16550 UART model harness",
    long_about = "Drive a 16550-compatible UART model through its registers.\n\nExamples:\n  uartsim echo --preload 'root\\n'\n  printf 'hello' | uartsim echo --stdin\n  uartsim status --config uart.json"
)]
struct Cli {
    /// JSON configuration file (defaults are used for missing fields).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `uartsim_core=trace` (overrides RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Echo received bytes back out through THR.
    Echo {
        /// Bytes preloaded into the receive FIFO (overrides the config).
        #[arg(short, long)]
        preload: Option<String>,

        /// Also feed standard input into the receive path.
        #[arg(long)]
        stdin: bool,

        /// Write console output to stderr.
        #[arg(long)]
        stderr: bool,
    },

    /// Initialize the UART and report register and FIFO state.
    Status {
        /// Bytes preloaded into the receive FIFO (overrides the config).
        #[arg(short, long)]
        preload: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let mut config = match cli.config {
        Some(path) => match UartConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => UartConfig::default(),
    };

    match cli.command {
        Commands::Echo {
            preload,
            stdin,
            stderr,
        } => {
            if let Some(preload) = preload {
                config.preload = preload;
            }
            config.to_stderr |= stderr;
            cmd_echo(&config, stdin);
        }
        Commands::Status { preload } => {
            if let Some(preload) = preload {
                config.preload = preload;
            }
            cmd_status(&config);
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = filter.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Copies bytes from RBR to THR while LSR reports data ready.
fn echo_pending(dev: &mut dyn Device) -> usize {
    let lsr = u64::from(REG_LSR);
    let data = u64::from(REG_RBR_THR);
    let mut echoed = 0;
    while dev.read_u8(lsr) & LSR_DATA_READY != 0 {
        let ch = dev.read_u8(data);
        dev.write_u8(data, ch);
        echoed += 1;
    }
    echoed
}

fn cmd_echo(config: &UartConfig, feed_stdin: bool) {
    let mut uart = Uart::new(config);
    uart.initialize();

    let mut echoed = echo_pending(&mut uart);

    if feed_stdin {
        let mut chunk = vec![0u8; uart.rx_fifo().usable_capacity()];
        let mut input = io::stdin().lock();
        loop {
            match input.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    uart.receive_bytes(&chunk[..n]);
                    echoed += echo_pending(&mut uart);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    eprintln!("Error reading stdin: {e}");
                    break;
                }
            }
        }
    }

    let status = uart.fifo_status();
    tracing::info!(
        echoed,
        rx_count = status.rx_count,
        tx_count = status.tx_count,
        "echo finished"
    );
    uart.teardown();
}

fn cmd_status(config: &UartConfig) {
    let mut uart = Uart::detached(config);
    uart.initialize();
    let regs = uart.registers();
    let status = uart.fifo_status();
    let (base, size) = uart.address_range();
    let lsr = uart.read_u8(u64::from(REG_LSR));

    println!("{} @ {:#x} (+{:#x})", uart.name(), base, size);
    println!(
        "IER={:#04x} IIR={:#04x} FCR={:#04x} LCR={:#04x} MCR={:#04x} MSR={:#04x} SCR={:#04x} LSR={:#04x}",
        regs.ier, regs.iir, regs.fcr, regs.lcr, regs.mcr, regs.msr, regs.scr, lsr
    );
    println!("rx_count={} tx_count={}", status.rx_count, status.tx_count);
    uart.teardown();
}
