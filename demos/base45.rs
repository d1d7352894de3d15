//! Encodes its input, decodes the result again and prints both.
//!
//! ```text
//! cargo run --example base45 -- -e "Hello!!"
//! cargo run --example base45 -- -e 0x00ff41 --verbose
//! ```

use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(about = "Round-trip a string through base45")]
struct Cli {
    /// Input to encode; a `0x` prefix marks hexadecimal bytes
    #[arg(short, long)]
    encode: String,

    /// Log every group as it is encoded
    #[arg(short, long)]
    verbose: bool,

    /// Number of times to repeat the round trip
    #[arg(short = 'n', long, default_value_t = 1)]
    runs: u32,
}

enum Input {
    Raw(Vec<u8>),
    Hex(Vec<u8>),
}

impl Input {
    fn parse(input: &str) -> anyhow::Result<Self> {
        match input.strip_prefix("0x") {
            Some(digits) => Ok(Self::Hex(hex::decode(digits)?)),
            None => Ok(Self::Raw(input.as_bytes().to_vec())),
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            Self::Raw(bytes) | Self::Hex(bytes) => bytes,
        }
    }

    fn render(&self, bytes: &[u8]) -> String {
        match self {
            Self::Raw(_) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Hex(_) => format!("0x{}", hex::encode(bytes)),
        }
    }
}

fn trace_groups(bytes: &[u8]) {
    for (index, chunk) in bytes.chunks(2).enumerate() {
        let value = chunk
            .iter()
            .fold(0_u32, |value, &byte| value * 256 + u32::from(byte));
        tracing::debug!(
            group = index,
            bytes = %hex::encode(chunk),
            value,
            symbols = %base45::encode(chunk),
            "encoded group"
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let input = Input::parse(&cli.encode)?;
    let bytes = input.bytes();
    if bytes.is_empty() {
        anyhow::bail!("nothing to encode");
    }
    trace_groups(bytes);

    let started = Instant::now();
    let mut encoded = String::new();
    let mut decoded = Vec::new();
    for _ in 0..cli.runs.max(1) {
        encoded = base45::encode(bytes);
        decoded = base45::decode(&encoded)?;
    }
    tracing::info!(runs = cli.runs, elapsed = ?started.elapsed(), "round trip finished");

    if decoded != bytes {
        anyhow::bail!("round trip mismatch: {}", input.render(&decoded));
    }

    println!("Encoded string: {} {}", encoded.len(), encoded);
    println!("Decoded string: {} {}", decoded.len(), input.render(&decoded));
    Ok(())
}
