//! Print every field of an audio file.
//!
//! ```text
//! cargo run -p bridge-host --example inspect -- /path/to/song.flac
//! ```

use anyhow::{bail, Context};
use bridge_host::TagBridge;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default().with_format(LogFormat::Compact))
        .context("Failed to initialize logging")?;

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: inspect <audio file>");
    };

    let bridge = TagBridge::default();
    let guard = bridge
        .open_scoped(path.as_bytes())
        .with_context(|| format!("Failed to open {}", path))?;
    let snapshot = bridge.snapshot(guard.handle())?;

    println!("{:#?}", snapshot);
    if let Some((mime_type, data)) = bridge.artwork_picture(guard.handle())? {
        println!(
            "artwork: {} ({} bytes)",
            String::from_utf8_lossy(&mime_type),
            data.len()
        );
    }
    Ok(())
}
