//! Writes a sample document to a file, reads it back and checks that
//! nothing changed.
//!
//! ```text
//! RUST_LOG=trace cargo run -p roundtrip -- /tmp/sample.bjson big
//! ```

use std::path::PathBuf;

use bjson::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Sample document
// ---------------------------------------------------------------------------

fn sample() -> Value {
    let players = Value::Array(
        ["ada", "grace", "linus"]
            .iter()
            .enumerate()
            .map(|(i, name)| -> Value {
                [
                    ("name", Value::from(*name)),
                    ("score", Value::Int32(100 * i as i32 - 50)),
                    ("rank", Value::UInt8(i as u8 + 1)),
                ]
                .into_iter()
                .collect()
            })
            .collect(),
    );

    [
        ("match_id", Value::UInt64(u64::MAX)),
        ("finished", Value::Boolean(true)),
        ("duration_s", Value::Float32(312.5)),
        ("ratio", Value::Float64(2.0 / 3.0)),
        ("players", players),
        ("winner", Value::Null),
    ]
    .into_iter()
    .collect()
}

fn main() -> Result<(), BjsonError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("roundtrip.bjson"));
    let byte_order = match args.next().as_deref() {
        Some("big") => ByteOrder::Big,
        _ => ByteOrder::Little,
    };

    let config = CodecConfig::default()
        .with_byte_order(byte_order)
        .with_limits(DecodeLimits::strict());
    let doc = sample();

    bjson::write_file(&path, &doc, config)?;
    let size = std::fs::metadata(&path)?.len();
    tracing::info!(path = %path.display(), size, %byte_order, "document written");

    let read_back = bjson::read_file(&path, config)?;
    if read_back == doc {
        tracing::info!("round trip ok");
    } else {
        tracing::error!(?read_back, "round trip mismatch");
        std::process::exit(1);
    }
    Ok(())
}
