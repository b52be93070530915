//! Inspect a persisted buffer file by decoding it with a pattern

use clap::Parser;
use std::path::PathBuf;
use varbuf::{BufferData, BufferFile, Value};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "varbuf inspect - Decode values from a binary buffer file using a type pattern")]
struct Cli {
    /// Buffer file to read
    file: PathBuf,

    /// Type tags to decode in order (s, l, i, b, d, h, f, x)
    #[arg(long, short, default_value = "")]
    pattern: String,

    /// Byte offset to start reading at
    #[arg(long, default_value_t = 0)]
    seek: usize,

    /// Reject unknown tags instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// One output line: kind, a tab, then the value
fn format_value(value: &Value) -> String {
    match value {
        Value::Text(text) => format!("{}\t{text:?}", value.kind()),
        Value::Bytes(bytes) => {
            let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
            format!("{}\t[{}]", value.kind(), hex.join(" "))
        }
        Value::Long(v) => format!("{}\t{v}", value.kind()),
        Value::Int(v) => format!("{}\t{v}", value.kind()),
        Value::Boolean(v) => format!("{}\t{v}", value.kind()),
        Value::Short(v) => format!("{}\t{v}", value.kind()),
        Value::Float(v) => format!("{}\t{v}", value.kind()),
        Value::Double(v) => format!("{}\t{v}", value.kind()),
    }
}

fn trailing_line(buffer: &BufferData) -> String {
    format!("-- {} of {} bytes unread", buffer.remaining(), buffer.len())
}

fn decode(
    buffer: &mut BufferData,
    pattern: &str,
    seek: usize,
    strict: bool,
) -> varbuf::Result<Vec<Value>> {
    buffer.seek(seek);
    let values = if strict {
        buffer.extract_strict(pattern)?
    } else {
        buffer.extract(pattern)?
    };
    Ok(values)
}

/// Message for a failed decode, pointing at the pattern when the data ran out
fn describe_failure(err: &varbuf::Error, pattern: &str) -> String {
    match err.as_codec() {
        Some(codec) if codec.is_underflow() => {
            format!("pattern '{pattern}' reads past the end of the buffer")
        }
        _ => err.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut buffer = BufferFile::load(&cli.file)?;
    tracing::info!(file = %cli.file.display(), bytes = buffer.len(), "buffer loaded");

    let values = match decode(&mut buffer, &cli.pattern, cli.seek, cli.strict) {
        Ok(values) => values,
        Err(err) => {
            tracing::error!(cursor = buffer.cursor(), "{}", describe_failure(&err, &cli.pattern));
            return Err(err.into());
        }
    };

    if cli.json {
        let report = serde_json::json!({
            "file": cli.file.display().to_string(),
            "length": buffer.len(),
            "cursor": buffer.cursor(),
            "values": values,
            "trailing_bytes": buffer.remaining(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for value in &values {
            println!("{}", format_value(value));
        }
        println!("{}", trailing_line(&buffer));
    }

    Ok(())
}
