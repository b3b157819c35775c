use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hexagon_rs::{DisasmError, RenderConfig, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble Hexagon instruction words")]
struct Opts {
    /// Address of the first word (hex or dec)
    #[arg(long, default_value = "0")]
    pc: String,
    /// Input as a hex byte string in memory order, e.g. "00c0007f"
    #[arg(long)]
    bytes: Option<String>,
    /// Render option NAME=VALUE (imm.hash, imm.sign, sdk, reg.alias); repeatable
    #[arg(short = 'o', value_name = "NAME=VALUE")]
    options: Vec<String>,
    /// JSON file with render options
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    /// Instruction words (hex or dec)
    #[arg(value_name = "WORD")]
    words: Vec<String>,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(&hex.replace('_', ""), 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn parse_hex_bytes(s: &str) -> Result<Vec<u8>> {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    anyhow::ensure!(digits.is_ascii(), "non-hex characters in byte string");
    anyhow::ensure!(digits.len() % 2 == 0, "odd number of hex digits");
    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).with_context(|| format!("bad byte `{}`", &digits[i..i + 2])))
        .collect()
}

fn build_session(opts: &Opts) -> Result<Session> {
    let session = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            let cfg: RenderConfig = serde_json::from_str(&text)?;
            Session::with_config(&cfg)?
        }
        None => Session::new()?,
    };
    for o in &opts.options {
        session.config().set_assignment(o)?;
    }
    Ok(session)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let mut buf = match &opts.bytes {
        Some(hex) => parse_hex_bytes(hex)?,
        None => Vec::new(),
    };
    for w in &opts.words {
        buf.extend_from_slice(&parse_u32(w)?.to_le_bytes());
    }
    anyhow::ensure!(!buf.is_empty(), "nothing to disassemble: give WORDs or --bytes");

    let mut session = build_session(&opts)?;
    let mut pc = parse_u32(&opts.pc)?;
    let mut off = 0usize;
    while off < buf.len() {
        match session.disassemble(&buf[off..], pc) {
            Ok(d) => {
                println!("{pc:#010x}: {}", d.text);
                off += d.size as usize;
                pc = pc.wrapping_add(d.size);
            }
            Err(e @ DisasmError::ShortBuffer { .. }) => {
                eprintln!("{e}");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
