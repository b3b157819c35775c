use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::Path;

use hexagon_disasm::{load_raw_bin, packet_report, packet_text, range_listing};
use hexagon_rs::{RenderConfig, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hexagon disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0")]
    base: String,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Render option NAME=VALUE (imm.hash, imm.sign, sdk, reg.alias); repeatable
    #[arg(short = 'o', value_name = "NAME=VALUE", global = true)]
    options: Vec<String>,
    /// JSON file with render options
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<String>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Decode every segment into packets
    Packets {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn build_session(config: Option<&str>, options: &[String]) -> Result<Session> {
    let session = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            let cfg: RenderConfig = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
            Session::with_config(&cfg)?
        }
        None => Session::new()?,
    };
    for o in options {
        session.config().set_assignment(o)?;
    }
    Ok(session)
}

fn emit(text: &str, out: Option<String>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base = parse_u32(&cli.base)?;
    let img = load_raw_bin(Path::new(&cli.input), base, cli.skip, cli.len)?;
    let mut session = build_session(cli.config.as_deref(), &cli.options)?;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#010x}   {:#010x}   {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            let text = range_listing(&img, &mut session, start, end, show_bytes)?;
            emit(&text, out)?;
        }
        Command::Packets { format, out } => {
            let report = packet_report(&img, &session.render_config());
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
                OutputFormat::Text => packet_text(&report),
            };
            emit(&text, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn cli_parses_packets_subcommand() {
        let cli = Cli::try_parse_from(["hexagon-disasm", "--base", "0x1000", "fw.bin", "packets", "--format", "json", "-o", "sdk=true"])
            .unwrap();
        assert_eq!(parse_u32(&cli.base).unwrap(), 0x1000);
        assert_eq!(cli.options, vec!["sdk=true".to_string()]);
        assert!(matches!(cli.cmd, Command::Packets { format: OutputFormat::Json, out: None }));
    }

    #[test]
    fn options_reach_the_session() {
        let session = build_session(None, &["imm.sign=off".to_string()]).unwrap();
        assert!(!session.render_config().imm_sign);
        assert!(build_session(None, &["bogus=1".to_string()]).is_err());
    }
}
