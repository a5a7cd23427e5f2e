//! CLI tool that checks A and AAAA records of domains via the system resolver.
//!
//! # Usage
//!
//! ```bash
//! # Human-readable, one line per domain
//! dns_check rustgamestore.ru www.rustgamestore.ru
//!
//! # Structured output
//! dns_check --json example.com
//! ```
//!
//! A family that fails to resolve is reported as `none` (`null` in JSON);
//! it does not make the command fail.

use std::io::{IsTerminal, Write, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use hostcheck::{HostReport, SystemResolver, check_hosts};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Check IPv4 and IPv6 resolution for one or more domains.
#[derive(Parser, Debug)]
#[command(name = "dns_check")]
#[command(version, about)]
struct Args {
    /// Domains to resolve.
    #[arg(required = true)]
    domains: Vec<String>,

    /// Print results as a JSON array.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let reports = check_hosts(&SystemResolver, &args.domains);
    let unresolved = reports.iter().filter(|r| r.is_unresolved()).count();
    info!(domains = reports.len(), unresolved, "lookups finished");

    let mut out = stdout().lock();
    print_reports(&mut out, &reports, args.json)?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Prints reports either as text lines or as a pretty JSON array.
fn print_reports<W: Write>(out: &mut W, reports: &[HostReport], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, reports).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        for report in reports {
            writeln!(out, "{report}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<HostReport> {
        vec![
            HostReport {
                domain: "shop.example".to_string(),
                ipv4: Some(vec!["192.0.2.1".parse().unwrap()]),
                ipv6: None,
            },
            HostReport { domain: "missing.example".to_string(), ipv4: None, ipv6: None },
        ]
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        print_reports(&mut out, &sample(), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec![
            "shop.example  A: 192.0.2.1  AAAA: none",
            "missing.example  A: none  AAAA: none",
        ]);
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        print_reports(&mut out, &sample(), true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["domain"], "shop.example");
        assert_eq!(value[0]["ipv4"][0], "192.0.2.1");
        assert!(value[0]["ipv6"].is_null());
        assert!(value[1]["ipv4"].is_null());
    }

    #[test]
    fn test_domains_are_required() {
        assert!(Args::try_parse_from(["dns_check"]).is_err());
        let args = Args::try_parse_from(["dns_check", "a.example", "b.example"]).unwrap();
        assert_eq!(args.domains, vec!["a.example", "b.example"]);
        assert!(!args.json);
    }
}
