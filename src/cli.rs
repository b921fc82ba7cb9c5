// Command-line surface (clap derive) and grouped metric help.

use std::ffi::OsString;
use std::fmt::Write;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, FromArgMatches, Parser};

use crate::catalog::{self, MetricGroup};
use crate::models::{Severity, ThresholdSet};

pub const DEFAULT_PORT: u16 = 1161;

/// Monitor MasterKey device sensors via SNMP v2c.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_masterkey_sensors", version)]
#[command(group(ArgGroup::new("mode").required(true).args(["metric", "all"])))]
pub struct Cli {
    /// Device IP address or hostname.
    #[arg(short = 'H', long)]
    pub host: String,

    /// SNMP v2c community.
    #[arg(short = 'C', long)]
    pub community: String,

    /// SNMP port.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Name of the metric to check.
    #[arg(short, long, value_name = "METRIC_NAME", value_parser = parse_metric_name)]
    pub metric: Option<String>,

    /// Check every sensor (one snmpget per metric).
    #[arg(long)]
    pub all: bool,

    /// Warning threshold for numeric metrics.
    #[arg(short, long, allow_negative_numbers = true)]
    pub warning: Option<f64>,

    /// Critical threshold for numeric metrics.
    #[arg(short, long, allow_negative_numbers = true)]
    pub critical: Option<f64>,

    /// Invert the logic for state metrics (1=OK, 0=CRITICAL).
    #[arg(long)]
    pub invert: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single {
        metric: String,
        thresholds: ThresholdSet,
        invert: bool,
    },
    All,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match &self.metric {
            Some(metric) => Mode::Single {
                metric: metric.clone(),
                thresholds: ThresholdSet::new(self.warning, self.critical),
                invert: self.invert,
            },
            None => Mode::All,
        }
    }

    /// Overrides that `--all` ignores, by flag name.
    pub fn ignored_sweep_overrides(&self) -> Vec<&'static str> {
        if self.metric.is_some() {
            return Vec::new();
        }
        let mut ignored = Vec::new();
        if self.warning.is_some() {
            ignored.push("--warning");
        }
        if self.critical.is_some() {
            ignored.push("--critical");
        }
        if self.invert {
            ignored.push("--invert");
        }
        ignored
    }
}

fn parse_metric_name(s: &str) -> Result<String, String> {
    catalog::lookup(s)
        .map(|d| d.name.to_string())
        .ok_or_else(|| format!("unknown metric '{}' (see --help for the list)", s))
}

pub fn command() -> clap::Command {
    Cli::command().after_help(help_epilog())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Help and version exit 0; every usage error is UNKNOWN.
pub fn exit_code_for(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => Severity::Unknown.exit_code(),
    }
}

/// Metric names per group, four per line.
pub fn metrics_help() -> String {
    let mut out = String::from("Available metrics (grouped by category):\n");
    for group in MetricGroup::ALL {
        let names: Vec<&str> = group.members().map(|d| d.name).collect();
        if names.is_empty() {
            continue;
        }
        let _ = write!(out, "\n  {}:\n", group.label());
        for row in names.chunks(4) {
            let _ = writeln!(out, "    {}", row.join("  "));
        }
    }
    out
}

fn help_epilog() -> String {
    let mut out = metrics_help();
    out.push_str(
        "
Examples:
  1. Check a temperature with custom thresholds:
     check_masterkey_sensors -H <host-ip> -C <community> -m TempAC1 -w 40 -c 50

  2. Check a digital input (default: 0=OK, 1=CRITICAL):
     check_masterkey_sensors -H <host-ip> -C <community> -m StatusED1

  3. Check a state with inverted logic (1=OK, 0=CRITICAL):
     check_masterkey_sensors -H <host-ip> -C <community> -m StatusAC1 --invert

  4. Check the health of every sensor at once:
     check_masterkey_sensors -H <host-ip> -C <community> --all
",
    );
    out
}
