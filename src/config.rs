use serde::Deserialize;

use crate::models::ThresholdSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub snmp: SnmpConfig,
    #[serde(default)]
    pub thresholds: DefaultThresholds,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnmpConfig {
    /// snmpget binary; looked up on PATH unless absolute.
    #[serde(default = "default_snmp_command")]
    pub command: String,
}

impl Default for SnmpConfig {
    fn default() -> Self {
        Self {
            command: default_snmp_command(),
        }
    }
}

fn default_snmp_command() -> String {
    "snmpget".into()
}

/// Bounds applied to ScaledFloat metrics when the caller passes neither
/// `--warning` nor `--critical`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultThresholds {
    #[serde(default = "default_temperature")]
    pub temperature: ThresholdPair,
    #[serde(default = "default_humidity")]
    pub humidity: ThresholdPair,
}

impl Default for DefaultThresholds {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            humidity: default_humidity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdPair {
    pub warning: f64,
    pub critical: f64,
}

impl From<ThresholdPair> for ThresholdSet {
    fn from(p: ThresholdPair) -> Self {
        ThresholdSet::new(Some(p.warning), Some(p.critical))
    }
}

fn default_temperature() -> ThresholdPair {
    ThresholdPair {
        warning: 40.0,
        critical: 50.0,
    }
}

fn default_humidity() -> ThresholdPair {
    ThresholdPair {
        warning: 80.0,
        critical: 90.0,
    }
}

impl AppConfig {
    /// Reads the TOML file named by `CONFIG_FILE`; built-in defaults when unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)
                    .map_err(|e| anyhow::anyhow!("config {}: {}", path, e))?;
                Self::load_from_str(&s)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.snmp.command.trim().is_empty(),
            "snmp.command must be non-empty"
        );
        for (name, pair) in [
            ("temperature", self.thresholds.temperature),
            ("humidity", self.thresholds.humidity),
        ] {
            anyhow::ensure!(
                pair.warning.is_finite(),
                "thresholds.{}.warning must be a finite number, got {}",
                name,
                pair.warning
            );
            anyhow::ensure!(
                pair.critical.is_finite(),
                "thresholds.{}.critical must be a finite number, got {}",
                name,
                pair.critical
            );
        }
        Ok(())
    }
}
