// Shared test helpers
#![allow(dead_code)]

use masterkey_check::catalog;
use masterkey_check::snmp_repo::{CollectionError, Collector};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory collector keyed by OID; records every fetch in call order.
pub struct MockCollector {
    readings: HashMap<&'static str, Result<String, String>>,
    default: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockCollector {
    /// Every OID answers `raw` unless overridden.
    pub fn uniform(raw: &str) -> Self {
        Self {
            readings: HashMap::new(),
            default: Some(raw.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// No OID answers unless set with `with`.
    pub fn empty() -> Self {
        Self {
            readings: HashMap::new(),
            default: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, metric: &str, raw: &str) -> Self {
        self.readings.insert(oid_of(metric), Ok(raw.to_string()));
        self
    }

    pub fn failing(mut self, metric: &str, detail: &str) -> Self {
        self.readings.insert(oid_of(metric), Err(detail.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Collector for MockCollector {
    async fn fetch(&self, oid: &str) -> Result<String, CollectionError> {
        self.calls.lock().unwrap().push(oid.to_string());
        match self.readings.get(oid) {
            Some(Ok(raw)) => Ok(raw.clone()),
            Some(Err(detail)) => Err(CollectionError::Failed {
                detail: detail.clone(),
            }),
            None => self.default.clone().ok_or_else(|| CollectionError::Failed {
                detail: format!("No Such Object available on this agent at this OID ({oid})"),
            }),
        }
    }
}

fn oid_of(metric: &str) -> &'static str {
    catalog::lookup(metric)
        .unwrap_or_else(|| panic!("{metric} not in catalog"))
        .oid
}
