// Static metric catalog for MasterKey controllers (enterprise OID .1.3.6.1.4.1.39672)

/// How a raw reading is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Numeric reading; tenths-scaled for °C and % units.
    ScaledFloat,
    /// 0/1 state flag.
    IntegerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub oid: &'static str,
    pub kind: ValueKind,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Help-text grouping by name prefix. Has no effect on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    AcTemperature,
    AcStatus,
    AcAlarm,
    AcConnectivity,
    DigitalInputState,
    DigitalInputAlarm,
    SensorTemperature,
    SensorHumidity,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 8] = [
        MetricGroup::AcTemperature,
        MetricGroup::AcStatus,
        MetricGroup::AcAlarm,
        MetricGroup::AcConnectivity,
        MetricGroup::DigitalInputState,
        MetricGroup::DigitalInputAlarm,
        MetricGroup::SensorTemperature,
        MetricGroup::SensorHumidity,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            MetricGroup::AcTemperature => "TempAC",
            MetricGroup::AcStatus => "StatusAC",
            MetricGroup::AcAlarm => "AlarmeAC",
            MetricGroup::AcConnectivity => "ConectAC",
            MetricGroup::DigitalInputState => "StatusED",
            MetricGroup::DigitalInputAlarm => "MomED",
            MetricGroup::SensorTemperature => "TempMod",
            MetricGroup::SensorHumidity => "UmidMod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricGroup::AcTemperature => "AC temperatures",
            MetricGroup::AcStatus => "AC operating status",
            MetricGroup::AcAlarm => "AC alarms",
            MetricGroup::AcConnectivity => "AC wifi connectivity",
            MetricGroup::DigitalInputState => "Digital inputs (state)",
            MetricGroup::DigitalInputAlarm => "Digital inputs (alarm)",
            MetricGroup::SensorTemperature => "Modbus sensors (temperature)",
            MetricGroup::SensorHumidity => "Modbus sensors (humidity)",
        }
    }

    /// Group for a metric name, by prefix followed by the channel number.
    pub fn of(name: &str) -> Option<MetricGroup> {
        Self::ALL.into_iter().find(|g| {
            name.strip_prefix(g.prefix())
                .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
        })
    }

    /// Catalog entries in this group, in catalog order.
    pub fn members(self) -> impl Iterator<Item = &'static MetricDefinition> {
        all().iter().filter(move |d| MetricGroup::of(d.name) == Some(self))
    }
}

const fn float(
    name: &'static str,
    oid: &'static str,
    unit: &'static str,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        oid,
        kind: ValueKind::ScaledFloat,
        unit,
        description,
    }
}

const fn state(name: &'static str, oid: &'static str, description: &'static str) -> MetricDefinition {
    MetricDefinition {
        name,
        oid,
        kind: ValueKind::IntegerState,
        unit: "",
        description,
    }
}

// Insertion order is the sweep order and the help-text order.
static CATALOG: [MetricDefinition; 64] = [
    float("TempAC1", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.0.1", "°C", "Split 1 return temperature"),
    float("TempAC2", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.0.2", "°C", "Split 2 return temperature"),
    float("TempAC3", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.0.3", "°C", "Split 3 return temperature"),
    float("TempAC4", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.0.4", "°C", "Split 4 return temperature"),
    state("StatusAC1", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.1.1", "Split 1 operating state"),
    state("StatusAC2", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.1.2", "Split 2 operating state"),
    state("StatusAC3", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.1.3", "Split 3 operating state"),
    state("StatusAC4", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.1.4", "Split 4 operating state"),
    state("AlarmeAC1", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.2.1", "Split 1 alarm status"),
    state("AlarmeAC2", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.2.2", "Split 2 alarm status"),
    state("AlarmeAC3", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.2.3", "Split 3 alarm status"),
    state("AlarmeAC4", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.2.4", "Split 4 alarm status"),
    state("ConectAC1", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.3.5", "Wifi module 1 connection status"),
    state("ConectAC2", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.3.6", "Wifi module 2 connection status"),
    state("ConectAC3", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.3.7", "Wifi module 3 connection status"),
    state("ConectAC4", ".1.3.6.1.4.1.39672.3.5.4.8.0.2.3.8", "Wifi module 4 connection status"),
    state("StatusED1", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.1", "Digital input 1 state"),
    state("StatusED2", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.2", "Digital input 2 state"),
    state("StatusED3", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.3", "Digital input 3 state"),
    state("StatusED4", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.4", "Digital input 4 state"),
    state("StatusED5", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.5", "Digital input 5 state"),
    state("StatusED6", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.6", "Digital input 6 state"),
    state("StatusED7", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.7", "Digital input 7 state"),
    state("StatusED8", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.8", "Digital input 8 state"),
    state("StatusED9", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.9", "Digital input 9 state*"),
    state("StatusED10", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.10", "Digital input 10 state*"),
    state("StatusED11", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.11", "Digital input 11 state*"),
    state("StatusED12", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.12", "Digital input 12 state*"),
    state("StatusED13", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.13", "Digital input 13 state*"),
    state("StatusED14", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.14", "Digital input 14 state*"),
    state("StatusED15", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.15", "Digital input 15 state*"),
    state("StatusED16", ".1.3.6.1.4.1.39672.3.5.4.8.0.7.16", "Digital input 16 state*"),
    state("MomED1", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.1", "Digital input 1 alarm status"),
    state("MomED2", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.2", "Digital input 2 alarm status"),
    state("MomED3", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.3", "Digital input 3 alarm status"),
    state("MomED4", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.4", "Digital input 4 alarm status"),
    state("MomED5", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.5", "Digital input 5 alarm status"),
    state("MomED6", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.6", "Digital input 6 alarm status"),
    state("MomED7", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.7", "Digital input 7 alarm status"),
    state("MomED8", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.8", "Digital input 8 alarm status"),
    state("MomED9", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.9", "Digital input 9 alarm status*"),
    state("MomED10", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.10", "Digital input 10 alarm status*"),
    state("MomED11", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.11", "Digital input 11 alarm status*"),
    state("MomED12", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.12", "Digital input 12 alarm status*"),
    state("MomED13", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.13", "Digital input 13 alarm status*"),
    state("MomED14", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.14", "Digital input 14 alarm status*"),
    state("MomED15", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.15", "Digital input 15 alarm status*"),
    state("MomED16", ".1.3.6.1.4.1.39672.3.5.4.8.0.1.16", "Digital input 16 alarm status*"),
    float("TempMod1", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.1", "°C", "Modbus sensor 1 temperature"),
    float("TempMod2", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.2", "°C", "Modbus sensor 2 temperature"),
    float("TempMod3", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.3", "°C", "Modbus sensor 3 temperature"),
    float("TempMod4", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.4", "°C", "Modbus sensor 4 temperature"),
    float("TempMod5", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.5", "°C", "Modbus sensor 5 temperature"),
    float("TempMod6", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.6", "°C", "Modbus sensor 6 temperature"),
    float("TempMod7", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.7", "°C", "Modbus sensor 7 temperature"),
    float("TempMod8", ".1.3.6.1.4.1.39672.3.5.4.8.0.4.8", "°C", "Modbus sensor 8 temperature"),
    float("UmidMod1", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.1", "%", "Modbus sensor 1 humidity"),
    float("UmidMod2", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.2", "%", "Modbus sensor 2 humidity"),
    float("UmidMod3", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.3", "%", "Modbus sensor 3 humidity"),
    float("UmidMod4", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.4", "%", "Modbus sensor 4 humidity"),
    float("UmidMod5", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.5", "%", "Modbus sensor 5 humidity"),
    float("UmidMod6", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.6", "%", "Modbus sensor 6 humidity"),
    float("UmidMod7", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.7", "%", "Modbus sensor 7 humidity"),
    float("UmidMod8", ".1.3.6.1.4.1.39672.3.5.4.8.0.5.8", "%", "Modbus sensor 8 humidity"),
];

/// Every metric, in catalog order.
pub fn all() -> &'static [MetricDefinition] {
    &CATALOG
}

pub fn lookup(name: &str) -> Option<&'static MetricDefinition> {
    CATALOG.iter().find(|d| d.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.name)
}
