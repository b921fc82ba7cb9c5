// snmpget argument building and exit-status interpretation.

use super::{CollectionError, SnmpTarget};

/// Arguments for a value-only, unquoted v2c GET of one OID.
pub(super) fn snmpget_args(target: &SnmpTarget, oid: &str) -> Vec<String> {
    vec![
        "-v2c".into(),
        "-c".into(),
        target.community.clone(),
        "-O".into(),
        "vq".into(),
        agent_spec(&target.host, target.port),
        oid.into(),
    ]
}

/// `host:port`, with IPv6 literals wrapped so net-snmp does not split on their colons.
pub(super) fn agent_spec(host: &str, port: u16) -> String {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if bare.contains(':') {
        format!("udp6:[{}]:{}", bare, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Map a finished snmpget run to the trimmed value or a collection failure.
pub(super) fn interpret_output(
    success: bool,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<String, CollectionError> {
    let stdout = String::from_utf8_lossy(stdout);
    if success {
        return Ok(stdout.trim().to_string());
    }
    let stderr = String::from_utf8_lossy(stderr);
    let detail = match stderr.trim() {
        "" => stdout.trim(),
        s => s,
    };
    Err(CollectionError::Failed {
        detail: detail.to_string(),
    })
}
