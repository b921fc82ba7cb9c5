// SNMP readings via the net-snmp `snmpget` client, one OID per process.

mod command;

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::instrument;

/// Upper bound for one GET round-trip, process startup included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("could not run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snmpget failed: {detail}")]
    Failed { detail: String },

    #[error("Timeout ({}s) connecting to {target}", .timeout.as_secs())]
    Timeout { target: String, timeout: Duration },
}

/// Fetches the raw textual value stored at an address.
///
/// Implementations are called sequentially, one address at a time.
#[allow(async_fn_in_trait)]
pub trait Collector {
    async fn fetch(&self, oid: &str) -> Result<String, CollectionError>;
}

/// The device being probed.
#[derive(Debug, Clone)]
pub struct SnmpTarget {
    pub host: String,
    pub port: u16,
    pub community: String,
}

impl SnmpTarget {
    pub fn new(host: impl Into<String>, port: u16, community: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            community: community.into(),
        }
    }
}

pub struct SnmpRepo {
    target: SnmpTarget,
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

impl SnmpRepo {
    pub fn new(target: SnmpTarget, program: impl Into<String>) -> Self {
        Self {
            target,
            program: program.into(),
            leading_args: Vec::new(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Runs `sh <script>` in place of snmpget.
    #[cfg(test)]
    fn via_shell(target: SnmpTarget, script: &std::path::Path) -> Self {
        let mut repo = Self::new(target, "sh");
        repo.leading_args = vec![script.to_string_lossy().into_owned()];
        repo
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Collector for SnmpRepo {
    #[instrument(skip(self), fields(repo = "snmp", operation = "fetch", host = %self.target.host))]
    async fn fetch(&self, oid: &str) -> Result<String, CollectionError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .args(command::snmpget_args(&self.target, oid))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // On timeout the output future is dropped, which kills the child.
        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(CollectionError::Spawn {
                    command: self.program.clone(),
                    source,
                });
            }
            Err(_elapsed) => {
                tracing::debug!(timeout_secs = self.timeout.as_secs(), "snmpget timed out");
                return Err(CollectionError::Timeout {
                    target: format!("{}:{}", self.target.host, self.target.port),
                    timeout: self.timeout,
                });
            }
        };

        let result = command::interpret_output(output.status.success(), &output.stdout, &output.stderr);
        if let Err(e) = &result {
            tracing::debug!(error = %e, exit_code = ?output.status.code(), "snmpget returned an error");
        }
        result
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Write;

    /// Stand-in for snmpget: a shell script with the given body, run through `sh`.
    fn fake_snmpget(body: &str) -> tempfile::TempPath {
        let mut f = tempfile::Builder::new()
            .suffix(".sh")
            .tempfile()
            .expect("create temp file");
        write!(f, "{body}").expect("write body");
        f.into_temp_path()
    }

    fn repo(script: &tempfile::TempPath) -> SnmpRepo {
        SnmpRepo::via_shell(SnmpTarget::new("127.0.0.1", 1161, "public"), script)
    }

    #[tokio::test]
    async fn fetch_returns_trimmed_value() {
        let script = fake_snmpget("echo ' 215 '\n");
        let value = repo(&script).fetch(".1.3.6.1.4.1.39672.3.5.4.8.0.2.0.1").await.unwrap();
        assert_eq!(value, "215");
    }

    #[tokio::test]
    async fn fetch_passes_oid_as_last_argument() {
        let script = fake_snmpget("for a; do last=$a; done; echo \"$last\"\n");
        let value = repo(&script).fetch(".1.3.6.1.4.1.39672.3.5.4.8.0.7.3").await.unwrap();
        assert_eq!(value, ".1.3.6.1.4.1.39672.3.5.4.8.0.7.3");
    }

    #[tokio::test]
    async fn nonzero_exit_is_a_collection_failure() {
        let script = fake_snmpget("echo 'Timeout: No Response from 127.0.0.1:1161.' >&2\nexit 1\n");
        let err = repo(&script).fetch(".1").await.unwrap_err();
        assert!(matches!(err, CollectionError::Failed { .. }));
        assert!(err.to_string().contains("No Response"));
    }

    #[tokio::test]
    async fn slow_agent_times_out() {
        let script = fake_snmpget("sleep 5\necho 1\n");
        let err = repo(&script)
            .with_timeout(Duration::from_millis(200))
            .fetch(".1")
            .await
            .unwrap_err();
        assert!(matches!(err, CollectionError::Timeout { .. }));
        assert!(err.to_string().ends_with("connecting to 127.0.0.1:1161"));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let repo = SnmpRepo::new(
            SnmpTarget::new("127.0.0.1", 1161, "public"),
            "/nonexistent/snmpget",
        );
        let err = repo.fetch(".1").await.unwrap_err();
        assert!(matches!(err, CollectionError::Spawn { .. }));
    }
}
