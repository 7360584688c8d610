//! Kubernetes deployment access through the `kubectl` binary

use super::{InfraStatus, Orchestrator};
use crate::config::OrchestratorConfig;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use std::time::Duration;
use tokio::process::Command;

/// Annotation whose change makes Kubernetes roll the pods
const RESTARTED_AT_ANNOTATION: &str = "kubectl.kubernetes.io/restartedAt";

/// Upper bound on a single kubectl invocation
pub const KUBECTL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Deployment {
    #[serde(default)]
    status: DeploymentStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentStatus {
    ready_replicas: Option<u32>,
}

/// Orchestrator backed by `kubectl` against a single deployment
#[derive(Debug, Clone)]
pub struct KubectlOrchestrator {
    kubectl: String,
    namespace: String,
    deployment: String,
    timeout: Duration,
}

impl KubectlOrchestrator {
    pub fn new(config: &OrchestratorConfig) -> Self {
        Self {
            kubectl: config.kubectl.clone(),
            namespace: config.namespace.clone(),
            deployment: config.deployment.clone(),
            timeout: KUBECTL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run kubectl and return its stdout
    ///
    /// kubectl waits forever on an unreachable API server by default, so the
    /// request timeout is passed along and the process is killed if it still
    /// outlives `timeout`.
    async fn kubectl(&self, args: &[&str]) -> Result<Vec<u8>> {
        let request_timeout = format!("--request-timeout={}s", self.timeout.as_secs().max(1));
        let child = Command::new(&self.kubectl)
            .args(args)
            .arg(&request_timeout)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .with_context(|| format!("kubectl timed out after {:?}", self.timeout))?
            .with_context(|| format!("Failed to run {}", self.kubectl))?;

        if !output.status.success() {
            bail!(
                "kubectl {} exited with {}: {}",
                args.first().copied().unwrap_or_default(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }

    async fn fetch_status(&self) -> Result<InfraStatus> {
        let stdout = self
            .kubectl(&[
                "get",
                "deployment",
                &self.deployment,
                "--namespace",
                &self.namespace,
                "--output",
                "json",
            ])
            .await?;

        parse_deployment_status(&stdout).context("Failed to parse deployment JSON")
    }

    async fn patch_restart(&self) -> Result<()> {
        let patch = restart_patch(Utc::now()).to_string();
        self.kubectl(&[
            "patch",
            "deployment",
            &self.deployment,
            "--namespace",
            &self.namespace,
            "--patch",
            &patch,
        ])
        .await?;
        Ok(())
    }
}

/// Map `kubectl get deployment -o json` output to an infrastructure status
pub fn parse_deployment_status(json: &[u8]) -> serde_json::Result<InfraStatus> {
    let deployment: Deployment = serde_json::from_slice(json)?;
    Ok(match deployment.status.ready_replicas {
        Some(ready) if ready > 0 => InfraStatus::Running,
        _ => InfraStatus::NotReady,
    })
}

/// Strategic-merge patch that triggers a rolling restart
pub fn restart_patch(now: DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({
        "spec": {
            "template": {
                "metadata": {
                    "annotations": {
                        RESTARTED_AT_ANNOTATION: now.to_rfc3339_opts(SecondsFormat::Secs, true)
                    }
                }
            }
        }
    })
}

#[async_trait]
impl Orchestrator for KubectlOrchestrator {
    async fn get_server_status(&self) -> InfraStatus {
        match self.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("Failed to get deployment status: {:#}", e);
                InfraStatus::Error
            }
        }
    }

    async fn restart_server(&self) -> bool {
        match self.patch_restart().await {
            Ok(()) => {
                tracing::info!("Triggered restart of deployment {}", self.deployment);
                true
            }
            Err(e) => {
                tracing::error!("Failed to restart deployment {}: {:#}", self.deployment, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ready_replicas() {
        let json = br#"{"metadata":{"name":"ark-server"},"status":{"replicas":1,"readyReplicas":1}}"#;
        assert_eq!(parse_deployment_status(json).unwrap(), InfraStatus::Running);
    }

    #[test]
    fn test_no_ready_replicas() {
        let zero = br#"{"status":{"replicas":1,"readyReplicas":0}}"#;
        assert_eq!(parse_deployment_status(zero).unwrap(), InfraStatus::NotReady);

        // Kubernetes omits the field entirely while nothing is ready
        let missing = br#"{"status":{"replicas":1,"unavailableReplicas":1}}"#;
        assert_eq!(parse_deployment_status(missing).unwrap(), InfraStatus::NotReady);

        let no_status = br#"{"metadata":{}}"#;
        assert_eq!(parse_deployment_status(no_status).unwrap(), InfraStatus::NotReady);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_deployment_status(b"error: not found").is_err());
    }

    #[test]
    fn test_restart_patch() {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 30, 0).unwrap();
        let patch = restart_patch(now);
        assert_eq!(
            patch["spec"]["template"]["metadata"]["annotations"][RESTARTED_AT_ANNOTATION],
            "2026-10-15T12:30:00Z"
        );
    }

    #[tokio::test]
    async fn test_missing_binary_reports_error() {
        let orchestrator = KubectlOrchestrator {
            kubectl: "/nonexistent/kubectl".to_string(),
            namespace: "ns".to_string(),
            deployment: "ark-server".to_string(),
            timeout: KUBECTL_TIMEOUT,
        };
        assert_eq!(orchestrator.get_server_status().await, InfraStatus::Error);
        assert!(!orchestrator.restart_server().await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_hung_kubectl_times_out() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Instant;

        let script =
            std::env::temp_dir().join(format!("arkbot-hung-kubectl-{}", std::process::id()));
        std::fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = crate::Config::default().orchestrator;
        config.kubectl = script.to_string_lossy().into_owned();
        let orchestrator =
            KubectlOrchestrator::new(&config).with_timeout(Duration::from_millis(200));

        let started = Instant::now();
        assert_eq!(orchestrator.get_server_status().await, InfraStatus::Error);
        assert!(!orchestrator.restart_server().await);
        assert!(started.elapsed() < Duration::from_secs(10));

        let _ = std::fs::remove_file(&script);
    }
}
