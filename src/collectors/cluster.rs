//! Pod discovery through the Kubernetes API.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ListParams},
    config::KubeConfigOptions,
    Client, Config,
};

use crate::types::config::ClusterConfig;
use crate::{PodlangError, PodlangResult};

use super::base::{ContainerImage, Workload, WorkloadSource};

/// Lists pods with a kubeconfig-derived client.
pub struct KubeWorkloads {
    client: Client,
    namespace: Option<String>,
}

impl KubeWorkloads {
    /// Connects using the kubeconfig context and namespace from `config`.
    pub async fn connect(config: &ClusterConfig) -> PodlangResult<Self> {
        let kube_config = match &config.context {
            Some(context) => Config::from_kubeconfig(&KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            })
            .await
            .map_err(|e| PodlangError::ClusterConfig(e.to_string()))?,
            None => Config::infer()
                .await
                .map_err(|e| PodlangError::ClusterConfig(e.to_string()))?,
        };

        let client = Client::try_from(kube_config)?;
        tracing::debug!(
            context = config.context.as_deref().unwrap_or("current"),
            namespace = config.namespace.as_deref().unwrap_or("all"),
            "Kubernetes client ready"
        );

        Ok(Self {
            client,
            namespace: config.namespace.clone(),
        })
    }
}

#[async_trait]
impl WorkloadSource for KubeWorkloads {
    async fn workloads(&self) -> PodlangResult<Vec<Workload>> {
        let pods: Api<Pod> = match &self.namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };

        let pod_list = pods.list(&ListParams::default()).await?;
        let workloads: Vec<Workload> = pod_list.items.into_iter().filter_map(to_workload).collect();

        tracing::debug!(pods = workloads.len(), "Pods listed");
        Ok(workloads)
    }
}

fn to_workload(pod: Pod) -> Option<Workload> {
    let name = pod.metadata.name?;
    let namespace = pod
        .metadata
        .namespace
        .unwrap_or_else(|| "default".to_string());

    let containers = pod
        .spec
        .map(|spec| {
            spec.containers
                .into_iter()
                .filter_map(|c| {
                    c.image.map(|image| ContainerImage {
                        name: c.name,
                        image,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Workload {
        pod: name,
        namespace,
        containers,
    })
}
