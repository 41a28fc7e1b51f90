//! Interactive pod and container selection.
//!
//! Prompts are rendered with dialoguer on stderr.

use dialoguer::{theme::ColorfulTheme, Select};

use crate::collectors::{ContainerImage, Workload};
use crate::{PodlangError, PodlangResult};

/// Labels shown in the pod prompt.
pub fn pod_labels(workloads: &[Workload]) -> Vec<String> {
    workloads
        .iter()
        .map(|w| format!("{}/{}", w.namespace, w.pod))
        .collect()
}

/// Labels shown in the container prompt.
pub fn container_labels(workload: &Workload) -> Vec<String> {
    workload
        .containers
        .iter()
        .map(|c| format!("{} ({})", c.name, c.image))
        .collect()
}

/// Asks for a pod, then for one of its containers.
///
/// A pod with a single container skips the second prompt.
pub fn select_container(workloads: &[Workload]) -> PodlangResult<(&Workload, &ContainerImage)> {
    if workloads.is_empty() {
        return Err(PodlangError::NoWorkloads("no pods found".to_string()));
    }

    let theme = ColorfulTheme::default();

    let pod_idx = Select::with_theme(&theme)
        .with_prompt("Choose a pod")
        .items(&pod_labels(workloads))
        .default(0)
        .interact()?;
    let workload = &workloads[pod_idx];

    let container = match workload.containers.as_slice() {
        [] => {
            return Err(PodlangError::NoWorkloads(format!(
                "pod {} has no containers with an image",
                workload.pod
            )))
        }
        [only] => only,
        containers => {
            let idx = Select::with_theme(&theme)
                .with_prompt("Choose a container")
                .items(&container_labels(workload))
                .default(0)
                .interact()?;
            &containers[idx]
        }
    };

    Ok((workload, container))
}
