//! Collectors that feed the inference engine.
//!
//! Pods and containers come from the Kubernetes API, images and their build
//! history from the local Docker engine. Only local images are visible.

mod base;
mod cluster;
mod docker;

pub use base::{
    find_images, ContainerImage, ImageHistorySource, ImageMatch, LocalImage, Workload,
    WorkloadSource,
};
pub use cluster::KubeWorkloads;
pub use docker::DockerImages;
