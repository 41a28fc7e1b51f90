//! Traits and shared types for the cluster and image collectors.

use async_trait::async_trait;

use crate::types::history::BuildHistoryEntry;
use crate::PodlangResult;

/// A container declared in a pod spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerImage {
    /// Container name.
    pub name: String,
    /// Image reference as written in the pod spec.
    pub image: String,
}

/// A pod and its containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub pod: String,
    pub namespace: String,
    pub containers: Vec<ContainerImage>,
}

/// An image known to the local image runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    pub id: String,
    /// Repository tags, possibly empty for dangling images.
    pub tags: Vec<String>,
}

/// A local image whose tag matched a requested reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMatch {
    pub image: LocalImage,
    /// The tag that contained the reference.
    pub tag: String,
}

/// Lists the pods running in a cluster.
#[async_trait]
pub trait WorkloadSource: Send + Sync {
    /// Returns the pods with their containers.
    async fn workloads(&self) -> PodlangResult<Vec<Workload>>;
}

/// Lists local images and fetches their build history.
#[async_trait]
pub trait ImageHistorySource: Send + Sync {
    /// Returns every image known to the runtime.
    async fn images(&self) -> PodlangResult<Vec<LocalImage>>;

    /// Returns the build history of `reference`, oldest step first.
    async fn history(&self, reference: &str) -> PodlangResult<Vec<BuildHistoryEntry>>;
}

/// Finds the images with a repository tag containing `reference`.
///
/// Every tag of every image is considered and the first containing tag of
/// each image is reported. Untagged images never match.
pub fn find_images(images: &[LocalImage], reference: &str) -> Vec<ImageMatch> {
    images
        .iter()
        .filter_map(|image| {
            image
                .tags
                .iter()
                .find(|tag| tag.contains(reference))
                .map(|tag| ImageMatch {
                    image: image.clone(),
                    tag: tag.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, tags: &[&str]) -> LocalImage {
        LocalImage {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_find_by_tag_containment() {
        let images = vec![
            image("sha256:1", &["shop/api:1.2"]),
            image("sha256:2", &["shop/web:latest"]),
        ];

        let found = find_images(&images, "shop/api");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag, "shop/api:1.2");
    }

    #[test]
    fn test_any_tag_may_match() {
        let images = vec![image("sha256:1", &["registry.local/base:3", "shop/api:1.2"])];

        let found = find_images(&images, "shop/api:1.2");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].image.id, "sha256:1");
        assert_eq!(found[0].tag, "shop/api:1.2");
    }

    #[test]
    fn test_untagged_images_skipped() {
        let images = vec![image("sha256:dangling", &[]), image("sha256:2", &["shop/api:1"])];

        let found = find_images(&images, "shop");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].image.id, "sha256:2");
    }

    #[test]
    fn test_no_match() {
        let images = vec![image("sha256:1", &["shop/api:1"])];
        assert!(find_images(&images, "billing").is_empty());
    }
}
