//! Image lookup and build history through the local Docker engine.

use async_trait::async_trait;
use bollard::image::ListImagesOptions;
use bollard::Docker;

use crate::types::history::BuildHistoryEntry;
use crate::PodlangResult;

use super::base::{ImageHistorySource, LocalImage};

/// Reads images from the Docker daemon reachable through the local defaults
/// (`DOCKER_HOST` or the platform socket).
pub struct DockerImages {
    docker: Docker,
}

impl DockerImages {
    /// Connects to the local Docker engine.
    pub fn connect() -> PodlangResult<Self> {
        let docker = Docker::connect_with_local_defaults()?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl ImageHistorySource for DockerImages {
    async fn images(&self) -> PodlangResult<Vec<LocalImage>> {
        let summaries = self
            .docker
            .list_images(Some(ListImagesOptions::<String> {
                all: false,
                ..Default::default()
            }))
            .await?;

        tracing::debug!(images = summaries.len(), "Local images listed");

        Ok(summaries
            .into_iter()
            .map(|s| LocalImage {
                id: s.id,
                tags: s.repo_tags,
            })
            .collect())
    }

    async fn history(&self, reference: &str) -> PodlangResult<Vec<BuildHistoryEntry>> {
        let layers = self.docker.image_history(reference).await?;
        tracing::debug!(image = reference, layers = layers.len(), "Image history fetched");

        Ok(chronological(layers.into_iter().map(|l| l.created_by)))
    }
}

/// Docker reports history newest layer first.
fn chronological<I>(newest_first: I) -> Vec<BuildHistoryEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut steps: Vec<BuildHistoryEntry> =
        newest_first.into_iter().map(BuildHistoryEntry::from).collect();
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_oldest_first() {
        let steps = chronological(vec![
            "CMD [\"./app\"]".to_string(),
            "RUN go build -o app".to_string(),
            "ADD file:abc in /".to_string(),
        ]);

        assert_eq!(steps[0].command_text, "ADD file:abc in /");
        assert_eq!(steps[2].command_text, "CMD [\"./app\"]");
    }
}
