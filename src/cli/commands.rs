//! CLI command implementations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::collectors::{
    find_images, DockerImages, ImageHistorySource, KubeWorkloads, WorkloadSource,
};
use crate::knowledge::{add_pattern, infer, EditOutcome, InferenceResult, KnowledgeBase, KnowledgeStore};
use crate::types::config::{ClusterConfig, Config};
use crate::{PodlangError, PodlangResult};

use super::interactive::select_container;
use super::render::{render_already_present, render_applied, render_inference, render_listing};

/// Inference for one local image that matched the requested reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    /// The local tag that matched.
    pub tag: String,
    /// Candidate languages in first-discovery order.
    pub languages: InferenceResult,
}

/// Guesses the language of a container image.
///
/// Without `image`, pods are listed from the cluster and the user picks a
/// pod and container interactively.
pub async fn inspect(
    image: Option<String>,
    namespace: Option<String>,
    config: &Config,
    heuristics: &Path,
) -> PodlangResult<()> {
    let kb = KnowledgeStore::new(heuristics).load()?;

    let reference = match image {
        Some(image) => image,
        None => {
            let cluster = ClusterConfig {
                namespace: namespace.or_else(|| config.cluster.namespace.clone()),
                context: config.cluster.context.clone(),
            };
            let spinner = spinner("Listing pods...");
            let workloads = match KubeWorkloads::connect(&cluster).await {
                Ok(source) => source.workloads().await,
                Err(e) => Err(e),
            };
            spinner.finish_and_clear();

            let workloads = workloads?;
            let (workload, container) = select_container(&workloads)?;
            println!(
                "The {} container in pod {} is running {}",
                container.name, workload.pod, container.image
            );
            container.image.clone()
        }
    };

    let spinner = spinner("Reading image history...");
    let reports = match DockerImages::connect() {
        Ok(docker) => infer_image(&docker, &reference, &kb).await,
        Err(e) => Err(e),
    };
    spinner.finish_and_clear();

    let reports = reports?;
    if reports.is_empty() {
        return Err(PodlangError::ImageNotFound(reference));
    }

    for report in &reports {
        println!("{}", render_inference(&report.tag, &report.languages));
    }

    Ok(())
}

/// Runs inference for every local image whose tag contains `reference`.
pub async fn infer_image(
    source: &dyn ImageHistorySource,
    reference: &str,
    kb: &KnowledgeBase,
) -> PodlangResult<Vec<ImageReport>> {
    let images = source.images().await?;
    let matches = find_images(&images, reference);

    if matches.is_empty() {
        tracing::warn!(reference, images = images.len(), "No local image matched");
    }

    let mut reports = Vec::with_capacity(matches.len());
    for found in matches {
        let history = source.history(&found.tag).await?;
        let languages = infer(&history, kb);
        tracing::debug!(tag = %found.tag, steps = history.len(), ?languages, "Image inspected");
        reports.push(ImageReport {
            tag: found.tag,
            languages,
        });
    }

    Ok(reports)
}

/// Adds a command pattern to a known language and persists it.
pub fn add_to_heuristic(language: &str, pattern: &str, heuristics: &Path) -> PodlangResult<()> {
    let store = KnowledgeStore::new(heuristics);
    let mut kb = store.load()?;

    match add_pattern(&mut kb, language, pattern) {
        EditOutcome::UnknownLanguage { known } => Err(PodlangError::UnknownLanguage {
            language: language.to_string(),
            known,
        }),
        EditOutcome::InvalidPattern => Err(PodlangError::EmptyPattern(language.to_string())),
        EditOutcome::AlreadyPresent => {
            println!("{}", render_already_present(pattern));
            Ok(())
        }
        EditOutcome::Applied => {
            store.save(&kb)?;
            println!("{}", render_applied(language, pattern));
            Ok(())
        }
    }
}

/// Prints every language with its patterns.
pub fn list_heuristics(heuristics: &Path) -> PodlangResult<()> {
    let kb = KnowledgeStore::new(heuristics).load()?;
    print!("{}", render_listing(&kb));
    Ok(())
}

/// Writes a default configuration and a starter knowledge base.
///
/// Existing files are kept unless `force` is set.
pub fn init(path: Option<PathBuf>, force: bool) -> PodlangResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("podlang.toml");
    if config_path.exists() && !force {
        println!("Configuration already exists at: {}", config_path.display());
    } else {
        let mut config = Config::default();
        config.knowledge.path = PathBuf::from("heuristics.json");
        config.save(&config_path)?;
        println!("Configuration created at: {}", config_path.display());
    }

    let store = KnowledgeStore::new(target_dir.join("heuristics.json"));
    if store.exists() && !force {
        println!("Knowledge base already exists at: {}", store.path().display());
    } else {
        let kb = KnowledgeBase::starter();
        store.save(&kb)?;
        println!(
            "Knowledge base created at: {} ({} languages)",
            store.path().display(),
            kb.len()
        );
    }

    println!();
    println!("Next steps:");
    println!("  1. Review the heuristics: podlang list-heuristics");
    println!("  2. Teach new ones: podlang add-to-heuristic <language> <command>");
    println!("  3. Inspect a pod: podlang inspect");

    Ok(())
}

/// Shows the version.
pub fn version() {
    println!("podlang {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Guesses the language of an application running in a pod");
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::LocalImage;
    use crate::knowledge::HeuristicEntry;
    use crate::types::history::BuildHistoryEntry;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FakeImages {
        images: Vec<LocalImage>,
        history: Vec<BuildHistoryEntry>,
    }

    #[async_trait]
    impl ImageHistorySource for FakeImages {
        async fn images(&self) -> PodlangResult<Vec<LocalImage>> {
            Ok(self.images.clone())
        }

        async fn history(&self, _reference: &str) -> PodlangResult<Vec<BuildHistoryEntry>> {
            Ok(self.history.clone())
        }
    }

    fn kb() -> KnowledgeBase {
        KnowledgeBase::from_entries(vec![
            HeuristicEntry::new("go", ["go build", "go mod"]),
            HeuristicEntry::new("python", ["pip install"]),
        ])
        .unwrap()
    }

    fn write_kb(dir: &Path) -> PathBuf {
        let path = dir.join("heuristics.json");
        KnowledgeStore::new(&path).save(&kb()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_infer_image() {
        let source = FakeImages {
            images: vec![LocalImage {
                id: "sha256:1".to_string(),
                tags: vec!["shop/api:1".to_string()],
            }],
            history: vec![
                BuildHistoryEntry::new("RUN pip install -r requirements.txt"),
                BuildHistoryEntry::new("RUN go build ./..."),
            ],
        };

        let reports = infer_image(&source, "shop/api", &kb()).await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].tag, "shop/api:1");
        assert_eq!(reports[0].languages, vec!["python", "go"]);
    }

    #[test]
    fn test_infer_image_not_found() {
        let source = FakeImages {
            images: vec![],
            history: vec![],
        };

        let reports = tokio_test::block_on(infer_image(&source, "shop/api", &kb())).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_add_to_heuristic_persists() {
        let dir = tempdir().unwrap();
        let path = write_kb(dir.path());

        add_to_heuristic("go", "go vet", &path).unwrap();

        let kb = KnowledgeStore::new(&path).load().unwrap();
        assert_eq!(
            kb.entry("go").unwrap().patterns,
            vec!["go build", "go mod", "go vet"]
        );
    }

    #[test]
    fn test_add_to_heuristic_unknown_language() {
        let dir = tempdir().unwrap();
        let path = write_kb(dir.path());
        let before = std::fs::read_to_string(&path).unwrap();

        let err = add_to_heuristic("rust", "cargo build", &path).unwrap_err();

        match err {
            PodlangError::UnknownLanguage { language, known } => {
                assert_eq!(language, "rust");
                assert_eq!(known, vec!["go", "python"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_add_to_heuristic_empty_command() {
        let dir = tempdir().unwrap();
        let path = write_kb(dir.path());
        let before = std::fs::read_to_string(&path).unwrap();

        let err = add_to_heuristic("python", "", &path).unwrap_err();

        assert!(matches!(err, PodlangError::EmptyPattern(ref language) if language == "python"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_add_to_heuristic_missing_store() {
        let dir = tempdir().unwrap();
        let err = add_to_heuristic("go", "go vet", &dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_storage_failure());
    }

    #[test]
    fn test_init_writes_files_once() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("project");

        init(Some(target.clone()), false).unwrap();

        let kb_path = target.join("heuristics.json");
        assert!(target.join("podlang.toml").exists());
        assert_eq!(KnowledgeStore::new(&kb_path).load().unwrap(), KnowledgeBase::starter());

        add_to_heuristic("go", "go vet", &kb_path).unwrap();
        init(Some(target.clone()), false).unwrap();
        assert!(KnowledgeStore::new(&kb_path)
            .load()
            .unwrap()
            .entry("go")
            .unwrap()
            .contains("go vet"));

        init(Some(target), true).unwrap();
        assert_eq!(KnowledgeStore::new(&kb_path).load().unwrap(), KnowledgeBase::starter());
    }

    #[test]
    fn test_version() {
        version();
    }
}
