//! End-to-end scan -> resolve -> write tests against an in-memory source

mod helper;

use std::fs;
use std::sync::atomic::Ordering;

use helper::{CNI_FILE, InMemorySource, config_for, generate_example};
use helm_autoupdate::config::AutoUpdateConfig;
use helm_autoupdate::parser::DirectoryScanner;
use helm_autoupdate::update::{UpdateError, apply_updates_to_files, write_changes_to_filesystem};
use helm_autoupdate::version::CachedSource;
use helm_autoupdate::version::error::CatalogError;

const REPO: &str = "https://aws.github.io/eks-charts";

async fn run(temp_dir: &tempfile::TempDir, source: InMemorySource) -> Result<usize, UpdateError> {
    let config =
        AutoUpdateConfig::load_file(&temp_dir.path().join(".helm-autoupdate.yaml")).unwrap();
    let files = DirectoryScanner::new(temp_dir.path())
        .find_requested_changes(&config.parsed_regex)
        .unwrap();

    let cache = CachedSource::new(source);
    let updated = apply_updates_to_files(&cache, &config, files).await?;
    write_changes_to_filesystem(&updated).unwrap();
    Ok(updated.len())
}

#[tokio::test]
async fn rewrites_only_the_annotated_line() {
    let temp_dir = generate_example(&config_for(REPO, "*"));
    let source = InMemorySource::new().with_chart(REPO, "aws-vpc-cni", vec!["0.3.6", "1.0.5", "1.0.4"]);

    let updated = run(&temp_dir, source).await.unwrap();

    assert_eq!(updated, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("aws-vpc-cni.yaml")).unwrap(),
        CNI_FILE.replace(
            "      version: 0.3.6 # helm:autoupdate:aws-vpc-cni",
            "      version: 1.0.5 # helm:autoupdate:aws-vpc-cni"
        )
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("test-example.yaml")).unwrap(),
        "name: jack"
    );
}

#[tokio::test]
async fn leaves_up_to_date_file_untouched() {
    let temp_dir = generate_example(&config_for(REPO, "0.3.6"));
    let path = temp_dir.path().join("aws-vpc-cni.yaml");
    let modified_before = fs::metadata(&path).unwrap().modified().unwrap();
    let source = InMemorySource::new().with_chart(REPO, "aws-vpc-cni", vec!["0.3.6", "1.0.5"]);

    let updated = run(&temp_dir, source).await.unwrap();

    assert_eq!(updated, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), CNI_FILE);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified_before);
}

#[tokio::test]
async fn fetches_each_repository_once_across_files() {
    let temp_dir = generate_example(&config_for(REPO, "*"));
    fs::create_dir(temp_dir.path().join("prod")).unwrap();
    fs::write(temp_dir.path().join("prod").join("cni.yaml"), CNI_FILE).unwrap();
    let source = InMemorySource::new().with_chart(REPO, "aws-vpc-cni", vec!["1.0.5"]);
    let fetches = source.fetch_counter();

    let updated = run(&temp_dir, source).await.unwrap();

    assert_eq!(updated, 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_chart_aborts_without_writing() {
    let temp_dir = generate_example(&config_for(REPO, "*"));
    fs::write(temp_dir.path().join("a-first.yaml"), CNI_FILE).unwrap();
    let source = InMemorySource::new().with_chart(REPO, "some-other-chart", vec!["1.0.5"]);

    let result = run(&temp_dir, source).await;

    assert!(matches!(
        result,
        Err(UpdateError::Catalog {
            source: CatalogError::NotFound { .. },
            ..
        })
    ));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a-first.yaml")).unwrap(),
        CNI_FILE
    );
}

#[tokio::test]
async fn unreachable_repository_aborts_run() {
    let temp_dir = generate_example(&config_for(REPO, "*"));

    let result = run(&temp_dir, InMemorySource::new()).await;

    assert!(matches!(result, Err(UpdateError::Fetch { ref repository, .. }) if repository == REPO));
}

#[test]
fn filename_regex_limits_scanned_files() {
    let temp_dir = generate_example(&config_for(REPO, "*"));
    fs::write(temp_dir.path().join("b.txt"), CNI_FILE).unwrap();
    let config =
        AutoUpdateConfig::load_file(&temp_dir.path().join(".helm-autoupdate.yaml")).unwrap();

    let files = DirectoryScanner::new(temp_dir.path())
        .find_requested_changes(&config.parsed_regex)
        .unwrap();

    let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(paths, vec![temp_dir.path().join("aws-vpc-cni.yaml")]);
}
