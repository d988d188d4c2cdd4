//! Filesystem fixtures

use std::fs;

use tempfile::TempDir;

pub const CNI_FILE: &str = "apiVersion: helm.toolkit.fluxcd.io/v2beta1
kind: HelmRelease
metadata:
  name: aws-vpc-cni
spec:
  chart:
    spec:
      chart: aws-vpc-cni
      sourceRef:
        kind: HelmRepository
        name: aws-vpc-cni
      version: 0.3.6 # helm:autoupdate:aws-vpc-cni
  interval: 1m0s
  timeout: 10m0s # Lots of pods in the daemonset
  values:
    a: b
";

/// Config mapping `aws-vpc-cni` to a repository location
pub fn config_for(repository: &str, constraint: &str) -> String {
    format!(
        r#"charts:
- chart:
    name: aws-vpc-cni
    repository: {repository}
    version: "{constraint}"
  identity: aws-vpc-cni
filename_regex:
- .*\.yaml
"#
    )
}

/// Directory with a config, one annotated release and one plain file
pub fn generate_example(config: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".helm-autoupdate.yaml"), config).unwrap();
    fs::write(temp_dir.path().join("aws-vpc-cni.yaml"), CNI_FILE).unwrap();
    fs::write(temp_dir.path().join("test-example.yaml"), "name: jack").unwrap();
    temp_dir
}
