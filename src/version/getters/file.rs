//! Local filesystem getter, for `file://` repositories

use reqwest::Url;

use crate::version::error::FetchError;
use crate::version::providers::Getter;

pub struct FileGetter;

#[async_trait::async_trait]
impl Getter for FileGetter {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        let path = parsed
            .to_file_path()
            .map_err(|_| FetchError::InvalidUrl(format!("{}: not a local path", url)))?;

        tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })
    }
}
