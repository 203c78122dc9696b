use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MediaConfig;

/// 媒体托管协作方：上传二进制，返回可访问的 URL
/// Media hosting collaborator: upload bytes, get back a public URL
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, bytes: &[u8], destination: &str) -> Result<String>;
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

/// 通过 HTTP 上传服务实现的媒体托管 / Media host backed by an HTTP upload service
pub struct HttpMediaHost {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMediaHost {
    pub fn new(config: &MediaConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl MediaHost for HttpMediaHost {
    async fn upload(&self, bytes: &[u8], destination: &str) -> Result<String> {
        let resp = self
            .client
            .post(format!("{}/upload", self.base_url))
            .query(&[("path", destination)])
            .body(bytes.to_vec())
            .send()
            .await?
            .error_for_status()?;
        let body: UploadResponse = resp.json().await?;
        Ok(body.url)
    }
}
