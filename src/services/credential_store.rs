//! API 密钥存储 - 业务能力层
//!
//! 密钥保存在本地 JSON 文件的 `OPENAI_API_KEY` 字段中。
//! 读取失败（文件不存在、无法读取、格式错误、缺字段）一律视为"没有密钥"，
//! 转而向用户询问并写回文件。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{AppResult, CredentialError};
use crate::utils::prompt::Prompter;

pub const API_KEY_FIELD: &str = "OPENAI_API_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(rename = "OPENAI_API_KEY", default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

/// API 密钥存储
pub struct CredentialStore {
    path: PathBuf,
    /// 本进程内第一次取得的密钥
    cached: Option<String>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 取得密钥
    ///
    /// 依次使用：进程内缓存 → 密钥文件 → 询问用户（并写回文件）
    pub async fn load(&mut self, prompter: &mut impl Prompter) -> AppResult<String> {
        if let Some(key) = &self.cached {
            return Ok(key.clone());
        }

        let key = match self.read_stored().await {
            Ok(key) => {
                debug!("已从 {} 读取 API 密钥", self.path.display());
                key
            }
            Err(e) => {
                debug!("没有可用的 API 密钥: {}", e);
                let key = prompter.ask("\n未找到 OpenAI API 密钥，请输入:\n> ")?;
                if let Err(e) = self.save(&key).await {
                    warn!("⚠️ API 密钥保存失败，本次仍使用输入的密钥: {}", e);
                }
                key
            }
        };

        self.cached = Some(key.clone());
        Ok(key)
    }

    /// 读取文件中保存的密钥
    pub async fn read_stored(&self) -> Result<String, CredentialError> {
        let path = self.path.display().to_string();

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| CredentialError::ReadFailed {
                path: path.clone(),
                source,
            })?;

        let stored: StoredCredentials =
            serde_json::from_str(&content).map_err(|source| CredentialError::ParseFailed {
                path: path.clone(),
                source,
            })?;

        stored
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CredentialError::MissingKey {
                path,
                key: API_KEY_FIELD,
            })
    }

    /// 覆盖写入密钥文件，只保留 `OPENAI_API_KEY` 一个字段
    pub async fn save(&self, api_key: &str) -> Result<(), CredentialError> {
        let stored = StoredCredentials {
            api_key: Some(api_key.to_string()),
        };
        let write_failed = |source: std::io::Error| CredentialError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        let json = serde_json::to_string(&stored)
            .map_err(|e| write_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, json).await.map_err(write_failed)?;

        info!("✓ API 密钥已保存至 {}", self.path.display());
        Ok(())
    }

    /// 询问新的密钥并覆盖保存
    pub async fn update(&mut self, prompter: &mut impl Prompter) -> AppResult<String> {
        let key = prompter.ask("\n请输入新的 OpenAI API 密钥:\n> ")?;
        self.save(&key).await?;
        self.cached = Some(key.clone());
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::prompt::ScriptedPrompter;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("config.json"))
    }

    #[tokio::test]
    async fn test_load_existing_key_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"OPENAI_API_KEY": "sk-stored"}"#).unwrap();

        let mut store = store_in(&dir);
        let mut prompter = ScriptedPrompter::default();

        assert_eq!(store.load(&mut prompter).await.unwrap(), "sk-stored");
        assert!(prompter.transcript.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_prompts_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let mut prompter = ScriptedPrompter::new(["sk-typed"]);

        assert_eq!(store.load(&mut prompter).await.unwrap(), "sk-typed");

        let written = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value, serde_json::json!({"OPENAI_API_KEY": "sk-typed"}));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

        let mut store = store_in(&dir);
        assert!(matches!(store.read_stored().await, Err(CredentialError::ParseFailed { .. })));

        let mut prompter = ScriptedPrompter::new(["sk-new"]);
        assert_eq!(store.load(&mut prompter).await.unwrap(), "sk-new");
        assert_eq!(store.read_stored().await.unwrap(), "sk-new");
    }

    #[tokio::test]
    async fn test_missing_field_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"OTHER": "x"}"#).unwrap();

        let store = store_in(&dir);
        assert!(matches!(store.read_stored().await, Err(CredentialError::MissingKey { .. })));
    }

    #[tokio::test]
    async fn test_load_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let mut prompter = ScriptedPrompter::new(["sk-once"]);

        store.load(&mut prompter).await.unwrap();
        std::fs::remove_file(store.path()).unwrap();

        // 第二次不再询问，也不再读文件
        assert_eq!(store.load(&mut prompter).await.unwrap(), "sk-once");
    }

    #[tokio::test]
    async fn test_update_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"OPENAI_API_KEY": "sk-old", "extra": 1}"#).unwrap();

        let mut store = store_in(&dir);
        let mut prompter = ScriptedPrompter::new(["sk-new"]);
        assert_eq!(store.update(&mut prompter).await.unwrap(), "sk-new");

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(written, r#"{"OPENAI_API_KEY":"sk-new"}"#);
        assert_eq!(store.load(&mut ScriptedPrompter::default()).await.unwrap(), "sk-new");
    }
}
