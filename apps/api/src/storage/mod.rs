//! Per-user resume persistence.
//!
//! Each user's resumes live under one key as a JSON array; loads and
//! saves move the whole collection. A user with no stored collection
//! gets the sample resumes so the editor never opens empty.

pub mod handlers;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::sample::sample_resumes;

/// Pluggable resume collection store.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<Vec<Resume>, AppError>;
    async fn save(&self, user_id: &str, resumes: &[Resume]) -> Result<(), AppError>;
}

fn collection_key(user_id: &str) -> String {
    format!("resumes:{user_id}")
}

/// Decodes a stored collection, falling back to the sample resumes when
/// the user has nothing stored yet.
fn collection_or_sample(raw: Option<String>) -> Result<Vec<Resume>, AppError> {
    match raw {
        Some(json) => {
            let resumes: Vec<Resume> = serde_json::from_str(&json)
                .map_err(|e| anyhow::anyhow!("stored resume collection is corrupt: {e}"))?;
            Ok(resumes)
        }
        None => {
            debug!("no stored collection, serving samples");
            Ok(sample_resumes())
        }
    }
}

/// Redis-backed store.
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResumeStore for RedisStore {
    async fn load(&self, user_id: &str) -> Result<Vec<Resume>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(collection_key(user_id)).await?;
        collection_or_sample(raw)
    }

    async fn save(&self, user_id: &str, resumes: &[Resume]) -> Result<(), AppError> {
        let json = serde_json::to_string(resumes)
            .map_err(|e| anyhow::anyhow!("could not encode resume collection: {e}"))?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(collection_key(user_id), json).await?;
        info!("saved {} resumes for user {user_id}", resumes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_key_is_namespaced_per_user() {
        assert_eq!(collection_key("alice"), "resumes:alice");
        assert_ne!(collection_key("alice"), collection_key("bob"));
    }

    #[test]
    fn test_missing_collection_falls_back_to_samples() {
        let resumes = collection_or_sample(None).unwrap();
        assert!(!resumes.is_empty());
        assert!(resumes.iter().all(|r| r.id.starts_with("sample-")));
    }

    #[test]
    fn test_stored_collection_round_trips() {
        let stored = vec![Resume::blank("Mine")];
        let json = serde_json::to_string(&stored).unwrap();
        let resumes = collection_or_sample(Some(json)).unwrap();
        assert_eq!(resumes.len(), 1);
        assert_eq!(resumes[0].title, "Mine");
    }

    #[test]
    fn test_corrupt_collection_is_an_error_not_samples() {
        let err = collection_or_sample(Some("not json".to_string()));
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_stored_collection_stays_empty() {
        // An explicitly emptied collection must not resurrect the samples.
        let resumes = collection_or_sample(Some("[]".to_string())).unwrap();
        assert!(resumes.is_empty());
    }
}
