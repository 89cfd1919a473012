//! API Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use anyhow::Context;
use axum::http::HeaderValue;
use quiz::QuizConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    /// Seed fixture for the in-memory store; empty store when unset
    pub seed_path: Option<PathBuf>,
    pub quiz: QuizConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("API_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("API_BIND_ADDR must be a socket address")?;

        let allowed_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        )?;

        let seed_path = lookup("QUIZ_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let sequential = lookup("QUIZ_SEQUENTIAL_FETCH")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
            .unwrap_or(false);

        let quiz = if sequential {
            QuizConfig::sequential()
        } else {
            QuizConfig::default()
        };

        Ok(Self {
            bind_addr,
            allowed_origins,
            seed_path,
            quiz,
        })
    }
}

/// Comma-separated `http(s)://` origins; any bad entry fails startup
fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            anyhow::ensure!(
                origin.starts_with("http://") || origin.starts_with("https://"),
                "FRONTEND_ORIGINS entry {origin:?} must start with http:// or https://"
            );
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("FRONTEND_ORIGINS entry {origin:?} is not a valid header value"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    anyhow::ensure!(!origins.is_empty(), "FRONTEND_ORIGINS must list at least one origin");
    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.seed_path.is_none());
        assert!(config.quiz.concurrent_question_fetch);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("API_BIND_ADDR", "127.0.0.1:8080"),
            ("FRONTEND_ORIGINS", "https://quiz.example"),
            ("QUIZ_SEED_PATH", "database/seed.json"),
            ("QUIZ_SEQUENTIAL_FETCH", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins.len(), 1);
        assert_eq!(config.allowed_origins[0], "https://quiz.example");
        assert_eq!(config.seed_path, Some(PathBuf::from("database/seed.json")));
        assert!(!config.quiz.concurrent_question_fetch);
    }

    #[test]
    fn test_malformed_origin_fails() {
        let err = config(&[("FRONTEND_ORIGINS", "https://ok.example, localhost:40922")])
            .unwrap_err();
        assert!(err.to_string().contains("localhost:40922"));

        assert!(config(&[("FRONTEND_ORIGINS", "https://bad\u{7f}.example")]).is_err());
        assert!(config(&[("FRONTEND_ORIGINS", " , ")]).is_err());
    }

    #[test]
    fn test_origin_list_tolerates_spacing() {
        let config = config(&[("FRONTEND_ORIGINS", " https://a.example ,https://b.example, ")])
            .unwrap();
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[1], "https://b.example");
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(config(&[("API_BIND_ADDR", "not-an-addr")]).is_err());
    }
}
