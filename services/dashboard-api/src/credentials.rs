//! Map access token lookup.

use std::path::Path;

use pheno_common::{PhenoError, PhenoResult};

/// Environment variable checked before the token file.
pub const TOKEN_ENV: &str = "MAPBOX_TOKEN";

/// Read the token from the environment, else from `token_file`.
pub fn load_map_token(token_file: &Path) -> PhenoResult<String> {
    resolve_map_token(std::env::var(TOKEN_ENV).ok(), token_file)
}

/// Pick the first usable token from an environment value and a file.
///
/// Whitespace and surrounding double quotes are stripped from either source.
pub fn resolve_map_token(env_value: Option<String>, token_file: &Path) -> PhenoResult<String> {
    if let Some(token) = env_value.as_deref().and_then(clean_token) {
        return Ok(token);
    }

    match std::fs::read_to_string(token_file) {
        Ok(content) => clean_token(&content).ok_or_else(|| {
            PhenoError::MissingMapCredential(format!("{} is empty", token_file.display()))
        }),
        Err(e) => Err(PhenoError::MissingMapCredential(format!(
            "{} not set and {} unreadable: {}",
            TOKEN_ENV,
            token_file.display(),
            e
        ))),
    }
}

fn clean_token(raw: &str) -> Option<String> {
    let token = raw.trim().trim_matches('"').trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
