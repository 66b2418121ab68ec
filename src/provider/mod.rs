use async_trait::async_trait;

use crate::config::Config;
use crate::errors::PlannerError;
use crate::state::Attachment;
use crate::wire::GenerateContentRequest;

pub mod gemini;

#[async_trait]
pub trait Provider: Send + Sync {
    /// Wire payload for one generation call; pure, used for artifact capture.
    fn build_request(&self, prompt: &str, attachment: Option<&Attachment>) -> GenerateContentRequest;

    /// Single non-streaming generation round trip.
    async fn generate(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
        debug: bool,
    ) -> Result<String, PlannerError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Build the provider from an injected credential. A missing key is a
/// user-visible error raised here, before any network I/O.
pub fn make_provider(config: &Config, api_key: Option<String>) -> Result<DynProvider, PlannerError> {
    let api_key = api_key
        .filter(|key| !key.is_empty())
        .ok_or(PlannerError::MissingCredential)?;
    Ok(Box::new(gemini::GeminiProvider::new(api_key, config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_before_any_io() {
        let err = match make_provider(&Config::default(), None) {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(matches!(err, PlannerError::MissingCredential));
        assert_eq!(err.to_string(), "API Key가 설정되지 않았습니다.");
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let err = match make_provider(&Config::default(), Some(String::new())) {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(matches!(err, PlannerError::MissingCredential));
    }
}
