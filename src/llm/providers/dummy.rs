//! Dummy LLM provider. Echoes the newest user turn back prefixed with
//! `[echo]`, so the full pipeline can run without a real API key.

use crate::history::{Role, Turn};
use crate::llm::ProviderError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, messages: &[Turn]) -> Result<Option<String>, ProviderError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
            .unwrap_or("");
        Ok(Some(format!("[echo] {last_user}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_newest_user_turn() {
        let p = DummyProvider;
        let messages = vec![
            Turn::system("persona"),
            Turn::user("first"),
            Turn::assistant("[echo] first"),
            Turn::user("second"),
        ];
        assert_eq!(
            p.complete(&messages).await.unwrap(),
            Some("[echo] second".to_string())
        );
    }

    #[tokio::test]
    async fn no_user_turn_echoes_empty() {
        let p = DummyProvider;
        let messages = vec![Turn::system("persona")];
        assert_eq!(p.complete(&messages).await.unwrap(), Some("[echo] ".to_string()));
    }
}
