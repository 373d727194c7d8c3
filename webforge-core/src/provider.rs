use crate::Result;
use async_trait::async_trait;

/// A text-completion provider.
///
/// The pipeline treats generation as an opaque call: system instructions
/// plus user instructions in, raw completion text out. Providers do not
/// stream; the orchestrator always needs the whole completion before it can
/// parse and validate it.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Provider/model name, used in logs and run metadata.
    fn name(&self) -> &str;

    /// Produce a completion for the given instructions.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl TextCompletion for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, _system: &str, user: &str) -> Result<String> {
            Ok(user.to_string())
        }
    }

    #[tokio::test]
    async fn test_text_completion_object_safety() {
        let provider: Box<dyn TextCompletion> = Box::new(EchoProvider);
        assert_eq!(provider.name(), "echo");
        let reply = provider.complete("system", "hello").await.unwrap();
        assert_eq!(reply, "hello");
    }
}
