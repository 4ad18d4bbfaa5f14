use async_trait::async_trait;

use crate::core::types::TranslationResult;

/// Translation capability contract implemented by each vendor/gateway
/// adapter.
///
/// Implementations are stateless per call: one outbound request, no retry,
/// no shared mutable state beyond the underlying HTTP client.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Service identifier used in logs and error messages.
    fn service_name(&self) -> &str;

    /// Translates `text` from `source` to `target` language code.
    ///
    /// `format` selects the vendor text type: `"text"` maps to `plain`,
    /// anything else to `html`. This method never fails: transport and
    /// protocol errors are logged and folded into the result as the
    /// sentinel status with the original input echoed back.
    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
        format: &str,
    ) -> TranslationResult;

    /// Blocking wrapper over [`translate`](Self::translate) for synchronous
    /// callers, reducing the result to a success flag plus output text.
    ///
    /// Returns `(true, translated)` only when the underlying status is
    /// exactly 200, and `(false, original input)` for every other status,
    /// including the sentinel produced on absorbed failures. Spins up a
    /// current-thread runtime per call and blocks on it; calling this from
    /// inside an async context panics.
    fn try_translate(&self, source: &str, target: &str, text: &str) -> (bool, String) {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(_) => return (false, text.to_string()),
        };

        let result = runtime.block_on(self.translate(source, target, text, "text"));
        if result.is_success() {
            (true, result.text)
        } else {
            (false, text.to_string())
        }
    }
}
