pub mod core;
pub mod providers;
pub mod transport;

pub use self::core::error::{ConfigError, TranslateError};
pub use self::core::traits::Translator;
pub use self::core::types::{FailureKind, LOCAL_FAILURE_STATUS, Outcome, TranslationResult};
pub use self::providers::microsoft::{AzureConfig, MicrosoftTranslator, RapidApiConfig};
