use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::core::error::{ConfigError, TranslateError};
use crate::core::traits::Translator;
use crate::core::types::TranslationResult;
use crate::providers::microsoft_wire as wire;
use crate::transport::http::HttpTransport;

const AZURE_BASE_URL: &str = "https://api.cognitive.microsofttranslator.com";
const AZURE_KEY_HEADER: &str = "ocp-apim-subscription-key";
const AZURE_REGION_HEADER: &str = "ocp-apim-subscription-region";
const AZURE_KEY_ENV: &str = "MICROSOFT_TRANSLATOR_KEY";
const AZURE_REGION_ENV: &str = "MICROSOFT_TRANSLATOR_REGION";
const AZURE_SERVICE_NAME: &str = "Microsoft Translator Azure";

const RAPID_API_BASE_URL: &str = "https://microsoft-translator-text.p.rapidapi.com";
const RAPID_API_HOST: &str = "microsoft-translator-text.p.rapidapi.com";
const RAPID_API_KEY_HEADER: &str = "x-rapidapi-key";
const RAPID_API_HOST_HEADER: &str = "x-rapidapi-host";
const RAPID_API_KEY_ENV: &str = "RAPIDAPI_KEY";
const RAPID_API_SERVICE_NAME: &str = "Microsoft Translator RapidApi";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Credentials for the direct Azure Cognitive Services endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureConfig {
    pub subscription_key: String,
    pub region: Option<String>,
}

impl AzureConfig {
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Reads the subscription key from `MICROSOFT_TRANSLATOR_KEY` and the
    /// optional region from `MICROSOFT_TRANSLATOR_REGION`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let subscription_key = require_env(AZURE_SERVICE_NAME, AZURE_KEY_ENV)?;
        let region = std::env::var(AZURE_REGION_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            subscription_key,
            region,
        })
    }

    fn headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(AZURE_KEY_HEADER),
            credential_header_value(AZURE_SERVICE_NAME, AZURE_KEY_ENV, &self.subscription_key)?,
        );

        // Region is optional for global resources and skipped when blank.
        if let Some(region) = self.region.as_deref() {
            if !region.trim().is_empty() {
                headers.insert(
                    HeaderName::from_static(AZURE_REGION_HEADER),
                    credential_header_value(AZURE_SERVICE_NAME, AZURE_REGION_ENV, region)?,
                );
            }
        }

        Ok(headers)
    }
}

/// Credentials for the RapidAPI gateway fronting the same vendor service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RapidApiConfig {
    pub api_key: String,
}

impl RapidApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Reads the gateway key from `RAPIDAPI_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require_env(RAPID_API_SERVICE_NAME, RAPID_API_KEY_ENV)?,
        })
    }

    fn headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(RAPID_API_KEY_HEADER),
            credential_header_value(RAPID_API_SERVICE_NAME, RAPID_API_KEY_ENV, &self.api_key)?,
        );
        headers.insert(
            HeaderName::from_static(RAPID_API_HOST_HEADER),
            HeaderValue::from_static(RAPID_API_HOST),
        );

        Ok(headers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Azure,
    RapidApi,
}

/// Translator v3 client covering both deployment variants.
///
/// The variants differ only in endpoint, authentication headers, and query
/// string extras; request building and response decoding are shared.
#[derive(Debug)]
pub struct MicrosoftTranslator {
    transport: HttpTransport,
    variant: Variant,
    base_url: String,
    headers: HeaderMap,
}

impl MicrosoftTranslator {
    pub fn azure(config: AzureConfig) -> Result<Self, ConfigError> {
        Self::azure_with_base_url(config, AZURE_BASE_URL)
    }

    pub fn azure_with_base_url(
        config: AzureConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let headers = config.headers()?;
        let transport = HttpTransport::new(DEFAULT_TIMEOUT_MS)?;
        Ok(Self::assemble(Variant::Azure, headers, base_url, transport))
    }

    pub fn rapid_api(config: RapidApiConfig) -> Result<Self, ConfigError> {
        Self::rapid_api_with_base_url(config, RAPID_API_BASE_URL)
    }

    pub fn rapid_api_with_base_url(
        config: RapidApiConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let headers = config.headers()?;
        let transport = HttpTransport::new(DEFAULT_TIMEOUT_MS)?;
        Ok(Self::assemble(Variant::RapidApi, headers, base_url, transport))
    }

    fn assemble(
        variant: Variant,
        headers: HeaderMap,
        base_url: impl Into<String>,
        transport: HttpTransport,
    ) -> Self {
        Self {
            transport,
            variant,
            base_url: normalize_base_url(base_url, variant),
            headers,
        }
    }

    fn translate_url(&self, source: &str, target: &str, text_type: &str) -> String {
        match self.variant {
            Variant::Azure => format!(
                "{}/translate?api-version=3.0&to={target}&from={source}&textType={text_type}",
                self.base_url
            ),
            Variant::RapidApi => format!(
                "{}/translate?to={target}&api-version=3.0&from={source}&profanityAction=NoAction&textType={text_type}",
                self.base_url
            ),
        }
    }

    fn absorb(
        &self,
        error: TranslateError,
        source: &str,
        target: &str,
        text: &str,
    ) -> TranslationResult {
        tracing::error!(service = self.service_name(), error = %error, "translate failed");
        TranslationResult::failed(error.failure_kind(), text, source, target)
    }
}

#[async_trait]
impl Translator for MicrosoftTranslator {
    fn service_name(&self) -> &str {
        match self.variant {
            Variant::Azure => AZURE_SERVICE_NAME,
            Variant::RapidApi => RAPID_API_SERVICE_NAME,
        }
    }

    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
        format: &str,
    ) -> TranslationResult {
        let url = self.translate_url(source, target, wire::text_type(format));
        let batch = wire::encode_batch(text);

        let reply = match self
            .transport
            .post_json(self.service_name(), &url, &self.headers, &batch)
            .await
        {
            Ok(reply) => reply,
            Err(error) => return self.absorb(error, source, target, text),
        };

        tracing::info!(
            service = self.service_name(),
            status = reply.status,
            "translate response"
        );

        match wire::decode_first_translation(self.service_name(), &reply.body) {
            Ok(translated) if reply.status == 200 => {
                TranslationResult::translated(translated, source, target)
            }
            Ok(translated) => TranslationResult::rejected(translated, reply.status, source, target),
            Err(error) => self.absorb(error, source, target, text),
        }
    }
}

fn normalize_base_url(base_url: impl Into<String>, variant: Variant) -> String {
    let value = base_url.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return match variant {
            Variant::Azure => AZURE_BASE_URL.to_string(),
            Variant::RapidApi => RAPID_API_BASE_URL.to_string(),
        };
    }

    trimmed.trim_end_matches('/').to_string()
}

fn require_env(service: &str, key: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingCredential {
            service: service.to_string(),
            key: key.to_string(),
        }),
    }
}

fn credential_header_value(
    service: &str,
    key: &str,
    value: &str,
) -> Result<HeaderValue, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingCredential {
            service: service.to_string(),
            key: key.to_string(),
        });
    }

    HeaderValue::from_str(trimmed).map_err(|_| ConfigError::InvalidCredential {
        service: service.to_string(),
    })
}
