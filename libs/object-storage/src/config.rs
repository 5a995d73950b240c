use core_config::{ConfigError, FromEnv, env_or_default};

const DEFAULT_BUCKET: &str = "grain";
const DEFAULT_KEY_PREFIX: &str = "grains/gi";
const DEFAULT_REGION: &str = "us-east-1";

/// S3 bucket settings for uploaded images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S3Config {
    pub bucket: String,
    /// Prepended verbatim to the uploaded filename
    pub key_prefix: String,
    pub region: String,
    /// Custom endpoint (MinIO, LocalStack); enables path-style addressing
    pub endpoint_url: Option<String>,
    /// Base URL under which stored keys are publicly reachable
    pub public_base_url: Option<String>,
}

impl S3Config {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            region: region.into(),
            endpoint_url: None,
            public_base_url: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Object key for an uploaded file.
    pub fn key_for(&self, filename: &str) -> String {
        format!("{}{}", self.key_prefix, filename)
    }

    /// Public URL of `key`, each path segment percent-encoded.
    pub fn public_url(&self, key: &str) -> String {
        let base = match (&self.public_base_url, &self.endpoint_url) {
            (Some(base), _) => base.trim_end_matches('/').to_string(),
            (None, Some(endpoint)) => {
                format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket)
            }
            (None, None) => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        };

        let encoded: Vec<_> = key.split('/').map(urlencoding::encode).collect();
        format!("{base}/{}", encoded.join("/"))
    }
}

impl Default for S3Config {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET, DEFAULT_REGION)
    }
}

impl FromEnv for S3Config {
    /// - `S3_BUCKET` (default: `grain`)
    /// - `S3_KEY_PREFIX` (default: `grains/gi`)
    /// - `AWS_REGION` (default: `us-east-1`)
    /// - `S3_ENDPOINT_URL` (optional)
    /// - `S3_PUBLIC_BASE_URL` (optional)
    fn from_env() -> Result<Self, ConfigError> {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Ok(Self {
            bucket: env_or_default("S3_BUCKET", DEFAULT_BUCKET),
            key_prefix: env_or_default("S3_KEY_PREFIX", DEFAULT_KEY_PREFIX),
            region: env_or_default("AWS_REGION", DEFAULT_REGION),
            endpoint_url: non_empty("S3_ENDPOINT_URL"),
            public_base_url: non_empty("S3_PUBLIC_BASE_URL"),
        })
    }
}
