use std::path::PathBuf;

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiSettings {
    /// Base URL of the ReviewBattle API (e.g. http://127.0.0.1:8000)
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionSettings {
    /// File holding the bearer token, one token per profile
    pub token_file: PathBuf,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}

impl SessionSettings {
    pub fn from_env() -> Self {
        match std::env::var("REVIEWBATTLE_TOKEN_FILE") {
            Ok(path) => Self {
                token_file: PathBuf::from(path),
            },
            Err(_) => Self::default(),
        }
    }
}

fn default_token_file() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".reviewbattle")
        .join("access_token")
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Optional configuration file named `configuration` (.json, .toml, .yaml, .yml)
    settings.merge(config::File::with_name("configuration").required(false))?;

    let api = ApiSettings {
        base_url: std::env::var("REVIEWBATTLE_API_URL").unwrap_or_else(|_| {
            settings
                .get::<String>("api.base_url")
                .unwrap_or_else(|_| ApiSettings::default().base_url)
        }),
        timeout_secs: settings
            .get::<u64>("api.timeout_secs")
            .unwrap_or_else(|_| ApiSettings::default().timeout_secs),
    };

    let session = match settings.get::<PathBuf>("session.token_file") {
        Ok(token_file) => SessionSettings { token_file },
        Err(_) => SessionSettings::from_env(),
    };

    Ok(Settings { api, session })
}
