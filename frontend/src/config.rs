use shared::DEFAULT_REDIRECT;

/// Build-time settings, read from the environment `trunk build` runs in.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub default_redirect: String,
    pub register_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: option_env!("LOGIN_API_BASE")
                .unwrap_or("/api")
                .trim_end_matches('/')
                .to_string(),
            default_redirect: option_env!("LOGIN_DEFAULT_REDIRECT")
                .unwrap_or(DEFAULT_REDIRECT)
                .to_string(),
            register_url: option_env!("LOGIN_REGISTER_URL")
                .unwrap_or("/register/")
                .to_string(),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.api_base)
    }

    pub fn session_url(&self) -> String {
        format!("{}/me", self.api_base)
    }
}
