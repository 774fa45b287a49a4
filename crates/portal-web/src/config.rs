//! Site-wide constants shared by the server shell and the hydrated client.
//!
//! The API endpoint is baked in at compile time from `PORTAL_API_ENDPOINT`
//! so the WASM bundle needs no runtime lookup.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub api: ApiConfig,
    /// How long the "Copied!" tooltip stays up, in milliseconds
    pub copy_feedback_ms: u32,
}

pub struct ApiConfig {
    pub endpoint: &'static str,
    pub hello_path: &'static str,
    pub login_path: &'static str,
}

pub static CONFIG: SiteConfig = SiteConfig {
    name: "Portal",
    tagline: "sign in to fetch your document",
    api: ApiConfig {
        endpoint: match option_env!("PORTAL_API_ENDPOINT") {
            Some(endpoint) => endpoint,
            None => "YOUR_API_GATEWAY_URL",
        },
        hello_path: "/hello",
        login_path: "/login",
    },
    copy_feedback_ms: 2000,
};

impl ApiConfig {
    pub fn hello_url(&self) -> String {
        endpoint_url(self.endpoint, self.hello_path)
    }

    pub fn login_url(&self) -> String {
        endpoint_url(self.endpoint, self.login_path)
    }
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path)
}
