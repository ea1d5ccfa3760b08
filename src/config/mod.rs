use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_APP_TITLE: &str = "Notes app";

/// Runtime settings injected by the hosting page through `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub app_title: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // Accept both `window.ENV.APP_TITLE` and `window.ENV.app_title`.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["APP_TITLE", "app_title"] {
                        if let Ok(v) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(title) = Self::non_blank(v.as_string()) {
                                return Self { app_title: title };
                            }
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn non_blank(v: Option<String>) -> Option<String> {
        v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}
