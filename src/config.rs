use std::env;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_image_model: String,
    pub gemini_safety_settings: String,
    pub log_level: String,
    pub http_timeout_seconds: u64,
    pub generate_timeout_seconds: u64,
    pub download_dir: String,
    pub download_prefix: String,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn normalize_gemini_safety_settings(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "permissive".to_string();
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "permissive" | "off" | "none" => "permissive".to_string(),
        "standard" => "standard".to_string(),
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}'; defaulting to permissive.",
                value
            );
            "permissive".to_string()
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_API_KEY is required"));
        }

        Ok(Config {
            gemini_api_key,
            gemini_image_model: env_string("GEMINI_IMAGE_MODEL", "gemini-2.5-flash-image"),
            gemini_safety_settings: normalize_gemini_safety_settings(env_string(
                "GEMINI_SAFETY_SETTINGS",
                "permissive",
            )),
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 30),
            generate_timeout_seconds: env_u64("GENERATE_TIMEOUT_SECONDS", 90),
            download_dir: env_string("DOWNLOAD_DIR", "renders"),
            download_prefix: env_string("DOWNLOAD_PREFIX", "architectural-render"),
        })
    }
}

/// Framing sentence wrapped around the user's style text for the first
/// generation pass. `{style}` is substituted at call time.
pub const INITIAL_RENDER_PROMPT: &str = "Based on the following geometric shape, render a complete, photorealistic architectural building. The style should be: {style}. Focus on realistic lighting, textures, and environmental context.";

pub const DEFAULT_STYLE_PROMPT: &str = "Tái hiện tòa nhà này trong bối cảnh khu phố thương mại sầm uất của Chợ Lớn - Sài Gòn giai đoạn 1824-1946. Kiến trúc là sự pha trộn giữa kiểu nhà phố (shophouse) truyền thống của người Hoa miền Nam và ảnh hưởng kiến trúc Pháp thuộc thời kỳ đầu. Tòa nhà nên có cấu trúc thấp tầng, mái ngói, cửa sổ lá sách bằng gỗ, và tường trát vữa. Đường phố phải sống động với xe kéo, hàng rong, và người dân trong trang phục thời xưa, phản ánh không khí đa văn hóa và nhộn nhịp của trung tâm thương mại Sài Gòn lịch sử.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_profile_aliases_collapse_to_permissive() {
        assert_eq!(
            normalize_gemini_safety_settings("OFF".to_string()),
            "permissive"
        );
        assert_eq!(
            normalize_gemini_safety_settings("none".to_string()),
            "permissive"
        );
        assert_eq!(normalize_gemini_safety_settings(String::new()), "permissive");
    }

    #[test]
    fn standard_profile_is_preserved() {
        assert_eq!(
            normalize_gemini_safety_settings("Standard".to_string()),
            "standard"
        );
    }
}
