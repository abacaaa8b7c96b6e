use std::env;
use std::fs;
use std::path::Path;

// Keys baked into the binary so a packaged desktop build works without a .env next to it.
const EMBEDDED_KEYS: &[&str] = &[
    "DIAGNOSTICO_SHEETS_URL",
    "DIAGNOSTICO_BEACONS_API_KEY",
    "DIAGNOSTICO_BEACONS_LIST_ID",
    "DIAGNOSTICO_BEACONS_BASE_URL",
    "DIAGNOSTICO_REQUEST_TIMEOUT_SECS",
    "DIAGNOSTICO_GUIDE_URL_CONFUNDIDO",
    "DIAGNOSTICO_GUIDE_URL_SATURADO",
    "DIAGNOSTICO_GUIDE_URL_PARALIZADO",
    "DIAGNOSTICO_GUIDE_URL_GENERAL",
    "DIAGNOSTICO_INSTAGRAM_URL",
    "DIAGNOSTICO_TIKTOK_URL",
    "DIAGNOSTICO_FACEBOOK_URL",
    "DIAGNOSTICO_WHATSAPP_URL",
];

const SECRET_KEYS: &[&str] = &["DIAGNOSTICO_BEACONS_API_KEY"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=../.env");
    for key in EMBEDDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Load .env file during build for environment variables
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=BUILD.RS: Failed to load .env file: {}. Using system environment variables.", e);
    }

    // Also try the parent directory .env (shared with the web deployment)
    let parent_env = Path::new("../.env");
    if parent_env.exists() {
        if let Ok(contents) = fs::read_to_string(parent_env) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    // Values already present in the environment win over the file
                    if env::var(key).is_ok() {
                        continue;
                    }
                    let value = value.trim();
                    let clean_value = match value.find(" #") {
                        Some(comment_pos) => value[..comment_pos].trim(),
                        None => value,
                    };
                    env::set_var(key, clean_value.trim_matches('"'));
                }
            }
        }
    }

    for key in EMBEDDED_KEYS {
        match env::var(key) {
            Ok(value) if !value.is_empty() => {
                println!("cargo:rustc-env={}={}", key, value);
                if SECRET_KEYS.contains(key) {
                    println!("cargo:warning=Embedded {} (length: {})", key, value.len());
                }
            }
            _ => {}
        }
    }

    #[cfg(feature = "desktop")]
    tauri_build::build();
}
