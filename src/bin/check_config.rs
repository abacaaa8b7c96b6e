use diagnostico_lib::config::{get_env_var, mask_secret, SurveyConfig};

const KEYS: &[&str] = &[
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

fn main() {
    env_logger::init();

    println!("🔧 Checking survey configuration (runtime env, .env, then embedded at build)...\n");

    for key in KEYS {
        match get_env_var(key) {
            Some(value) if key.ends_with("API_KEY") => {
                println!("✅ {:<34} {} (length: {})", key, mask_secret(&value), value.len())
            }
            Some(value) => println!("✅ {:<34} {}", key, value),
            None => println!("➖ {:<34} NOT SET", key),
        }
    }

    println!();
    match SurveyConfig::from_env() {
        Ok(config) => {
            println!("✅ Configuration is complete");
            println!("   Sheets endpoint:  {}", config.sheets.script_url);
            println!("   Beacons contacts: {}/contacts", config.beacons.base_url.as_str().trim_end_matches('/'));
            println!("   Request timeout:  {}s", config.request_timeout.as_secs());
        }
        Err(e) => {
            println!("❌ Configuration is not usable: {}", e);
            std::process::exit(1);
        }
    }
}
