use std::env;
use std::path::Path;

// 从 .env 注入 CHARGER_API_URL，已设置的环境变量优先
const KEYS: &[&str] = &["CHARGER_API_URL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CHARGER_API_URL");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let entries = match dotenvy::from_path_iter(env_file) {
        Ok(entries) => entries,
        Err(e) => {
            println!("cargo:warning=Failed to read .env ({}), using default API URL", e);
            return;
        }
    };

    for entry in entries {
        let (key, value) = match entry {
            Ok(pair) => pair,
            Err(e) => {
                println!("cargo:warning=Skipping malformed .env line: {}", e);
                continue;
            }
        };
        if KEYS.contains(&key.as_str()) && env::var(&key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
