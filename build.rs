use std::env;
use std::fs;
use std::path::Path;

const EMBEDDED_KEYS: [&str; 1] = ["PERSONALITY_API_URL"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=PERSONALITY_API_URL");

    // Load .env file during build so the API location can be baked in
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=BUILD.RS: No .env file loaded ({}). Using system environment variables.", e);
    }

    // Also accept a .env one level up (frontend/backend checkout layout)
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
                    if !EMBEDDED_KEYS.contains(&key) || env::var(key).is_ok() {
                        continue;
                    }
                    let value = match value.find('#') {
                        Some(comment_pos) => value[..comment_pos].trim(),
                        None => value.trim(),
                    };
                    env::set_var(key, value);
                }
            }
        }
    }

    // Embed at compile time; runtime lookup falls back to these via option_env!()
    for key in EMBEDDED_KEYS {
        match env::var(key) {
            Ok(value) if !value.trim().is_empty() => {
                println!("cargo:rustc-env={}={}", key, value.trim());
                println!("cargo:warning=Embedded {}={}", key, value.trim());
            }
            _ => {}
        }
    }
}
