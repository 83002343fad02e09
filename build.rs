use std::env;
use std::fs;
use std::path::Path;

// Claves que el widget lee con option_env! en src/config.rs
const KNOWN_KEYS: &[&str] = &["ENVIRONMENT", "ENABLE_LOGGING", "MAX_DETAIL_INPUT_LENGTH"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");
        if let Ok(contents) = fs::read_to_string(env_file) {
            export_env_lines(&contents);
        }
    } else {
        println!(
            "cargo:warning=No .env file found, the widget will use its defaults ({}). Copy .env.example to .env to override.",
            KNOWN_KEYS.join(", ")
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}

/// Publica cada línea KEY=VALUE del .env como variable de compilación,
/// sin pisar las que ya vienen definidas en el entorno real.
fn export_env_lines(contents: &str) {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Ignoring malformed .env line: {}", line);
            continue;
        };

        let key = key.trim();
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim());
        }
    }
}
