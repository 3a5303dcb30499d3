//! End-to-end CLI tests for sitegen

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EXAMPLE_CONFIG: &str = r#"
base_url = "/"

[[users]]
name = "App1"
icon = "a.png"
info_link = "https://x"
pinned = true

[[users]]
name = "App2"
icon = "http://b/img.png"
info_link = "https://y"
pinned = false
"#;

fn sitegen() -> Command {
    cargo_bin_cmd!("sitegen")
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write config");
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read output")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        sitegen()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--config"))
            .stdout(predicate::str::contains("--out-dir"));
    }

    #[test]
    fn shows_version() {
        sitegen()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_index_and_language_copy() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(&temp, "siteConfig.toml", EXAMPLE_CONFIG);
        let out = temp.path().join("build");

        sitegen()
            .arg("--config")
            .arg(&config)
            .arg("--out-dir")
            .arg(&out)
            .assert()
            .success();

        let index = read(&out.join("index.html"));
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains(r#"src="/img/showcase/a.png""#));
        assert!(index.contains(r#"href="https://x""#));
        assert!(!index.contains("http://b/img.png"));

        assert_eq!(read(&out.join("en").join("index.html")), index);
    }

    #[test]
    fn empty_lang_skips_copy() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(&temp, "siteConfig.toml", EXAMPLE_CONFIG);
        let out = temp.path().join("public");

        sitegen()
            .arg("--config")
            .arg(&config)
            .arg("--out-dir")
            .arg(&out)
            .arg("--lang")
            .arg("")
            .assert()
            .success();

        assert!(out.join("index.html").exists());
        assert!(!out.join("en").exists());
    }

    #[test]
    fn fragment_writes_body_only() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(
            &temp,
            "siteConfig.json",
            r#"{"baseUrl": "/rn/", "users": [{"name": "App1", "icon": "a.png", "infoLink": "https://x", "pinned": true}]}"#,
        );
        let out = temp.path().join("build");

        sitegen()
            .arg("--config")
            .arg(&config)
            .arg("--out-dir")
            .arg(&out)
            .arg("--fragment")
            .assert()
            .success();

        let index = read(&out.join("index.html"));
        assert!(index.starts_with("<div>"));
        assert!(!index.contains("<!DOCTYPE html>"));
        assert!(index.contains(r#"src="/rn/img/showcase/a.png""#));
    }

    #[test]
    fn missing_config_fails() {
        let temp = TempDir::new().expect("temp dir");

        sitegen()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .arg("--out-dir")
            .arg(temp.path().join("build"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load site config"));

        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        let config = write_config(&temp, "siteConfig.toml", "users = \"nope\"");

        sitegen()
            .arg("--config")
            .arg(&config)
            .arg("--out-dir")
            .arg(temp.path().join("build"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("TOML"));
    }
}
