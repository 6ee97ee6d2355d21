//! Database-backed tests for `cafe-cli menu import`.
//!
//! Run with `--include-ignored` and `DATABASE_URL` pointing at a scratch
//! database.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::Output;

use tokio::process::Command;

const CAFE_CLI: &str = env!("CARGO_BIN_EXE_cafe-cli");

const SEED: &str = r#"
categories:
  - name: Coffee
    sort_order: 1
    items:
      - name: Latte
        price: "4.50"
      - name: Flat White
        price: "4.20"
"#;

async fn run(cwd: &Path, args: &[&str]) -> Output {
    let output = Command::new(CAFE_CLI)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .await
        .expect("spawn cafe-cli");
    assert!(
        output.status.success(),
        "cafe-cli {args:?} failed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
#[ignore = "Requires DATABASE_URL"]
async fn test_second_import_reuses_existing_category() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    assert!(!database_url.is_empty());

    let temp = tempfile::tempdir().unwrap();
    let seed_path = temp.path().join("menu.yaml");
    std::fs::write(&seed_path, SEED).unwrap();
    let seed = seed_path.to_str().unwrap();

    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let slug = format!("import-{suffix}");

    run(temp.path(), &["migrate"]).await;
    run(
        temp.path(),
        &["shops", "create", "--name", "Import Test", "--slug", &slug, "--currency", "EUR"],
    )
    .await;

    let first = stderr(&run(temp.path(), &["menu", "import", "--shop", &slug, seed]).await);
    assert!(first.contains("Created category"), "stderr: {first}");
    assert!(!first.contains("Reused category"), "stderr: {first}");

    let second = stderr(&run(temp.path(), &["menu", "import", "--shop", &slug, seed]).await);
    assert!(second.contains("Reused category"), "stderr: {second}");
    assert!(!second.contains("Created category"), "stderr: {second}");

    let listed = stderr(&run(temp.path(), &["menu", "list", "--shop", &slug]).await);
    assert_eq!(listed.matches("Coffee (#").count(), 1, "stderr: {listed}");
    assert!(listed.contains("4 items"), "stderr: {listed}");
    assert!(listed.contains("€4.50"), "stderr: {listed}");
}
