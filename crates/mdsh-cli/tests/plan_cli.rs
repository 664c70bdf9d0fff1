//! Runs the `mdsh` binary against fixture trees.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn mdsh(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdsh"))
        .args(args)
        .current_dir(cwd)
        .env_remove("MDSH_LOG")
        .env_remove("MDSH_GATHER__FRONTMATTER")
        .env_remove("MDSH_GATHER__HEREDOC")
        .output()
        .expect("mdsh should run")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write fixture");
}

fn fixture() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "docs/_index.md",
        "---\ntitle: Guide\nweight: 2\n---\n\nWelcome.\n",
    );
    write(
        dir.path(),
        "docs/install.md",
        "---\ntitle: Install\n---\n\n:::code{showCopyAction=true timeout=30}\n$ make install\n:::\n",
    );
    dir
}

#[test]
fn json_plan_is_printed() {
    let dir = fixture();
    let out = mdsh(dir.path(), &["plan", "docs"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let plan: Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(plan["title"], "Guide");
    assert_eq!(plan["weight"], 2);
    assert_eq!(plan["pages"][0]["scripts"][0]["command"], "make install");
    assert_eq!(plan["pages"][0]["scripts"][0]["timeout"], 30);
}

#[test]
fn json_plan_uses_camel_case_fields() {
    let dir = fixture();
    let out = mdsh(dir.path(), &["plan", "docs"]);
    assert!(out.status.success());

    let plan: Value = serde_json::from_slice(&out.stdout).expect("json output");
    let install = &plan["pages"][0];
    assert_eq!(install["isIndex"], false);
    assert_eq!(install["scripts"][0]["lineNumber"], 5);
    assert_eq!(install["scripts"][0]["hookTimeout"], 0);
    assert_eq!(install["scripts"][0]["expectError"], false);
    assert!(install.get("is_index").is_none());
}

#[test]
fn table_plan_has_one_row_per_script() {
    let dir = fixture();
    let out = mdsh(dir.path(), &["-f", "table", "plan", "docs"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("category"));
    assert!(lines[2].contains("make install"));
}

#[test]
fn empty_tree_prints_null() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("docs")).expect("mkdir");

    let out = mdsh(dir.path(), &["-f", "raw", "plan", "docs"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "null");
}

#[test]
fn missing_directory_fails() {
    let dir = TempDir::new().expect("tempdir");
    let out = mdsh(dir.path(), &["plan", "nope"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("mdsh error:"));
    assert!(stderr.contains("Directory 'nope' not found"));
}

#[test]
fn lenient_flag_skips_pages_without_frontmatter() {
    let dir = fixture();
    write(
        dir.path(),
        "docs/bare.md",
        ":::code{showCopyAction=true}\nls\n:::\n",
    );

    let strict = mdsh(dir.path(), &["plan", "docs"]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&strict.stderr).contains("No Frontmatter found at"));

    let lenient = mdsh(dir.path(), &["-q", "plan", "docs", "--lenient-frontmatter"]);
    assert!(lenient.status.success());
}

#[test]
fn project_config_is_honoured() {
    let dir = fixture();
    write(
        dir.path(),
        "docs/heredoc.md",
        "---\ntitle: Heredoc\nweight: 9\n---\n\n:::code{showCopyAction=true}\n$ cat <<EOF\n$ body\nEOF\n:::\n",
    );
    write(dir.path(), ".mdsh/config.toml", "[gather]\nheredoc = \"verbatim\"\n");

    let out = mdsh(dir.path(), &["plan", "docs"]);
    assert!(out.status.success());
    let plan: Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(plan["pages"][2]["scripts"][0]["command"], "cat <<EOF\n$ body\nEOF");
}
