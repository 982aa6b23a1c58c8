#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_site(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let articles = root.join("src/assets/articles");
    fs::create_dir_all(&articles)?;
    fs::write(
        articles.join("2023-01-vue-ssr.md"),
        "---\ntitle: Vue SSR\ndescription: Rendering on the server\ntags:\n  - vue\n  - ssr\n---\n\nWhy bother.\n\n---\n\nServer rendering a blog with Vike.\n",
    )?;
    fs::write(
        articles.join("2023-05-nuxt-content.md"),
        "---\ntitle: Nuxt Content\n---\n\nWriting a blog with Nuxt content.\n",
    )?;
    fs::write(articles.join("2024-02-static.md"), "# Static\n\nPlain text.\n")?;
    Ok(())
}

#[test]
fn list_prints_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout("2024-02-static\n2023-05-nuxt-content\n");
    Ok(())
}

#[test]
fn list_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    let output = Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .args(["list", "--json"])
        .output()?;
    assert!(output.status.success());
    let slugs: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        slugs,
        vec!["2024-02-static", "2023-05-nuxt-content", "2023-01-vue-ssr"]
    );
    Ok(())
}

#[test]
fn summary_skips_text_before_break() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .args(["summary", "2023-01-vue-ssr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server rendering a blog with Vike."))
        .stdout(predicate::str::contains("Why bother").not());
    Ok(())
}

#[test]
fn summary_of_unknown_article_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .args(["summary", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("article not found: nope"));
    Ok(())
}

#[test]
fn routes_in_enumeration_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;

    Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .arg("routes")
        .assert()
        .success()
        .stdout("/articles/2023-01-vue-ssr\n/articles/2023-05-nuxt-content\n/articles/2024-02-static\n");
    Ok(())
}

#[test]
fn build_uses_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_site(dir.path())?;
    fs::write(
        dir.path().join("site.yml"),
        "site:\n  title: Test Site\npaths:\n  output: public\nhome_articles: 1\n",
    )?;

    Command::cargo_bin("folio")?
        .current_dir(dir.path())
        .args(["--config", "site.yml", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 3 articles (4 routes)"));

    let public = dir.path().join("public");
    assert!(public.join("articles/2023-01-vue-ssr/index.html").is_file());
    assert!(public.join("articles/2023-01-vue-ssr/index.json").is_file());
    let home = fs::read_to_string(public.join("index.html"))?;
    assert!(home.contains("<title>Test Site</title>"));
    assert!(home.contains("/articles/2024-02-static/"));
    assert!(!home.contains("/articles/2023-05-nuxt-content/"));
    Ok(())
}
