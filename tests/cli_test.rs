//! Integration tests for the demogen CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_template(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(
        dir.join("package.json.tmpl"),
        "{\"name\": \"{{project_slug}}\"}",
    )
    .unwrap();
    fs::write(
        dir.join("src/index.html.tmpl"),
        "<h1>{{company_name}}</h1>{{#events}}<button>{{.}}</button>{{/events}}",
    )
    .unwrap();
    fs::write(dir.join("src/app.css"), "body { margin: 0; }").unwrap();
}

#[test]
fn test_render_command_with_data_file() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("page.html");
    let data = temp_dir.path().join("data.json");
    fs::write(
        &template,
        "{{name}} costs {{price}}. {{#badges}}[{{.}}] {{/badges}}{{missing}}",
    )
    .unwrap();
    fs::write(
        &data,
        r#"{"name": "Resort", "price": "$299", "badges": ["Popular", "New"]}"#,
    )
    .unwrap();

    Command::cargo_bin("demogen")
        .unwrap()
        .arg("render")
        .arg(&template)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout("Resort costs $299. [Popular] [New] {{missing}}");
}

#[test]
fn test_render_command_without_data_is_identity_for_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("page.html");
    fs::write(&template, "Hello {{name}}!{{#items}}x{{/items}}").unwrap();

    Command::cargo_bin("demogen")
        .unwrap()
        .arg("render")
        .arg(&template)
        .assert()
        .success()
        .stdout("Hello {{name}}!");
}

#[test]
fn test_render_command_missing_template() {
    Command::cargo_bin("demogen")
        .unwrap()
        .arg("render")
        .arg("/nonexistent/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read template"));
}

#[test]
fn test_scaffold_command() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path());

    Command::cargo_bin("demogen")
        .unwrap()
        .current_dir(out.path())
        .args(["scaffold", "--project-name", "sunny-demo"])
        .args(["--company", "Sunny Resorts", "--industry", "Travel"])
        .args(["--event", "Signed Up", "--event", "Order Completed"])
        .arg("--template-dir")
        .arg(templates.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--skip-install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 file(s)"));

    let app = out.path().join("sunny-demo");
    assert_eq!(
        fs::read_to_string(app.join("package.json")).unwrap(),
        "{\"name\": \"sunny-demo\"}"
    );
    assert_eq!(
        fs::read_to_string(app.join("src/index.html")).unwrap(),
        "<h1>Sunny Resorts</h1><button>Signed Up</button><button>Order Completed</button>"
    );
    assert_eq!(
        fs::read_to_string(app.join("src/app.css")).unwrap(),
        "body { margin: 0; }"
    );
}

#[test]
fn test_scaffold_command_with_content_file_and_config() {
    let templates = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(
        templates.path().join("index.html.tmpl"),
        "{{tagline}}|{{#products}}{{name}};{{/products}}",
    )
    .unwrap();

    let content = work.path().join("content.yaml");
    fs::write(&content, "tagline: Stay longer\nproducts:\n  - name: Suite\n").unwrap();
    fs::write(
        work.path().join("demogen.toml"),
        format!(
            "template_dir = {:?}\noutput_dir = \"generated\"\nskip_install = true\n",
            templates.path().display().to_string()
        ),
    )
    .unwrap();

    Command::cargo_bin("demogen")
        .unwrap()
        .current_dir(work.path())
        .args(["scaffold", "--project-name", "sunny-demo"])
        .args(["--company", "Sunny Resorts", "--industry", "Travel"])
        .arg("--content")
        .arg(&content)
        .assert()
        .success();

    let generated = work.path().join("generated/sunny-demo/index.html");
    assert_eq!(fs::read_to_string(generated).unwrap(), "Stay longer|Suite;");
}

#[test]
fn test_scaffold_command_rejects_invalid_project_name() {
    let templates = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_template(templates.path());

    Command::cargo_bin("demogen")
        .unwrap()
        .args(["scaffold", "--project-name", "Sunny Demo"])
        .args(["--company", "Sunny Resorts", "--industry", "Travel"])
        .arg("--template-dir")
        .arg(templates.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_scaffold_command_requires_template_dir() {
    let work = TempDir::new().unwrap();

    Command::cargo_bin("demogen")
        .unwrap()
        .current_dir(work.path())
        .args(["scaffold", "--project-name", "sunny-demo"])
        .args(["--company", "Sunny Resorts", "--industry", "Travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No template directory given"));
}
