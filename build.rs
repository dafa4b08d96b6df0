use std::env;
use std::fs;
use std::path::Path;

/// rust-embed 需要的页面，缺失时写入占位页面
const REQUIRED_PAGES: &[&str] = &["home/home.html", "MBTI/index.html"];

fn main() {
    println!("cargo:rerun-if-changed=static");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let static_path = Path::new(&manifest_dir).join("static");

    for page in REQUIRED_PAGES {
        let target = static_path.join(page);
        if !target.exists() {
            println!("cargo:warning=static/{page} not found, writing a placeholder page");
            create_fallback_page(&target, page);
        }
    }

    let result_dir = static_path.join("MBTI/page");
    for id in 0..16 {
        let target = result_dir.join(format!("result-{id}.html"));
        if !target.exists() {
            println!("cargo:warning=static/MBTI/page/result-{id}.html not found, writing a placeholder page");
            create_fallback_page(&target, &format!("MBTI result {id}"));
        }
    }
}

fn create_fallback_page(target: &Path, title: &str) {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).expect("Failed to create static directory");
    }

    let fallback_html = format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <p>This page has not been provided yet.</p>
</body>
</html>"#
    );

    fs::write(target, fallback_html).expect("Failed to write fallback page");
}
