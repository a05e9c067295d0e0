use std::path::Path;

use pretty_assertions::assert_eq;
use regex::Regex;
use stitch_core::pages::{
    BlogPage, CommunityPage, ContactPage, DimPage, EventsPage, GepPage, IndexPage, PostPage,
    PrivacyPage, ResourcesPage, TeamPage, COMMON_TOKENS,
};
use stitch_core::{BuildConfig, BuildError, PageBuilder, SiteBuilder, build_site};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A template that references every token the page declares.
fn template_for(tokens: &[&str]) -> String {
    let body: String = COMMON_TOKENS
        .iter()
        .chain(tokens)
        .map(|t| format!("<div data-token=\"{t}\">{{{{{t}}}}}</div>\n"))
        .collect();
    format!("<html>{{{{>head}}}}<body>{{{{>header}}}}\n{body}{{{{>footer}}}}{{{{>scripts}}}}</body></html>")
}

fn layout(root: &Path) -> BuildConfig {
    BuildConfig {
        data: root.join("data"),
        templates: root.join("templates"),
        partials: root.join("partials"),
        output: root.join("site"),
    }
}

fn write_templates(root: &Path) {
    let templates = [
        ("index.html", template_for(IndexPage::TOKENS)),
        ("community.html", template_for(CommunityPage::TOKENS)),
        ("blog.html", template_for(BlogPage::TOKENS)),
        ("contact.html", template_for(ContactPage::TOKENS)),
        ("dim.html", template_for(DimPage::TOKENS)),
        ("privacy.html", template_for(PrivacyPage::TOKENS)),
        ("post.html", template_for(PostPage::TOKENS)),
        ("team.html", template_for(TeamPage::TOKENS)),
        ("resources.html", template_for(ResourcesPage::TOKENS)),
        ("events.html", template_for(EventsPage::TOKENS)),
        ("gep.html", template_for(GepPage::TOKENS)),
    ];
    for (name, html) in templates {
        write(root, &format!("templates/{name}"), &html);
    }

    write(
        root,
        "partials/head.html",
        "<title>{{PAGE_TITLE}} | {{SITE_NAME}}</title><link href=\"{{PATH_PREFIX}}css/style.css\">",
    );
    write(
        root,
        "partials/header.html",
        "<nav><a href=\"{{PATH_PREFIX}}index.html\">{{SITE_NAME}}</a>{{NAV_LINKS}}</nav>",
    );
    write(root, "partials/footer.html", "<footer>{{FOOTER_LEGAL}}</footer>");
    // no scripts partial on purpose
}

fn write_content(root: &Path) {
    write(
        root,
        "data/site.yaml",
        r#"
site:
  name: Drog
  tagline: Where art meets science
  description: A community
  url: https://drog.example
  email: hello@drog.example
nav:
  - { url: index.html, text: Home }
  - { url: blog.html, text: Blog }
footer:
  description: Footer blurb
  legal: "© Drog"
  social:
    - { platform: linkedin, url: "https://linkedin.com/company/drog" }
hero:
  headline: Art meets science
stats:
  - { value: 120, label: Members }
"#,
    );
    write(
        root,
        "data/members.yaml",
        r#"
members:
  - name: Ada Lovelace
    role: scientist
    country: uk
    bio: Counted things.
  - name: Bo Diddley
    role: artist
    country: us
    bio: Played things.
    social:
      github: https://github.com/bo
"#,
    );
    write(
        root,
        "data/pages/events.yaml",
        r#"
page: { title: Events }
events:
  - date: 2024-03-05
    type: Workshop
    title: Spring session
"#,
    );
    write(
        root,
        "data/posts/2024-01-hello.yaml",
        r#"
title: Hello
slug: hello
excerpt: First post
content: "<p>Body costs $5</p>"
"#,
    );
    write(root, "data/posts/2024-02-untitled.yaml", "title: No slug\n");
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join("site").join(relative)).unwrap()
}

#[test]
fn test_full_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_templates(root);
    write_content(root);

    let written = build_site(&layout(root)).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.strip_prefix(root.join("site")).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        names,
        vec![
            "index.html",
            "community.html",
            "blog.html",
            "contact.html",
            "dim.html",
            "privacy.html",
            "post/hello.html",
            "post/2024-02-untitled.html",
            "team.html",
            "resources.html",
            "events.html",
            "gep.html",
        ]
    );

    let leftover = Regex::new(r"\{\{>?[A-Za-z_]+\}\}").unwrap();
    for name in &names {
        let html = read(root, name);
        assert!(!leftover.is_match(&html), "unresolved token in {name}");
        assert!(!html.contains("undefined"), "undefined in {name}");
    }

    let index = read(root, "index.html");
    assert!(index.contains("<title>Where art meets science | Drog</title>"));
    assert!(index.contains(r#"<div class="stat-value">120</div>"#));

    let events = read(root, "events.html");
    assert!(events.contains(r#"<span class="day">5</span>"#));
    assert!(events.contains(r#"<span class="month">Mar</span>"#));

    let community = read(root, "community.html");
    assert!(community.find("Ada Lovelace").unwrap() < community.find("Bo Diddley").unwrap());
    assert_eq!(community.matches("member-social").count(), 1);

    // pages without a data file still render, with empty slots
    let gep = read(root, "gep.html");
    assert!(gep.contains(r#"<div data-token="GEP_SECTIONS"></div>"#));
}

#[test]
fn test_post_pages_link_up_one_level() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_templates(root);
    write_content(root);
    build_site(&layout(root)).unwrap();

    let post = read(root, "post/hello.html");
    assert!(post.contains(r#"<link href="../css/style.css">"#));
    assert!(post.contains(r#"<a href="../index.html">Drog</a>"#));
    assert!(post.contains(r#"<a href="../blog.html" class="nav-link">Blog</a>"#));
    assert!(post.contains(r#"<div data-token="PAGE_SLUG">post/hello.html</div>"#));
    assert!(post.contains("<p>Body costs $5</p>"));

    let blog = read(root, "blog.html");
    assert!(blog.contains(r#"<a href="index.html">Drog</a>"#));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_templates(root);
    write_content(root);

    let site = SiteBuilder::new().config(layout(root)).build().unwrap();
    assert_eq!(site.partials().len(), 3);

    let written = site.render_all().unwrap();
    let first: Vec<Vec<u8>> = written.iter().map(|p| std::fs::read(p).unwrap()).collect();
    let written = site.render_all().unwrap();
    let second: Vec<Vec<u8>> = written.iter().map(|p| std::fs::read(p).unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_missing_posts_dir_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_templates(root);
    std::fs::remove_file(root.join("templates/post.html")).unwrap();

    let written = build_site(&layout(root)).unwrap();
    assert_eq!(written.len(), 10);
    assert!(root.join("site/post").is_dir());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_templates(root);
    write_content(root);
    // a regular file where the output directory should be
    write(root, "site", "not a directory");

    let err = build_site(&layout(root)).unwrap_err();
    match err {
        BuildError::Write(path, _) => assert!(path.starts_with(root.join("site"))),
        other => panic!("expected a write error, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(root.join("site")).unwrap(), "not a directory");
}
