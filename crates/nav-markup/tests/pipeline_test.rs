#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end pipeline tests with a fake host renderer.

use nav_markup::{Container, MenuArgs, expand_items_wrap, render_menu};

/// Minimal stand-in for the host framework's renderer: builds per-item
/// markup, expands the items-wrap template, and wraps the result in the
/// configured container element.
fn host_render(args: &MenuArgs) -> String {
    let items: Vec<String> = [("/", "Home"), ("/about", "About")]
        .iter()
        .map(|(href, label)| {
            format!(r##"<li class="menu-item"><a href="{href}">{label}</a></li>"##)
        })
        .collect();

    let class = args.container_class.as_deref().unwrap_or("");
    let wrapped = expand_items_wrap(
        args.items_wrap.as_deref().unwrap_or("%3$s"),
        "menu-main",
        class,
        &items.join("\n"),
    );

    match &args.container {
        Some(Container::Element(tag)) => format!(r##"<{tag} class="{class}">{wrapped}</{tag}>"##),
        Some(Container::None) | None => wrapped,
    }
}

#[test]
fn full_pipeline_from_json_config() {
    let args: MenuArgs = serde_json::from_str(r#"{"menu": "Main Menu"}"#).unwrap();
    let output = render_menu(args, host_render);

    assert_eq!(
        output,
        concat!(
            r##"<nav class="main-menu">"##,
            r##"<a class="menu-item" href="/">Home</a>"##,
            r##"<a class="menu-item" href="/about">About</a>"##,
            r##"</nav>"##,
        )
    );
}

#[test]
fn pipeline_keeps_list_items_when_disabled() {
    let args: MenuArgs = serde_json::from_str(r#"{"menu": "Main Menu", "strip_li": false}"#)
        .unwrap();
    let output = render_menu(args, host_render);

    assert!(output.contains("<li class=\"menu-item\">"));
    assert!(output.contains('\n'));
    assert!(output.starts_with("<nav class=\"main-menu\">"));
}

#[test]
fn pipeline_honors_caller_container() {
    let args: MenuArgs =
        serde_json::from_str(r#"{"menu": "Main Menu", "container": {"element": "div"}}"#).unwrap();
    let output = render_menu(args, host_render);

    assert!(output.starts_with("<div class=\"main-menu\">"));
    assert!(output.ends_with("</div>"));
}

#[test]
fn pipeline_with_no_container() {
    let args: MenuArgs =
        serde_json::from_str(r#"{"menu": "Main Menu", "container": "none"}"#).unwrap();
    let output = render_menu(args, host_render);

    assert!(output.starts_with("<a "));
    assert!(!output.contains("<nav"));
}

#[test]
fn defaulted_args_serialize_with_expected_shape() {
    let args = MenuArgs::new("Main Menu").with_defaults();
    let value = serde_json::to_value(&args).unwrap();

    assert_eq!(value["items_wrap"], "\n%3$s");
    assert_eq!(value["container"]["element"], "nav");
    assert_eq!(value["container_class"], "main-menu");
    assert_eq!(value["strip_li"], true);
    // The fallback callable never appears in the serialized shape.
    assert!(value.get("fallback").is_none());
}
