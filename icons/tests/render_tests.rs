//! Integration tests for the icon renderer, run against temporary
//! directories.

use std::{fs, path::Path};

use icons::{IconConfig, IconSource};

/// A minimal but valid logo, enough for resvg to rasterise.
const TEST_LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">
  <rect width="64" height="64" rx="12" fill="#3b82f6"/>
  <circle cx="32" cy="32" r="16" fill="#ffffff"/>
</svg>"##;

fn config_in(directory: &Path) -> IconConfig {
    IconConfig {
        svg_path: directory.join("icon.svg"),
        output_directory: directory.to_path_buf(),
        sizes: vec![16, 32, 48, 128],
    }
}

#[test]
fn renders_every_size_from_the_vector_logo() {
    let directory = tempfile::tempdir().expect("failed to create temporary directory");
    let config = config_in(directory.path());
    fs::write(&config.svg_path, TEST_LOGO).expect("failed to write test logo");

    let rendered = icons::render_icons(&config).expect("rendering should succeed");

    assert_eq!(rendered.len(), 4, "one icon per configured size");
    for icon in &rendered {
        assert_eq!(
            icon.source,
            IconSource::Svg,
            "a valid logo should be rasterised directly"
        );
        let dimensions =
            image::image_dimensions(&icon.path).expect("rendered icon should be a readable PNG");
        assert_eq!(
            dimensions,
            (icon.size, icon.size),
            "icon must be exactly the requested size"
        );
    }
}

#[test]
fn falls_back_when_the_logo_does_not_parse() {
    let directory = tempfile::tempdir().expect("failed to create temporary directory");
    let config = config_in(directory.path());
    fs::write(&config.svg_path, "this is not an svg").expect("failed to write bad logo");

    let rendered = icons::render_icons(&config).expect("fallback should recover the run");

    for icon in &rendered {
        assert_eq!(
            icon.source,
            IconSource::Fallback,
            "an unparseable logo should select the fallback"
        );
        let dimensions =
            image::image_dimensions(&icon.path).expect("fallback icon should be a readable PNG");
        assert_eq!(
            dimensions,
            (icon.size, icon.size),
            "fallback icon must be exactly the requested size"
        );
    }
}

#[test]
fn falls_back_when_the_logo_is_missing() {
    let directory = tempfile::tempdir().expect("failed to create temporary directory");
    let config = config_in(directory.path());

    let rendered = icons::render_icons(&config).expect("a missing logo should not fail the run");

    assert!(
        rendered
            .iter()
            .all(|icon| icon.source == IconSource::Fallback),
        "every size should have been drawn procedurally"
    );
    for icon in &rendered {
        assert!(icon.path.is_file(), "icon file should exist");
    }
}

#[test]
fn fallback_output_is_deterministic() {
    let first = tempfile::tempdir().expect("failed to create temporary directory");
    let second = tempfile::tempdir().expect("failed to create temporary directory");

    for directory in [first.path(), second.path()] {
        let config = config_in(directory);
        icons::render_icons(&config).expect("fallback rendering should succeed");
    }

    for size in [16u32, 128] {
        let name = format!("icon{size}.png");
        let first_bytes = fs::read(first.path().join(&name)).expect("first icon should exist");
        let second_bytes = fs::read(second.path().join(&name)).expect("second icon should exist");
        assert_eq!(
            first_bytes, second_bytes,
            "procedural icons must be byte-for-byte identical across runs"
        );
    }
}
