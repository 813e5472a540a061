//! Integration tests for the CoversheetBuilder API
//!
//! Pages are drawn onto a recording surface with fixed-width metrics so that
//! every position can be checked exactly.

use float_cmp::assert_approx_eq;

use coversheet::{
    CoversheetBuilder, CoversheetError, Ensemble, LayoutError, Song,
    config::{AppConfig, DocumentConfig, PageConfig},
    draw::{FontError, FontFace, FontMetrics, RecordingSurface},
};

/// Each character is half the font size wide.
struct HalfEmMetrics;

impl FontMetrics for HalfEmMetrics {
    fn width_of_text_at_size(
        &self,
        _face: &FontFace,
        text: &str,
        size: f32,
    ) -> Result<f32, FontError> {
        Ok(text.chars().count() as f32 * size / 2.0)
    }
}

fn ensemble() -> Ensemble {
    Ensemble::new("Group Name", 2025)
}

fn draw(builder: &CoversheetBuilder<'_>, song: &Song) -> RecordingSurface {
    let mut surface = RecordingSurface::new(builder.config().page().size());
    builder
        .draw_page(&mut surface, song, &ensemble())
        .expect("Failed to draw page");
    surface
}

#[test]
fn test_builder_api_exists() {
    let _builder = CoversheetBuilder::default();
}

#[test]
fn test_page_has_full_border() {
    let builder = CoversheetBuilder::default().with_metrics(&HalfEmMetrics);
    let surface = draw(&builder, &Song::new("Sample Song Title", "Some Composer"));

    assert_eq!(surface.lines().count(), 32);
}

#[test]
fn test_short_title_layout() {
    let builder = CoversheetBuilder::default().with_metrics(&HalfEmMetrics);
    let surface = draw(&builder, &Song::new("Sample Song Title", "Some Composer"));

    let texts: Vec<_> = surface.texts().collect();
    let contents: Vec<_> = texts.iter().map(|(content, _)| *content).collect();
    assert_eq!(
        contents,
        vec!["Sample Song Title", "Some Composer", "Group Name", "2025"]
    );

    // Title: 17 chars at 48 is 408 wide, under the 468 limit
    assert_approx_eq!(f32, texts[0].1.y(), 612.0);
    assert_approx_eq!(f32, texts[0].1.x(), 306.0 - 204.0);

    // Composer: 612 - 0 - 36 - 28
    assert_approx_eq!(f32, texts[1].1.y(), 548.0);

    // Group above year: 90 + 18 + 18
    assert_approx_eq!(f32, texts[2].1.y(), 126.0);
    assert_approx_eq!(f32, texts[3].1.y(), 90.0);
    assert_approx_eq!(f32, texts[3].1.x(), 306.0 - 18.0);
}

#[test]
fn test_long_title_wraps_and_pushes_composer_down() {
    let builder = CoversheetBuilder::default().with_metrics(&HalfEmMetrics);
    let surface = draw(
        &builder,
        &Song::new("Longer Song Title That Should Wrap", "Different Person"),
    );

    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(texts.len(), 5);
    assert_eq!(texts[0].0, "Longer Song Title");
    assert_eq!(texts[1].0, "That Should Wrap");
    assert_approx_eq!(f32, texts[0].1.y(), 612.0);
    assert_approx_eq!(f32, texts[1].1.y(), 612.0 - 48.0 - 10.0);

    assert_eq!(texts[2].0, "Different Person");
    assert_approx_eq!(f32, texts[2].1.y(), 612.0 - 58.0 - 36.0 - 28.0);
}

#[test]
fn test_render_svg() {
    let config = AppConfig::default().with_document(DocumentConfig::new(Some("Jane Doe".into())));
    let builder = CoversheetBuilder::new(config).with_metrics(&HalfEmMetrics);

    let svg = builder
        .render_svg(&Song::new("Sample Song Title", "Some Composer"), &ensemble())
        .expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert_eq!(svg.matches("<line").count(), 32);
    assert_eq!(svg.matches("<text").count(), 4);
    assert!(svg.contains("Sample Song Title"));
    assert!(svg.contains("Author: Jane Doe"));
}

#[test]
fn test_render_svg_with_system_fonts() {
    let builder = CoversheetBuilder::default();
    let result = builder.render_svg(&Song::new("Sample Song Title", "Some Composer"), &ensemble());

    let svg = result.expect("Failed to render with system fonts");
    assert_eq!(svg.matches("<line").count(), 32);
}

#[test]
fn test_page_too_small_for_border() {
    let config = AppConfig::default().with_page(PageConfig::new(2.0, 2.0));
    let builder = CoversheetBuilder::new(config).with_metrics(&HalfEmMetrics);

    let result = builder.render_svg(&Song::new("Tiny", "Nobody"), &ensemble());
    assert!(matches!(
        result,
        Err(CoversheetError::Layout(LayoutError::DegenerateBorder { .. }))
    ));
}

#[test]
fn test_invalid_text_color_is_config_error() {
    let config: AppConfig = toml::from_str(
        r#"
        [style]
        text_color = "not-a-color"
        "#,
    )
    .unwrap();
    let builder = CoversheetBuilder::new(config).with_metrics(&HalfEmMetrics);

    let result = builder.render_svg(&Song::new("Title", "Composer"), &ensemble());
    assert!(matches!(result, Err(CoversheetError::Config(_))));
}

#[test]
fn test_write_svg() {
    let dir = std::env::temp_dir().join(format!("coversheet-builder-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("Sample Song Title (Coversheet).svg");

    let builder = CoversheetBuilder::default().with_metrics(&HalfEmMetrics);
    builder
        .write_svg(&Song::new("Sample Song Title", "Some Composer"), &ensemble(), &path)
        .expect("Failed to write");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Some Composer"));

    std::fs::remove_dir_all(&dir).unwrap();
}
