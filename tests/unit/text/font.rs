use super::*;

const FIXTURE: &str = "tests/data/fonts/DejaVuSans.ttf";

fn fixture(size_px: f32) -> FontMetrics {
    FontMetrics::load(Path::new(FIXTURE), size_px).unwrap()
}

#[test]
fn loads_fixture_and_measures_text() {
    let font = fixture(DEFAULT_FONT_SIZE_PX);
    assert_eq!(font.size_px(), DEFAULT_FONT_SIZE_PX);

    let one = font.measure("A");
    let six = font.measure("AAAAAA");
    assert!(one.width > 0 && one.height > 0);
    assert!(six.width > one.width * 5);
    assert_eq!(font.measure("").width, 0);
}

#[test]
fn width_grows_with_appended_words() {
    let font = fixture(DEFAULT_FONT_SIZE_PX);
    assert!(font.measure("HELLO WORLD").width > font.measure("HELLO").width);
}

#[test]
fn line_height_adds_gap_to_probe_height() {
    let font = fixture(DEFAULT_FONT_SIZE_PX);
    let probe = font.measure(LINE_HEIGHT_PROBE).height;
    assert!(probe > 0);
    assert_eq!(font.line_height(DEFAULT_LINE_GAP_PX), probe + DEFAULT_LINE_GAP_PX);
}

#[test]
fn larger_size_measures_wider() {
    let small = fixture(12.0);
    let large = fixture(48.0);
    assert!(large.measure("caption").width > small.measure("caption").width);
}

#[test]
fn draw_line_changes_pixels_inside_canvas() {
    let font = fixture(DEFAULT_FONT_SIZE_PX);
    let mut canvas = RgbaImage::from_pixel(120, 60, Rgba([0, 0, 0, 255]));
    font.draw_line(&mut canvas, "HI", 10, 10, Rgba([255, 255, 255, 255]));
    assert!(canvas.pixels().any(|p| p.0[0] == 255));

    // Entirely off-canvas draws are clipped, not panics.
    let mut untouched = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255]));
    font.draw_line(&mut untouched, "HI", 10, -500, Rgba([255, 255, 255, 255]));
    assert!(untouched.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn invalid_bytes_are_resource_unavailable() {
    let err = FontMetrics::from_bytes(b"not a font".to_vec(), 30.0).unwrap_err();
    assert!(err.is_resource_unavailable(), "{err}");
}

#[test]
fn missing_file_is_resource_unavailable() {
    let err = FontMetrics::load(Path::new("tests/data/fonts/missing.ttf"), 30.0).unwrap_err();
    assert!(err.is_resource_unavailable(), "{err}");
    assert!(err.to_string().contains("missing.ttf"));
}

#[test]
fn non_positive_size_is_rejected() {
    let bytes = std::fs::read(FIXTURE).unwrap();
    assert!(matches!(
        FontMetrics::from_bytes(bytes.clone(), 0.0),
        Err(CaptionError::Validation(_))
    ));
    assert!(matches!(
        FontMetrics::from_bytes(bytes, f32::NAN),
        Err(CaptionError::Validation(_))
    ));
}
