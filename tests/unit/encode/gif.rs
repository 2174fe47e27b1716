use super::*;
use crate::assets::decode::decode_animation;
use crate::assets::test_gif::{FRAME_DELAY_MS, solid_frames};

#[test]
fn zero_frames_is_encoding_failure() {
    let err = encode_animation(Vec::new()).unwrap_err();
    assert!(matches!(err, CaptionError::EncodingFailure(_)), "{err}");
}

#[test]
fn output_is_a_looping_gif_with_all_frames() {
    let colors = [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255], [9, 9, 9, 255]];
    let bytes = encode_animation(solid_frames(16, 8, &colors)).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    assert_eq!(bytes.last(), Some(&0x3B));

    let decoded = decode_animation(&bytes).unwrap();
    assert_eq!(decoded.frame_count(), colors.len());
    for (frame, color) in decoded.frames.iter().zip(colors) {
        assert_eq!(frame.buffer().get_pixel(5, 5).0, color);
        assert_eq!(frame.delay().numer_denom_ms(), (FRAME_DELAY_MS, 1));
    }
}

#[test]
fn exact_palette_preserves_drawn_colors() {
    let mut frames = solid_frames(10, 10, &[[12, 34, 56, 255]]);
    for x in 2..8 {
        frames[0]
            .buffer_mut()
            .put_pixel(x, 4, image::Rgba([255, 255, 255, 255]));
    }
    let decoded = decode_animation(&encode_animation(frames).unwrap()).unwrap();
    let buf = decoded.frames[0].buffer();
    assert_eq!(buf.get_pixel(3, 4).0, [255, 255, 255, 255]);
    assert_eq!(buf.get_pixel(3, 5).0, [12, 34, 56, 255]);
}

#[test]
fn transparency_survives_reencode() {
    let mut frames = solid_frames(6, 6, &[[0, 0, 0, 0]]);
    frames[0]
        .buffer_mut()
        .put_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
    let decoded = decode_animation(&encode_animation(frames).unwrap()).unwrap();
    let buf = decoded.frames[0].buffer();
    assert_eq!(buf.get_pixel(0, 0).0[3], 0);
    assert_eq!(buf.get_pixel(1, 1).0, [255, 255, 255, 255]);
}
