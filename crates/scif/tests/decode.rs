/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use scif::{ScifDecoder, ScifErrors};
use scif_core::options::{DecoderOptions, ZeroDimensionPolicy};

fn pixel(pixels: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
    let offset = (y * width + x) * 3;
    [pixels[offset], pixels[offset + 1], pixels[offset + 2]]
}

#[test]
fn solid_red_reference_bytes() {
    // 100x50 solid red
    let data = [0x00, 0x64, 0x00, 0x32, 0x01, 0xFF, 0x00, 0x00];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((100, 50)));
    assert_eq!(decoder.mode(), Some(1));
    assert_eq!(pixels.len(), 100 * 50 * 3);
    assert!(pixels
        .chunks_exact(3)
        .all(|px| px == [255, 0, 0]));
}

#[test]
fn horizontal_gradient_reference_bytes() {
    // 4x4 horizontal gradient, black to white, t = x / 3
    let data = [
        0x00, 0x04, 0x00, 0x04, 0x03, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF
    ];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert_eq!(pixels.len(), 4 * 4 * 3);
    for y in 0..4 {
        assert_eq!(pixel(&pixels, 4, 0, y), [0, 0, 0]);
        assert_eq!(pixel(&pixels, 4, 1, y), [85, 85, 85]);
        assert_eq!(pixel(&pixels, 4, 2, y), [170, 170, 170]);
        assert_eq!(pixel(&pixels, 4, 3, y), [255, 255, 255]);
    }
}

#[test]
fn vertical_gradient_is_monotonic_per_channel() {
    let data = [0x00, 0x03, 0x00, 0x40, 0x02, 10, 200, 77, 240, 3, 77];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    for x in 0..3 {
        let mut prev = pixel(&pixels, 3, x, 0);
        assert_eq!(prev, [10, 200, 77]);

        for y in 1..64 {
            let current = pixel(&pixels, 3, x, y);
            // r ascends 10 -> 240, g descends 200 -> 3, b is constant
            assert!(current[0] >= prev[0]);
            assert!(current[1] <= prev[1]);
            assert_eq!(current[2], 77);
            prev = current;
        }
        assert_eq!(prev, [240, 3, 77]);
    }
}

#[test]
fn gradient_with_one_row_takes_start_color() {
    // height = 1, the interpolation parameter degenerates to 0.0
    let data = [0x00, 0x05, 0x00, 0x01, 0x02, 1, 2, 3, 250, 251, 252];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert_eq!(pixels.len(), 5 * 3);
    assert!(pixels.chunks_exact(3).all(|px| px == [1, 2, 3]));
}

#[test]
fn gradient_rounds_half_away_from_zero() {
    // 2x3 vertical gradient 0 -> 255, middle row t = 0.5 gives 127.5,
    // which must round to 128 and not to the even 127
    let data = [0x00, 0x02, 0x00, 0x03, 0x02, 0, 0, 0, 255, 255, 255];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert_eq!(pixel(&pixels, 2, 0, 0), [0, 0, 0]);
    assert_eq!(pixel(&pixels, 2, 0, 1), [128, 128, 128]);
    assert_eq!(pixel(&pixels, 2, 0, 2), [255, 255, 255]);
}

#[test]
fn checkerboard_tiles_alternate_every_eight_pixels() {
    let data = [0x00, 0x10, 0x00, 0x10, 0x04, 255, 0, 0, 0, 0, 255];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert_eq!(pixel(&pixels, 16, 0, 0), [255, 0, 0]);
    assert_eq!(pixel(&pixels, 16, 8, 0), [0, 0, 255]);
    assert_eq!(pixel(&pixels, 16, 0, 8), [0, 0, 255]);
    assert_eq!(pixel(&pixels, 16, 8, 8), [255, 0, 0]);
    // within a tile the color does not change
    assert_eq!(pixel(&pixels, 16, 7, 7), [255, 0, 0]);
    assert_eq!(pixel(&pixels, 16, 15, 15), [255, 0, 0]);
}

#[test]
fn truncated_header_is_rejected() {
    let mut decoder = ScifDecoder::new(&[0x00, 0x64, 0x00]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, ScifErrors::TruncatedHeader(3)));
}

#[test]
fn short_payload_is_rejected() {
    // mode 1 requires 3 payload bytes, only 2 present
    let data = [0x00, 0x05, 0x00, 0x05, 0x01, 10, 20];
    let mut decoder = ScifDecoder::new(&data);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, ScifErrors::PayloadTooShort(3, 2)));
}

#[test]
fn unknown_mode_is_rejected() {
    let data = [0x00, 0x01, 0x00, 0x01, 0x63, 0, 0, 0];
    let mut decoder = ScifDecoder::new(&data);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, ScifErrors::UnknownMode(99)));
}

#[test]
fn zero_dimensions_emit_an_empty_buffer_by_default() {
    let data = [0x00, 0x00, 0x00, 0x20, 0x01, 1, 2, 3];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    assert!(pixels.is_empty());
    assert_eq!(decoder.output_buffer_size(), Some(0));
}

#[test]
fn zero_dimensions_error_under_strict_options() {
    let data = [0x00, 0x00, 0x00, 0x20, 0x01, 1, 2, 3];
    let options = DecoderOptions::default()
        .set_zero_dimension_policy(ZeroDimensionPolicy::Reject);
    let mut decoder = ScifDecoder::new_with_options(&data, options);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, ScifErrors::ZeroDimension));
}

#[test]
fn zero_dimensions_still_validate_the_payload() {
    // empty image but unknown mode, the mode check wins
    let data = [0x00, 0x00, 0x00, 0x00, 0x07];
    let mut decoder = ScifDecoder::new(&data);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, ScifErrors::UnknownMode(7)));
}

#[test]
fn max_dimension_limits_are_respected() {
    let data = [0x00, 0x64, 0x00, 0x32, 0x01, 0xFF, 0x00, 0x00];
    let options = DecoderOptions::default().set_max_width(10);
    let mut decoder = ScifDecoder::new_with_options(&data, options);

    assert!(matches!(
        decoder.decode().unwrap_err(),
        ScifErrors::Generic(_)
    ));
}

#[test]
fn decode_twice_yields_the_same_pixels() {
    let data = [
        0x00, 0x04, 0x00, 0x04, 0x03, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF
    ];
    let mut decoder = ScifDecoder::new(&data);

    let first = decoder.decode().unwrap();
    let second = decoder.decode().unwrap();

    assert_eq!(first.len(), 4 * 4 * 3);
    assert_eq!(first, second);
}

#[test]
fn single_pixel_image() {
    let data = [0x00, 0x01, 0x00, 0x01, 0x03, 9, 8, 7, 200, 100, 50];
    let mut decoder = ScifDecoder::new(&data);

    let pixels = decoder.decode().unwrap();

    // width = 1 degenerates the horizontal gradient to its start color
    assert_eq!(pixels, [9, 8, 7]);
}
