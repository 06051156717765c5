use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn raster_is_resized_and_premultiplied() {
    let bytes = png_bytes(3, 5, [100, 50, 200, 128]);
    let sprite = Sprite::decode(
        &bytes,
        SpriteSize {
            width: 10,
            height: 20,
        },
    )
    .unwrap();
    assert_eq!((sprite.width, sprite.height), (10, 20));
    assert_eq!(sprite.rgba8_premul.len(), 10 * 20 * 4);
    assert_eq!(
        &sprite.rgba8_premul[..4],
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn transparent_pixels_lose_their_colour() {
    let bytes = png_bytes(1, 1, [255, 255, 255, 0]);
    let sprite = Sprite::decode(
        &bytes,
        SpriteSize {
            width: 1,
            height: 1,
        },
    )
    .unwrap();
    assert_eq!(sprite.rgba8_premul.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn builtin_car_has_default_size_and_opaque_body() {
    let sprite = Sprite::builtin_car(SpriteSize::default()).unwrap();
    assert_eq!(sprite.size(), SpriteSize::default());

    let at = |x: u32, y: u32| {
        let i = ((y * sprite.width + x) * 4) as usize;
        sprite.rgba8_premul[i + 3]
    };
    assert_eq!(at(50, 100), 255);
    assert_eq!(at(0, 0), 0);
}

#[test]
fn svg_is_detected_with_xml_prolog() {
    let svg = br#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="red"/></svg>"#;
    assert!(looks_like_svg(svg));
    let sprite = Sprite::decode(
        svg,
        SpriteSize {
            width: 8,
            height: 8,
        },
    )
    .unwrap();
    assert_eq!(&sprite.rgba8_premul[..4], &[255, 0, 0, 255]);
}

#[test]
fn garbage_and_zero_size_are_errors() {
    let size = SpriteSize::default();
    assert!(matches!(
        Sprite::decode(b"not an image", size),
        Err(CarDriveError::Asset(_))
    ));
    assert!(matches!(
        Sprite::decode(b"<svg", size),
        Err(CarDriveError::Asset(_))
    ));
    assert!(
        Sprite::builtin_car(SpriteSize {
            width: 0,
            height: 1
        })
        .is_err()
    );
}

#[test]
fn missing_sprite_file_names_the_path() {
    let err = Sprite::from_path(Path::new("nowhere/car.png"), SpriteSize::default()).unwrap_err();
    assert!(err.to_string().contains("nowhere/car.png"));
}
