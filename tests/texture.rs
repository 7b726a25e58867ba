use glium::texture::ClientFormat;
use image::{Rgba, RgbaImage};
use learngl::texture::decode_file;

#[test]
fn png_on_disk_decodes_to_rgba_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("awesomeface.png");

    let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    image.save(&path).expect("write png");

    let upright = decode_file(&path, false).expect("decode");
    assert_eq!((upright.width, upright.height), (2, 2));
    assert_eq!(upright.format, ClientFormat::U8U8U8U8);
    assert_eq!(&upright.data[..4], &[255, 0, 0, 255]);

    // flipped, the top-left texel lands in the last row
    let flipped = decode_file(&path, true).expect("decode");
    assert_eq!(&flipped.data[8..12], &[255, 0, 0, 255]);
}

#[test]
fn unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("container.jpg");
    std::fs::write(&path, b"not a jpeg").expect("write");
    assert!(decode_file(&path, true).is_err());
}
