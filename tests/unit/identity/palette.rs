use super::*;
use crate::identity::digest::{DIGEST_LEN, digest};

fn counting_digest() -> Digest {
    let mut bytes = [0u8; DIGEST_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = 100 + i as u8;
    }
    Digest::from_bytes(bytes)
}

#[test]
fn color_starts_at_row_plus_col() {
    let d = digest("jncel");
    // d13a6f71...
    assert_eq!(cell_color(&d, CellCoord::new(0, 0)), Rgb8::new(0xd1, 0x3a, 0x6f));
    assert_eq!(cell_color(&d, CellCoord::new(0, 1)), Rgb8::new(0x3a, 0x6f, 0x71));
    assert_eq!(
        cell_color(&d, CellCoord::new(1, 0)),
        cell_color(&d, CellCoord::new(0, 1))
    );
}

#[test]
fn color_wraps_around_the_digest_end() {
    let d = counting_digest();
    assert_eq!(cell_color(&d, CellCoord::new(15, 15)), Rgb8::new(130, 131, 100));
    assert_eq!(cell_color(&d, CellCoord::new(16, 15)), Rgb8::new(131, 100, 101));
    assert_eq!(cell_color(&d, CellCoord::new(16, 16)), Rgb8::new(100, 101, 102));
}
