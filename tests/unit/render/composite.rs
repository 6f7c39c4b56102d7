use super::*;

#[test]
fn transparent_src_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn opaque_src_replaces_dst() {
    let dst = [240, 240, 240, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn transparent_dst_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn opaque_dst_stays_opaque() {
    let dst = [240, 240, 240, 255];
    // Half-covered pure red, premultiplied.
    let out = over(dst, [128, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128 + 120);
    assert_eq!(out[1], 120);
}

#[test]
fn over_in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    over_in_place(&mut dst, &[1, 2, 3, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255, 0, 0, 0, 0]);
}
