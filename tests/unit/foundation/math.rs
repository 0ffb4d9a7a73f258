use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(100, 128), 50);
}

#[test]
fn premultiply_zeroes_transparent_pixels() {
    let mut px = vec![200, 100, 50, 0, 200, 100, 50, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..], &[200, 100, 50, 255]);
}

#[test]
fn flatten_keeps_opaque_and_fills_transparent_with_matte() {
    let px = [10, 20, 30, 255, 0, 0, 0, 0];
    let out = flatten_premul_over(&px, [255, 255, 255]);
    assert_eq!(out, vec![10, 20, 30, 255, 255, 255]);
}
