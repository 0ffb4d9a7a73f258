use super::*;

#[test]
fn zero_opacity_or_alpha_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [200, 200, 200, 200], 0.0), dst);
    assert_eq!(over(dst, [0, 0, 0, 0], 1.0), dst);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([1, 2, 3, 255], [9, 8, 7, 255], 1.0), [9, 8, 7, 255]);
}

#[test]
fn half_alpha_blends() {
    let out = over([0, 0, 0, 255], [128, 128, 128, 128], 1.0);
    assert_eq!(out[3], 255);
    assert!((127..=129).contains(&out[0]));
}

#[test]
fn in_place_requires_matching_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
    premul_over_in_place(&mut dst, &[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![255, 0, 0, 255, 0, 0, 0, 0]);
}

#[test]
fn over_at_clips_to_destination() {
    let mut dst = vec![0u8; 3 * 3 * 4];
    let src = [0u8, 255, 0, 255].repeat(4);
    over_at(&mut dst, 3, 3, &src, 2, 2, -1, 2, 1.0).unwrap();
    let green: Vec<usize> = dst
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| px[1] == 255)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(green, vec![6]);
}

#[test]
fn over_at_fully_outside_is_noop() {
    let mut dst = vec![7u8; 2 * 2 * 4];
    over_at(&mut dst, 2, 2, &[255u8; 4], 1, 1, 5, 5, 1.0).unwrap();
    assert!(dst.iter().all(|&b| b == 7));
}
