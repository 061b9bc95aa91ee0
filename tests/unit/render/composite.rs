use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn half_alpha_white_over_black_is_mid_grey() {
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[0u8; 8]).is_ok());
}

#[test]
fn repeated_tint_converges_to_tint_color() {
    let mut buf = vec![255u8; 4];
    let tint = [0, 0, 0, 26];
    for _ in 0..200 {
        tint_in_place(&mut buf, tint);
    }
    // Rounding leaves a small residue; trails decay towards the background.
    assert!(buf[0] < 20, "residue {}", buf[0]);
    assert_eq!(buf[3], 255);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![64, 0, 32, 128, 9, 9, 9, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 64, 128]);
    assert_eq!(&px[4..], &[0, 0, 0, 0]);
}
