#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixfmt::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let word = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
    let bpp = data[0];
    let masks = [word(1), word(5), word(9), word(13)];

    // A match must derive back to exactly the masks that were asked for.
    if let Some(f) = match_masks(bpp, masks[0], masks[1], masks[2], masks[3]) {
        let (derived_bpp, derived) = masks_for_format(f).unwrap();
        assert_eq!(derived, masks, "{f:?}");
        assert!(derived_bpp == bpp || u16::from(f.bytes_per_pixel()) * 8 == u16::from(bpp));
    }

    // Any identifier decomposes and recomposes to itself when it decomposes at all.
    let raw = word(1);
    if let Some(fields) = PixelFormat(raw).decompose() {
        if PixelFormat(raw).is_canonical() {
            assert_eq!(fields.compose(), PixelFormat(raw));
        }
    }
    if let Some(fields) = Colorspace(raw).decompose() {
        assert_eq!(fields.compose(), Colorspace(raw));
    }
});
