#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixfmt::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Any identifier at all: derivation and mapping must never panic.
    let raw = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let [r, g, b, a] = [data[4], data[5], data[6], data[7]];
    let d = PixelFormat(raw).details();
    let _ = map_rgba(&d, None, r, g, b, a);
    let _ = get_rgba(raw, &d, None);

    // Canonical packed formats: unmap(map(c)) stays within the quantization bound.
    let f = PixelFormat::ALL[usize::from(data[0]) % PixelFormat::ALL.len()];
    if !f.is_packed() {
        return;
    }
    let d = f.details();
    let px = map_rgba(&d, None, r, g, b, a).unwrap();
    let c = get_rgba(px, &d, None).unwrap();
    for (want, got, bits) in [
        (r, c.r, d.red.bits),
        (g, c.g, d.green.bits),
        (b, c.b, d.blue.bits),
    ] {
        let bound = if bits >= 8 { 0 } else { 255u8 >> bits };
        assert!(want.abs_diff(got) <= bound, "{f:?} {want} -> {got}");
    }
    if !d.alpha.is_present() {
        assert_eq!(c.a, 255);
    }
});
