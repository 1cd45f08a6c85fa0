#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpixfmt::*;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let formats = PixelFormat::ALL;
    let src = formats[usize::from(data[0]) % formats.len()];
    let dst = formats[usize::from(data[1]) % formats.len()];
    let width = u32::from(data[2] % 32);
    let height = u32::from(data[3] % 32);
    let pixels = &data[4..];

    let palette = Palette::new(16).ok();
    let mut req = ConvertRequest::new(src, dst);
    if let Some(p) = palette.as_ref() {
        req = req.with_src_palette(p).with_dst_palette(p);
    }
    let Ok(pitch) = row_bytes(src, width) else {
        return;
    };
    // Errors are fine; panics are not.
    let _ = req.convert(pixels, width, height, pitch, &enough::Unstoppable);
});
