use palette::Srgba;

/// 8-bit sRGB color with straight alpha.
pub type Color = Srgba<u8>;

pub fn black() -> Color {
    Color::new(0, 0, 0, 255)
}

pub fn white() -> Color {
    Color::new(255, 255, 255, 255)
}

pub fn transparent() -> Color {
    Color::new(0, 0, 0, 0)
}

/// Returns `color` with its alpha channel replaced.
pub fn with_alpha(color: Color, alpha: u8) -> Color {
    Color::new(color.red, color.green, color.blue, alpha)
}

/// Blends `color` scaled by glyph `coverage` over an RGBA8 pixel (source-over).
pub fn blend_over(dst: &mut [u8], color: Color, coverage: u8) {
    let src_a = (color.alpha as u32 * coverage as u32 + 127) / 255;
    if src_a == 0 {
        return;
    }

    let inv = 255 - src_a;
    let dst_a = dst[3] as u32;
    let out_a = src_a + (dst_a * inv + 127) / 255;
    if out_a == 0 {
        return;
    }

    let src = [color.red, color.green, color.blue];
    for (channel, src_c) in dst.iter_mut().take(3).zip(src) {
        let premul = src_c as u32 * src_a + (*channel as u32 * dst_a * inv + 127) / 255;
        *channel = ((premul + out_a / 2) / out_a).min(255) as u8;
    }
    dst[3] = out_a.min(255) as u8;
}
