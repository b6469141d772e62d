// Framebuffer primitives. Pixels are softbuffer's u32 format, 0x00RRGGBB.

pub const BG_COLOR: [u8; 3] = [0, 0, 0];

/// Pack RGB into softbuffer u32 format: 0x00RRGGBB.
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Alpha-composite an RGBA pixel over an opaque RGB background.
pub fn blend_over(src: [u8; 4], bg: [u8; 3]) -> u32 {
    let a = src[3] as u32;
    match a {
        255 => rgb(src[0], src[1], src[2]),
        0 => rgb(bg[0], bg[1], bg[2]),
        _ => {
            let inv = 255 - a;
            let r = ((src[0] as u32 * a + bg[0] as u32 * inv) / 255) as u8;
            let g = ((src[1] as u32 * a + bg[1] as u32 * inv) / 255) as u8;
            let b = ((src[2] as u32 * a + bg[2] as u32 * inv) / 255) as u8;
            rgb(r, g, b)
        }
    }
}

/// Copy `src` into `dst`, centred. Whatever does not fit is clipped.
pub fn blit_centered(
    dst: &mut [u32], dst_w: u32, dst_h: u32,
    src: &[u32], src_w: u32, src_h: u32,
) {
    let x0 = (dst_w as i64 - src_w as i64) / 2;
    let y0 = (dst_h as i64 - src_h as i64) / 2;

    // Source columns that land inside the destination
    let sx_start = (-x0).max(0) as u32;
    let sx_end = (dst_w as i64 - x0).clamp(0, src_w as i64) as u32;
    if sx_start >= sx_end {
        return;
    }

    for sy in 0..src_h {
        let dy = y0 + sy as i64;
        if dy < 0 || dy >= dst_h as i64 {
            continue;
        }
        let src_row = sy as usize * src_w as usize;
        let dst_row = dy as usize * dst_w as usize;
        let dx_start = (x0 + sx_start as i64) as usize;
        let len = (sx_end - sx_start) as usize;
        dst[dst_row + dx_start..dst_row + dx_start + len]
            .copy_from_slice(&src[src_row + sx_start as usize..src_row + sx_start as usize + len]);
    }
}
