//! 头像压缩的尺寸与格式计算

pub const MAX_WIDTH: u32 = 800;
pub const MAX_HEIGHT: u32 = 800;
pub const QUALITY: f64 = 0.7;
/// 超过此大小的 PNG 转为 JPEG
pub const CONVERT_SIZE: f64 = 500.0 * 1024.0;

/// 等比缩放到 `max_w × max_h` 以内，不放大
pub fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 || (width <= max_w && height <= max_h) {
        return (width, height);
    }
    let scale = f64::min(
        f64::from(max_w) / f64::from(width),
        f64::from(max_h) / f64::from(height),
    );
    let w = (f64::from(width) * scale).round().max(1.0) as u32;
    let h = (f64::from(height) * scale).round().max(1.0) as u32;
    (w, h)
}

/// 输出的 MIME 类型
pub fn output_mime(input_mime: &str, size_bytes: f64) -> String {
    if input_mime == "image/png" && size_bytes > CONVERT_SIZE {
        "image/jpeg".to_string()
    } else if input_mime.is_empty() {
        "image/jpeg".to_string()
    } else {
        input_mime.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_images_scale_to_width() {
        assert_eq!(fit_within(1600, 800, MAX_WIDTH, MAX_HEIGHT), (800, 400));
    }

    #[test]
    fn tall_images_scale_to_height() {
        assert_eq!(fit_within(1000, 2000, MAX_WIDTH, MAX_HEIGHT), (400, 800));
    }

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(fit_within(120, 90, MAX_WIDTH, MAX_HEIGHT), (120, 90));
    }

    #[test]
    fn large_png_becomes_jpeg() {
        assert_eq!(output_mime("image/png", 600.0 * 1024.0), "image/jpeg");
        assert_eq!(output_mime("image/png", 100.0 * 1024.0), "image/png");
        assert_eq!(output_mime("image/webp", 900.0 * 1024.0), "image/webp");
    }
}
