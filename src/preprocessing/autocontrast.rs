use super::LoadedImage;
use image::{DynamicImage, ImageBuffer, Pixel};

/// Channel value types the stretch understands
trait Channel: Copy + PartialOrd {
    const MIN: Self;
    const MAX: Self;

    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl Channel for u8 {
    const MIN: Self = u8::MIN;
    const MAX: Self = u8::MAX;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.clamp(0.0, u8::MAX as f64) as u8
    }
}

impl Channel for u16 {
    const MIN: Self = u16::MIN;
    const MAX: Self = u16::MAX;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.clamp(0.0, u16::MAX as f64) as u16
    }
}

impl Channel for f32 {
    const MIN: Self = 0.0;
    const MAX: Self = 1.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value.clamp(0.0, 1.0) as f32
    }
}

/// Stretch each colour channel so its darkest value maps to the channel
/// minimum and its brightest to the channel maximum.
///
/// No outliers are clipped. Alpha is carried over unchanged, as is any
/// channel whose values are all equal. The result keeps the input's pixel
/// layout and source format.
pub fn autocontrast(input: &LoadedImage) -> LoadedImage {
    let image = match &input.image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(stretch(buf)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(stretch(buf)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(stretch(buf)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(stretch(buf)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(stretch(buf)),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(stretch(buf)),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(stretch(buf)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(stretch(buf)),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(stretch(buf)),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(stretch(buf)),
        other => DynamicImage::ImageRgba32F(stretch(&other.to_rgba32f())),
    };

    LoadedImage::new(image, input.format)
}

fn stretch<P>(buf: &ImageBuffer<P, Vec<P::Subpixel>>) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
    P::Subpixel: Channel,
{
    let color_channels = color_channel_count::<P>();
    let (lows, highs) = channel_bounds(buf, color_channels);

    let out_min = <P::Subpixel as Channel>::MIN.to_f64();
    let out_range = <P::Subpixel as Channel>::MAX.to_f64() - out_min;

    let mut out = buf.clone();
    for pixel in out.pixels_mut() {
        for (c, value) in pixel
            .channels_mut()
            .iter_mut()
            .take(color_channels)
            .enumerate()
        {
            let (lo, hi) = (lows[c].to_f64(), highs[c].to_f64());
            if hi <= lo {
                continue;
            }
            // multiply before dividing so the brightest value lands exactly on MAX
            let stretched = out_min + (value.to_f64() - lo) * out_range / (hi - lo);
            *value = <P::Subpixel as Channel>::from_f64(stretched);
        }
    }
    out
}

/// Per-channel (darkest, brightest) over the colour channels of `buf`
fn channel_bounds<P>(
    buf: &ImageBuffer<P, Vec<P::Subpixel>>,
    color_channels: usize,
) -> (Vec<P::Subpixel>, Vec<P::Subpixel>)
where
    P: Pixel,
    P::Subpixel: Channel,
{
    let mut pixels = buf.pixels();
    let Some(first) = pixels.next() else {
        // Empty image: hi <= lo on every channel, so nothing is stretched
        return (
            vec![<P::Subpixel as Channel>::MAX; color_channels],
            vec![<P::Subpixel as Channel>::MIN; color_channels],
        );
    };

    // Seeded from real pixels: float images may hold values outside 0.0..=1.0
    let mut lows = first.channels()[..color_channels].to_vec();
    let mut highs = lows.clone();

    for pixel in pixels {
        for (c, &value) in pixel.channels().iter().take(color_channels).enumerate() {
            if value < lows[c] {
                lows[c] = value;
            }
            if value > highs[c] {
                highs[c] = value;
            }
        }
    }

    (lows, highs)
}

fn color_channel_count<P: Pixel>() -> usize {
    let channels = P::CHANNEL_COUNT as usize;
    if P::HAS_ALPHA {
        channels - 1
    } else {
        channels
    }
}
