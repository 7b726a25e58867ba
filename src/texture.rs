use std::borrow::Cow;
use std::error::Error as _;
use std::path::{Path, PathBuf};

use glium::{
    backend::Facade,
    texture::{ClientFormat, MipmapsOption, RawImage2d, Texture2d, TextureCreationError},
    uniforms::{
        MagnifySamplerFilter, MinifySamplerFilter, Sampler, SamplerBehavior, SamplerWrapFunction,
        UniformValue,
    },
};
use image::DynamicImage;

use crate::error::{Error, TextureError};

/// How an image becomes a texture: row order on upload and minification filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureOptions {
    /// Image files store the top row first; GL samples v = 0 at the bottom.
    pub flip_vertically: bool,
    pub minify_filter: MinifySamplerFilter,
}

impl TextureOptions {
    /// Flipped upright, plain linear minification.
    pub fn linear() -> Self {
        Self {
            flip_vertically: true,
            minify_filter: MinifySamplerFilter::Linear,
        }
    }

    /// Unflipped, trilinear minification.
    pub fn mipmapped() -> Self {
        Self {
            flip_vertically: false,
            minify_filter: MinifySamplerFilter::LinearMipmapLinear,
        }
    }

    fn sampler(&self) -> SamplerBehavior {
        SamplerBehavior {
            wrap_function: (
                SamplerWrapFunction::Repeat,
                SamplerWrapFunction::Repeat,
                SamplerWrapFunction::Repeat,
            ),
            minify_filter: self.minify_filter,
            magnify_filter: MagnifySamplerFilter::Linear,
            ..Default::default()
        }
    }
}

/// A GPU texture together with the sampler state it is always bound with.
pub struct Texture {
    texture: Texture2d,
    sampler: SamplerBehavior,
}

impl Texture {
    pub fn load<F: Facade + ?Sized>(
        facade: &F,
        path: &Path,
        options: TextureOptions,
    ) -> Result<Self, Error> {
        let wrap = |source: TextureError| Error::Texture {
            path: path.to_path_buf(),
            source,
        };
        let image = decode_file(path, options.flip_vertically).map_err(|e| wrap(e.into()))?;
        let (width, height) = (image.width, image.height);
        let texture = Texture2d::with_mipmaps(facade, image, MipmapsOption::AutoGeneratedMipmaps)
            .map_err(|e| wrap(e.into()))?;
        log::info!("loaded texture {} ({width}x{height})", path.display());
        Ok(Self {
            texture,
            sampler: options.sampler(),
        })
    }

    /// Like [`Texture::load`], but a missing or unreadable image is logged and replaced by a
    /// single white texel so drawing can carry on.
    pub fn load_or_white<F: Facade + ?Sized>(
        facade: &F,
        path: &Path,
        options: TextureOptions,
    ) -> Result<Self, Error> {
        match Self::load(facade, path, options) {
            Ok(texture) => Ok(texture),
            Err(err) if falls_back_to_white(&err) => {
                let cause = err.source().map(ToString::to_string).unwrap_or_default();
                log::warn!("{err}: {cause}");
                Self::white(facade, options).map_err(|e| Error::Texture {
                    path: PathBuf::from("<white>"),
                    source: e.into(),
                })
            }
            Err(err) => Err(err),
        }
    }

    pub fn white<F: Facade + ?Sized>(
        facade: &F,
        options: TextureOptions,
    ) -> Result<Self, TextureCreationError> {
        let texel = RawImage2d {
            data: Cow::Owned(vec![u8::MAX; 4]),
            width: 1,
            height: 1,
            format: ClientFormat::U8U8U8U8,
        };
        Ok(Self {
            texture: Texture2d::new(facade, texel)?,
            sampler: options.sampler(),
        })
    }

    pub fn sampled(&self) -> Sampler<'_, Texture2d> {
        Sampler(&self.texture, self.sampler)
    }

    pub fn uniform_value(&self) -> UniformValue<'_> {
        UniformValue::Texture2d(&self.texture, Some(self.sampler))
    }
}

/// Decodes an image file into rows ready for upload.
/// Only images that could not be read or decoded are replaced; a GPU that rejects
/// the upload will reject the next texture too.
fn falls_back_to_white(err: &Error) -> bool {
    matches!(
        err,
        Error::Texture {
            source: TextureError::Decode(_),
            ..
        }
    )
}

pub fn decode_file(
    path: &Path,
    flip_vertically: bool,
) -> Result<RawImage2d<'static, u8>, image::ImageError> {
    let image = image::open(path)?;
    Ok(to_raw(image, flip_vertically))
}

/// The channel layout of the file picks the client format: grey, RGB or RGBA.
/// Anything else (grey+alpha, 16-bit, float) is expanded to 8-bit RGBA.
pub fn to_raw(image: DynamicImage, flip_vertically: bool) -> RawImage2d<'static, u8> {
    let image = if flip_vertically { image.flipv() } else { image };
    let (width, height) = (image.width(), image.height());
    let (data, format) = match image {
        DynamicImage::ImageLuma8(buf) => (buf.into_raw(), ClientFormat::U8),
        DynamicImage::ImageRgb8(buf) => (buf.into_raw(), ClientFormat::U8U8U8),
        DynamicImage::ImageRgba8(buf) => (buf.into_raw(), ClientFormat::U8U8U8U8),
        other => (other.into_rgba8().into_raw(), ClientFormat::U8U8U8U8),
    };
    RawImage2d {
        data: Cow::Owned(data),
        width,
        height,
        format,
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayAlphaImage, GrayImage, LumaA, Rgb, RgbImage};

    use super::*;

    #[test]
    fn rgb_keeps_three_channels() {
        let image = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let raw = to_raw(DynamicImage::ImageRgb8(image), false);
        assert_eq!((raw.width, raw.height), (3, 2));
        assert_eq!(raw.format, ClientFormat::U8U8U8);
        assert_eq!(raw.data.len(), 3 * 2 * 3);
    }

    #[test]
    fn grey_uploads_single_channel() {
        let raw = to_raw(DynamicImage::ImageLuma8(GrayImage::new(4, 4)), true);
        assert_eq!(raw.format, ClientFormat::U8);
        assert_eq!(raw.data.len(), 16);
    }

    #[test]
    fn grey_alpha_is_expanded_to_rgba() {
        let image = GrayAlphaImage::from_pixel(1, 1, LumaA([7, 200]));
        let raw = to_raw(DynamicImage::ImageLumaA8(image), false);
        assert_eq!(raw.format, ClientFormat::U8U8U8U8);
        assert_eq!(raw.data.as_ref(), &[7, 7, 7, 200]);
    }

    #[test]
    fn flip_reverses_row_order() {
        let mut image = GrayImage::new(1, 2);
        image.put_pixel(0, 0, image::Luma([1]));
        image.put_pixel(0, 1, image::Luma([2]));

        let kept = to_raw(DynamicImage::ImageLuma8(image.clone()), false);
        let flipped = to_raw(DynamicImage::ImageLuma8(image), true);
        assert_eq!(kept.data.as_ref(), &[1, 2]);
        assert_eq!(flipped.data.as_ref(), &[2, 1]);
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let Err(err) = decode_file(Path::new("no/such/container.jpg"), true) else {
            panic!("expected a decode error");
        };
        assert!(matches!(err, image::ImageError::IoError(_)));
    }

    #[test]
    fn options_match_the_two_demos() {
        assert!(TextureOptions::linear().flip_vertically);
        assert_eq!(
            TextureOptions::mipmapped().sampler().minify_filter,
            MinifySamplerFilter::LinearMipmapLinear
        );
        assert_eq!(
            TextureOptions::linear().sampler().wrap_function.0,
            SamplerWrapFunction::Repeat
        );
    }

    #[test]
    fn unreadable_images_fall_back_to_white() {
        let err = Error::Texture {
            path: PathBuf::from("container.jpg"),
            source: TextureError::Decode(image::ImageError::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            ))),
        };
        assert!(falls_back_to_white(&err));
    }

    #[test]
    fn upload_and_other_failures_propagate() {
        let upload = Error::Texture {
            path: PathBuf::from("container.jpg"),
            source: TextureError::Upload(TextureCreationError::DimensionsNotSupported),
        };
        assert!(!falls_back_to_white(&upload));
        assert!(!falls_back_to_white(&Error::Window("no display".into())));
    }
}
