/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_error::{check_argb_destination, check_overflow_v3, MismatchedSize};
use crate::yuv_support::{pack_argb, ArgbChannel};
use crate::YuvError;
use num_traits::{AsPrimitive, Float};

/// NHWC tensor shape, `[batch, height, width, channels]`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TensorShape {
    pub batch: usize,
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl TensorShape {
    pub const fn new(batch: usize, height: usize, width: usize, channels: usize) -> TensorShape {
        TensorShape {
            batch,
            height,
            width,
            channels,
        }
    }

    /// Shape as reported by inference runtime, must have exactly 4 dimensions.
    pub fn from_dims(dims: &[usize]) -> Result<TensorShape, YuvError> {
        match *dims {
            [batch, height, width, channels] => Ok(TensorShape::new(batch, height, width, channels)),
            _ => Err(YuvError::InvalidTensorShape(dims.len())),
        }
    }

    /// Single RGB image is the only layout pixels can be marshalled into.
    fn check_rgb_image(&self) -> Result<(), YuvError> {
        if self.channels != 3 {
            return Err(YuvError::UnsupportedTensorChannels(self.channels));
        }
        if self.batch != 1 {
            return Err(YuvError::UnsupportedTensorBatch(self.batch));
        }
        if self.width == 0 || self.height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        check_overflow_v3(self.height, self.width, self.channels)?;
        Ok(())
    }

    fn check_tensor<T>(&self, tensor: &[T]) -> Result<(), YuvError> {
        let expected = self.height * self.width * self.channels;
        if tensor.len() != expected {
            return Err(YuvError::TensorSizeMismatch(MismatchedSize {
                expected,
                received: tensor.len(),
            }));
        }
        Ok(())
    }

    fn check_pixels(&self, argb: &[u32]) -> Result<(), YuvError> {
        if self.width > u32::MAX as usize || self.height > u32::MAX as usize {
            return Err(YuvError::PointerOverflow);
        }
        check_argb_destination(argb, self.width as u32, self.height as u32)
    }
}

/// Element of a tensor which can hold one 8 bit color channel.
///
/// Integers keep the raw channel value, floats are normalized into `[0, 1]`.
pub trait TensorElement: Copy + Send + Sync + 'static {
    fn from_channel(channel: u8) -> Self;
    fn to_channel(self) -> u8;
}

impl TensorElement for u8 {
    #[inline(always)]
    fn from_channel(channel: u8) -> Self {
        channel
    }

    #[inline(always)]
    fn to_channel(self) -> u8 {
        self
    }
}

#[inline(always)]
fn normalize<F>(channel: u8) -> F
where
    F: Float + 'static,
    u8: AsPrimitive<F>,
{
    let max_colors: F = 255u8.as_();
    let value: F = channel.as_();
    value / max_colors
}

#[inline(always)]
fn denormalize<F>(value: F) -> u8
where
    F: Float + AsPrimitive<u8>,
    u8: AsPrimitive<F>,
{
    let max_colors: F = 255u8.as_();
    let half = F::one() / (F::one() + F::one());
    (value * max_colors + half)
        .max(F::zero())
        .min(max_colors)
        .as_()
}

impl TensorElement for f32 {
    #[inline(always)]
    fn from_channel(channel: u8) -> Self {
        normalize(channel)
    }

    #[inline(always)]
    fn to_channel(self) -> u8 {
        denormalize(self)
    }
}

impl TensorElement for f64 {
    #[inline(always)]
    fn from_channel(channel: u8) -> Self {
        normalize(channel)
    }

    #[inline(always)]
    fn to_channel(self) -> u8 {
        denormalize(self)
    }
}

/// Fills NHWC RGB tensor from ARGB 8888 pixels, alpha is dropped.
///
/// Pixels must already have tensor dimensions, no resampling is done here.
///
/// # Arguments
///
/// * `argb`: Source pixels, `height * width` long
/// * `shape`: Tensor shape, must be `[1, height, width, 3]`
/// * `tensor`: Destination tensor data
///
/// returns: Result<(), [YuvError]>
///
pub fn argb_to_rgb_tensor<T: TensorElement>(
    argb: &[u32],
    shape: TensorShape,
    tensor: &mut [T],
) -> Result<(), YuvError> {
    shape.check_rgb_image()?;
    shape.check_pixels(argb)?;
    shape.check_tensor(tensor)?;

    for (dst, &pixel) in tensor.chunks_exact_mut(3).zip(argb.iter()) {
        dst[0] = T::from_channel(ArgbChannel::Red.extract(pixel));
        dst[1] = T::from_channel(ArgbChannel::Green.extract(pixel));
        dst[2] = T::from_channel(ArgbChannel::Blue.extract(pixel));
    }
    Ok(())
}

/// Unpacks NHWC RGB tensor into opaque ARGB 8888 pixels.
///
/// # Arguments
///
/// * `tensor`: Source tensor data
/// * `shape`: Tensor shape, must be `[1, height, width, 3]`
/// * `argb`: Destination pixels, `height * width` long
///
/// returns: Result<(), [YuvError]>
///
pub fn rgb_tensor_to_argb<T: TensorElement>(
    tensor: &[T],
    shape: TensorShape,
    argb: &mut [u32],
) -> Result<(), YuvError> {
    shape.check_rgb_image()?;
    shape.check_tensor(tensor)?;
    shape.check_pixels(argb)?;

    for (dst, src) in argb.iter_mut().zip(tensor.chunks_exact(3)) {
        *dst = pack_argb(src[0].to_channel(), src[1].to_channel(), src[2].to_channel());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_shape_from_dims() {
        assert_eq!(
            TensorShape::from_dims(&[1, 256, 384, 3]),
            Ok(TensorShape::new(1, 256, 384, 3))
        );
        assert_eq!(
            TensorShape::from_dims(&[256, 384, 3]),
            Err(YuvError::InvalidTensorShape(3))
        );
    }

    #[test]
    fn test_u8_tensor_channels() {
        let argb = [0xff102030u32, 0x80405060];
        let mut tensor = [0u8; 6];
        argb_to_rgb_tensor(&argb, TensorShape::new(1, 1, 2, 3), &mut tensor).unwrap();
        assert_eq!(tensor, [0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);

        let mut unpacked = [0u32; 2];
        rgb_tensor_to_argb(&tensor, TensorShape::new(1, 1, 2, 3), &mut unpacked).unwrap();
        assert_eq!(unpacked, [0xff102030, 0xff405060]);
    }

    #[test]
    fn test_f32_tensor_is_normalized() {
        let argb = [0xffff0080u32];
        let mut tensor = [0f32; 3];
        argb_to_rgb_tensor(&argb, TensorShape::new(1, 1, 1, 3), &mut tensor).unwrap();
        assert_eq!(tensor[0], 1.0);
        assert_eq!(tensor[1], 0.0);
        assert!((tensor[2] - 128. / 255.).abs() < 1e-6);
    }

    #[test]
    fn test_float_tensor_is_clamped() {
        let tensor = [1.7f32, -0.4, 0.5];
        let mut argb = [0u32; 1];
        rgb_tensor_to_argb(&tensor, TensorShape::new(1, 1, 1, 3), &mut argb).unwrap();
        assert_eq!(argb[0], 0xffff0080);
    }

    #[test]
    fn test_float_tensor_keeps_channels() {
        let mut rng = rand::rng();
        let width = 17usize;
        let height = 9usize;
        let shape = TensorShape::new(1, height, width, 3);
        let argb: Vec<u32> = (0..width * height)
            .map(|_| 0xff000000 | rng.random_range(0..0x1000000u32))
            .collect();

        let mut tensor32 = vec![0f32; width * height * 3];
        let mut tensor64 = vec![0f64; width * height * 3];
        argb_to_rgb_tensor(&argb, shape, &mut tensor32).unwrap();
        argb_to_rgb_tensor(&argb, shape, &mut tensor64).unwrap();

        let mut restored32 = vec![0u32; width * height];
        let mut restored64 = vec![0u32; width * height];
        rgb_tensor_to_argb(&tensor32, shape, &mut restored32).unwrap();
        rgb_tensor_to_argb(&tensor64, shape, &mut restored64).unwrap();
        assert_eq!(restored32, argb);
        assert_eq!(restored64, argb);
    }

    #[test]
    fn test_invalid_layouts() {
        let argb = [0u32; 4];
        let mut tensor = [0u8; 12];
        assert_eq!(
            argb_to_rgb_tensor(&argb, TensorShape::new(1, 2, 2, 4), &mut tensor),
            Err(YuvError::UnsupportedTensorChannels(4))
        );
        assert_eq!(
            argb_to_rgb_tensor(&argb, TensorShape::new(2, 2, 2, 3), &mut tensor),
            Err(YuvError::UnsupportedTensorBatch(2))
        );
        let mut short = [0u8; 11];
        assert_eq!(
            argb_to_rgb_tensor(&argb, TensorShape::new(1, 2, 2, 3), &mut short),
            Err(YuvError::TensorSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11,
            }))
        );
        assert!(matches!(
            argb_to_rgb_tensor(&argb, TensorShape::new(1, 3, 2, 3), &mut tensor),
            Err(YuvError::DestinationSizeMismatch(_))
        ));
    }
}
