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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum YuvError {
    DestinationSizeMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
    OddImageDimensions(u32, u32),
    ZeroPixelStride,
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    InvalidTensorShape(usize),
    UnsupportedTensorChannels(usize),
    UnsupportedTensorBatch(usize),
    TensorSizeMismatch(MismatchedSize),
    ImageDimensionsNotMatch,
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::OddImageDimensions(width, height) => f.write_fmt(format_args!(
                "YUV 4:2:0 repacking requires even dimensions, but image is {}x{}",
                width, height
            )),
            YuvError::ZeroPixelStride => f.write_str("Chroma pixel stride must not be zero"),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::InvalidTensorShape(rank) => f.write_fmt(format_args!(
                "Tensor shape must have 4 dimensions (batch, height, width, channels), but it has {}",
                rank
            )),
            YuvError::UnsupportedTensorChannels(channels) => f.write_fmt(format_args!(
                "Only RGB tensors with 3 channels are supported, but tensor has {}",
                channels
            )),
            YuvError::UnsupportedTensorBatch(batch) => f.write_fmt(format_args!(
                "Only single image tensors are supported, but batch is {}",
                batch
            )),
            YuvError::TensorSizeMismatch(size) => f.write_fmt(format_args!(
                "Tensor size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::ImageDimensionsNotMatch => f.write_str("Image dimensions does not match"),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), YuvError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_base_size(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// Destination of packed pixels must be exactly `width * height` long
#[inline]
pub(crate) fn check_argb_destination<V>(
    arr: &[V],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_overflow_v2(width as usize, height as usize)?;
    let expected = width as usize * height as usize;
    if arr.len() != expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Luma plane must reach the last visible sample of the last row.
///
/// Camera buffers routinely omit the padding after the last row,
/// so only the minimum `stride * (height - 1) + width` is required.
#[inline]
pub(crate) fn check_y8_channel(
    data: &[u8],
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    check_overflow_v2(stride as usize, height as usize)?;
    if (stride as usize) < width as usize {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: width as usize,
            received: stride as usize,
        }));
    }
    let expected = stride as usize * (height as usize - 1) + width as usize;
    if data.len() < expected {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Chroma plane of 4:2:0 image must reach its last sample,
/// `stride * (chroma_height - 1) + pixel_stride * (chroma_width - 1) + 1`.
#[inline]
pub(crate) fn check_chroma_channel(
    data: &[u8],
    stride: u32,
    pixel_stride: u32,
    image_width: u32,
    image_height: u32,
) -> Result<(), YuvError> {
    if pixel_stride == 0 {
        return Err(YuvError::ZeroPixelStride);
    }
    let chroma_width = image_width.div_ceil(2) as usize;
    let chroma_height = image_height.div_ceil(2) as usize;
    check_overflow_v2(stride as usize, chroma_height)?;
    check_overflow_v2(pixel_stride as usize, chroma_width)?;
    let row_extent = pixel_stride as usize * (chroma_width - 1) + 1;
    if (stride as usize) < row_extent {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: row_extent,
            received: stride as usize,
        }));
    }
    let expected = stride as usize * (chroma_height - 1) + row_extent;
    if data.len() < expected {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}
