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
#[cfg(feature = "geometry")]
use crate::yuv_error::MismatchedSize;
#[cfg(feature = "geometry")]
use crate::YuvError;
#[cfg(feature = "geometry")]
use fast_transpose::{rotate180_rgba, transpose_rgba, FlipMode, FlopMode, TransposeError};

/// Declares rotation mode, 90, 180, 270.
///
/// Degrees are clockwise, the same way camera sensor orientation is reported.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RotationMode {
    Rotate90,
    Rotate180,
    Rotate270,
}

impl RotationMode {
    /// Maps camera rotation degrees, `0` and anything unknown means no rotation.
    pub const fn from_degrees(degrees: u32) -> Option<RotationMode> {
        match degrees {
            90 => Some(RotationMode::Rotate90),
            180 => Some(RotationMode::Rotate180),
            270 => Some(RotationMode::Rotate270),
            _ => None,
        }
    }

    pub const fn degrees(&self) -> u32 {
        match self {
            RotationMode::Rotate90 => 90,
            RotationMode::Rotate180 => 180,
            RotationMode::Rotate270 => 270,
        }
    }

    /// True when width and height swap places
    pub const fn is_transposing(&self) -> bool {
        matches!(self, RotationMode::Rotate90 | RotationMode::Rotate270)
    }
}

#[cfg(feature = "geometry")]
#[inline]
pub(crate) fn map_ft_result(result: Result<(), TransposeError>) -> Result<(), YuvError> {
    match result {
        Ok(_) => Ok(()),
        Err(err) => match err {
            TransposeError::MismatchDimensions => Err(YuvError::ImageDimensionsNotMatch),
            TransposeError::InvalidArraySize => Err(YuvError::ImageDimensionsNotMatch),
        },
    }
}

#[cfg(feature = "geometry")]
#[inline]
fn check_argb_surface(
    arr: &[u32],
    stride: usize,
    width: usize,
    height: usize,
) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if stride < width {
        return Err(YuvError::ImageDimensionsNotMatch);
    }
    let expected = stride.checked_mul(height).ok_or(YuvError::PointerOverflow)?;
    if arr.len() != expected {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Rotates ARGB 8888 frame clockwise by [RotationMode] degrees.
///
/// # Arguments
///
/// * `src`: Source pixels
/// * `src_stride`: Source stride in pixels
/// * `dst`: Destination pixels, for 90 and 270 degrees it is `height` pixels wide and `width` pixels tall
/// * `dst_stride`: Destination stride in pixels
/// * `width`: Source width
/// * `height`: Source height
/// * `mode`: Refer to [RotationMode] for mode info
///
/// returns: Result<(), [YuvError]>
///
#[cfg(feature = "geometry")]
pub fn rotate_argb(
    src: &[u32],
    src_stride: usize,
    dst: &mut [u32],
    dst_stride: usize,
    width: usize,
    height: usize,
    mode: RotationMode,
) -> Result<(), YuvError> {
    check_argb_surface(src, src_stride, width, height)?;
    let (dst_width, dst_height) = if mode.is_transposing() {
        (height, width)
    } else {
        (width, height)
    };
    check_argb_surface(dst, dst_stride, dst_width, dst_height)?;

    // Channel order does not matter for rotation, pixels move as 4 byte units
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);

    let rs = match mode {
        RotationMode::Rotate90 => transpose_rgba(
            src_bytes,
            src_stride * 4,
            dst_bytes,
            dst_stride * 4,
            width,
            height,
            FlipMode::Flip,
            FlopMode::Flop,
        ),
        RotationMode::Rotate180 => rotate180_rgba(
            src_bytes,
            src_stride * 4,
            dst_bytes,
            dst_stride * 4,
            width,
            height,
        ),
        RotationMode::Rotate270 => transpose_rgba(
            src_bytes,
            src_stride * 4,
            dst_bytes,
            dst_stride * 4,
            width,
            height,
            FlipMode::NoFlip,
            FlopMode::NoFlop,
        ),
    };
    map_ft_result(rs)
}
