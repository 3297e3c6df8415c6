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
use crate::images::YuvPlanarImage;
use crate::yuv_error::check_argb_destination;
use crate::yuv_support::{
    BT601_FIXED_TRANSFORM, LIMITED_RANGE_8, MAX_CHANNEL_VALUE, OPAQUE_ALPHA,
};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Converts single YUV triple to packed `0xAARRGGBB` pixel.
///
/// Integer only BT.601 limited range transform. Channels are computed
/// with 10 bits of fractional precision, clamped to 18 bits and then narrowed
/// to 8 bits while being moved to their place in the pixel.
///
/// Alpha is always opaque.
#[inline(always)]
pub fn yuv_to_argb_pixel(y: u8, u: u8, v: u8) -> u32 {
    let transform = BT601_FIXED_TRANSFORM;
    let y = (y as i32 - LIMITED_RANGE_8.bias_y).max(0);
    let u = u as i32 - LIMITED_RANGE_8.bias_uv;
    let v = v as i32 - LIMITED_RANGE_8.bias_uv;

    let y_value = transform.y_coef * y;
    let r = (y_value + transform.cr_coef * v).clamp(0, MAX_CHANNEL_VALUE);
    let g = (y_value - transform.g_coeff_1 * v - transform.g_coeff_2 * u)
        .clamp(0, MAX_CHANNEL_VALUE);
    let b = (y_value + transform.cb_coef * u).clamp(0, MAX_CHANNEL_VALUE);

    OPAQUE_ALPHA
        | ((r << 6) as u32 & 0xff0000)
        | ((g >> 2) as u32 & 0xff00)
        | ((b >> 10) as u32 & 0xff)
}

#[inline(always)]
fn convert_row(
    y_row: &[u8],
    u_row: &[u8],
    v_row: &[u8],
    u_pixel_stride: usize,
    v_pixel_stride: usize,
    argb: &mut [u32],
) {
    for (x, (dst, &y_src)) in argb.iter_mut().zip(y_row.iter()).enumerate() {
        let cx = x >> 1;
        *dst = yuv_to_argb_pixel(y_src, u_row[cx * u_pixel_stride], v_row[cx * v_pixel_stride]);
    }
}

/// Convert YUV 420 camera frame to packed ARGB 8888 pixels.
///
/// Every 2x2 block of luma samples shares one chroma pair. Chroma samples are
/// addressed through row stride and pixel stride of each plane, so planar and
/// semi-planar (interleaved) chroma are both accepted.
///
/// # Arguments
///
/// * `image`: Source YUV 420 frame, see [YuvPlanarImage]
/// * `argb`: Destination, must be exactly `width * height` pixels, rows are not padded
///
/// returns: Result<(), [YuvError]>
///
pub fn yuv420_to_argb8888(image: &YuvPlanarImage, argb: &mut [u32]) -> Result<(), YuvError> {
    image.check_constraints()?;
    check_argb_destination(argb, image.width, image.height)?;

    log::trace!(
        "yuv420 to argb8888: {}x{}, strides y={} u={}/{} v={}/{}",
        image.width,
        image.height,
        image.y_stride,
        image.u_stride,
        image.u_pixel_stride,
        image.v_stride,
        image.v_pixel_stride
    );

    let width = image.width as usize;
    let y_stride = image.y_stride as usize;
    let u_stride = image.u_stride as usize;
    let v_stride = image.v_stride as usize;
    let u_pixel_stride = image.u_pixel_stride as usize;
    let v_pixel_stride = image.v_pixel_stride as usize;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = argb.par_chunks_exact_mut(width);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = argb.chunks_exact_mut(width);
    }

    iter.enumerate().for_each(|(y, argb)| {
        let y_offset = y_stride * y;
        let y_row = &image.y_plane[y_offset..y_offset + width];
        let u_row = &image.u_plane[u_stride * (y >> 1)..];
        let v_row = &image.v_plane[v_stride * (y >> 1)..];
        convert_row(y_row, u_row, v_row, u_pixel_stride, v_pixel_stride, argb);
    });

    Ok(())
}

/// Convert YUV 420 planes to ARGB 8888 where both chroma planes share strides.
///
/// This is the plain buffer form of [yuv420_to_argb8888], useful when planes
/// come straight from a camera API that reports one row stride and one pixel
/// stride for chroma.
///
/// # Arguments
///
/// * `y_plane`: Luma plane
/// * `u_plane`: Cb plane
/// * `v_plane`: Cr plane
/// * `width`: Image width
/// * `height`: Image height
/// * `y_row_stride`: Bytes per luma row
/// * `uv_row_stride`: Bytes per chroma row
/// * `uv_pixel_stride`: Bytes between two chroma samples in a row
/// * `argb`: Destination, exactly `width * height` pixels
///
/// returns: Result<(), [YuvError]>
///
#[allow(clippy::too_many_arguments)]
pub fn convert_yuv420_to_argb8888(
    y_plane: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    width: u32,
    height: u32,
    y_row_stride: u32,
    uv_row_stride: u32,
    uv_pixel_stride: u32,
    argb: &mut [u32],
) -> Result<(), YuvError> {
    let image = YuvPlanarImage {
        y_plane,
        y_stride: y_row_stride,
        u_plane,
        u_stride: uv_row_stride,
        u_pixel_stride: uv_pixel_stride,
        v_plane,
        v_stride: uv_row_stride,
        v_pixel_stride: uv_pixel_stride,
        width,
        height,
    };
    yuv420_to_argb8888(&image, argb)
}
