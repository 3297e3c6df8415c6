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
use crate::images::{Nv21Image, YuvPlanarImage};
use crate::YuvError;

/// Repacks YUV 420 camera frame into NV21.
///
/// Luma rows are copied without their padding, then chroma rows of V and U are
/// interleaved as `V, U` pairs. Each chroma plane is walked with its own row
/// stride and pixel stride, last row of a plane may be shorter than its stride.
///
/// Output always holds `width * height + width * height / 2` bytes.
///
/// # Arguments
///
/// * `image`: Source YUV 420 frame, width and height must be even
///
/// returns: Result<[Nv21Image], [YuvError]>
///
pub fn yuv420_to_nv21(image: &YuvPlanarImage) -> Result<Nv21Image, YuvError> {
    image.check_constraints()?;
    if image.width % 2 != 0 || image.height % 2 != 0 {
        return Err(YuvError::OddImageDimensions(image.width, image.height));
    }

    log::trace!(
        "yuv420 to nv21: {}x{}, strides y={} u={}/{} v={}/{}",
        image.width,
        image.height,
        image.y_stride,
        image.u_stride,
        image.u_pixel_stride,
        image.v_stride,
        image.v_pixel_stride
    );

    let width = image.width as usize;
    let height = image.height as usize;
    let chroma_height = height / 2;
    let u_pixel_stride = image.u_pixel_stride as usize;
    let v_pixel_stride = image.v_pixel_stride as usize;

    let mut nv21 = Nv21Image::alloc(image.width, image.height);
    let (y_dst, vu_dst) = nv21.data.split_at_mut(width * height);

    for (dst, src) in y_dst
        .chunks_exact_mut(width)
        .zip(image.y_plane.chunks(image.y_stride as usize))
    {
        dst.copy_from_slice(&src[..width]);
    }

    // `chunks` yields a shorter last row when plane ends right after its last sample
    let v_rows = image.v_plane.chunks(image.v_stride as usize);
    let u_rows = image.u_plane.chunks(image.u_stride as usize);

    for ((dst, v_row), u_row) in vu_dst
        .chunks_exact_mut(width)
        .zip(v_rows)
        .zip(u_rows)
        .take(chroma_height)
    {
        for (cx, vu) in dst.chunks_exact_mut(2).enumerate() {
            vu[0] = v_row[cx * v_pixel_stride];
            vu[1] = u_row[cx * u_pixel_stride];
        }
    }

    Ok(nv21)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_nv21_size() {
        for (width, height) in [(2u32, 2u32), (6, 4), (640, 480), (34, 18)] {
            let y_plane = vec![0u8; width as usize * height as usize];
            let chroma = vec![0u8; (width as usize / 2) * (height as usize / 2)];
            let image = YuvPlanarImage {
                y_plane: &y_plane,
                y_stride: width,
                u_plane: &chroma,
                u_stride: width / 2,
                u_pixel_stride: 1,
                v_plane: &chroma,
                v_stride: width / 2,
                v_pixel_stride: 1,
                width,
                height,
            };
            let nv21 = yuv420_to_nv21(&image).unwrap();
            assert_eq!(
                nv21.as_bytes().len(),
                width as usize * height as usize + width as usize * height as usize / 2
            );
        }
    }

    #[test]
    fn test_luma_padding_is_skipped() {
        let width = 6usize;
        let height = 4usize;
        let y_stride = 10usize;
        const PADDING: u8 = 0xAB;

        let mut y_plane = vec![PADDING; y_stride * height];
        for (row_index, row) in y_plane.chunks_exact_mut(y_stride).enumerate() {
            for (x, dst) in row[..width].iter_mut().enumerate() {
                *dst = (row_index * width + x) as u8;
            }
        }
        let chroma = vec![1u8; 3 * 2];
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: y_stride as u32,
            u_plane: &chroma,
            u_stride: 3,
            u_pixel_stride: 1,
            v_plane: &chroma,
            v_stride: 3,
            v_pixel_stride: 1,
            width: width as u32,
            height: height as u32,
        };

        let nv21 = yuv420_to_nv21(&image).unwrap();
        let expected: Vec<u8> = (0..(width * height) as u8).collect();
        assert_eq!(nv21.y_plane(), expected.as_slice());
        assert!(!nv21.y_plane().contains(&PADDING));
    }

    #[test]
    fn test_planar_chroma_interleaving() {
        let width = 4u32;
        let height = 4u32;
        let y_plane = vec![0u8; 16];
        // Chroma rows padded to stride 3, U and V distinct
        let u_plane = [10u8, 11, 0xEE, 12, 13, 0xEE];
        let v_plane = [20u8, 21, 0xEE, 22, 23];
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: width,
            u_plane: &u_plane,
            u_stride: 3,
            u_pixel_stride: 1,
            v_plane: &v_plane,
            v_stride: 3,
            v_pixel_stride: 1,
            width,
            height,
        };

        let nv21 = yuv420_to_nv21(&image).unwrap();
        assert_eq!(nv21.vu_plane(), &[20, 10, 21, 11, 22, 12, 23, 13]);
    }

    #[test]
    fn test_semi_planar_source_with_truncated_tail() {
        // Camera style NV21 backed planes: V plane starts at vu[0], U plane at vu[1],
        // both with pixel stride 2, each missing the very last byte of the buffer.
        let width = 8usize;
        let height = 4usize;
        let row_stride = 12usize;
        let chroma_height = height / 2;

        let mut rng = rand::rng();
        let y_plane: Vec<u8> = (0..row_stride * (height - 1) + width)
            .map(|_| rng.random())
            .collect();
        let vu: Vec<u8> = (0..row_stride * chroma_height).map(|_| rng.random()).collect();
        let v_plane = &vu[..row_stride * (chroma_height - 1) + width - 1];
        let u_plane = &vu[1..row_stride * (chroma_height - 1) + width];

        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: row_stride as u32,
            u_plane,
            u_stride: row_stride as u32,
            u_pixel_stride: 2,
            v_plane,
            v_stride: row_stride as u32,
            v_pixel_stride: 2,
            width: width as u32,
            height: height as u32,
        };

        let nv21 = yuv420_to_nv21(&image).unwrap();

        for (row, dst) in nv21.y_plane().chunks_exact(width).enumerate() {
            assert_eq!(dst, &y_plane[row * row_stride..row * row_stride + width]);
        }
        for (row, dst) in nv21.vu_plane().chunks_exact(width).enumerate() {
            assert_eq!(dst, &vu[row * row_stride..row * row_stride + width]);
        }
    }

    #[test]
    fn test_odd_dimensions_rejected() {
        let y_plane = vec![0u8; 15];
        let chroma = vec![0u8; 6];
        let image = YuvPlanarImage {
            y_plane: &y_plane,
            y_stride: 5,
            u_plane: &chroma,
            u_stride: 3,
            u_pixel_stride: 1,
            v_plane: &chroma,
            v_stride: 3,
            v_pixel_stride: 1,
            width: 5,
            height: 3,
        };
        assert_eq!(
            yuv420_to_nv21(&image),
            Err(YuvError::OddImageDimensions(5, 3))
        );
    }
}
