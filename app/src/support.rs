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
use camframe::YuvPlanarImage;
use rand::Rng;
use std::fs::File;
use std::io::{Error, Read};
use std::path::Path;

/// Camera like frame owning its planes, chroma is semi-planar with VU order
/// and every row carries `padding` bytes.
pub(crate) struct CameraFrame {
    pub(crate) y_plane: Vec<u8>,
    pub(crate) y_stride: usize,
    pub(crate) vu_plane: Vec<u8>,
    pub(crate) vu_stride: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl CameraFrame {
    pub(crate) fn as_image(&self) -> YuvPlanarImage<'_> {
        YuvPlanarImage {
            y_plane: &self.y_plane,
            y_stride: self.y_stride as u32,
            u_plane: &self.vu_plane[1..],
            u_stride: self.vu_stride as u32,
            u_pixel_stride: 2,
            v_plane: &self.vu_plane[..self.vu_plane.len() - 1],
            v_stride: self.vu_stride as u32,
            v_pixel_stride: 2,
            width: self.width as u32,
            height: self.height as u32,
        }
    }

    fn from_i420(y: &[u8], u: &[u8], v: &[u8], width: usize, height: usize, padding: usize) -> Self {
        let y_stride = width + padding;
        let vu_stride = width + padding;
        let mut y_plane = vec![0u8; y_stride * height];
        let mut vu_plane = vec![0u8; vu_stride * height / 2];
        for (dst, src) in y_plane.chunks_exact_mut(y_stride).zip(y.chunks_exact(width)) {
            dst[..width].copy_from_slice(src);
        }
        for ((dst, u_row), v_row) in vu_plane
            .chunks_exact_mut(vu_stride)
            .zip(u.chunks_exact(width / 2))
            .zip(v.chunks_exact(width / 2))
        {
            for ((vu, &u), &v) in dst[..width].chunks_exact_mut(2).zip(u_row).zip(v_row) {
                vu[0] = v;
                vu[1] = u;
            }
        }
        CameraFrame {
            y_plane,
            y_stride,
            vu_plane,
            vu_stride,
            width,
            height,
        }
    }
}

/// Reads raw 8 bit I420 file and lays it out as camera frame
pub(crate) fn read_i420_frame<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    padding: usize,
) -> Result<CameraFrame, Error> {
    let mut file = File::open(path)?;
    let chroma_size = (width / 2) * (height / 2);

    let mut y_buf = vec![0u8; width * height];
    let mut u_buf = vec![0u8; chroma_size];
    let mut v_buf = vec![0u8; chroma_size];

    file.read_exact(&mut y_buf)?;
    file.read_exact(&mut u_buf)?;
    file.read_exact(&mut v_buf)?;

    Ok(CameraFrame::from_i420(
        &y_buf, &u_buf, &v_buf, width, height, padding,
    ))
}

/// Luma gradient with noisy chroma
pub(crate) fn synthetic_frame(width: usize, height: usize, padding: usize) -> CameraFrame {
    let mut rng = rand::rng();
    let y: Vec<u8> = (0..width * height)
        .map(|i| ((i % width) * 255 / width.max(1)) as u8)
        .collect();
    let u: Vec<u8> = (0..width * height / 4).map(|_| rng.random()).collect();
    let v: Vec<u8> = (0..width * height / 4).map(|_| rng.random()).collect();
    CameraFrame::from_i420(&y, &u, &v, width, height, padding)
}
