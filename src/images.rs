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
use crate::yuv_error::{check_base_size, check_chroma_channel, check_y8_channel};
use crate::YuvError;

#[derive(Debug, Clone)]
/// Non-mutable representation of planar YUV 4:2:0 camera frame.
///
/// Layout follows `YUV_420_888`: chroma planes may be fully planar
/// (`pixel_stride == 1`) or views into semi-planar memory (`pixel_stride == 2`).
pub struct YuvPlanarImage<'a> {
    pub y_plane: &'a [u8],
    /// Stride here always means bytes per row.
    pub y_stride: u32,
    pub u_plane: &'a [u8],
    /// Stride here always means bytes per row.
    pub u_stride: u32,
    /// Distance in bytes between two consecutive U samples in a row.
    pub u_pixel_stride: u32,
    pub v_plane: &'a [u8],
    /// Stride here always means bytes per row.
    pub v_stride: u32,
    /// Distance in bytes between two consecutive V samples in a row.
    pub v_pixel_stride: u32,
    pub width: u32,
    pub height: u32,
}

impl YuvPlanarImage<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_base_size(self.width, self.height)?;
        check_y8_channel(self.y_plane, self.y_stride, self.width, self.height)?;
        check_chroma_channel(
            self.u_plane,
            self.u_stride,
            self.u_pixel_stride,
            self.width,
            self.height,
        )?;
        check_chroma_channel(
            self.v_plane,
            self.v_stride,
            self.v_pixel_stride,
            self.width,
            self.height,
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Owned NV21 frame: full Y plane followed by interleaved V,U pairs.
pub struct Nv21Image {
    pub(crate) data: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Nv21Image {
    /// Size in bytes of NV21 frame, `width * height + width * height / 2`
    pub const fn frame_size(width: u32, height: u32) -> usize {
        let luma = width as usize * height as usize;
        luma + luma / 2
    }

    pub(crate) fn alloc(width: u32, height: u32) -> Self {
        Nv21Image {
            data: vec![0u8; Self::frame_size(width, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn y_plane(&self) -> &[u8] {
        &self.data[..self.width as usize * self.height as usize]
    }

    /// Interleaved chroma, V goes first
    pub fn vu_plane(&self) -> &[u8] {
        &self.data[self.width as usize * self.height as usize..]
    }
}
