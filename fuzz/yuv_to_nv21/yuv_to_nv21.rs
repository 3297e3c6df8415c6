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

#![no_main]

use camframe::{yuv420_to_nv21, YuvPlanarImage};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, bool, u8, u8, u8)| {
    fuzz_nv21(data.0, data.1, data.2, data.3, data.4, data.5, data.6, data.7);
});

#[allow(clippy::too_many_arguments)]
fn fuzz_nv21(
    i_width: u8,
    i_height: u8,
    y_padding: u8,
    uv_padding: u8,
    semi_planar: bool,
    y_value: u8,
    u_value: u8,
    v_value: u8,
) {
    if i_height < 2 || i_width < 2 {
        return;
    }
    let width = i_width as usize & !1;
    let height = i_height as usize & !1;
    let chroma_width = width / 2;
    let chroma_height = height / 2;
    let pixel_stride = if semi_planar { 2 } else { 1 };

    let y_stride = width + y_padding as usize;
    let uv_stride = chroma_width * pixel_stride + uv_padding as usize;

    let y_plane = vec![y_value; y_stride * (height - 1) + width];
    let uv_len = uv_stride * (chroma_height - 1) + pixel_stride * (chroma_width - 1) + 1;
    let u_plane = vec![u_value; uv_len];
    let v_plane = vec![v_value; uv_len];

    let planar_image = YuvPlanarImage {
        y_plane: &y_plane,
        y_stride: y_stride as u32,
        u_plane: &u_plane,
        u_stride: uv_stride as u32,
        u_pixel_stride: pixel_stride as u32,
        v_plane: &v_plane,
        v_stride: uv_stride as u32,
        v_pixel_stride: pixel_stride as u32,
        width: width as u32,
        height: height as u32,
    };

    let nv21 = yuv420_to_nv21(&planar_image).unwrap();

    assert_eq!(nv21.as_bytes().len(), width * height + width * height / 2);
    assert!(nv21.y_plane().iter().all(|&y| y == y_value));
    for vu in nv21.vu_plane().chunks_exact(2) {
        assert_eq!(vu, &[v_value, u_value]);
    }
}
