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
use camframe::{yuv420_to_argb8888, yuv420_to_nv21, YuvPlanarImage};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

struct Planes {
    y_plane: Vec<u8>,
    u_plane: Vec<u8>,
    v_plane: Vec<u8>,
    vu_plane: Vec<u8>,
}

fn make_planes(width: usize, height: usize) -> Planes {
    let mut rng = rand::rng();
    let chroma_size = (width / 2) * (height / 2);
    Planes {
        y_plane: (0..width * height).map(|_| rng.random()).collect(),
        u_plane: (0..chroma_size).map(|_| rng.random()).collect(),
        v_plane: (0..chroma_size).map(|_| rng.random()).collect(),
        vu_plane: (0..chroma_size * 2).map(|_| rng.random()).collect(),
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let planes = make_planes(width, height);

    let planar_image = YuvPlanarImage {
        y_plane: &planes.y_plane,
        y_stride: width as u32,
        u_plane: &planes.u_plane,
        u_stride: width as u32 / 2,
        u_pixel_stride: 1,
        v_plane: &planes.v_plane,
        v_stride: width as u32 / 2,
        v_pixel_stride: 1,
        width: width as u32,
        height: height as u32,
    };

    let semi_planar_image = YuvPlanarImage {
        y_plane: &planes.y_plane,
        y_stride: width as u32,
        u_plane: &planes.vu_plane[1..],
        u_stride: width as u32,
        u_pixel_stride: 2,
        v_plane: &planes.vu_plane[..planes.vu_plane.len() - 1],
        v_stride: width as u32,
        v_pixel_stride: 2,
        width: width as u32,
        height: height as u32,
    };

    c.bench_function("camframe: YUV420 Planar -> ARGB8888", |b| {
        let mut argb = vec![0u32; width * height];
        b.iter(|| {
            yuv420_to_argb8888(&planar_image, &mut argb).unwrap();
        })
    });

    c.bench_function("camframe: YUV420 Semi-Planar -> ARGB8888", |b| {
        let mut argb = vec![0u32; width * height];
        b.iter(|| {
            yuv420_to_argb8888(&semi_planar_image, &mut argb).unwrap();
        })
    });

    c.bench_function("camframe: YUV420 Planar -> NV21", |b| {
        b.iter(|| {
            yuv420_to_nv21(&planar_image).unwrap();
        })
    });

    c.bench_function("camframe: YUV420 Semi-Planar -> NV21", |b| {
        b.iter(|| {
            yuv420_to_nv21(&semi_planar_image).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
