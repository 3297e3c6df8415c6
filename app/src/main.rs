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
mod support;

use camframe::{
    argb_to_rgb_tensor, compute_crop_rect_from_aspect_ratio, rotate_argb, yuv420_to_argb8888,
    yuv420_to_nv21, Rational, RotationMode, Size, TensorShape,
};
use image::{ImageBuffer, Rgba};
use std::time::Instant;
use support::{read_i420_frame, synthetic_frame, CameraFrame};

const PADDING: usize = 64;

fn load_frame() -> CameraFrame {
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 4 {
        let width: usize = args[2].parse().expect("width must be a number");
        let height: usize = args[3].parse().expect("height must be a number");
        read_i420_frame(&args[1], width, height, PADDING).expect("Failed to read I420 frame")
    } else {
        synthetic_frame(1280, 720, PADDING)
    }
}

fn main() {
    env_logger::init();

    let frame = load_frame();
    let image = frame.as_image();

    let mut argb = vec![0u32; frame.width * frame.height];

    let start_time = Instant::now();
    yuv420_to_argb8888(&image, &mut argb).unwrap();
    println!("yuv420_to_argb8888 time: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    let nv21 = yuv420_to_nv21(&image).unwrap();
    println!(
        "yuv420_to_nv21 time: {:?}, {} bytes",
        start_time.elapsed(),
        nv21.as_bytes().len()
    );
    std::fs::write("frame.nv21", nv21.as_bytes()).unwrap();

    let source = Size::new(frame.width as u32, frame.height as u32);
    let crop = compute_crop_rect_from_aspect_ratio(source, Rational::new(3, 4).rotate(90));
    log::info!("Crop rect for 3:4 rotated by 90 degrees: {:?}", crop);

    let mut rotated = vec![0u32; frame.width * frame.height];
    rotate_argb(
        &argb,
        frame.width,
        &mut rotated,
        frame.height,
        frame.width,
        frame.height,
        RotationMode::Rotate90,
    )
    .unwrap();

    let shape = TensorShape::new(1, frame.height, frame.width, 3);
    let mut tensor = vec![0f32; frame.width * frame.height * 3];
    argb_to_rgb_tensor(&argb, shape, &mut tensor).unwrap();
    let mean = tensor.iter().map(|&v| v as f64).sum::<f64>() / tensor.len() as f64;
    println!("Mean normalized intensity: {:.4}", mean);

    let rgba: Vec<u8> = argb
        .iter()
        .flat_map(|&px| {
            [
                (px >> 16) as u8,
                (px >> 8) as u8,
                px as u8,
                (px >> 24) as u8,
            ]
        })
        .collect();
    let png: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(frame.width as u32, frame.height as u32, rgba).unwrap();
    png.save("frame.png").unwrap();
}
