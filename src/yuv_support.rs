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
/// Integer YUV to RGB transform, coefficients scaled by 1024.
///
/// This is the BT.601 limited range matrix rounded for devices without hardware
/// floating point, roughly
/// `R = 1.164 * Y + 1.596 * Cr`, `G = 1.164 * Y - 0.813 * Cr - 0.391 * Cb`,
/// `B = 1.164 * Y + 2.018 * Cb`.
/// Coefficients are kept exactly, consumers rely on bit exact output.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub(crate) struct CbCrInverseTransform<T> {
    pub(crate) y_coef: T,
    pub(crate) cr_coef: T,
    pub(crate) cb_coef: T,
    pub(crate) g_coeff_1: T,
    pub(crate) g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub(crate) const fn new(
        y_coef: T,
        cr_coef: T,
        cb_coef: T,
        g_coeff_1: T,
        g_coeff_2: T,
    ) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

pub(crate) const BT601_FIXED_TRANSFORM: CbCrInverseTransform<i32> =
    CbCrInverseTransform::new(1192, 1634, 2066, 833, 400);

/// Limited range biases for 8 bit YUV
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub(crate) struct YuvChromaRange {
    pub(crate) bias_y: i32,
    pub(crate) bias_uv: i32,
}

pub(crate) const LIMITED_RANGE_8: YuvChromaRange = YuvChromaRange {
    bias_y: 16,
    bias_uv: 128,
};

/// 2^18 - 1, channels are clamped to this before being narrowed to 8 bits.
pub(crate) const MAX_CHANNEL_VALUE: i32 = 262143;

/// Channel offsets inside of packed `0xAARRGGBB` pixel
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ArgbChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ArgbChannel {
    #[inline(always)]
    pub(crate) const fn shift(&self) -> u32 {
        match self {
            ArgbChannel::Red => 16,
            ArgbChannel::Green => 8,
            ArgbChannel::Blue => 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn extract(&self, pixel: u32) -> u8 {
        ((pixel >> self.shift()) & 0xff) as u8
    }
}

pub(crate) const OPAQUE_ALPHA: u32 = 0xff000000;

#[inline(always)]
pub(crate) const fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE_ALPHA
        | ((r as u32) << ArgbChannel::Red.shift())
        | ((g as u32) << ArgbChannel::Green.shift())
        | ((b as u32) << ArgbChannel::Blue.shift())
}
