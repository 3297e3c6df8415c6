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
use crate::geometry::RotationMode;

/// Aspect ratio as reduced fraction.
///
/// Denominator is never negative, `0/0` is NaN and `n/0` is infinite.
/// A component that stays `i32::MIN` after reduction makes the ratio NaN.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i32,
    denominator: i32,
}

#[inline]
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Rational {
    pub const NAN: Rational = Rational {
        numerator: 0,
        denominator: 0,
    };

    pub fn new(numerator: i32, denominator: i32) -> Rational {
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        if divisor == 0 {
            return Rational::NAN;
        }
        let mut numerator = (numerator as i64 / divisor as i64) as i32;
        let mut denominator = (denominator as i64 / divisor as i64) as i32;
        // `i32::MIN` has no positive counterpart, sign flips and inversion would break
        if numerator == i32::MIN || denominator == i32::MIN {
            return Rational::NAN;
        }
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Rational {
            numerator,
            denominator,
        }
    }

    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    pub const fn is_nan(&self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    pub const fn is_infinite(&self) -> bool {
        self.numerator != 0 && self.denominator == 0
    }

    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// Swaps numerator and denominator
    pub fn inverse(self) -> Rational {
        Rational::new(self.denominator, self.numerator)
    }

    /// Rotates ratio by `rotation_degrees`, 90 and 270 invert it, anything else keeps it.
    pub fn rotate(self, rotation_degrees: u32) -> Rational {
        match RotationMode::from_degrees(rotation_degrees) {
            Some(mode) => self.rotate_by(mode),
            None => self,
        }
    }

    pub fn rotate_by(self, mode: RotationMode) -> Rational {
        match mode {
            RotationMode::Rotate90 | RotationMode::Rotate270 => self.inverse(),
            RotationMode::Rotate180 => self,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Size {
        Size { width, height }
    }

    /// Own aspect ratio of the size, reduced, NaN when a side does not fit `i32`.
    pub fn aspect_ratio(&self) -> Rational {
        match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(width), Ok(height)) => Rational::new(width, height),
            _ => Rational::NAN,
        }
    }
}

/// Rectangle in pixels, `right` and `bottom` are exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// True if the given aspect ratio is meaningful.
pub fn is_aspect_ratio_valid(aspect_ratio: Rational) -> bool {
    !aspect_ratio.is_nan() && !aspect_ratio.is_infinite() && aspect_ratio.to_f32() > 0.
}

#[inline]
fn output_height(source: Size, aspect_ratio: Rational) -> i64 {
    ((source.width as f32 / aspect_ratio.numerator() as f32) * aspect_ratio.denominator() as f32)
        .round() as i64
}

#[inline]
fn output_width(source: Size, aspect_ratio: Rational) -> i64 {
    ((source.height as f32 / aspect_ratio.denominator() as f32) * aspect_ratio.numerator() as f32)
        .round() as i64
}

fn crop_aspect_ratio_has_effect(source: Size, aspect_ratio: Rational) -> bool {
    source.height as i64 != output_height(source, aspect_ratio)
        || source.width as i64 != output_width(source, aspect_ratio)
}

/// True if the given aspect ratio is meaningful and has effect on the given size.
pub fn is_aspect_ratio_valid_for(source: Size, aspect_ratio: Rational) -> bool {
    source.width != 0
        && source.height != 0
        && is_aspect_ratio_valid(aspect_ratio)
        && crop_aspect_ratio_has_effect(source, aspect_ratio)
}

/// Computes crop rect with the given aspect ratio centered on the source.
///
/// When the ratio is wider than the source, full width is kept and height is
/// cut, otherwise full height is kept and width is cut.
///
/// # Arguments
///
/// * `source`: Source frame size
/// * `aspect_ratio`: Target width to height ratio
///
/// returns: `None` when the ratio is not positive, NaN, infinite or would not change the source
///
pub fn compute_crop_rect_from_aspect_ratio(
    source: Size,
    aspect_ratio: Rational,
) -> Option<CropRect> {
    if !is_aspect_ratio_valid(aspect_ratio) || source.width == 0 || source.height == 0 {
        log::warn!(
            "Invalid view ratio {}/{} for {}x{}",
            aspect_ratio.numerator(),
            aspect_ratio.denominator(),
            source.width,
            source.height
        );
        return None;
    }
    if !crop_aspect_ratio_has_effect(source, aspect_ratio) {
        return None;
    }

    let source_ratio = source.width as f32 / source.height as f32;

    if aspect_ratio.to_f32() > source_ratio {
        let height = output_height(source, aspect_ratio).clamp(0, source.height as i64) as u32;
        let top = (source.height - height) / 2;
        Some(CropRect {
            left: 0,
            top,
            right: source.width,
            bottom: top + height,
        })
    } else {
        let width = output_width(source, aspect_ratio).clamp(0, source.width as i64) as u32;
        let left = (source.width - width) / 2;
        Some(CropRect {
            left,
            top: 0,
            right: left + width,
            bottom: source.height,
        })
    }
}

/// True if the frame has to be cropped to match its crop rect.
pub fn should_crop(source: Size, crop_rect: CropRect) -> bool {
    crop_rect.size() != source
}
