#![forbid(unsafe_code)]
mod argb_tensor;
mod crop;
mod geometry;
mod images;
mod model_options;
mod yuv_error;
mod yuv_support;
mod yuv_to_argb;
mod yuv_to_nv21;

pub use yuv_error::{MismatchedSize, YuvError};

pub use images::{Nv21Image, YuvPlanarImage};

pub use yuv_to_argb::convert_yuv420_to_argb8888;
pub use yuv_to_argb::yuv420_to_argb8888;
pub use yuv_to_argb::yuv_to_argb_pixel;

pub use yuv_to_nv21::yuv420_to_nv21;

pub use crop::compute_crop_rect_from_aspect_ratio;
pub use crop::is_aspect_ratio_valid;
pub use crop::is_aspect_ratio_valid_for;
pub use crop::should_crop;
pub use crop::{CropRect, Rational, Size};

pub use geometry::RotationMode;
#[cfg(feature = "geometry")]
pub use geometry::rotate_argb;

pub use argb_tensor::{argb_to_rgb_tensor, rgb_tensor_to_argb, TensorElement, TensorShape};

pub use model_options::{InferenceDevice, ModelOptions, ModelOptionsError};
