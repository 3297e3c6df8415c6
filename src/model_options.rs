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
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Hardware the inference runtime is asked to run the model on
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum InferenceDevice {
    #[default]
    Cpu = 0,
    Nnapi = 1,
    Gpu = 2,
}

impl InferenceDevice {
    pub const fn name(&self) -> &'static str {
        match self {
            InferenceDevice::Cpu => "cpu",
            InferenceDevice::Nnapi => "nnapi",
            InferenceDevice::Gpu => "gpu",
        }
    }
}

impl Display for InferenceDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOptionsError {
    UnknownDevice(String),
    ZeroThreads,
}

impl Display for ModelOptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelOptionsError::UnknownDevice(name) => f.write_fmt(format_args!(
                "Unknown inference device '{}', expected one of cpu, nnapi, gpu",
                name
            )),
            ModelOptionsError::ZeroThreads => f.write_str("Model must be run with at least one thread"),
        }
    }
}

impl Error for ModelOptionsError {}

impl FromStr for InferenceDevice {
    type Err = ModelOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(InferenceDevice::Cpu),
            "nnapi" => Ok(InferenceDevice::Nnapi),
            "gpu" => Ok(InferenceDevice::Gpu),
            _ => Err(ModelOptionsError::UnknownDevice(s.to_string())),
        }
    }
}

/// Options an inference interpreter is created with.
///
/// Defaults to CPU with a single thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ModelOptions {
    pub device: InferenceDevice,
    pub threads: usize,
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            device: InferenceDevice::Cpu,
            threads: 1,
        }
    }
}

impl ModelOptions {
    pub fn with_device(self, device: InferenceDevice) -> Self {
        ModelOptions { device, ..self }
    }

    pub fn with_threads(self, threads: usize) -> Self {
        ModelOptions { threads, ..self }
    }

    pub fn validate(&self) -> Result<(), ModelOptionsError> {
        if self.threads == 0 {
            return Err(ModelOptionsError::ZeroThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ModelOptions::default();
        assert_eq!(options.device, InferenceDevice::Cpu);
        assert_eq!(options.threads, 1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let options = ModelOptions::default()
            .with_device(InferenceDevice::Gpu)
            .with_threads(4);
        assert_eq!(
            options,
            ModelOptions {
                device: InferenceDevice::Gpu,
                threads: 4,
            }
        );
        assert_eq!(
            ModelOptions::default().with_threads(0).validate(),
            Err(ModelOptionsError::ZeroThreads)
        );
    }

    #[test]
    fn test_device_parsing() {
        assert_eq!("NNAPI".parse::<InferenceDevice>(), Ok(InferenceDevice::Nnapi));
        assert_eq!(" gpu ".parse::<InferenceDevice>(), Ok(InferenceDevice::Gpu));
        assert_eq!(
            "tpu".parse::<InferenceDevice>(),
            Err(ModelOptionsError::UnknownDevice("tpu".to_string()))
        );
        for device in [InferenceDevice::Cpu, InferenceDevice::Nnapi, InferenceDevice::Gpu] {
            assert_eq!(device.to_string().parse::<InferenceDevice>(), Ok(device));
        }
    }
}
