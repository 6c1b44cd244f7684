pub mod blobio;
pub mod bytefmt;
pub mod error;
pub mod framebench;
pub mod payload;
pub mod utils;

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Target architecture is not 64-bit - This software is only supported on 64-bit platforms");
