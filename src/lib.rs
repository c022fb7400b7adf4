//! # img_edit 库
//!
//! 本库包含图像编辑器的核心逻辑：栅格图像抽象、几何与滤镜变换、
//! 数字位隐写以及编辑历史。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod handler;
pub mod history;
pub mod raster;
pub mod steganography;
