//! # 错误类型模块
//!
//! 定义核心图像操作可能产生的错误。所有错误都是同步检测到的前置条件
//! 违规，不会被重试。

use thiserror::Error;

/// 核心图像操作的错误类型。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// 新的宽度或高度不是正整数，或不能整除像素总数。
    #[error("Dimension {value} is invalid: it must be positive and evenly divide the {length} pixels.")]
    InvalidDimension { value: usize, length: usize },

    /// 二维坐标落在当前图像范围之外。
    #[error("Position ({row}, {col}) is out of bounds for a {width}x{height} image.")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// 参数不满足操作的前置条件。
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
