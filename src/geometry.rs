//! # 几何变换模块
//!
//! 转置、镜像和旋转。改变朝向的操作（转置、旋转）读写的下标映射
//! 不是恒等的，必须先克隆一份快照，从快照读、往当前图像写；镜像
//! 每对像素只碰一次，直接成对交换即可，不需要拷贝。

use crate::error::EditError;
use crate::raster::RasterImage;

/// 转置当前图像：新宽度等于旧高度，(row, col) 处取原图 (col, row)。
///
/// # Errors
///
/// 空图像无法转置（高度为 0 不能作为宽度），返回
/// [`EditError::InvalidDimension`]。
pub fn transpose(image: &mut RasterImage) -> Result<(), EditError> {
    let original = image.clone();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            image.set_pixel(row, col, original.pixel(col, row)?)?;
        }
    }
    Ok(())
}

/// 沿竖直中轴左右镜像，宽度不变。
pub fn reflect_horizontal(image: &mut RasterImage) -> Result<(), EditError> {
    for h in 0..image.width() / 2 {
        let k = image.width() - 1 - h;
        for row in 0..image.height() {
            image.swap_pixels(row, h, row, k)?;
        }
    }
    Ok(())
}

/// 沿水平中轴上下镜像，高度不变。
pub fn reflect_vertical(image: &mut RasterImage) -> Result<(), EditError> {
    for w in 0..image.height() / 2 {
        let k = image.height() - 1 - w;
        for col in 0..image.width() {
            image.swap_pixels(w, col, k, col)?;
        }
    }
    Ok(())
}

/// 顺时针旋转 90 度，`(row, col) <- 原图 (原高度-1-col, row)`。
///
/// # Errors
///
/// 空图像返回 [`EditError::InvalidDimension`]。
pub fn rotate_right(image: &mut RasterImage) -> Result<(), EditError> {
    let original = image.clone();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            let source = original.pixel(original.height() - col - 1, row)?;
            image.set_pixel(row, col, source)?;
        }
    }
    Ok(())
}

/// 逆时针旋转 90 度，`(row, col) <- 原图 (col, 原宽度-1-row)`。
///
/// # Errors
///
/// 空图像返回 [`EditError::InvalidDimension`]。
pub fn rotate_left(image: &mut RasterImage) -> Result<(), EditError> {
    let original = image.clone();
    image.set_width(original.height())?;

    for row in 0..image.height() {
        for col in 0..image.width() {
            let source = original.pixel(col, original.width() - 1 - row)?;
            image.set_pixel(row, col, source)?;
        }
    }
    Ok(())
}
