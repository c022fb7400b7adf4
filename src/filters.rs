//! # 滤镜模块
//!
//! 逐像素的颜色滤镜（反色、单色化、晕影）、块状马赛克，以及画条带
//! 的操作。所有操作都直接改写传入的图像。

use crate::error::EditError;
use crate::raster::{Pixel, RasterImage};

/// 栏杆使用的红色。
const BAR_COLOR: Pixel = Pixel::new(255, 0, 0);

/// 横向栏杆覆盖的行数。
const HBAR_ROWS: usize = 3;

/// 纵向栏杆覆盖的列数。
const VBAR_COLS: usize = 4;

/// 每隔多少列追加一根内部栏杆。
const BAR_SPACING: usize = 50;

/// 反色：每个通道 c 替换为 255 - c。
pub fn invert(image: &mut RasterImage) {
    for pos in 0..image.len() {
        let px = image.flat_pixel(pos);
        image.set_flat_pixel(pos, Pixel::new(255 - px.r, 255 - px.g, 255 - px.b));
    }
}

/// 把图像转成单色。
///
/// 亮度定义为 `0.3*r + 0.6*g + 0.1*b`，小数部分直接截断。
/// `sepia` 为 false 时三个通道都取亮度值；为 true 时红色保持不变，
/// 绿色取 0.6 倍亮度，蓝色取 0.4 倍亮度。
pub fn monochromify(image: &mut RasterImage, sepia: bool) {
    for pos in 0..image.len() {
        let px = image.flat_pixel(pos);
        let brightness = 0.3 * f64::from(px.r) + 0.6 * f64::from(px.g) + 0.1 * f64::from(px.b);
        let replaced = if sepia {
            Pixel::new(px.r, (0.6 * brightness) as u8, (0.4 * brightness) as u8)
        } else {
            let level = brightness as u8;
            Pixel::new(level, level, level)
        };
        image.set_flat_pixel(pos, replaced);
    }
}

/// 晕影：按 `1 - (d/hfD)^2` 压暗每个像素，d 是像素到图像中心的
/// 距离，hfD 是中心到任一角的距离（半对角线）。
///
/// 角落处的系数因浮点舍入可能略小于 0，不做截断，通道乘出的负值
/// 在转回 u8 时落到 0。
pub fn vignette(image: &mut RasterImage) {
    let width = image.width() as f64;
    let height = image.height() as f64;
    let half_diagonal = (width * width + height * height).sqrt() / 2.0;
    let center_col = width / 2.0;
    let center_row = height / 2.0;

    for pos in 0..image.len() {
        let row = (pos / image.width()) as f64;
        let col = (pos % image.width()) as f64;
        let dist = ((center_col - col).powi(2) + (center_row - row).powi(2)).sqrt();
        let factor = 1.0 - (dist / half_diagonal).powi(2);

        let px = image.flat_pixel(pos);
        image.set_flat_pixel(
            pos,
            Pixel::new(
                scale_channel(px.r, factor),
                scale_channel(px.g, factor),
                scale_channel(px.b, factor),
            ),
        );
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (f64::from(channel) * factor).round() as u8
}

/// 马赛克：把图像按 `step` 分成方块网格，边缘放不下整块时裁剪到
/// 图像边界，块内所有像素都换成该块逐通道的四舍五入均值。
///
/// # Errors
///
/// `step` 为 0 时返回 [`EditError::InvalidArgument`]。
pub fn pixellate(image: &mut RasterImage, step: usize) -> Result<(), EditError> {
    if step == 0 {
        return Err(EditError::InvalidArgument {
            reason: "the pixellate step must be greater than 0".to_string(),
        });
    }

    let mut row = 0;
    while row < image.height() {
        let block_rows = step.min(image.height() - row);
        let mut col = 0;
        while col < image.width() {
            let block_cols = step.min(image.width() - col);
            average_block(image, row, col, block_rows, block_cols)?;
            col += step;
        }
        row += step;
    }
    Ok(())
}

/// 求 (row, col) 起、block_rows 行 block_cols 列块内的通道均值，
/// 并写回块内每个像素。
fn average_block(
    image: &mut RasterImage,
    row: usize,
    col: usize,
    block_rows: usize,
    block_cols: usize,
) -> Result<(), EditError> {
    let mut sum_red: u64 = 0;
    let mut sum_green: u64 = 0;
    let mut sum_blue: u64 = 0;
    for r in row..row + block_rows {
        for c in col..col + block_cols {
            let px = image.pixel(r, c)?;
            sum_red += u64::from(px.r);
            sum_green += u64::from(px.g);
            sum_blue += u64::from(px.b);
        }
    }

    let count = (block_rows * block_cols) as f64;
    let average = Pixel::new(
        (sum_red as f64 / count).round() as u8,
        (sum_green as f64 / count).round() as u8,
        (sum_blue as f64 / count).round() as u8,
    );

    for r in row..row + block_rows {
        for c in col..col + block_cols {
            image.set_pixel(r, c, average)?;
        }
    }
    Ok(())
}

/// 在 `row` 行画一条横贯全宽、3 像素高的条带，覆盖 row..row+3。
///
/// # Errors
///
/// `row + 2` 不小于图像高度时返回 [`EditError::OutOfBounds`]，
/// 图像保持不变。
pub fn draw_horizontal_bar(
    image: &mut RasterImage,
    row: usize,
    color: Pixel,
) -> Result<(), EditError> {
    let end = row.saturating_add(HBAR_ROWS - 1);
    if end >= image.height() {
        return Err(EditError::OutOfBounds {
            row: end,
            col: 0,
            width: image.width(),
            height: image.height(),
        });
    }

    for col in 0..image.width() {
        for r in row..=end {
            image.set_pixel(r, col, color)?;
        }
    }
    Ok(())
}

/// 在 `col` 列画一条贯穿全高、4 像素宽的条带，覆盖 col..col+4。
///
/// # Errors
///
/// `col + 3` 不小于图像宽度时返回 [`EditError::OutOfBounds`]，
/// 图像保持不变。
pub fn draw_vertical_bar(
    image: &mut RasterImage,
    col: usize,
    color: Pixel,
) -> Result<(), EditError> {
    let end = col.saturating_add(VBAR_COLS - 1);
    if end >= image.width() {
        return Err(EditError::OutOfBounds {
            row: 0,
            col: end,
            width: image.width(),
            height: image.height(),
        });
    }

    for row in 0..image.height() {
        for c in col..=end {
            image.set_pixel(row, c, color)?;
        }
    }
    Ok(())
}

/// 给图像加上红色栏杆：
///
/// * 顶部和底部各一条 3 像素高的横杆；
/// * 左右边缘各一条 4 像素宽的竖杆；
/// * 内部再均匀插入 n 条竖杆，n = (宽度 - 8) / 50，第 k 条位于
///   `round(宽度 / (n+1) * (k+1))` 列。
///
/// # Errors
///
/// 图像太小放不下边框栏杆时返回 [`EditError::OutOfBounds`]。
pub fn jail(image: &mut RasterImage) -> Result<(), EditError> {
    draw_horizontal_bar(image, 0, BAR_COLOR)?;
    draw_horizontal_bar(image, image.height() - HBAR_ROWS, BAR_COLOR)?;
    draw_vertical_bar(image, 0, BAR_COLOR)?;
    draw_vertical_bar(image, image.width() - VBAR_COLS, BAR_COLOR)?;

    let n = image.width().saturating_sub(2 * VBAR_COLS) / BAR_SPACING;
    for k in 0..n {
        let col = (image.width() as f64 * (k + 1) as f64 / (n + 1) as f64).round() as usize;
        draw_vertical_bar(image, col, BAR_COLOR)?;
    }
    Ok(())
}
