//! # 命令处理逻辑模块
//!
//! 包含处理 `edit`、`hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责图像文件的解码与保存、把操作作用到编辑历史的当前
//! 快照上，以及向用户报告结果。

use crate::cli::{EditArgs, EditOp, HideArgs, RecoverArgs};
use crate::constants::{HEADER_PIXELS, MAX_MESSAGE_LEN};
use crate::error::EditError;
use crate::history::HistoryStore;
use crate::raster::{Pixel, RasterImage};
use crate::{filters, geometry, steganography};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Edit' 命令的执行逻辑。
///
/// 负责解码输入图像、在编辑历史的新快照上应用所选操作，
/// 最后把结果图像写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和操作选项的 `EditArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 所选操作的前置条件不满足（如图像太小放不下栏杆）。
/// * 无法写入到目标图像文件。
pub fn handle_edit(args: EditArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| prefixed_path(&args.image, "edited_"));
    ensure_writable(&dest, args.force)?;

    let raster = load_raster(&args.image)?;
    let mut history = HistoryStore::new(raster);

    apply_edit(history.edit(), &args).with_context(|| {
        format!(
            "Failed to apply the {} operation to the image.",
            args.op.name().red().bold()
        )
    })?;

    save_raster(history.current(), &dest)?;

    println!(
        "The {} edit has been applied and saved: {}",
        args.op.name(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、在编辑历史的新
/// 快照上写入消息，最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 文本超过长度上限，或图像没有足够的像素来隐藏文本。
/// * 文本包含无法放进单个像素的字符（编码超出 0..=255）。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        text.chars().count() <= MAX_MESSAGE_LEN,
        "The message is too long to hide. \nLength: {}, Limit: {}",
        text.chars().count().to_string().red().bold(),
        MAX_MESSAGE_LEN.to_string().green().bold()
    );

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| prefixed_path(&args.image, "doctored_"));
    ensure_writable(&dest, args.force)?;

    let raster = load_raster(&args.image)?;
    let mut history = HistoryStore::new(raster);

    let required_space = HEADER_PIXELS + text.chars().count();
    let available_space = history.current().len();

    let stored = steganography::encode(history.edit(), &text).with_context(|| {
        "Failed to hide the message in the image. \nThe text may contain characters that do not fit in a pixel."
    })?;

    anyhow::ensure!(
        stored,
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    save_raster(history.current(), &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责解码经过隐写的图像文件、从中提取隐藏的消息，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中没有检测到隐藏的消息。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_dest = args
        .text
        .clone()
        .unwrap_or_else(|| recovered_text_path(&args.image));
    ensure_writable(&text_dest, args.force)?;

    let raster = load_raster(&args.image)?;

    let message = steganography::decode(&raster).with_context(|| {
        format!(
            "No hidden message was found in: {} \nThe image may not contain a message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_dest, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 把所选操作分派到对应的核心函数。
fn apply_edit(image: &mut RasterImage, args: &EditArgs) -> Result<(), EditError> {
    match args.op {
        EditOp::Invert => {
            filters::invert(image);
            Ok(())
        }
        EditOp::Transpose => geometry::transpose(image),
        EditOp::ReflectHorizontal => geometry::reflect_horizontal(image),
        EditOp::ReflectVertical => geometry::reflect_vertical(image),
        EditOp::RotateLeft => geometry::rotate_left(image),
        EditOp::RotateRight => geometry::rotate_right(image),
        EditOp::Mono => {
            filters::monochromify(image, args.sepia);
            Ok(())
        }
        EditOp::Vignette => {
            filters::vignette(image);
            Ok(())
        }
        EditOp::Pixellate => filters::pixellate(image, args.step),
        EditOp::Jail => filters::jail(image),
    }
}

/// 把图像文件解码为 RGB 栅格图像。
fn load_raster(path: &Path) -> Result<RasterImage> {
    let decoded = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let rgb = decoded.to_rgb8();
    let width = rgb.width() as usize;
    let pixels = rgb
        .pixels()
        .map(|px| Pixel::new(px[0], px[1], px[2]))
        .collect();

    RasterImage::new(pixels, width).with_context(|| {
        format!(
            "The decoded image has invalid dimensions: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 把栅格图像编码并写入目标文件。
fn save_raster(image: &RasterImage, path: &Path) -> Result<()> {
    let mut raw = Vec::with_capacity(image.len() * 3);
    for px in image.pixels() {
        raw.extend_from_slice(&[px.r, px.g, px.b]);
    }

    let buffer = RgbImage::from_raw(image.width() as u32, image.height() as u32, raw)
        .context("The edited pixel data does not match the image dimensions.")?;

    buffer.save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(())
}

/// 目标文件已存在且未指定 --force 时报错。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在输入文件名前加上前缀，生成同目录下的默认输出路径。
fn prefixed_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", prefix, name))
}

/// 恢复文本的默认输出路径：recovered_<文件名主干>.txt。
fn recovered_text_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("recovered_{}.txt", stem))
}
