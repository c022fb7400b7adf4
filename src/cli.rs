//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 一款内存内的栅格图像编辑工具：支持几何变换、滤镜、马赛克，
/// 以及基于最低有效数字的消息隐藏与恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款内存内的栅格图像编辑工具：支持几何变换、滤镜、马赛克，以及基于最低有效数字 (LSD) 隐写的消息隐藏与恢复。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：edit (编辑)、hide (隐藏) 和 recover (恢复)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 对无损格式图像 (如 PNG, BMP) 应用一种编辑操作。
    Edit(EditArgs),

    /// 在无损格式图像 (如 PNG, BMP) 中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),
}

/// 'edit' 命令可选的编辑操作。
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// 反色。
    Invert,
    /// 转置（行列互换）。
    Transpose,
    /// 左右镜像。
    ReflectHorizontal,
    /// 上下镜像。
    ReflectVertical,
    /// 逆时针旋转 90 度。
    RotateLeft,
    /// 顺时针旋转 90 度。
    RotateRight,
    /// 单色化（可配合 --sepia 使用棕褐色调）。
    Mono,
    /// 晕影（四角压暗）。
    Vignette,
    /// 马赛克（块大小由 --step 指定）。
    Pixellate,
    /// 红色栏杆。
    Jail,
}

impl EditOp {
    /// 操作在消息里显示的名字。
    pub fn name(self) -> &'static str {
        match self {
            EditOp::Invert => "invert",
            EditOp::Transpose => "transpose",
            EditOp::ReflectHorizontal => "reflect-horizontal",
            EditOp::ReflectVertical => "reflect-vertical",
            EditOp::RotateLeft => "rotate-left",
            EditOp::RotateRight => "rotate-right",
            EditOp::Mono => "mono",
            EditOp::Vignette => "vignette",
            EditOp::Pixellate => "pixellate",
            EditOp::Jail => "jail",
        }
    }
}

/// 'edit' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// 要编辑的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要应用的编辑操作。
    #[arg(value_enum)]
    pub op: EditOp,

    /// 马赛克的块大小（仅 pixellate 使用）。
    #[arg(short, long, default_value_t = 10)]
    pub step: usize,

    /// 单色化时使用棕褐色调（仅 mono 使用）。
    #[arg(long)]
    pub sepia: bool,

    /// 编辑完成后，保存结果图像的输出路径。
    /// 省略时保存为输入文件同目录下的 edited_<文件名>。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 省略时保存为输入文件同目录下的 doctored_<文件名>。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。
    /// 省略时保存为图像同目录下的 recovered_<文件名主干>.txt。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}
