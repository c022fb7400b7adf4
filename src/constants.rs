/// 隐写消息的起始标记。
/// 解码时先检查前 5 个像素能否还原出该标记，以此判断图像中是否藏有消息。
pub const START_MARKER: &str = "START";

/// 消息长度字段的十进制位数。
/// 长度补零到固定 6 位，因此单条消息最多 999999 个字符。
pub const LENGTH_DIGITS: usize = 6;

/// 消息头部占用的像素数。
/// 起始标记 5 个字符加上 6 位长度字段，共 5 + 6 = 11 个像素，
/// 每个字符占用一个像素。
pub const HEADER_PIXELS: usize = 11;

/// 单条消息允许的最大字符数，即 6 位长度字段能表示的上限。
pub const MAX_MESSAGE_LEN: usize = 999_999;

/// 编辑历史在原始图像之外保留的最大快照数量。
/// 超出后最早的编辑快照会被丢弃，原始图像始终保留。
pub const MAX_HISTORY: usize = 20;
