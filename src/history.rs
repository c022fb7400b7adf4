//! # 编辑历史模块
//!
//! 保存一串完整的图像快照。每次编辑前把当前图像深拷贝一份压入栈，
//! 编辑作用在新的栈顶上；撤销弹出最近一次编辑。快照之间不共享任何
//! 可变像素存储。

use crate::constants::MAX_HISTORY;
use crate::raster::RasterImage;

/// 图像快照栈，最早的快照是未经编辑的原始图像。
#[derive(Debug, Clone)]
pub struct HistoryStore {
    original: RasterImage,
    edits: Vec<RasterImage>,
}

impl HistoryStore {
    /// 以原始图像建立历史。
    pub fn new(original: RasterImage) -> Self {
        Self {
            original,
            edits: Vec::new(),
        }
    }

    /// 当前生效的图像，即最近一次编辑的结果；没有编辑过时就是原始
    /// 图像。
    pub fn current(&self) -> &RasterImage {
        self.edits.last().unwrap_or(&self.original)
    }

    /// 提交一次新的编辑：把当前图像拷贝一份压入栈顶，返回栈顶的可
    /// 变引用供本次操作改写。
    ///
    /// 编辑快照的数量达到 [`MAX_HISTORY`] 时丢弃最早的一份，原始图
    /// 像不受影响。
    pub fn edit(&mut self) -> &mut RasterImage {
        let snapshot = self.current().clone();
        if self.edits.len() == MAX_HISTORY {
            self.edits.remove(0);
        }
        self.edits.push(snapshot);
        let top = self.edits.len() - 1;
        &mut self.edits[top]
    }

    /// 撤销最近一次编辑。没有可撤销的编辑时返回 false。
    pub fn undo(&mut self) -> bool {
        self.edits.pop().is_some()
    }

    /// 历史中保存的快照总数，包含原始图像。
    pub fn depth(&self) -> usize {
        self.edits.len() + 1
    }
}
