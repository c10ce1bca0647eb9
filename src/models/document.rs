use serde::{Deserialize, Serialize};

/// 文档行的稳定标识
///
/// 行的身份用创建时分配的不透明 ID 追踪，与文本值无关：
/// 列表里存在重复文本时删除/编辑也只命中自己那一行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(u64);

/// 行的匹配状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    /// 尚未检查
    #[default]
    Unknown,
    /// 与当前表达式匹配
    Matched,
    /// 不匹配（传输失败与异常响应也归入此类）
    Unmatched,
}

impl MatchState {
    pub fn from_matched(matched: bool) -> Self {
        if matched {
            MatchState::Matched
        } else {
            MatchState::Unmatched
        }
    }

    /// 页面上对应的背景颜色（未检查时无颜色）
    pub fn background_color(&self) -> Option<&'static str> {
        match self {
            MatchState::Unknown => None,
            MatchState::Matched => Some("#cfc"),
            MatchState::Unmatched => Some("#fcc"),
        }
    }
}

/// 单个文档行
#[derive(Debug, Clone)]
pub struct DocumentRow {
    pub id: RowId,
    pub value: String,
    pub matched: MatchState,
}

/// 有序的文档行列表
///
/// 职责：
/// - 维护行的插入顺序与稳定 ID
/// - 保证序列化字段（分号连接）与可见行始终一致
/// - 不发请求、不认识表达式
#[derive(Debug, Clone, Default)]
pub struct DocumentList {
    rows: Vec<DocumentRow>,
    next_id: u64,
}

impl DocumentList {
    /// 从分号连接的初始值创建列表
    ///
    /// 与页面一致：空字符串会产生一个空行（`"".split(';')` 的行为）
    pub fn from_serialized(initial: &str) -> Self {
        let mut list = Self::default();
        for value in initial.split(';') {
            list.add(value);
        }
        list
    }

    /// 按行序用分号连接所有行的当前值
    pub fn serialized(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.value.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// 追加一行，返回分配的 ID
    pub fn add(&mut self, value: impl Into<String>) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(DocumentRow {
            id,
            value: value.into(),
            matched: MatchState::Unknown,
        });
        id
    }

    /// 删除指定行；未知 ID 时静默跳过
    pub fn remove(&mut self, id: RowId) -> bool {
        match self.rows.iter().position(|r| r.id == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// 原位修改指定行的值
    pub fn set_value(&mut self, id: RowId, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    /// 更新指定行的匹配状态
    pub fn set_matched(&mut self, id: RowId, state: MatchState) -> bool {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.matched = state;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: RowId) -> Option<&DocumentRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// 按显示顺序取行（1 基序号在交互层换算为 0 基下标）
    pub fn row_at(&self, index: usize) -> Option<&DocumentRow> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[DocumentRow] {
        &self.rows
    }

    /// 按行序取所有当前值
    pub fn values(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
