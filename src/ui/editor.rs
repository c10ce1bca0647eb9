//! 文档列表编辑器 - 页面状态层
//!
//! 对应页面上可编辑的文档列表：一个隐藏字段承载分号连接的
//! 规范值，每行一个输入框加删除按钮
//!
//! 职责：
//! - 维护行列表与序列化字段的一致性
//! - 为每次检查签发请求票据，丢弃过期响应
//! - 不发请求、不渲染

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{DocumentList, DocumentRow, MatchState, RowId};

/// 单行检查的请求票据
///
/// 行在检查发出之后又被编辑过时，票据过期，响应不再落地
#[derive(Debug, Clone)]
pub struct RowTicket {
    pub row: RowId,
    generation: u64,
}

/// 整表检查的请求票据
///
/// 记录发出请求时的行顺序，结果严格按该顺序逐位应用
#[derive(Debug, Clone)]
pub struct BulkTicket {
    generation: u64,
    rows: Vec<RowId>,
}

/// 文档列表编辑器
pub struct DocumentEditor {
    list: DocumentList,
    row_generations: HashMap<RowId, u64>,
    bulk_generation: u64,
}

impl DocumentEditor {
    /// 从分号连接的初始值创建编辑器
    pub fn from_serialized(initial: &str) -> Self {
        let list = DocumentList::from_serialized(initial);
        let row_generations = list.rows().iter().map(|r| (r.id, 0)).collect();

        Self {
            list,
            row_generations,
            bulk_generation: 0,
        }
    }

    /// 当前的序列化字段值
    pub fn serialized(&self) -> String {
        self.list.serialized()
    }

    pub fn rows(&self) -> &[DocumentRow] {
        self.list.rows()
    }

    /// 按显示序号（0 基）取行
    pub fn row_at(&self, index: usize) -> Option<&DocumentRow> {
        self.list.row_at(index)
    }

    /// 按行序取所有当前值
    pub fn values(&self) -> Vec<String> {
        self.list.values()
    }

    /// 追加一行
    pub fn add_row(&mut self, text: impl Into<String>) -> RowId {
        let id = self.list.add(text);
        self.row_generations.insert(id, 0);
        id
    }

    /// 删除一行；未知 ID 时静默跳过
    pub fn remove_row(&mut self, id: RowId) {
        if self.list.remove(id) {
            self.row_generations.remove(&id);
        }
    }

    /// 修改一行的值
    ///
    /// 编辑会作废该行所有未完成的检查
    pub fn modify_row(&mut self, id: RowId, new_value: impl Into<String>) -> bool {
        if !self.list.set_value(id, new_value) {
            warn!("尝试修改不存在的行: {:?}", id);
            return false;
        }

        if let Some(generation) = self.row_generations.get_mut(&id) {
            *generation += 1;
        }
        true
    }

    /// 开始一次单行检查
    ///
    /// # 返回
    /// 返回请求票据与该行当前值的快照；行不存在时返回 None
    pub fn begin_row_check(&mut self, id: RowId) -> Option<(RowTicket, String)> {
        let value = self.list.get(id)?.value.clone();
        let generation = self.row_generations.entry(id).or_insert(0);
        *generation += 1;

        Some((
            RowTicket {
                row: id,
                generation: *generation,
            },
            value,
        ))
    }

    /// 应用单行检查的结果
    ///
    /// 票据过期（行被编辑过或有更新的检查）或行已删除时丢弃结果
    pub fn apply_row_check(&mut self, ticket: &RowTicket, state: MatchState) -> bool {
        match self.row_generations.get(&ticket.row) {
            Some(current) if *current == ticket.generation => {
                self.list.set_matched(ticket.row, state)
            }
            Some(_) => {
                debug!("丢弃过期的行检查结果: {:?}", ticket.row);
                false
            }
            None => {
                debug!("行已删除，丢弃检查结果: {:?}", ticket.row);
                false
            }
        }
    }

    /// 开始一次整表检查
    ///
    /// # 返回
    /// 返回请求票据与按行序快照的所有值
    pub fn begin_bulk_check(&mut self) -> (BulkTicket, Vec<String>) {
        self.bulk_generation += 1;

        let rows = self.list.rows().iter().map(|r| r.id).collect();
        let values = self.list.values();

        (
            BulkTicket {
                generation: self.bulk_generation,
                rows,
            },
            values,
        )
    }

    /// 应用整表检查的结果
    ///
    /// 结果按发出请求时的行顺序逐位应用；期间删除的行被跳过，
    /// 有更新的整表检查在途时整批丢弃
    pub fn apply_bulk_check(&mut self, ticket: &BulkTicket, matches: &[bool]) -> bool {
        if ticket.generation != self.bulk_generation {
            debug!("丢弃过期的整表检查结果");
            return false;
        }

        for (id, matched) in ticket.rows.iter().zip(matches.iter()) {
            self.list.set_matched(*id, MatchState::from_matched(*matched));
        }
        true
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_keeps_serialized_order() {
        let mut editor = DocumentEditor::from_serialized("a;b;c");
        let d = editor.add_row("d");
        assert_eq!(editor.serialized(), "a;b;c;d");

        editor.remove_row(d);
        let b = editor.row_at(1).unwrap().id;
        editor.remove_row(b);
        assert_eq!(editor.serialized(), "a;c");
    }

    #[test]
    fn test_row_check_applies_matched_state() {
        let mut editor = DocumentEditor::from_serialized("a");
        let id = editor.row_at(0).unwrap().id;

        let (ticket, value) = editor.begin_row_check(id).expect("行应该存在");
        assert_eq!(value, "a");

        assert!(editor.apply_row_check(&ticket, MatchState::Matched));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Matched);
    }

    #[test]
    fn test_stale_row_ticket_is_dropped() {
        let mut editor = DocumentEditor::from_serialized("a");
        let id = editor.row_at(0).unwrap().id;

        // 第一次检查还在途，行又被编辑并发起了新的检查
        let (old_ticket, _) = editor.begin_row_check(id).unwrap();
        editor.modify_row(id, "ab");
        let (new_ticket, value) = editor.begin_row_check(id).unwrap();
        assert_eq!(value, "ab");

        // 迟到的旧响应不落地，新响应正常落地
        assert!(!editor.apply_row_check(&old_ticket, MatchState::Matched));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Unknown);
        assert!(editor.apply_row_check(&new_ticket, MatchState::Unmatched));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Unmatched);
    }

    #[test]
    fn test_row_check_after_removal_is_dropped() {
        let mut editor = DocumentEditor::from_serialized("a;b");
        let a = editor.row_at(0).unwrap().id;

        let (ticket, _) = editor.begin_row_check(a).unwrap();
        editor.remove_row(a);

        assert!(!editor.apply_row_check(&ticket, MatchState::Matched));
        assert_eq!(editor.serialized(), "b");
    }

    #[test]
    fn test_bulk_check_applies_by_row_order() {
        let mut editor = DocumentEditor::from_serialized("a;c");

        let (ticket, values) = editor.begin_bulk_check();
        assert_eq!(values, vec!["a", "c"]);

        assert!(editor.apply_bulk_check(&ticket, &[true, false]));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Matched);
        assert_eq!(editor.row_at(1).unwrap().matched, MatchState::Unmatched);
    }

    #[test]
    fn test_bulk_check_order_not_value() {
        // 值相同的行也按位置着色
        let mut editor = DocumentEditor::from_serialized("x;x");
        let (ticket, _) = editor.begin_bulk_check();

        assert!(editor.apply_bulk_check(&ticket, &[true, false]));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Matched);
        assert_eq!(editor.row_at(1).unwrap().matched, MatchState::Unmatched);
    }

    #[test]
    fn test_stale_bulk_ticket_is_dropped() {
        let mut editor = DocumentEditor::from_serialized("a;b");

        let (old_ticket, _) = editor.begin_bulk_check();
        let (new_ticket, _) = editor.begin_bulk_check();

        assert!(!editor.apply_bulk_check(&old_ticket, &[true, true]));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Unknown);

        assert!(editor.apply_bulk_check(&new_ticket, &[true, true]));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Matched);
    }

    #[test]
    fn test_bulk_check_skips_rows_removed_in_flight() {
        let mut editor = DocumentEditor::from_serialized("a;b;c");
        let b = editor.row_at(1).unwrap().id;

        let (ticket, _) = editor.begin_bulk_check();
        editor.remove_row(b);

        assert!(editor.apply_bulk_check(&ticket, &[true, true, true]));
        assert_eq!(editor.row_at(0).unwrap().matched, MatchState::Matched);
        assert_eq!(editor.row_at(1).unwrap().matched, MatchState::Matched);
    }

    #[test]
    fn test_modify_unknown_row_is_logged_noop() {
        let mut editor = DocumentEditor::from_serialized("a");
        let id = editor.row_at(0).unwrap().id;
        editor.remove_row(id);

        assert!(!editor.modify_row(id, "ghost"));
        assert_eq!(editor.serialized(), "");
        assert!(editor.is_empty());
    }
}
