//! 页面视图渲染 - 页面状态层
//!
//! 唯一的渲染出口：每次事件处理完后把完整页面状态渲染成文本

use std::fmt::Write as _;

use crate::models::MatchState;
use crate::ui::challenge::ChallengeRunner;
use crate::ui::editor::DocumentEditor;

/// 行状态在终端里的标记
fn match_marker(state: MatchState) -> &'static str {
    match state {
        MatchState::Unknown => "[ ]",
        MatchState::Matched => "[✓]",
        MatchState::Unmatched => "[✗]",
    }
}

/// 渲染完整页面
pub fn render_page(editor: &DocumentEditor, runner: &ChallengeRunner, hint_expr: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "─".repeat(60));

    // 文档列表与隐藏字段
    let _ = writeln!(out, "📄 文档列表 (字段值: \"{}\")", editor.serialized());
    for (index, row) in editor.rows().iter().enumerate() {
        let _ = writeln!(out, "  {}. {} {}", index + 1, match_marker(row.matched), row.value);
    }
    if editor.is_empty() {
        let _ = writeln!(out, "  (没有文档行)");
    }

    // 表达式输入框
    let expr_state = if runner.expression_enabled() {
        ""
    } else {
        " [已禁用]"
    };
    let _ = writeln!(out, "🔍 搜索表达式: \"{}\"{}", hint_expr, expr_state);

    // 提交按钮
    let button_state = if runner.submit_enabled() {
        "可用"
    } else {
        "禁用"
    };
    let _ = writeln!(out, "🔘 提交按钮: {}", button_state);

    // 结果面板
    if !runner.good_documents().is_empty() || !runner.wrong_documents().is_empty() {
        let _ = writeln!(out, "{}", "─".repeat(60));
        let _ = writeln!(out, "✅ 匹配的文档:");
        for verdict in runner.good_documents() {
            let _ = writeln!(out, "    {} ({})", verdict.name(), verdict.css_class());
        }
        let _ = writeln!(out, "❌ 未匹配的文档:");
        for verdict in runner.wrong_documents() {
            let _ = writeln!(out, "    {} ({})", verdict.name(), verdict.css_class());
        }
    }

    // 通关消息
    if runner.success_visible() {
        let _ = writeln!(out, "{}", "─".repeat(60));
        if runner.challenge_complete() {
            let _ = writeln!(out, "🎉 题目已通过，整个挑战完成！");
        } else {
            let _ = writeln!(out, "🎉 题目已通过！");
        }
    }

    let _ = writeln!(out, "{}", "─".repeat(60));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOutcome;

    #[test]
    fn test_render_contains_rows_and_field_value() {
        let editor = DocumentEditor::from_serialized("a;b");
        let runner = ChallengeRunner::new();

        let page = render_page(&editor, &runner, "x AND y");
        assert!(page.contains("\"a;b\""));
        assert!(page.contains("1. [ ] a"));
        assert!(page.contains("2. [ ] b"));
        assert!(page.contains("x AND y"));
        assert!(page.contains("提交按钮: 可用"));
    }

    #[test]
    fn test_render_shows_panels_and_success_message() {
        let editor = DocumentEditor::from_serialized("a");
        let mut runner = ChallengeRunner::new();
        runner.begin_check();
        runner.apply_result(QuestionOutcome {
            good_documents: vec![crate::models::DocVerdict("a".to_string(), true)],
            wrong_documents: vec![],
            question_end: true,
            challenge_end: false,
        });

        let page = render_page(&editor, &runner, "a");
        assert!(page.contains("a (doc-true)"));
        assert!(page.contains("题目已通过"));
        assert!(page.contains("[已禁用]"));
        assert!(page.contains("提交按钮: 禁用"));
    }
}
