use serde::{Deserialize, Serialize};

/// 单个文档的判定结果
///
/// 后端以 `[名称, 分类标志]` 的二元数组返回，分类标志表示
/// 该文档是否属于题目期望的"好文档"集合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocVerdict(pub String, pub bool);

impl DocVerdict {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn expected(&self) -> bool {
        self.1
    }

    /// 页面上渲染用的样式类（doc-true / doc-false）
    pub fn css_class(&self) -> String {
        format!("doc-{}", self.1)
    }
}

/// 一次题目检查的完整结果
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionOutcome {
    /// 当前表达式匹配到的文档
    pub good_documents: Vec<DocVerdict>,
    /// 当前表达式没有匹配到的文档
    pub wrong_documents: Vec<DocVerdict>,
    /// 本题已通过，页面进入锁定状态
    #[serde(default)]
    pub question_end: bool,
    /// 整个挑战已全部完成
    #[serde(default)]
    pub challenge_end: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_deserializes_pair_arrays() {
        let raw = serde_json::json!({
            "good_documents": [["le chat dort", true], ["un chien aboie", false]],
            "wrong_documents": [["les oiseaux chantent", false]],
            "question_end": false,
            "challenge_end": false
        });

        let outcome: QuestionOutcome = serde_json::from_value(raw).expect("应该能解析判定结果");
        assert_eq!(outcome.good_documents.len(), 2);
        assert_eq!(outcome.good_documents[0].name(), "le chat dort");
        assert!(outcome.good_documents[0].expected());
        assert_eq!(outcome.wrong_documents[0].css_class(), "doc-false");
        assert!(!outcome.question_end);
    }

    #[test]
    fn test_outcome_end_flags_default_to_false() {
        let raw = serde_json::json!({
            "good_documents": [],
            "wrong_documents": []
        });

        let outcome: QuestionOutcome = serde_json::from_value(raw).expect("缺省字段应该可解析");
        assert!(!outcome.question_end);
        assert!(!outcome.challenge_end);
    }
}
