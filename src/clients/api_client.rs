/// 挑战后端 API 客户端
///
/// 封装所有与检查后端相关的调用逻辑
use crate::config::Config;
use crate::error::AppResult;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// 挑战后端 API 客户端
///
/// 职责：
/// - 持有唯一的 HTTP 客户端资源
/// - 暴露三个检查端点的调用能力
/// - 不认识行、不认识页面状态
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// 检查单个文档是否匹配表达式
    ///
    /// # 参数
    /// - `document`: 文档文本
    /// - `search_expression`: 当前的搜索表达式
    ///
    /// # 返回
    /// 返回完整的响应 JSON（成功时带 `matched` 字段）
    pub async fn check_match(&self, document: &str, search_expression: &str) -> AppResult<Value> {
        let url = format!("{}/api/checks", self.base_url);

        debug!("检查文档匹配, 表达式: {}", search_expression);

        let result: Value = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .query(&[
                ("document", document),
                ("search_expression", search_expression),
            ])
            .send()
            .await?
            .json()
            .await?;

        Ok(result)
    }

    /// 按提交顺序检查一组文档
    ///
    /// `documents` 以重复的查询键提交（后端按 append 聚合），
    /// 响应中的 `matched` 数组与提交顺序逐位对应
    pub async fn check_match_many(
        &self,
        documents: &[String],
        search_expression: &str,
    ) -> AppResult<Value> {
        let url = format!("{}/api/checks_many", self.base_url);

        debug!(
            "批量检查 {} 个文档, 表达式: {}",
            documents.len(),
            search_expression
        );

        let mut query: Vec<(&str, &str)> = documents
            .iter()
            .map(|d| ("documents", d.as_str()))
            .collect();
        query.push(("search_expression", search_expression));

        let result: Value = self
            .http
            .get(&url)
            .timeout(self.timeout)
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        Ok(result)
    }

    /// 用当前表达式检查题目
    ///
    /// # 参数
    /// - `search_expression`: 当前的搜索表达式
    /// - `user` / `challenge` / `question`: 挑战标识
    ///
    /// # 返回
    /// 返回完整的响应 JSON（成功时带 good_documents / wrong_documents）
    pub async fn check_question(
        &self,
        search_expression: &str,
        user: i64,
        challenge: i64,
        question: i64,
    ) -> AppResult<Value> {
        let url = format!("{}/api/check_question", self.base_url);

        let body = json!({
            "search_expression": search_expression,
            "user": user,
            "challenge": challenge,
            "question": question
        });

        debug!("题目检查 Payload: {}", body);

        let result: Value = self
            .http
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        debug!("题目检查结果: {}", result);

        Ok(result)
    }

    /// 提取单文档检查的 matched 字段
    pub fn extract_matched(result: &Value) -> Option<bool> {
        result.get("matched").and_then(Value::as_bool)
    }

    /// 提取批量检查的 matched 数组
    ///
    /// 数组里的非布尔项按不匹配处理
    pub fn extract_matched_list(result: &Value) -> Option<Vec<bool>> {
        result
            .get("matched")
            .and_then(Value::as_array)
            .map(|list| list.iter().map(|v| v.as_bool().unwrap_or(false)).collect())
    }

    /// 描述错误形状的响应体
    ///
    /// 表达式解析失败时后端返回
    /// `{"message": {"search_expression": {"position": n, "error": s}}}`，
    /// 其余情况原样返回响应内容
    pub fn describe_error(result: &Value) -> String {
        if let Some(detail) = result
            .get("message")
            .and_then(|m| m.get("search_expression"))
        {
            let error = detail
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("未知解析错误");

            if let Some(position) = detail.get("position").and_then(Value::as_i64) {
                return format!("表达式解析失败 (位置 {}): {}", position, error);
            }
            return format!("表达式解析失败: {}", error);
        }

        result.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_matched_requires_boolean() {
        assert_eq!(
            ApiClient::extract_matched(&json!({"matched": true})),
            Some(true)
        );
        assert_eq!(
            ApiClient::extract_matched(&json!({"matched": false})),
            Some(false)
        );
        // 缺少字段或类型不对都按失败形状处理
        assert_eq!(ApiClient::extract_matched(&json!({"document": "a"})), None);
        assert_eq!(ApiClient::extract_matched(&json!({"matched": "yes"})), None);
    }

    #[test]
    fn test_extract_matched_list_positional() {
        let result = json!({"matched": [true, false, true]});
        assert_eq!(
            ApiClient::extract_matched_list(&result),
            Some(vec![true, false, true])
        );
    }

    #[test]
    fn test_extract_matched_list_rejects_non_array() {
        assert_eq!(
            ApiClient::extract_matched_list(&json!({"matched": true})),
            None
        );
        assert_eq!(
            ApiClient::extract_matched_list(&json!({"message": "oops"})),
            None
        );
    }

    #[test]
    fn test_describe_error_parser_shape() {
        let body = json!({
            "message": {
                "search_expression": {"position": 4, "error": "unexpected token"}
            }
        });
        let described = ApiClient::describe_error(&body);
        assert!(described.contains("位置 4"));
        assert!(described.contains("unexpected token"));
    }

    #[test]
    fn test_describe_error_falls_back_to_raw_body() {
        let body = json!({"status": "weird"});
        assert_eq!(ApiClient::describe_error(&body), body.to_string());
    }
}
