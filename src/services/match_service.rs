//! 匹配检查服务 - 业务能力层
//!
//! 只负责"问后端匹不匹配"这一件事，不认识行 ID、不关心页面流程

use crate::clients::ApiClient;
use crate::config::Config;
use crate::models::MatchState;
use crate::utils::logging::truncate_text;
use tracing::warn;

/// 匹配检查服务
///
/// 错误策略与页面一致：任何传输失败或缺少 `matched` 字段的响应
/// 都按"不匹配"处理并记入日志，绝不向上抛出
pub struct MatchService {
    api: ApiClient,
}

impl MatchService {
    /// 创建新的匹配检查服务
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// 检查单个文档
    ///
    /// # 参数
    /// - `document`: 文档文本
    /// - `search_expression`: 当前表达式
    ///
    /// # 返回
    /// 返回该行应有的匹配状态
    pub async fn check_document(&self, document: &str, search_expression: &str) -> MatchState {
        match self.api.check_match(document, search_expression).await {
            Ok(result) => match ApiClient::extract_matched(&result) {
                Some(matched) => MatchState::from_matched(matched),
                None => {
                    warn!(
                        "检查响应缺少 matched 字段 (文档: {}): {}",
                        truncate_text(document, 40),
                        ApiClient::describe_error(&result)
                    );
                    MatchState::Unmatched
                }
            },
            Err(e) => {
                warn!(
                    "文档检查请求失败 (文档: {}): {}",
                    truncate_text(document, 40),
                    e
                );
                MatchState::Unmatched
            }
        }
    }

    /// 按提交顺序批量检查文档
    ///
    /// # 返回
    /// 成功时返回与提交顺序逐位对应的布尔列表；
    /// 失败时返回 None，调用方保持各行状态不变（只记日志）
    pub async fn check_documents(
        &self,
        documents: &[String],
        search_expression: &str,
    ) -> Option<Vec<bool>> {
        match self.api.check_match_many(documents, search_expression).await {
            Ok(result) => match ApiClient::extract_matched_list(&result) {
                Some(matches) => Some(matches),
                None => {
                    warn!(
                        "批量检查响应缺少 matched 数组: {}",
                        ApiClient::describe_error(&result)
                    );
                    None
                }
            },
            Err(e) => {
                warn!("批量检查请求失败: {}", e);
                None
            }
        }
    }
}
