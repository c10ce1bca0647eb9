use challenge_page_client::clients::ApiClient;
use challenge_page_client::models::{load_seed_or_default, MatchState};
use challenge_page_client::{Config, PageFlow};

#[tokio::test]
#[ignore] // 默认忽略，需要本地后端：cargo test -- --ignored
async fn test_check_match_endpoint() {
    // 初始化日志
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();
    let api = ApiClient::new(&config);

    let result = api
        .check_match("le chat dort", "chat")
        .await
        .expect("检查请求应该成功");

    assert!(
        ApiClient::extract_matched(&result).is_some(),
        "响应应该带 matched 字段"
    );
}

#[tokio::test]
#[ignore]
async fn test_check_match_many_is_positional() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = Config::from_env();
    let api = ApiClient::new(&config);

    let documents = vec!["le chat dort".to_string(), "un chien aboie".to_string()];
    let result = api
        .check_match_many(&documents, "chat")
        .await
        .expect("批量检查请求应该成功");

    let matches = ApiClient::extract_matched_list(&result).expect("响应应该带 matched 数组");
    assert_eq!(matches.len(), documents.len(), "结果应该与提交顺序逐位对应");
    assert!(matches[0], "第一个文档包含 chat");
    assert!(!matches[1], "第二个文档不包含 chat");
}

#[tokio::test]
#[ignore]
async fn test_invalid_expression_returns_error_shape() {
    let _ = tracing_subscriber::fmt::try_init();

    let config = Config::from_env();
    let api = ApiClient::new(&config);

    // 解析失败的表达式：响应没有 matched 字段，只有错误描述
    let result = api
        .check_match("le chat dort", "AND AND")
        .await
        .expect("请求本身应该成功");

    assert!(ApiClient::extract_matched(&result).is_none());
    assert!(!ApiClient::describe_error(&result).is_empty());
}

#[tokio::test]
#[ignore]
async fn test_full_page_session() {
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置与页面种子
    let config = Config::from_env();
    let seed = load_seed_or_default(&config.seed_file).await;

    let mut flow = PageFlow::new(&config, &seed);

    // 页面加载：整表检查 + 初始题目检查
    flow.setup().await;

    // 表达式修改后所有行都应该有确定的匹配状态
    flow.change_expression("chat").await;
    assert!(flow
        .row_states()
        .iter()
        .all(|s| *s != MatchState::Unknown));

    // 提交一次并确认页面仍可渲染
    flow.submit_challenge().await;
    let page = flow.render();
    assert!(page.contains("搜索表达式"));
}
