/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端 API 基础地址
    pub api_base_url: String,
    /// 页面种子文件路径（文档列表 + 提示表达式 + 挑战标识）
    pub seed_file: String,
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            seed_file: "page_seed.toml".to_string(),
            request_timeout_secs: 10,
            verbose_logging: false,
            output_log_file: "session.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("CHALLENGE_API_BASE_URL").unwrap_or(default.api_base_url),
            seed_file: std::env::var("PAGE_SEED_FILE").unwrap_or(default.seed_file),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
