use serde::{Deserialize, Serialize};

/// 结果语言类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Chinese => write!(f, "zh"),
            TargetLanguage::Japanese => write!(f, "ja"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" | "英文" => Ok(TargetLanguage::English),
            "zh" | "chinese" | "中文" => Ok(TargetLanguage::Chinese),
            "ja" | "japanese" | "日本語" | "日文" => Ok(TargetLanguage::Japanese),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 获取语言的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Chinese => "中文",
            TargetLanguage::Japanese => "日本語",
        }
    }

    /// 评分服务调用失败时写入论文说明字段的提示语。
    /// 发给模型的prompt始终是英文，本地化只作用于这条面向用户的文案
    pub fn score_failure_sentinel(&self) -> &'static str {
        match self {
            TargetLanguage::English => "Failed to compute relevance score.",
            TargetLanguage::Chinese => "分数计算出错",
            TargetLanguage::Japanese => "スコア計算エラー",
        }
    }
}
