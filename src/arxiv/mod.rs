//! arXiv检索客户端 - Atom接口请求与解析

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

use crate::config::SearchConfig;
use crate::types::Paper;

const USER_AGENT: &str = "scholartree-rs/1.1 (https://github.com/sopaco/scholartree-rs)";

/// 检索失败的分类。任何一种失败都只影响当前子查询，不会中断整个请求
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("arXiv API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("arXiv API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse arXiv response: {0}")]
    Parse(String),
}

/// 论文检索能力接口
#[async_trait]
pub trait PaperSource: Send + Sync {
    async fn search(&self, keyword: &str, max_results: usize) -> Result<Vec<Paper>, SearchError>;
}

/// arXiv Atom API的HTTP客户端
pub struct ArxivClient {
    config: SearchConfig,
    client: reqwest::Client,
    last_request: std::sync::Mutex<Option<std::time::Instant>>,
}

impl ArxivClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
            last_request: std::sync::Mutex::new(None),
        })
    }

    /// 保证相邻两次请求之间的最小间隔，遵守arXiv接口礼仪
    async fn rate_limit(&self) {
        let min_interval = Duration::from_secs(self.config.min_request_interval_secs);
        let wait_duration = {
            let last = self.last_request.lock().unwrap();
            if let Some(instant) = *last {
                let elapsed = instant.elapsed();
                if elapsed < min_interval {
                    Some(min_interval - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        }; // MutexGuard在任何.await之前释放

        if let Some(wait) = wait_duration {
            tokio::time::sleep(wait).await;
        }

        let mut last = self.last_request.lock().unwrap();
        *last = Some(std::time::Instant::now());
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn search(&self, keyword: &str, max_results: usize) -> Result<Vec<Paper>, SearchError> {
        self.rate_limit().await;
        let url = build_search_url(&self.config.api_base_url, keyword, max_results);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        parse_atom_response(&body)
    }
}

// ── URL构建 ──────────────────────────────────────────────

/// 构建arXiv检索URL，按相关性降序返回
pub fn build_search_url(api_base_url: &str, keyword: &str, max_results: usize) -> String {
    let search_query = if keyword.is_empty() {
        "all:*".to_string()
    } else {
        format!("all:{}", keyword)
    };

    format!(
        "{}?search_query={}&start=0&max_results={}&sortBy=relevance&sortOrder=descending",
        api_base_url,
        urlencoding::encode(&search_query),
        max_results,
    )
}

// ── Atom XML解析 ─────────────────────────────────────────

/// 解析arXiv的Atom响应，逐条提取论文
pub fn parse_atom_response(xml: &str) -> Result<Vec<Paper>, SearchError> {
    if !xml.contains("<feed") {
        return Err(SearchError::Parse(
            "response does not look like an Atom feed".to_string(),
        ));
    }

    let mut papers = Vec::new();
    for entry_xml in extract_entries(xml) {
        if let Some(paper) = parse_entry(&entry_xml) {
            papers.push(paper);
        }
    }
    Ok(papers)
}

/// 提取XML中所有的<entry>...</entry>片段
fn extract_entries(xml: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut search_from = 0;

    loop {
        let start_tag = "<entry>";
        let end_tag = "</entry>";

        let start = match xml[search_from..].find(start_tag) {
            Some(pos) => search_from + pos,
            None => break,
        };

        let end = match xml[start..].find(end_tag) {
            Some(pos) => start + pos + end_tag.len(),
            None => break,
        };

        entries.push(xml[start..end].to_string());
        search_from = end;
    }

    entries
}

/// 解析单个<entry>片段为论文
fn parse_entry(entry: &str) -> Option<Paper> {
    let id_url = extract_tag_text(entry, "id")?;
    let arxiv_id = extract_arxiv_id_from_url(&id_url);
    let title = normalize_whitespace(&extract_tag_text(entry, "title")?);

    // 作者列表，保持feed内的出现顺序
    let mut authors = Vec::new();
    let mut author_search = 0;
    while let Some(pos) = entry[author_search..].find("<author>") {
        let author_start = author_search + pos;
        let Some(end_pos) = entry[author_start..].find("</author>") else {
            break;
        };
        let author_end = author_start + end_pos + "</author>".len();
        let author_block = &entry[author_start..author_end];
        if let Some(name) = extract_tag_text(author_block, "name") {
            authors.push(name);
        }
        author_search = author_end;
    }

    let summary = normalize_whitespace(&extract_tag_text(entry, "summary").unwrap_or_default());
    let published = extract_tag_text(entry, "published")
        .and_then(|s| parse_feed_datetime(&s))
        .unwrap_or(DateTime::UNIX_EPOCH);

    // 分类标签
    let mut categories = Vec::new();
    let mut cat_search = 0;
    while let Some(pos) = entry[cat_search..].find("<category") {
        let cat_start = cat_search + pos;
        let cat_end = if let Some(end_pos) = entry[cat_start..].find("/>") {
            cat_start + end_pos + 2
        } else if let Some(end_pos) = entry[cat_start..].find('>') {
            cat_start + end_pos + 1
        } else {
            break;
        };
        let cat_tag = &entry[cat_start..cat_end];
        if let Some(term) = extract_attribute(cat_tag, "term") {
            categories.push(term);
        }
        cat_search = cat_end;
    }

    // PDF链接，feed未给出时按约定地址补全
    let mut pdf_url = String::new();
    let mut link_search = 0;
    while let Some(pos) = entry[link_search..].find("<link") {
        let link_start = link_search + pos;
        let Some(end_pos) = entry[link_start..]
            .find("/>")
            .or_else(|| entry[link_start..].find('>'))
        else {
            break;
        };
        let link_end = link_start + end_pos + 2;
        let link_tag = &entry[link_start..link_end];
        let href = extract_attribute(link_tag, "href").unwrap_or_default();
        let title_attr = extract_attribute(link_tag, "title").unwrap_or_default();
        let link_type = extract_attribute(link_tag, "type").unwrap_or_default();

        if title_attr == "pdf" || link_type == "application/pdf" {
            pdf_url = href;
        }
        link_search = link_end;
    }

    if pdf_url.is_empty() {
        pdf_url = format!("https://arxiv.org/pdf/{}", arxiv_id);
    }

    Some(Paper {
        arxiv_id,
        title,
        authors,
        summary,
        published,
        url: pdf_url,
        categories,
    })
}

/// 提取首个<tag>text</tag>的文本内容
fn extract_tag_text(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let start_pos = xml.find(&open)?;
    // 定位开标签的结束位置（可能带属性）
    let content_start = xml[start_pos..].find('>')? + start_pos + 1;
    let content_end = xml[content_start..].find(&close)? + content_start;

    Some(xml[content_start..content_end].trim().to_string())
}

/// 从标签片段中提取属性值
fn extract_attribute(tag: &str, attr: &str) -> Option<String> {
    let search = format!("{}=\"", attr);
    let start = tag.find(&search)? + search.len();
    let end = tag[start..].find('"')? + start;
    Some(tag[start..end].to_string())
}

/// 从"http://arxiv.org/abs/1706.03762v7"形式的URL提取arXiv ID
pub fn extract_arxiv_id_from_url(url: &str) -> String {
    if let Some(pos) = url.rfind("/abs/") {
        url[pos + 5..].to_string()
    } else if let Some(pos) = url.rfind("/pdf/") {
        url[pos + 5..].trim_end_matches(".pdf").to_string()
    } else {
        // 本身就是ID
        url.to_string()
    }
}

/// 把连续空白折叠为单个空格
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 解析feed中的RFC 3339时间
fn parse_feed_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// Include tests
#[cfg(test)]
mod tests;
