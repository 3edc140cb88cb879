//! 结果出口 - 聚合模式写盘+控制台摘要，流式模式逐行输出NDJSON事件

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use crate::research::{self, ResearchContext};
use crate::types::{ResearchRequest, ResearchTree};

/// 聚合结果的落盘文件名
const TREE_FILENAME: &str = "tree.json";

/// 保存聚合模式的研究树并打印摘要
pub async fn save(context: &ResearchContext, tree: &ResearchTree) -> Result<()> {
    let output_path = &context.config.output_path;
    tokio::fs::create_dir_all(output_path)
        .await
        .context(format!("Failed to create output directory: {:?}", output_path))?;

    let file_path = output_path.join(TREE_FILENAME);
    let content = serde_json::to_string_pretty(tree)?;
    tokio::fs::write(&file_path, content)
        .await
        .context(format!("Failed to write result file: {:?}", file_path))?;

    println!("📄 研究树已保存至 {}", file_path.display());
    println!(
        "✅ 完成：{}条子查询，共{}篇论文（去重后{}篇）",
        tree.query_nodes.len(),
        tree.total_papers,
        tree.total_unique_papers
    );
    Ok(())
}

/// 流式模式：事件产出即逐行打印到stdout。
/// stdout之外的日志一律走stderr，保证事件流本身是纯净的NDJSON
pub async fn stream_to_stdout(context: &ResearchContext, request: &ResearchRequest) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(16);

    let producer = tokio::spawn(research::execute_streaming(
        context.clone(),
        request.clone(),
        tx,
    ));

    while let Some(event) = rx.recv().await {
        println!("{}", serde_json::to_string(&event)?);
    }

    // 管线内部的致命错误在流结束后统一上抛
    producer.await??;
    Ok(())
}
