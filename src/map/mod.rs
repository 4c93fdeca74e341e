//! 网络拓扑描述的导入与导出
//!
//! 以连接记录的有序序列描述一张图：每条记录给出起点键、可选的
//! 终点键、可选的标签与权重。导入时顶点在首次出现处创建，带
//! 终点的记录各建立一条有向边；导出时先展开全部边，再补上孤立
//! 顶点。

use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// 连接记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// 起点键
    pub from: String,
    /// 终点键；缺省表示只声明一个顶点
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// 边标签
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// 边权重；缺省使用默认权重 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ConnectionRecord {
    /// 单顶点记录
    pub fn vertex(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: None,
            label: None,
            weight: None,
        }
    }

    /// 连接记录 from -> to
    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Some(to.into()),
            label: None,
            weight: None,
        }
    }

    /// 附加标签
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// 附加权重
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// 从连接记录序列构建图
///
/// 与逐条调用 `insert_vertex`/`connect_oneway` 的错误一致：输入中
/// 重复的有向顶点对在此处以重复连接错误浮现。
pub fn from_records(records: &[ConnectionRecord]) -> Result<Graph> {
    let mut graph = Graph::new();

    for record in records {
        if graph.get_vertex(&record.from).is_none() {
            graph.insert_vertex(&record.from)?;
        }

        // 空字符串终点按缺省处理
        let to = record.to.as_deref().filter(|t| !t.is_empty());
        if let Some(to) = to {
            if graph.get_vertex(to).is_none() {
                graph.insert_vertex(to)?;
            }
            graph.connect_oneway(&record.from, to, record.label.as_deref(), record.weight)?;
        }
    }

    tracing::debug!(
        records = records.len(),
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "网络拓扑导入完成"
    );
    Ok(graph)
}

/// 导出为连接记录序列
///
/// 每条边一条记录（创建序），随后每个孤立顶点一条记录（插入序）。
/// 图的有向连接唯一性保证导出结果可以原样重新导入。
pub fn to_records(graph: &Graph) -> Vec<ConnectionRecord> {
    let mut records = Vec::with_capacity(graph.num_edges());

    for edge in graph.get_edges() {
        records.push(ConnectionRecord {
            from: edge.start().to_string(),
            to: Some(edge.end().to_string()),
            label: edge.label().map(str::to_string),
            weight: Some(edge.weight()),
        });
    }

    for vertex in graph.get_vertices() {
        if vertex.is_isolated() {
            records.push(ConnectionRecord::vertex(vertex.key()));
        }
    }

    records
}

/// 从 JSON 数组导入
pub fn from_json(json: &str) -> Result<Graph> {
    let records: Vec<ConnectionRecord> = serde_json::from_str(json)
        .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))?;
    from_records(&records)
}

/// 导出为 JSON 数组
pub fn to_json(graph: &Graph) -> Result<String> {
    serde_json::to_string(&to_records(graph))
        .map_err(|e| Error::ImportError(format!("JSON 序列化错误: {}", e)))
}
