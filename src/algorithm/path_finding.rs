//! 最短路径搜索
//!
//! 按边权重的最优优先扩展。未提供启发函数（f 值与 g 值相同），
//! 等价于一致代价搜索；开放集按加入顺序保存，取最小 f 值时做
//! 线性扫描并用严格小于比较，同分时保留更早加入的顶点，保证
//! 结果确定。

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点键序列（起点在前）
    pub vertices: Vec<String>,
    /// 路径上的顶点数
    pub length: usize,
    /// 路径总权重
    pub total_weight: f64,
}

/// 最短路径搜索
///
/// 起点不存在时报错；目标不可达（或目标键不在图中）时返回 None。
/// 路径只沿出边方向。
pub fn find_path(graph: &Graph, start: &str, end: &str) -> Result<Option<PathResult>> {
    let start = graph
        .get_vertex(start)
        .map(Vertex::key)
        .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

    let mut open_set: Vec<&str> = vec![start];
    let mut closed_set: HashSet<&str> = HashSet::new();
    let mut came_from: HashMap<&str, &str> = HashMap::new();

    let mut g_score: HashMap<&str, f64> = HashMap::new();
    g_score.insert(start, 0.0);
    let mut f_score: HashMap<&str, f64> = HashMap::new();
    f_score.insert(start, 0.0);

    while !open_set.is_empty() {
        // 线性扫描取最小 f 值；严格小于，同分保留先加入者
        let mut lowest = 0;
        for i in 1..open_set.len() {
            let fi = f_score.get(open_set[i]).copied().unwrap_or(f64::INFINITY);
            let fl = f_score
                .get(open_set[lowest])
                .copied()
                .unwrap_or(f64::INFINITY);
            if fi < fl {
                lowest = i;
            }
        }
        let current = open_set.remove(lowest);

        if current == end {
            let path = reconstruct_path(&came_from, current);
            let result = PathResult {
                length: path.len(),
                total_weight: g_score.get(current).copied().unwrap_or(0.0),
                vertices: path.into_iter().map(str::to_string).collect(),
            };
            tracing::debug!(
                from = start,
                to = end,
                length = result.length,
                total_weight = result.total_weight,
                "最短路径搜索命中"
            );
            return Ok(Some(result));
        }

        closed_set.insert(current);

        for edge in graph.outgoing_edges(current, None).unwrap_or_default() {
            let neighbor = edge.end();
            if closed_set.contains(neighbor) {
                continue;
            }

            let tentative =
                g_score.get(current).copied().unwrap_or(f64::INFINITY) + edge.weight();
            if tentative < g_score.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                // 这条到 neighbor 的路径优于已知的任何一条
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                f_score.insert(neighbor, tentative);
                if !open_set.contains(&neighbor) {
                    open_set.push(neighbor);
                }
            }
        }
    }

    tracing::debug!(from = start, to = end, "最短路径搜索未找到路径");
    Ok(None)
}

/// 两点间是否存在有向路径
pub fn is_reachable(graph: &Graph, start: &str, end: &str) -> Result<bool> {
    Ok(find_path(graph, start, end)?.is_some())
}

/// 沿前驱映射回溯重建路径（起点在前）
fn reconstruct_path<'g>(came_from: &HashMap<&'g str, &'g str>, target: &'g str) -> Vec<&'g str> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = came_from.get(current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
