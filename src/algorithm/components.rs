//! 弱连通分量分析

use super::traversal::{BreadthFirst, TraversalMode};
use crate::graph::{Graph, Vertex};
use std::collections::HashSet;

/// 弱连通分量划分
///
/// 按插入序扫描顶点，跳过已归属的，从每个未归属顶点发起无向
/// 广度优先遍历收集一个分量。只记录规模大于 1 的分量，孤立
/// 顶点不出现在结果中；分量按种子顶点的出现顺序返回。
pub fn weakly_connected_components(graph: &Graph) -> Vec<Vec<&Vertex>> {
    let mut assigned: HashSet<&str> = HashSet::new();
    let mut components: Vec<Vec<&Vertex>> = Vec::new();

    for vertex in graph.get_vertices() {
        if assigned.contains(vertex.key()) {
            continue;
        }

        let component: Vec<&Vertex> =
            match BreadthFirst::new(graph, vertex.key(), TraversalMode::Undirected) {
                Ok(iter) => iter.collect(),
                // 种子来自图本身，构造不会失败
                Err(_) => continue,
            };

        for member in &component {
            assigned.insert(member.key());
        }

        if component.len() > 1 {
            tracing::debug!(seed = vertex.key(), size = component.len(), "发现弱连通分量");
            components.push(component);
        }
    }

    components
}
