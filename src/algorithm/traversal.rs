//! 图遍历引擎
//!
//! 广度/深度优先遍历的惰性迭代器状态机，以及回调驱动的遍历和
//! 顶点搜索封装。每次遍历构造全新状态；遍历持有 `&Graph`，
//! 期间无法对图做结构变更。

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// 遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TraversalMode {
    /// 只沿出边方向
    #[default]
    Directed,
    /// 忽略边方向，沿全部关联边
    Undirected,
}

/// 按遍历方向取某顶点的下一步顶点集（接入顺序）
fn connected_vertices<'g>(graph: &'g Graph, key: &str, mode: TraversalMode) -> Vec<&'g Vertex> {
    let result = match mode {
        TraversalMode::Directed => graph.neighbors(key, None),
        TraversalMode::Undirected => graph.adjacent_vertices(key),
    };
    // 边界中的键都来自图本身，查询不会失败
    result.unwrap_or_default()
}

/// 广度优先迭代器
///
/// 队列式边界；邻居入队时即标记已访问，每个顶点只产出一次。
pub struct BreadthFirst<'g> {
    graph: &'g Graph,
    mode: TraversalMode,
    frontier: VecDeque<&'g str>,
    visited: HashSet<&'g str>,
}

impl<'g> BreadthFirst<'g> {
    /// 从起点构造；起点不存在时报错
    pub fn new(graph: &'g Graph, start: &str, mode: TraversalMode) -> Result<Self> {
        let start = graph
            .get_vertex(start)
            .map(Vertex::key)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        let mut visited = HashSet::new();
        visited.insert(start);

        Ok(Self {
            graph,
            mode,
            frontier,
            visited,
        })
    }
}

impl<'g> Iterator for BreadthFirst<'g> {
    type Item = &'g Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.frontier.pop_front()?;
        let vertex = self.graph.get_vertex(key)?;

        for other in connected_vertices(self.graph, key, self.mode) {
            if self.visited.insert(other.key()) {
                self.frontier.push_back(other.key());
            }
        }

        Some(vertex)
    }
}

/// 深度优先迭代器
///
/// 栈式边界；邻居入栈时不过滤，出栈时按已访问集惰性去重：
/// 同一顶点可以在边界中出现多次，但只在首次出栈时产出。
pub struct DepthFirst<'g> {
    graph: &'g Graph,
    mode: TraversalMode,
    frontier: Vec<&'g str>,
    visited: HashSet<&'g str>,
}

impl<'g> DepthFirst<'g> {
    /// 从起点构造；起点不存在时报错
    pub fn new(graph: &'g Graph, start: &str, mode: TraversalMode) -> Result<Self> {
        let start = graph
            .get_vertex(start)
            .map(Vertex::key)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

        Ok(Self {
            graph,
            mode,
            frontier: vec![start],
            visited: HashSet::new(),
        })
    }
}

impl<'g> Iterator for DepthFirst<'g> {
    type Item = &'g Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(key) = self.frontier.pop() {
            if !self.visited.insert(key) {
                continue;
            }

            for other in connected_vertices(self.graph, key, self.mode) {
                self.frontier.push(other.key());
            }

            return self.graph.get_vertex(key);
        }
        None
    }
}

/// 广度优先遍历；`on_visit` 返回 true 时提前终止
pub fn breadth_first_traversal<F>(
    graph: &Graph,
    start: &str,
    mode: TraversalMode,
    mut on_visit: F,
) -> Result<()>
where
    F: FnMut(&Vertex) -> bool,
{
    for vertex in BreadthFirst::new(graph, start, mode)? {
        if on_visit(vertex) {
            break;
        }
    }
    Ok(())
}

/// 深度优先遍历；`on_visit` 返回 true 时提前终止
pub fn depth_first_traversal<F>(
    graph: &Graph,
    start: &str,
    mode: TraversalMode,
    mut on_visit: F,
) -> Result<()>
where
    F: FnMut(&Vertex) -> bool,
{
    for vertex in DepthFirst::new(graph, start, mode)? {
        if on_visit(vertex) {
            break;
        }
    }
    Ok(())
}

/// 广度优先搜索首个键等于 `target` 的顶点
pub fn breadth_first_search<'g>(
    graph: &'g Graph,
    start: &str,
    target: &str,
    mode: TraversalMode,
) -> Result<Option<&'g Vertex>> {
    Ok(BreadthFirst::new(graph, start, mode)?.find(|v| v.key() == target))
}

/// 深度优先搜索首个键等于 `target` 的顶点
pub fn depth_first_search<'g>(
    graph: &'g Graph,
    start: &str,
    target: &str,
    mode: TraversalMode,
) -> Result<Option<&'g Vertex>> {
    Ok(DepthFirst::new(graph, start, mode)?.find(|v| v.key() == target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{self, ConnectionRecord};

    /// 测试拓扑：a -> b -> c -> {d, e}，e -> h，f、g 孤立
    fn network_graph() -> Graph {
        let records = vec![
            ConnectionRecord::edge("a", "b"),
            ConnectionRecord::edge("b", "c"),
            ConnectionRecord::edge("c", "d"),
            ConnectionRecord::edge("c", "e"),
            ConnectionRecord::vertex("f"),
            ConnectionRecord::vertex("g"),
            ConnectionRecord::edge("e", "h"),
        ];
        map::from_records(&records).unwrap()
    }

    #[test]
    fn test_depth_first_order() {
        let g = network_graph();
        let mut visited = Vec::new();

        g.depth_first_traversal("a", TraversalMode::Directed, |v| {
            visited.push(v.key().to_string());
            false
        })
        .unwrap();

        assert_eq!(visited, vec!["a", "b", "c", "e", "h", "d"]);
    }

    #[test]
    fn test_breadth_first_order() {
        let g = network_graph();
        let mut visited = Vec::new();

        g.breadth_first_traversal("a", TraversalMode::Directed, |v| {
            visited.push(v.key().to_string());
            false
        })
        .unwrap();

        assert_eq!(visited, vec!["a", "b", "c", "d", "e", "h"]);
    }

    #[test]
    fn test_early_stop() {
        let g = network_graph();
        let mut visited = Vec::new();

        g.breadth_first_traversal("a", TraversalMode::Directed, |v| {
            visited.push(v.key().to_string());
            v.key() == "c"
        })
        .unwrap();

        assert_eq!(visited, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_iterator_is_lazy_and_fresh() {
        let g = network_graph();

        // 迭代器惰性产出，可随时弃用
        let mut iter = g.depth_first_iter("a", TraversalMode::Directed).unwrap();
        assert_eq!(iter.next().unwrap().key(), "a");
        assert_eq!(iter.next().unwrap().key(), "b");
        drop(iter);

        // 重新遍历需构造新迭代器，结果与首次一致
        let first: Vec<_> = g
            .breadth_first_iter("a", TraversalMode::Directed)
            .unwrap()
            .map(|v| v.key().to_string())
            .collect();
        let second: Vec<_> = g
            .breadth_first_iter("a", TraversalMode::Directed)
            .unwrap()
            .map(|v| v.key().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_first_search() {
        let g = network_graph();

        assert_eq!(
            g.depth_first_search("a", "b", TraversalMode::Directed)
                .unwrap()
                .unwrap()
                .key(),
            "b"
        );
        // b 沿出边到不了 a，忽略方向则可达
        assert!(g
            .depth_first_search("b", "a", TraversalMode::Directed)
            .unwrap()
            .is_none());
        assert_eq!(
            g.depth_first_search("b", "a", TraversalMode::Undirected)
                .unwrap()
                .unwrap()
                .key(),
            "a"
        );
        assert!(g
            .depth_first_search("a", "f", TraversalMode::Directed)
            .unwrap()
            .is_none());
        // 孤立顶点能搜到自己
        assert_eq!(
            g.depth_first_search("f", "f", TraversalMode::Directed)
                .unwrap()
                .unwrap()
                .key(),
            "f"
        );
        assert!(g
            .depth_first_search("f", "g", TraversalMode::Directed)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_breadth_first_search() {
        let g = network_graph();

        assert_eq!(
            g.breadth_first_search("a", "e", TraversalMode::Directed)
                .unwrap()
                .unwrap()
                .key(),
            "e"
        );
        assert!(g
            .breadth_first_search("b", "a", TraversalMode::Directed)
            .unwrap()
            .is_none());
        assert_eq!(
            g.breadth_first_search("b", "a", TraversalMode::Undirected)
                .unwrap()
                .unwrap()
                .key(),
            "a"
        );
        assert_eq!(
            g.breadth_first_search("f", "f", TraversalMode::Directed)
                .unwrap()
                .unwrap()
                .key(),
            "f"
        );
    }

    #[test]
    fn test_missing_start() {
        let g = network_graph();

        assert!(matches!(
            g.breadth_first_iter("x", TraversalMode::Directed),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            g.depth_first_iter("x", TraversalMode::Undirected),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_undirected_traversal_crosses_direction() {
        // h 只有入边，无向遍历仍能回到整个连通块
        let g = network_graph();
        let mut visited = Vec::new();

        g.breadth_first_traversal("h", TraversalMode::Undirected, |v| {
            visited.push(v.key().to_string());
            false
        })
        .unwrap();

        assert_eq!(visited.len(), 6);
        assert_eq!(visited[0], "h");
        assert!(visited.iter().any(|k| k == "a"));
    }
}
