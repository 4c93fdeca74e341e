//! Topograph - 内存有向/无向标签图库
//!
//! 面向网络拓扑建模等场景的通用图抽象，支持：
//! - 带标签、带权重的有向边（双向连接以一对有向边表示）
//! - 按方向和标签过滤的邻接查询
//! - 广度/深度优先遍历（惰性迭代器）、顶点搜索
//! - 最短路径搜索与弱连通分量分析

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod map;

// 重导出常用类型
pub use algorithm::{BreadthFirst, DepthFirst, PathResult, TraversalMode};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex};
pub use map::ConnectionRecord;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
