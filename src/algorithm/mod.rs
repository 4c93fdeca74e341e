//! 图算法模块
//!
//! 包含遍历引擎、最短路径搜索和弱连通分量分析

mod components;
mod path_finding;
mod traversal;

pub use components::weakly_connected_components;
pub use path_finding::{find_path, is_reachable, PathResult};
pub use traversal::{
    breadth_first_search, breadth_first_traversal, depth_first_search, depth_first_traversal,
    BreadthFirst, DepthFirst, TraversalMode,
};
