//! 图数据结构
//!
//! 顶点和边的唯一所有者，承担全部结构变更并维护全局不变量：
//! 顶点键唯一、每个有向顶点对至多一条边、边两端始终在图中。

use super::edge::{Edge, EdgeId};
use super::vertex::Vertex;
use crate::algorithm::{self, BreadthFirst, DepthFirst, PathResult, TraversalMode};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// 图
///
/// 顶点表和边表都保持插入序（顶点列举、边列举和弱连通分量的
/// 种子顺序都依赖这一点）。结构变更需要 `&mut Graph`，遍历只需
/// `&Graph`，借用检查保证两者不会交叠。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// 顶点表（键 -> 顶点）
    vertices: IndexMap<String, Vertex>,
    /// 边表（ID -> 边，创建序）
    edges: IndexMap<EdgeId, Edge>,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 插入顶点；键已存在时报错
    pub fn insert_vertex(&mut self, key: &str) -> Result<&Vertex> {
        if self.vertices.contains_key(key) {
            return Err(Error::VertexAlreadyExists(key.to_string()));
        }
        Ok(self
            .vertices
            .entry(key.to_string())
            .or_insert_with(|| Vertex::new(key)))
    }

    /// 移除顶点及其全部关联边；键不存在时无操作
    pub fn remove_vertex(&mut self, key: &str) -> Option<Vertex> {
        let incident = self.vertices.get(key)?.incident_edge_ids();
        for id in incident {
            self.remove_edge(id);
        }
        self.vertices.shift_remove(key)
    }

    /// 获取顶点
    pub fn get_vertex(&self, key: &str) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    /// 全部顶点（插入序）
    pub fn get_vertices(&self) -> Vec<&Vertex> {
        self.vertices.values().collect()
    }

    /// 顶点数量
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 建立单向连接 start -> end，返回新边的 ID
    ///
    /// 两端顶点必须已存在；同一有向顶点对至多一条边（反向另算）。
    /// 边登记到两端的关联边列表，自环只登记一次。
    pub fn connect_oneway(
        &mut self,
        start: &str,
        end: &str,
        label: Option<&str>,
        weight: Option<f64>,
    ) -> Result<EdgeId> {
        if !self.vertices.contains_key(start) {
            return Err(Error::VertexNotFound(start.to_string()));
        }
        if !self.vertices.contains_key(end) {
            return Err(Error::VertexNotFound(end.to_string()));
        }
        if self.directed_edge(start, end).is_some() {
            return Err(Error::AlreadyConnected(start.to_string(), end.to_string()));
        }

        let id = EdgeId::new(self.next_edge_id);
        let edge = Edge::new(
            id,
            start.to_string(),
            end.to_string(),
            label.map(str::to_string),
            weight,
        )?;

        self.next_edge_id += 1;
        self.edges.insert(id, edge);
        if let Some(v) = self.vertices.get_mut(start) {
            v.attach_edge(id);
        }
        if start != end {
            if let Some(v) = self.vertices.get_mut(end) {
                v.attach_edge(id);
            }
        }

        Ok(id)
    }

    /// 建立双向连接（两条反向的有向边），返回（正向, 反向）边 ID
    ///
    /// 先建 start -> end，再建 end -> start；第二条失败时不回滚
    /// 第一条，已建的边保留。
    pub fn connect_twoway(
        &mut self,
        start: &str,
        end: &str,
        label: Option<&str>,
        weight: Option<f64>,
    ) -> Result<(EdgeId, EdgeId)> {
        let forward = self.connect_oneway(start, end, label, weight)?;
        let backward = self.connect_oneway(end, start, label, weight)?;
        Ok((forward, backward))
    }

    /// 移除边并从两端的关联边列表撤销登记；未登记的 ID 无操作
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id)?;
        if let Some(v) = self.vertices.get_mut(edge.start()) {
            v.detach_edge(id);
        }
        if let Some(v) = self.vertices.get_mut(edge.end()) {
            v.detach_edge(id);
        }
        Some(edge)
    }

    /// 获取有向边 start -> end
    ///
    /// 顶点键不存在时报错；顶点都在但无此连接时返回 None。
    pub fn get_edge(&self, start: &str, end: &str) -> Result<Option<&Edge>> {
        if !self.vertices.contains_key(start) {
            return Err(Error::VertexNotFound(start.to_string()));
        }
        if !self.vertices.contains_key(end) {
            return Err(Error::VertexNotFound(end.to_string()));
        }
        Ok(self.directed_edge(start, end))
    }

    /// 按 ID 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// 按 ID 获取边（可变，用于更新权重）
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// 全部边（创建序）
    pub fn get_edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    /// 边数量
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// 在起点的关联边中查找 start -> end 的有向边（不校验顶点存在）
    fn directed_edge(&self, start: &str, end: &str) -> Option<&Edge> {
        let vertex = self.vertices.get(start)?;
        vertex
            .edge_ids()
            .iter()
            .filter_map(|id| self.edges.get(id))
            .find(|e| e.start() == start && e.end() == end)
    }

    /// 按键取顶点，不存在时报错
    fn vertex(&self, key: &str) -> Result<&Vertex> {
        self.vertices
            .get(key)
            .ok_or_else(|| Error::VertexNotFound(key.to_string()))
    }

    // ==================== 邻接查询 ====================

    /// 顶点的全部关联边（接入顺序）
    pub fn incident_edges(&self, key: &str) -> Result<Vec<&Edge>> {
        let vertex = self.vertex(key)?;
        Ok(vertex
            .edge_ids()
            .iter()
            .filter_map(|id| self.edges.get(id))
            .collect())
    }

    /// 出边（本顶点为起点），可按标签过滤
    pub fn outgoing_edges(&self, key: &str, label: Option<&str>) -> Result<Vec<&Edge>> {
        Ok(self
            .incident_edges(key)?
            .into_iter()
            .filter(|e| e.start() == key && e.matches_label(label))
            .collect())
    }

    /// 入边（本顶点为终点），可按标签过滤
    ///
    /// 自环同时出现在出边和入边中，但在关联边列表里只占一项。
    pub fn incoming_edges(&self, key: &str, label: Option<&str>) -> Result<Vec<&Edge>> {
        Ok(self
            .incident_edges(key)?
            .into_iter()
            .filter(|e| e.end() == key && e.matches_label(label))
            .collect())
    }

    /// 出边指向的邻居顶点（接入顺序），可按标签过滤
    pub fn neighbors(&self, key: &str, label: Option<&str>) -> Result<Vec<&Vertex>> {
        Ok(self
            .outgoing_edges(key, label)?
            .into_iter()
            .filter_map(|e| self.vertices.get(e.end()))
            .collect())
    }

    /// 入边来源的前驱顶点（接入顺序），可按标签过滤
    pub fn predecessors(&self, key: &str, label: Option<&str>) -> Result<Vec<&Vertex>> {
        Ok(self
            .incoming_edges(key, label)?
            .into_iter()
            .filter_map(|e| self.vertices.get(e.start()))
            .collect())
    }

    /// 每条关联边的对端顶点（接入顺序；多重连接时可能重复）
    pub fn adjacent_vertices(&self, key: &str) -> Result<Vec<&Vertex>> {
        let vertex = self.vertex(key)?;
        let mut adjacents = Vec::with_capacity(vertex.degree());
        for edge in self.incident_edges(key)? {
            let opposite = vertex.opposite(edge)?;
            if let Some(v) = self.vertices.get(opposite) {
                adjacents.push(v);
            }
        }
        Ok(adjacents)
    }

    /// 关联边总数（自环计一次）
    pub fn degree(&self, key: &str) -> Result<usize> {
        Ok(self.vertex(key)?.degree())
    }

    /// 出度，可按标签过滤
    pub fn out_degree(&self, key: &str, label: Option<&str>) -> Result<usize> {
        Ok(self.outgoing_edges(key, label)?.len())
    }

    /// 入度，可按标签过滤
    pub fn in_degree(&self, key: &str, label: Option<&str>) -> Result<usize> {
        Ok(self.incoming_edges(key, label)?.len())
    }

    /// 入度为 0
    pub fn is_source(&self, key: &str) -> Result<bool> {
        Ok(self.in_degree(key, None)? == 0)
    }

    /// 出度为 0
    pub fn is_sink(&self, key: &str) -> Result<bool> {
        Ok(self.out_degree(key, None)? == 0)
    }

    /// 度恰为 1
    pub fn is_leaf(&self, key: &str) -> Result<bool> {
        Ok(self.vertex(key)?.is_leaf())
    }

    /// 度为 0
    pub fn is_isolated(&self, key: &str) -> Result<bool> {
        Ok(self.vertex(key)?.is_isolated())
    }

    /// 是否为全连接顶点：不同邻居（不区分方向）数等于顶点总数减一
    pub fn is_universal_vertex(&self, key: &str) -> Result<bool> {
        let distinct: HashSet<&str> = self
            .adjacent_vertices(key)?
            .into_iter()
            .map(Vertex::key)
            .collect();
        Ok(distinct.len() == self.num_vertices() - 1)
    }

    // ==================== 遍历与搜索 ====================

    /// 广度优先惰性迭代器；重新遍历需构造新的迭代器
    pub fn breadth_first_iter(&self, start: &str, mode: TraversalMode) -> Result<BreadthFirst<'_>> {
        BreadthFirst::new(self, start, mode)
    }

    /// 深度优先惰性迭代器；重新遍历需构造新的迭代器
    pub fn depth_first_iter(&self, start: &str, mode: TraversalMode) -> Result<DepthFirst<'_>> {
        DepthFirst::new(self, start, mode)
    }

    /// 广度优先遍历；`visit` 返回 true 时提前终止
    pub fn breadth_first_traversal<F>(&self, start: &str, mode: TraversalMode, visit: F) -> Result<()>
    where
        F: FnMut(&Vertex) -> bool,
    {
        algorithm::breadth_first_traversal(self, start, mode, visit)
    }

    /// 深度优先遍历；`visit` 返回 true 时提前终止
    pub fn depth_first_traversal<F>(&self, start: &str, mode: TraversalMode, visit: F) -> Result<()>
    where
        F: FnMut(&Vertex) -> bool,
    {
        algorithm::depth_first_traversal(self, start, mode, visit)
    }

    /// 广度优先搜索首个键匹配的顶点；遍历耗尽无匹配时返回 None
    pub fn breadth_first_search(
        &self,
        start: &str,
        target: &str,
        mode: TraversalMode,
    ) -> Result<Option<&Vertex>> {
        algorithm::breadth_first_search(self, start, target, mode)
    }

    /// 深度优先搜索首个键匹配的顶点；遍历耗尽无匹配时返回 None
    pub fn depth_first_search(
        &self,
        start: &str,
        target: &str,
        mode: TraversalMode,
    ) -> Result<Option<&Vertex>> {
        algorithm::depth_first_search(self, start, target, mode)
    }

    /// 按边权重的最短路径搜索；目标不可达时返回 None
    pub fn find_path(&self, start: &str, end: &str) -> Result<Option<PathResult>> {
        algorithm::find_path(self, start, end)
    }

    /// 两点间是否存在有向路径
    pub fn is_reachable(&self, start: &str, end: &str) -> Result<bool> {
        algorithm::is_reachable(self, start, end)
    }

    /// 弱连通分量（忽略边方向；只返回规模大于 1 的分量）
    pub fn weakly_connected_components(&self) -> Vec<Vec<&Vertex>> {
        algorithm::weakly_connected_components(self)
    }
}
