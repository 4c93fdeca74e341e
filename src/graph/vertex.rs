//! 顶点定义

use crate::error::{Error, Result};
use crate::graph::edge::{Edge, EdgeId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// 顶点
///
/// 键在所属图内唯一，创建后不可变。关联边列表按接入顺序保存边句柄，
/// 入边和出边混排；自环只登记一次。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点键
    key: String,
    /// 关联边句柄（接入顺序）
    edges: SmallVec<[EdgeId; 4]>,
}

impl Vertex {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            edges: SmallVec::new(),
        }
    }

    /// 获取顶点键
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 关联边总数（入边 + 出边，自环计一次）
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// 关联边句柄列表（拷贝，按接入顺序）
    pub fn incident_edge_ids(&self) -> Vec<EdgeId> {
        self.edges.to_vec()
    }

    /// 度恰为 1
    pub fn is_leaf(&self) -> bool {
        self.degree() == 1
    }

    /// 没有任何关联边
    pub fn is_isolated(&self) -> bool {
        self.degree() == 0
    }

    /// 返回边上与本顶点相对的另一端的键
    ///
    /// 自环返回本顶点自身的键；边不关联本顶点时报错。
    pub fn opposite<'a>(&self, edge: &'a Edge) -> Result<&'a str> {
        if edge.start() == self.key {
            Ok(edge.end())
        } else if edge.end() == self.key {
            Ok(edge.start())
        } else {
            Err(Error::EdgeNotAttached(self.key.clone()))
        }
    }

    /// 关联边句柄切片（内部使用，避免拷贝）
    pub(crate) fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    /// 登记一条关联边（仅由 Graph 调用，不做校验）
    pub(crate) fn attach_edge(&mut self, id: EdgeId) {
        self.edges.push(id);
    }

    /// 从关联边列表移除一条边（幂等：不存在时无操作）
    pub(crate) fn detach_edge(&mut self, id: EdgeId) {
        if let Some(pos) = self.edges.iter().position(|&e| e == id) {
            self.edges.remove(pos);
        }
    }
}
