//! 边定义

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（图内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 默认边权重
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// 边
///
/// 有向连接：两端顶点键在构造后不可变，权重恒为正（默认 1），
/// 标签可选。双向连接以两条反向的有向边表示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点键
    start: String,
    /// 终点键
    end: String,
    /// 标签
    label: Option<String>,
    /// 权重
    weight: f64,
}

impl Edge {
    /// 创建新边；权重缺省为 1，非正权重报错
    pub(crate) fn new(
        id: EdgeId,
        start: String,
        end: String,
        label: Option<String>,
        weight: Option<f64>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            start,
            end,
            label,
            weight: validate_weight(weight)?,
        })
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取起点键
    pub fn start(&self) -> &str {
        &self.start
    }

    /// 获取终点键
    pub fn end(&self) -> &str {
        &self.end
    }

    /// 两端顶点键，按（起点, 终点）顺序
    pub fn end_vertices(&self) -> (&str, &str) {
        (&self.start, &self.end)
    }

    /// 获取标签
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 获取权重
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// 设置权重
    ///
    /// `None` 重置为默认权重 1（与构造行为一致）；非正权重报错，
    /// 原权重保持不变。
    pub fn set_weight(&mut self, weight: Option<f64>) -> Result<()> {
        self.weight = validate_weight(weight)?;
        Ok(())
    }

    /// 标签过滤匹配；`None` 匹配所有边
    pub(crate) fn matches_label(&self, label: Option<&str>) -> bool {
        match label {
            Some(l) => self.label.as_deref() == Some(l),
            None => true,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if let Some(label) = &self.label {
            write!(f, " [{}]", label)?;
        }
        if self.weight != DEFAULT_WEIGHT {
            write!(f, " ({})", self.weight)?;
        }
        Ok(())
    }
}

fn validate_weight(weight: Option<f64>) -> Result<f64> {
    match weight {
        Some(w) if w <= 0.0 => Err(Error::InvalidWeight(w)),
        Some(w) => Ok(w),
        None => Ok(DEFAULT_WEIGHT),
    }
}
