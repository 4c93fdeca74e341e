//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点 '{0}' 已存在于图中")]
    VertexAlreadyExists(String),

    #[error("顶点 '{0}' 不存在")]
    VertexNotFound(String),

    #[error("顶点 '{0}' 已连接到 '{1}'")]
    AlreadyConnected(String, String),

    #[error("边未关联到顶点 '{0}'")]
    EdgeNotAttached(String),

    #[error("无效的边权重 {0}: 权重必须为正数")]
    InvalidWeight(f64),

    #[error("导入错误: {0}")]
    ImportError(String),
}
