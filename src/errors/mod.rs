use thiserror::Error;
mod schema;
pub use self::schema::*;

/// 训练记录编解码相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// 字节流无法（反）序列化，例如被截断、含多余尾部字节或根本不是记录
    #[error("记录格式错误: {0}")]
    Malformed(String),

    /// 记录与解析所用的schema不符
    #[error("记录与schema不符: {0}")]
    SchemaMismatch(#[from] SchemaError),

    /// 形状不匹配
    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
}

impl From<bincode::Error> for RecordError {
    fn from(err: bincode::Error) -> Self {
        RecordError::Malformed(err.to_string())
    }
}
