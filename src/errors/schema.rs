use thiserror::Error;

use crate::record::FeatureKind;

/// 按schema解析记录时可能出现的不匹配情形
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("缺少特征`{name}`")]
    MissingFeature { name: String },

    #[error("特征`{name}`类型错误：期望{expected}，实际{got}")]
    WrongKind {
        name: String,
        expected: FeatureKind,
        got: FeatureKind,
    },

    #[error("特征`{name}`的值个数错误：期望{expected}个，实际{got}个")]
    WrongLength {
        name: String,
        expected: usize,
        got: usize,
    },
}
