//! 训练记录容器
//!
//! 一条记录（[`Example`]）就是一组带名字的特征（[`Features`]），
//! 每个特征（[`Feature`]）是字节串列表、64位整数列表或32位浮点数列表之一。
//! 记录经 bincode 序列化为不透明的字节流，供外部存储层保存。
//!
//! # 使用示例
//!
//! ```ignore
//! use mnist_record::record::{Example, Feature, Features};
//!
//! let mut features = Features::new();
//! features.insert("label", Feature::int64(vec![7]));
//! let bytes = Example::new(features).to_bytes()?;
//! let example = Example::from_bytes(&bytes)?;
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

mod schema;

#[cfg(test)]
mod tests;

pub use schema::{FixedLenFeature, Schema, parse_single_example};

/// 特征值的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Bytes,
    Int64,
    Float,
}
impl Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            FeatureKind::Bytes => "字节串列表",
            FeatureKind::Int64 => "64位整数列表",
            FeatureKind::Float => "浮点数列表",
        };
        write!(f, "{}", kind_name)
    }
}

/// 单个特征：某一类型的值列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    BytesList(Vec<Vec<u8>>),
    Int64List(Vec<i64>),
    FloatList(Vec<f32>),
}

impl Feature {
    pub fn bytes(values: Vec<Vec<u8>>) -> Self {
        Feature::BytesList(values)
    }

    pub fn int64(values: Vec<i64>) -> Self {
        Feature::Int64List(values)
    }

    pub fn float(values: Vec<f32>) -> Self {
        Feature::FloatList(values)
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::BytesList(_) => FeatureKind::Bytes,
            Feature::Int64List(_) => FeatureKind::Int64,
            Feature::FloatList(_) => FeatureKind::Float,
        }
    }

    /// 列表中值的个数（对字节串列表而言是字节串的个数，而非总字节数）
    pub fn len(&self) -> usize {
        match self {
            Feature::BytesList(v) => v.len(),
            Feature::Int64List(v) => v.len(),
            Feature::FloatList(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes_list(&self) -> Option<&[Vec<u8>]> {
        match self {
            Feature::BytesList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int64_list(&self) -> Option<&[i64]> {
        match self {
            Feature::Int64List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_list(&self) -> Option<&[f32]> {
        match self {
            Feature::FloatList(v) => Some(v),
            _ => None,
        }
    }
}

/// 按名字索引的特征集合
///
/// 内部用`BTreeMap`保存，使同一组特征的序列化结果与插入顺序无关。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    feature: BTreeMap<String, Feature>,
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入特征，若同名特征已存在则返回被替换的旧值
    pub fn insert(&mut self, name: impl Into<String>, feature: Feature) -> Option<Feature> {
        self.feature.insert(name.into(), feature)
    }

    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.feature.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Feature> {
        self.feature.remove(name)
    }

    pub fn len(&self) -> usize {
        self.feature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.feature.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Feature)> for Features {
    fn from_iter<I: IntoIterator<Item = (K, Feature)>>(iter: I) -> Self {
        let feature = iter
            .into_iter()
            .map(|(name, feature)| (name.into(), feature))
            .collect();
        Self { feature }
    }
}

/// 顶层记录容器
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    features: Features,
}

impl Example {
    pub fn new(features: Features) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn into_features(self) -> Features {
        self.features
    }

    /// 将记录序列化为字节流
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(wire_options().serialize(self)?)
    }

    /// 从字节流还原记录；被截断、含多余尾部字节或内容非法时返回`RecordError::Malformed`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        wire_options().deserialize(bytes).map_err(|e| {
            tracing::debug!("记录反序列化失败（{} 字节）: {}", bytes.len(), e);
            RecordError::from(e)
        })
    }
}

/// 记录的线上格式：定长整数、小端序，拒绝尾部多余字节
fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}
