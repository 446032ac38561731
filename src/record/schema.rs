use std::collections::BTreeMap;

use super::{Example, Feature, FeatureKind, Features};
use crate::errors::{RecordError, SchemaError};

/// 定长特征的解析规格：类型固定、值个数固定
///
/// 若记录中缺少该特征且设置了`default`，则以`default`代替；否则解析失败。
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLenFeature {
    pub kind: FeatureKind,
    pub len: usize,
    pub default: Option<Feature>,
}

impl FixedLenFeature {
    pub fn new(kind: FeatureKind, len: usize) -> Self {
        Self {
            kind,
            len,
            default: None,
        }
    }

    /// 单个字节串
    pub fn bytes() -> Self {
        Self::new(FeatureKind::Bytes, 1)
    }

    /// 单个64位整数
    pub fn int64() -> Self {
        Self::new(FeatureKind::Int64, 1)
    }

    /// 单个浮点数
    pub fn float() -> Self {
        Self::new(FeatureKind::Float, 1)
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_default(mut self, default: Feature) -> Self {
        self.default = Some(default);
        self
    }

    fn check(&self, name: &str, feature: &Feature) -> Result<(), SchemaError> {
        if feature.kind() != self.kind {
            return Err(SchemaError::WrongKind {
                name: name.to_string(),
                expected: self.kind,
                got: feature.kind(),
            });
        }
        if feature.len() != self.len {
            return Err(SchemaError::WrongLength {
                name: name.to_string(),
                expected: self.len,
                got: feature.len(),
            });
        }
        Ok(())
    }
}

/// 特征名到解析规格的映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    specs: BTreeMap<String, FixedLenFeature>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, spec: FixedLenFeature) -> Self {
        self.specs.insert(name.into(), spec);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FixedLenFeature)> {
        self.specs.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// 按`schema`解析单条序列化记录
///
/// 只返回`schema`中列出的特征，记录中多出的特征被忽略。
/// 任一特征缺失（且无默认值）、类型不符或值个数不符都会使整条记录解析失败，不会返回部分结果。
pub fn parse_single_example(serialized: &[u8], schema: &Schema) -> Result<Features, RecordError> {
    let mut features = Example::from_bytes(serialized)?.into_features();

    let mut parsed = Features::new();
    for (name, spec) in schema.iter() {
        let feature = match (features.remove(name), &spec.default) {
            (Some(feature), _) => feature,
            (None, Some(default)) => default.clone(),
            (None, None) => {
                tracing::debug!("记录缺少特征`{}`", name);
                return Err(SchemaError::MissingFeature {
                    name: name.to_string(),
                }
                .into());
            }
        };
        if let Err(e) = spec.check(name, &feature) {
            tracing::debug!("{}", e);
            return Err(e.into());
        }
        parsed.insert(name, feature);
    }
    Ok(parsed)
}
