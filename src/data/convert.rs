//! MNIST 样本与训练记录之间的编解码
//!
//! 一条 MNIST 记录恰好含两个特征：
//! - `image`：单个字节串，即 28x28 图像按行优先排列的原始内存字节；
//! - `label`：单个64位整数，即类别标签。

use image::GrayImage;
use ndarray::{Array1, ArrayBase, Data, Dimension};
use num_traits::ToBytes;

use crate::errors::RecordError;
use crate::record::{Example, Feature, Features, FixedLenFeature, Schema, parse_single_example};

pub const IMAGE_ROWS: usize = 28;
pub const IMAGE_COLS: usize = 28;
pub const IMAGE_PIXELS: usize = IMAGE_ROWS * IMAGE_COLS;

pub const IMAGE_KEY: &str = "image";
pub const LABEL_KEY: &str = "label";

/// 能给出自身原始内存字节的图像
///
/// 字节按元素的本机字节序、逻辑上的行优先顺序排列。
/// 不检查形状和元素类型：784 个`u8`之外的输入照样能编码，只是之后解码时才会出错。
pub trait RawImage {
    fn raw_bytes(&self) -> Vec<u8>;
}

impl<A, S, D> RawImage for ArrayBase<S, D>
where
    A: ToBytes,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn raw_bytes(&self) -> Vec<u8> {
        // `iter()`总是按逻辑行优先顺序遍历，与内存布局无关
        let mut bytes = Vec::with_capacity(self.len() * std::mem::size_of::<A>());
        for value in self.iter() {
            bytes.extend_from_slice(value.to_ne_bytes().as_ref());
        }
        bytes
    }
}

impl<A: ToBytes> RawImage for [A] {
    fn raw_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(std::mem::size_of_val(self));
        for value in self {
            bytes.extend_from_slice(value.to_ne_bytes().as_ref());
        }
        bytes
    }
}

impl<A: ToBytes> RawImage for Vec<A> {
    fn raw_bytes(&self) -> Vec<u8> {
        self.as_slice().raw_bytes()
    }
}

impl RawImage for GrayImage {
    fn raw_bytes(&self) -> Vec<u8> {
        self.as_raw().clone()
    }
}

/// 将图像编码为字节串特征
pub fn encode_image<I: RawImage + ?Sized>(image: &I) -> Feature {
    Feature::bytes(vec![image.raw_bytes()])
}

/// 将字节串解码为 784 个像素的`u8`数组，长度不为 784 时返回`ShapeMismatch`
pub fn decode_image(bytes: &[u8]) -> Result<Array1<u8>, RecordError> {
    if bytes.len() != IMAGE_PIXELS {
        return Err(RecordError::ShapeMismatch {
            expected: vec![IMAGE_PIXELS],
            got: vec![bytes.len()],
        });
    }
    Ok(Array1::from(bytes.to_vec()))
}

/// 将标签编码为长度为 1 的64位整数列表特征
pub fn encode_label(label: i64) -> Feature {
    Feature::int64(vec![label])
}

/// 将存储的64位标签收窄为32位
///
/// 超出`i32`范围的值不报错，而是按`as`的语义只保留低 32 位
/// （如`i32::MAX as i64 + 1`得到`i32::MIN`）。
pub fn decode_label(label: i64) -> i32 {
    label as i32
}

/// MNIST 记录的解析规格：`image`为单个字节串，`label`为单个64位整数
pub fn mnist_schema() -> Schema {
    Schema::new()
        .with(IMAGE_KEY, FixedLenFeature::bytes())
        .with(LABEL_KEY, FixedLenFeature::int64())
}

/// 将一个 (图像, 标签) 样本编码为记录
pub fn encode<I: RawImage + ?Sized>(image: &I, label: i64) -> Example {
    let features: Features = [
        (IMAGE_KEY, encode_image(image)),
        (LABEL_KEY, encode_label(label)),
    ]
    .into_iter()
    .collect();
    Example::new(features)
}

/// 编码并立即序列化为字节流
pub fn encode_to_bytes<I: RawImage + ?Sized>(image: &I, label: i64) -> Result<Vec<u8>, RecordError> {
    let bytes = encode(image, label).to_bytes()?;
    tracing::trace!("编码 MNIST 记录：{} 字节", bytes.len());
    Ok(bytes)
}

/// 从序列化的记录中还原 (图像, 标签)
///
/// 记录不符合 MNIST 的两特征规格时返回`Malformed`或`SchemaMismatch`，
/// 图像字节数不为 784 时返回`ShapeMismatch`。
pub fn decode(serialized: &[u8]) -> Result<(Array1<u8>, i32), RecordError> {
    let features = parse_single_example(serialized, &mnist_schema())?;

    // 规格已保证两个特征都存在且各含恰好一个值
    let (image, label) = match (features.get(IMAGE_KEY), features.get(LABEL_KEY)) {
        (Some(Feature::BytesList(image)), Some(Feature::Int64List(label))) => (&image[0], label[0]),
        _ => unreachable!("parse_single_example 已按 mnist_schema 校验过特征"),
    };

    let image = decode_image(image).inspect_err(|e| tracing::debug!("{}", e))?;
    tracing::trace!("解码 MNIST 记录：{} 字节", serialized.len());
    Ok((image, decode_label(label)))
}
