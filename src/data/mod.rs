//! MNIST 训练记录模块
//!
//! 在[`record`](crate::record)之上实现 MNIST 样本的编解码与标准化。
//!
//! # 主要组件
//!
//! - [`encode`] / [`decode`]: (图像, 标签) 与序列化记录之间的转换
//! - [`encode_image`] / [`decode_image`]、[`encode_label`] / [`decode_label`]: 单个特征的编解码
//! - [`normalize`]: 用 MNIST 均值和标准差标准化图像
//!
//! # 使用示例
//!
//! ```ignore
//! use mnist_record::data::{decode, encode_to_bytes, normalize};
//!
//! let bytes = encode_to_bytes(&image, 7)?;
//! // ……写入外部存储，再读回……
//! let (image, label) = decode(&bytes)?;
//! let (image, label) = normalize(&image, label);
//! ```

mod convert;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use convert::{
    IMAGE_COLS, IMAGE_KEY, IMAGE_PIXELS, IMAGE_ROWS, LABEL_KEY, RawImage, decode, decode_image,
    decode_label, encode, encode_image, encode_label, encode_to_bytes, mnist_schema,
};
pub use transforms::{MNIST_MEAN, MNIST_STD, Normalization, normalize, to_gray_image};
