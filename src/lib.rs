//! # MNIST Record
//!
//! `mnist_record`负责把 MNIST 风格的 (图像, 标签) 样本编码为二进制训练记录、
//! 从记录中解码还原，并对图像做训练前的标准化。
//!
//! - [`record`]: 通用的具名特征记录容器及其序列化、按schema解析
//! - [`data`]: MNIST 专用的编解码与标准化
//! - [`errors`]: 错误类型

pub mod data;
pub mod errors;
pub mod record;
