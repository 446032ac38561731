//! 数据变换函数
//!
//! 提供 MNIST 图像的标准化，以及把解码后的像素数组还原为灰度图以便查看。

use image::GrayImage;
use ndarray::{Array, Array1, ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::convert::{IMAGE_COLS, IMAGE_PIXELS, IMAGE_ROWS};
use crate::errors::RecordError;

/// MNIST 训练集像素（缩放到 [0, 1] 后）的均值
pub const MNIST_MEAN: f32 = 0.1307;
/// MNIST 训练集像素（缩放到 [0, 1] 后）的标准差
pub const MNIST_STD: f32 = 0.3081;

/// 标准化参数：`(x / 255 - mean) / std`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub mean: f32,
    pub std: f32,
}

impl Normalization {
    pub const MNIST: Normalization = Normalization {
        mean: MNIST_MEAN,
        std: MNIST_STD,
    };

    pub fn new(mean: f32, std: f32) -> Self {
        Self { mean, std }
    }

    /// 先将 [0, 255] 的像素缩放到 [0, 1]，再逐元素做`(x - mean) / std`
    pub fn apply<A, S, D>(&self, image: &ArrayBase<S, D>) -> Array<f32, D>
    where
        A: AsPrimitive<f32>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        image.mapv(|pixel| (pixel.as_() / 255.0 - self.mean) / self.std)
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::MNIST
    }
}

/// 用 MNIST 的均值和标准差标准化图像，标签原样返回
///
/// # 参数
/// - `image`: 像素值范围 [0, 255] 的图像，单张 [784] 或批量 [N, 784] 均可
/// - `label`: 类别标签
///
/// # 返回
/// (标准化后的`f32`图像, 原标签)。像素 0 对应约 -0.4242，像素 255 对应约 2.8215。
pub fn normalize<A, S, D, L>(image: &ArrayBase<S, D>, label: L) -> (Array<f32, D>, L)
where
    A: AsPrimitive<f32>,
    S: Data<Elem = A>,
    D: Dimension,
{
    (Normalization::MNIST.apply(image), label)
}

/// 将 784 个像素还原为 28x28 的灰度图
pub fn to_gray_image(image: &Array1<u8>) -> Result<GrayImage, RecordError> {
    let pixels: Vec<u8> = image.iter().copied().collect();
    let got = pixels.len();
    GrayImage::from_raw(IMAGE_COLS as u32, IMAGE_ROWS as u32, pixels)
        .filter(|_| got == IMAGE_PIXELS)
        .ok_or(RecordError::ShapeMismatch {
            expected: vec![IMAGE_PIXELS],
            got: vec![got],
        })
}
