
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::IMAGE_PIXELS;

/// 生成固定种子的随机 784 像素图像
fn random_image(seed: u64) -> Array1<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..IMAGE_PIXELS).map(|_| rng.r#gen::<u8>()).collect()
}
