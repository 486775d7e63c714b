// ==========================================
// AI 智能体投资回报分析 - 随机源
// ==========================================
// 所有抽样从调用方注入的 Rng 取数，不使用全局随机状态
// 标准随机源: ChaCha8Rng（跨平台可复现）
// ==========================================

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// 仿真使用的标准随机源
pub type SimRng = ChaCha8Rng;

/// 构造随机源
///
/// # 参数
/// - seed: 固定种子；None 时从线程随机源取种子
///
/// # 返回
/// (随机源, 实际使用的种子)，种子需记入日志以便复现
pub fn seeded_rng(seed: Option<u64>) -> (SimRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (SimRng::seed_from_u64(seed), seed)
}

/// 按权重抽取下标（累计概率法）
///
/// 权重无需归一化；全部为零时返回最后一个下标
pub fn categorical<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let r: f64 = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (idx, w) in weights.iter().enumerate() {
        cumulative += w;
        if r < cumulative {
            return idx;
        }
    }
    weights.len().saturating_sub(1)
}

/// 正态分布抽样 N(mean, std_dev)
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let (mut a, seed_a) = seeded_rng(Some(42));
        let (mut b, seed_b) = seeded_rng(Some(42));
        assert_eq!(seed_a, seed_b);
        for _ in 0..100 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_categorical_respects_zero_weights() {
        let (mut rng, _) = seeded_rng(Some(7));
        for _ in 0..1000 {
            let idx = categorical(&mut rng, &[0.0, 1.0, 0.0]);
            assert_eq!(idx, 1);
        }
    }

    #[test]
    fn test_categorical_frequencies() {
        let (mut rng, _) = seeded_rng(Some(11));
        let mut counts = [0usize; 3];
        let n = 20_000;
        for _ in 0..n {
            counts[categorical(&mut rng, &[0.5, 0.3, 0.2])] += 1;
        }
        let p0 = counts[0] as f64 / n as f64;
        assert!((p0 - 0.5).abs() < 0.03, "p0={}", p0);
    }

    #[test]
    fn test_normal_mean() {
        let (mut rng, _) = seeded_rng(Some(3));
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| normal(&mut rng, 10.0, 5.0)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.2, "mean={}", mean);
    }
}
