//! # 晶粒取向数据模型
//!
//! Bunge 约定的欧拉角 (phi1, Phi, phi2)，单位为度。
//! 每条记录对应多晶体聚合体中的一个晶粒，文件行序即晶粒序。
//!
//! ## 依赖关系
//! - 被 `parsers/euler_csv.rs` 反序列化
//! - 被 `cp/polycrystal.rs` 用于 Schmid 张量旋转

use serde::Deserialize;

/// 晶粒取向（Bunge 欧拉角，度）
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CrystalOrientation {
    /// 第一转角 phi1（绕 Z）
    pub phi1: f64,
    /// 第二转角 Phi（绕 X'）
    pub phi: f64,
    /// 第三转角 phi2（绕 Z''）
    pub phi2: f64,
}

impl CrystalOrientation {
    /// 创建新的取向记录
    pub fn new(phi1: f64, phi: f64, phi2: f64) -> Self {
        Self { phi1, phi, phi2 }
    }

    /// 计算 Bunge 旋转矩阵 g（样品坐标系 → 晶体坐标系）
    ///
    /// 晶体坐标系中的向量 v_c 与样品坐标系中的 v_s 满足 v_c = g v_s，
    /// 反变换使用 g 的转置。
    pub fn rotation_matrix(&self) -> [[f64; 3]; 3] {
        let (s1, c1) = self.phi1.to_radians().sin_cos();
        let (s, c) = self.phi.to_radians().sin_cos();
        let (s2, c2) = self.phi2.to_radians().sin_cos();

        [
            [c1 * c2 - s1 * s2 * c, s1 * c2 + c1 * s2 * c, s2 * s],
            [-c1 * s2 - s1 * c2 * c, -s1 * s2 + c1 * c2 * c, c2 * s],
            [s1 * s, -c1 * s, c],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < TOL, "{} != {}", a, b);
    }

    #[test]
    fn test_identity_orientation() {
        let g = CrystalOrientation::new(0.0, 0.0, 0.0).rotation_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_close(g[i][j], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        // phi1 = 90°: 样品 x 轴映射到晶体 -y 方向
        let g = CrystalOrientation::new(90.0, 0.0, 0.0).rotation_matrix();
        let expected = [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_close(g[i][j], expected[i][j]);
            }
        }
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let g = CrystalOrientation::new(31.0, 47.5, 212.0).rotation_matrix();

        // g gᵀ = I
        for i in 0..3 {
            for j in 0..3 {
                let dot: f64 = (0..3).map(|k| g[i][k] * g[j][k]).sum();
                assert_close(dot, if i == j { 1.0 } else { 0.0 });
            }
        }

        // det g = +1
        let det = g[0][0] * (g[1][1] * g[2][2] - g[1][2] * g[2][1])
            - g[0][1] * (g[1][0] * g[2][2] - g[1][2] * g[2][0])
            + g[0][2] * (g[1][0] * g[2][1] - g[1][1] * g[2][0]);
        assert_close(det, 1.0);
    }
}
