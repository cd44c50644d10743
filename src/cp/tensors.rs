//! # 对称张量工具
//!
//! 对称二阶张量的 Mandel 6 维向量表示及配套小型线性代数。
//!
//! ## Mandel 记号
//! 分量顺序 [11, 22, 33, 23, 13, 12]，剪切分量乘 √2。
//! 该记号下 6 维向量点积等于完整张量双点积 A:B，
//! 各向同性弹性算子保持逐分量形式。
//!
//! ## 依赖关系
//! - 被 `cp/` 各本构模块使用
//! - 被 `drivers/` 使用

use std::ops::{Add, Mul, Sub};

const SQRT2: f64 = std::f64::consts::SQRT_2;

/// 对称二阶张量（Mandel 6 维向量）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymTensor(pub [f64; 6]);

impl SymTensor {
    /// 零张量
    pub fn zero() -> Self {
        Self([0.0; 6])
    }

    /// 从完整 3x3 对称矩阵构造
    pub fn from_matrix(m: &[[f64; 3]; 3]) -> Self {
        Self([
            m[0][0],
            m[1][1],
            m[2][2],
            SQRT2 * 0.5 * (m[1][2] + m[2][1]),
            SQRT2 * 0.5 * (m[0][2] + m[2][0]),
            SQRT2 * 0.5 * (m[0][1] + m[1][0]),
        ])
    }

    /// 还原为完整 3x3 矩阵
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        let d = &self.0;
        let s23 = d[3] / SQRT2;
        let s13 = d[4] / SQRT2;
        let s12 = d[5] / SQRT2;
        [
            [d[0], s12, s13],
            [s12, d[1], s23],
            [s13, s23, d[2]],
        ]
    }

    /// 张量双点积 A:B（Mandel 记号下即向量点积）
    pub fn dot(&self, other: &SymTensor) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Frobenius 范数
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// 迹
    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[1] + self.0[2]
    }
}

impl Add for SymTensor {
    type Output = SymTensor;

    fn add(self, rhs: SymTensor) -> SymTensor {
        let mut out = [0.0; 6];
        for i in 0..6 {
            out[i] = self.0[i] + rhs.0[i];
        }
        SymTensor(out)
    }
}

impl Sub for SymTensor {
    type Output = SymTensor;

    fn sub(self, rhs: SymTensor) -> SymTensor {
        let mut out = [0.0; 6];
        for i in 0..6 {
            out[i] = self.0[i] - rhs.0[i];
        }
        SymTensor(out)
    }
}

impl Mul<f64> for SymTensor {
    type Output = SymTensor;

    fn mul(self, rhs: f64) -> SymTensor {
        let mut out = [0.0; 6];
        for i in 0..6 {
            out[i] = self.0[i] * rhs;
        }
        SymTensor(out)
    }
}

/// 对称化外积 sym(a ⊗ b) 的 Mandel 表示
pub fn sym_outer(a: &[f64; 3], b: &[f64; 3]) -> SymTensor {
    SymTensor([
        a[0] * b[0],
        a[1] * b[1],
        a[2] * b[2],
        SQRT2 * 0.5 * (a[1] * b[2] + a[2] * b[1]),
        SQRT2 * 0.5 * (a[0] * b[2] + a[2] * b[0]),
        SQRT2 * 0.5 * (a[0] * b[1] + a[1] * b[0]),
    ])
}

/// 矩阵转置乘向量 mᵀ v（用于晶体系 → 样品系的旋转）
pub fn transpose_mat_vec(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
        m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
        m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
    ]
}

/// 向量点积
pub fn dot3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 归一化为单位向量
pub fn normalize3(v: &[f64; 3]) -> [f64; 3] {
    let len = dot3(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

/// 高斯消元求解 NxN 线性方程组（部分主元），奇异时返回 None
pub fn gauss_solve<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> Option<[f64; N]> {
    for col in 0..N {
        // 选主元
        let mut pivot = col;
        for row in (col + 1)..N {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-300 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        // 消元
        for row in (col + 1)..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // 回代
    let mut x = [0.0; N];
    for col in (0..N).rev() {
        let mut sum = b[col];
        for k in (col + 1)..N {
            sum -= a[col][k] * x[k];
        }
        x[col] = sum / a[col][col];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandel_round_trip() {
        let m = [[1.0, 4.0, 5.0], [4.0, 2.0, 6.0], [5.0, 6.0, 3.0]];
        let t = SymTensor::from_matrix(&m);
        let back = t.to_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert!((back[i][j] - m[i][j]).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn test_mandel_dot_equals_full_contraction() {
        let ma = [[1.0, 4.0, 5.0], [4.0, 2.0, 6.0], [5.0, 6.0, 3.0]];
        let mb = [[-2.0, 0.5, 1.5], [0.5, 3.0, -1.0], [1.5, -1.0, 0.7]];

        let mut full = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                full += ma[i][j] * mb[i][j];
            }
        }

        let mandel = SymTensor::from_matrix(&ma).dot(&SymTensor::from_matrix(&mb));
        assert!((mandel - full).abs() < 1e-12);
    }

    #[test]
    fn test_sym_outer_traceless_for_orthogonal_vectors() {
        let a = normalize3(&[1.0, 1.0, 0.0]);
        let b = normalize3(&[1.0, -1.0, 1.0]);
        assert!(dot3(&a, &b).abs() < 1e-14);

        let p = sym_outer(&a, &b);
        assert!(p.trace().abs() < 1e-14);
    }

    #[test]
    fn test_gauss_solve_known_system() {
        // 对角占优矩阵，解已知
        let mut a = [[0.0; 6]; 6];
        for i in 0..6 {
            for j in 0..6 {
                a[i][j] = if i == j { 10.0 } else { 1.0 };
            }
        }
        let expected = [1.0, -2.0, 3.0, -4.0, 5.0, -6.0];

        let mut b = [0.0; 6];
        for i in 0..6 {
            for j in 0..6 {
                b[i] += a[i][j] * expected[j];
            }
        }

        let x = gauss_solve(a, b).unwrap();
        for i in 0..6 {
            assert!((x[i] - expected[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_gauss_solve_singular() {
        let a = [[0.0; 6]; 6];
        let b = [1.0; 6];
        assert!(gauss_solve(a, b).is_none());
    }
}
