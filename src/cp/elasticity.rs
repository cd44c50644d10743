//! # 各向同性线弹性模型
//!
//! 由杨氏模量与泊松比构造，σ = λ tr(ε_e) I + 2μ ε_e。
//! Mandel 记号下算子保持逐分量形式（剪切分量同样乘 2μ）。
//!
//! ## 依赖关系
//! - 被 `cp/kinematics.rs` 使用

use crate::cp::tensors::SymTensor;
use crate::error::{PolycpError, Result};

/// 各向同性线弹性模型
#[derive(Debug, Clone, Copy)]
pub struct IsotropicLinearElastic {
    /// Lamé 第一参数 λ (MPa)
    lambda: f64,
    /// 剪切模量 μ (MPa)
    mu: f64,
}

impl IsotropicLinearElastic {
    /// 由杨氏模量 E 与泊松比 ν 构造
    pub fn from_youngs_poissons(youngs: f64, poissons: f64) -> Result<Self> {
        if youngs <= 0.0 || !youngs.is_finite() {
            return Err(PolycpError::InvalidParameter(format!(
                "Young's modulus must be positive, got {}",
                youngs
            )));
        }
        if poissons <= -1.0 || poissons >= 0.5 {
            return Err(PolycpError::InvalidParameter(format!(
                "Poisson's ratio must lie in (-1, 0.5), got {}",
                poissons
            )));
        }

        let lambda = youngs * poissons / ((1.0 + poissons) * (1.0 - 2.0 * poissons));
        let mu = youngs / (2.0 * (1.0 + poissons));

        Ok(Self { lambda, mu })
    }

    /// 剪切模量 μ
    pub fn shear_modulus(&self) -> f64 {
        self.mu
    }

    /// 由弹性应变计算应力 σ = C : ε_e
    pub fn stress(&self, elastic_strain: &SymTensor) -> SymTensor {
        let volumetric = self.lambda * elastic_strain.trace();
        let mut out = *elastic_strain * (2.0 * self.mu);
        out.0[0] += volumetric;
        out.0[1] += volumetric;
        out.0[2] += volumetric;
        out
    }
}
