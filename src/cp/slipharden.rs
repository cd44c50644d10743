//! # Voce 滑移硬化模型
//!
//! 滑移阻力随累积滑移量 Γ 演化：
//! τ̄(Γ) = τ_0 + τ_sat (1 - e^(-b Γ))
//!
//! Γ = ∫ Σ_α |γ̇_α| dt，由单晶模型作为状态量维护。
//!
//! ## 依赖关系
//! - 被 `cp/sliprules.rs` 持有

use crate::error::{PolycpError, Result};

/// Voce 滑移硬化模型
#[derive(Debug, Clone, Copy)]
pub struct VoceSlipHardening {
    /// 饱和强度增量 τ_sat (MPa)
    tau_sat: f64,
    /// 硬化速率指数 b
    b: f64,
    /// 初始滑移阻力 τ_0 (MPa)
    tau_0: f64,
}

impl VoceSlipHardening {
    /// 创建新的 Voce 硬化模型
    pub fn new(tau_sat: f64, b: f64, tau_0: f64) -> Result<Self> {
        if tau_0 <= 0.0 || !tau_0.is_finite() {
            return Err(PolycpError::InvalidParameter(format!(
                "Initial slip resistance tau_0 must be positive, got {}",
                tau_0
            )));
        }
        if tau_sat < 0.0 || b < 0.0 {
            return Err(PolycpError::InvalidParameter(format!(
                "Voce parameters tau_sat and b must be non-negative, got {} and {}",
                tau_sat, b
            )));
        }

        Ok(Self { tau_sat, b, tau_0 })
    }

    /// 给定累积滑移量下的滑移阻力
    pub fn strength(&self, accumulated_slip: f64) -> f64 {
        self.tau_0 + self.tau_sat * (1.0 - (-self.b * accumulated_slip).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_strength_is_tau_0() {
        let model = VoceSlipHardening::new(83.68041279, 3.73928443, 3.05569439).unwrap();
        assert!((model.strength(0.0) - 3.05569439).abs() < 1e-12);
    }

    #[test]
    fn test_strength_monotonically_increases() {
        let model = VoceSlipHardening::new(80.0, 4.0, 3.0).unwrap();
        let mut prev = model.strength(0.0);
        for i in 1..=20 {
            let current = model.strength(i as f64 * 0.05);
            assert!(current > prev);
            prev = current;
        }
    }

    #[test]
    fn test_strength_saturates() {
        let model = VoceSlipHardening::new(80.0, 4.0, 3.0).unwrap();
        assert!((model.strength(100.0) - 83.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(VoceSlipHardening::new(80.0, 4.0, 0.0).is_err());
        assert!(VoceSlipHardening::new(80.0, 4.0, -3.0).is_err());
        assert!(VoceSlipHardening::new(-80.0, 4.0, 3.0).is_err());
        assert!(VoceSlipHardening::new(80.0, -4.0, 3.0).is_err());
    }
}
