//! # 幂律滑移率模型
//!
//! 单滑移系的剪切率：
//! γ̇(τ, Γ) = γ_0 |τ / τ̄(Γ)|^n sign(τ)
//!
//! 同时提供隐式积分所需的解析导数 ∂γ̇/∂τ。
//!
//! ## 依赖关系
//! - 持有 `cp/slipharden.rs` 的 VoceSlipHardening
//! - 被 `cp/inelasticity.rs` 使用

use crate::cp::slipharden::VoceSlipHardening;
use crate::error::{PolycpError, Result};

/// 幂律滑移率模型
#[derive(Debug, Clone, Copy)]
pub struct PowerLawSlipRule {
    /// 滑移硬化模型
    hardening: VoceSlipHardening,
    /// 参考滑移率 γ_0 (1/s)
    gamma_0: f64,
    /// 率敏感指数 n
    n: f64,
}

impl PowerLawSlipRule {
    /// 创建新的幂律滑移率模型
    pub fn new(hardening: VoceSlipHardening, gamma_0: f64, n: f64) -> Result<Self> {
        if gamma_0 <= 0.0 || !gamma_0.is_finite() {
            return Err(PolycpError::InvalidParameter(format!(
                "Reference slip rate gamma_0 must be positive, got {}",
                gamma_0
            )));
        }
        if n < 1.0 || !n.is_finite() {
            return Err(PolycpError::InvalidParameter(format!(
                "Rate sensitivity exponent n must be >= 1, got {}",
                n
            )));
        }

        Ok(Self {
            hardening,
            gamma_0,
            n,
        })
    }

    /// 当前累积滑移量下的滑移阻力
    pub fn strength(&self, accumulated_slip: f64) -> f64 {
        self.hardening.strength(accumulated_slip)
    }

    /// 分解剪应力 τ 下的滑移率
    pub fn slip_rate(&self, tau: f64, strength: f64) -> f64 {
        self.gamma_0 * (tau.abs() / strength).powf(self.n) * tau.signum()
    }

    /// 滑移率对分解剪应力的导数 ∂γ̇/∂τ（恒非负）
    pub fn slip_rate_derivative(&self, tau: f64, strength: f64) -> f64 {
        self.gamma_0 * self.n / strength * (tau.abs() / strength).powf(self.n - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> PowerLawSlipRule {
        let hardening = VoceSlipHardening::new(80.0, 4.0, 3.0).unwrap();
        PowerLawSlipRule::new(hardening, 0.26831762, 14.04134645).unwrap()
    }

    #[test]
    fn test_rate_at_strength_equals_gamma_0() {
        let rule = rule();
        let strength = rule.strength(0.0);
        assert!((rule.slip_rate(strength, strength) - 0.26831762).abs() < 1e-12);
    }

    #[test]
    fn test_odd_symmetry() {
        let rule = rule();
        let strength = rule.strength(0.0);
        let forward = rule.slip_rate(1.7, strength);
        let backward = rule.slip_rate(-1.7, strength);
        assert!((forward + backward).abs() < 1e-15);
        assert!(forward > 0.0);
    }

    #[test]
    fn test_zero_stress_gives_zero_rate() {
        let rule = rule();
        let strength = rule.strength(0.0);
        assert_eq!(rule.slip_rate(0.0, strength), 0.0);
        assert_eq!(rule.slip_rate_derivative(0.0, strength), 0.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let rule = rule();
        let strength = rule.strength(0.1);
        let tau = 2.5;
        let h = 1e-7;
        let fd = (rule.slip_rate(tau + h, strength) - rule.slip_rate(tau - h, strength)) / (2.0 * h);
        let analytic = rule.slip_rate_derivative(tau, strength);
        assert!((fd - analytic).abs() / analytic < 1e-5);
    }

    #[test]
    fn test_invalid_parameters() {
        let hardening = VoceSlipHardening::new(80.0, 4.0, 3.0).unwrap();
        assert!(PowerLawSlipRule::new(hardening, 0.0, 14.0).is_err());
        assert!(PowerLawSlipRule::new(hardening, -0.2, 14.0).is_err());
        assert!(PowerLawSlipRule::new(hardening, 0.2, 0.5).is_err());
    }
}
