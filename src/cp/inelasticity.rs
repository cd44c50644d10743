//! # Asaro 非弹性模型
//!
//! 塑性应变率为各滑移系剪切率在对应 Schmid 张量上的叠加：
//! ε̇_p = Σ_α γ̇_α P_α，其中 P_α = sym(s_α ⊗ n_α)（样品坐标系）。
//!
//! 同时给出 Σ|γ̇_α|（硬化状态演化）与各系 (γ̇, ∂γ̇/∂τ)
//! （单晶隐式积分的 Jacobian 组装）。
//!
//! ## 依赖关系
//! - 持有 `cp/sliprules.rs` 的 PowerLawSlipRule
//! - 被 `cp/kinematics.rs` 使用

use crate::cp::sliprules::PowerLawSlipRule;
use crate::cp::tensors::SymTensor;

/// 单个滑移系的流动评估结果
#[derive(Debug, Clone, Copy)]
pub struct SystemRate {
    /// 滑移率 γ̇
    pub rate: f64,
    /// ∂γ̇/∂τ
    pub derivative: f64,
}

/// 一次流动评估的完整结果
#[derive(Debug, Clone)]
pub struct FlowState {
    /// 塑性应变率 ε̇_p
    pub strain_rate: SymTensor,
    /// Σ_α |γ̇_α|
    pub slip_magnitude: f64,
    /// 各滑移系的 (γ̇, ∂γ̇/∂τ)，顺序与 Schmid 张量列表一致
    pub system_rates: Vec<SystemRate>,
}

/// Asaro 非弹性模型
#[derive(Debug, Clone, Copy)]
pub struct AsaroInelasticity {
    /// 滑移率模型
    slip_rule: PowerLawSlipRule,
}

impl AsaroInelasticity {
    /// 创建新的 Asaro 非弹性模型
    pub fn new(slip_rule: PowerLawSlipRule) -> Self {
        Self { slip_rule }
    }

    /// 当前累积滑移量下的滑移阻力
    pub fn strength(&self, accumulated_slip: f64) -> f64 {
        self.slip_rule.strength(accumulated_slip)
    }

    /// 在给定应力与滑移阻力下评估塑性流动
    ///
    /// `schmid` 为各滑移系在样品坐标系下的 Schmid 张量。
    pub fn flow(&self, stress: &SymTensor, schmid: &[SymTensor], strength: f64) -> FlowState {
        let mut strain_rate = SymTensor::zero();
        let mut slip_magnitude = 0.0;
        let mut system_rates = Vec::with_capacity(schmid.len());

        for p in schmid {
            let tau = p.dot(stress);
            let rate = self.slip_rule.slip_rate(tau, strength);
            let derivative = self.slip_rule.slip_rate_derivative(tau, strength);

            strain_rate = strain_rate + *p * rate;
            slip_magnitude += rate.abs();
            system_rates.push(SystemRate { rate, derivative });
        }

        FlowState {
            strain_rate,
            slip_magnitude,
            system_rates,
        }
    }
}
