//! # 标准运动学模型
//!
//! 小应变加法分解 ε = ε_e + ε_p，将弹性模型与非弹性流动配对：
//! σ = C : (ε - ε_p)，流动在当前应力下评估。
//!
//! ## 依赖关系
//! - 持有 `cp/elasticity.rs` 与 `cp/inelasticity.rs`
//! - 被 `cp/singlecrystal.rs` 使用

use crate::cp::elasticity::IsotropicLinearElastic;
use crate::cp::inelasticity::{AsaroInelasticity, FlowState};
use crate::cp::tensors::SymTensor;

/// 标准运动学模型
#[derive(Debug, Clone, Copy)]
pub struct StandardKinematicModel {
    /// 弹性模型
    elastic: IsotropicLinearElastic,
    /// 非弹性模型
    inelastic: AsaroInelasticity,
}

impl StandardKinematicModel {
    /// 创建新的运动学模型
    pub fn new(elastic: IsotropicLinearElastic, inelastic: AsaroInelasticity) -> Self {
        Self { elastic, inelastic }
    }

    /// 由总应变与塑性应变计算应力
    pub fn stress(&self, total_strain: &SymTensor, plastic_strain: &SymTensor) -> SymTensor {
        self.elastic.stress(&(*total_strain - *plastic_strain))
    }

    /// 剪切模量（隐式积分 Jacobian 组装用）
    pub fn shear_modulus(&self) -> f64 {
        self.elastic.shear_modulus()
    }

    /// 当前累积滑移量下的滑移阻力
    pub fn strength(&self, accumulated_slip: f64) -> f64 {
        self.inelastic.strength(accumulated_slip)
    }

    /// 在给定应力与滑移阻力下评估塑性流动
    pub fn flow(&self, stress: &SymTensor, schmid: &[SymTensor], strength: f64) -> FlowState {
        self.inelastic.flow(stress, schmid, strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::slipharden::VoceSlipHardening;
    use crate::cp::sliprules::PowerLawSlipRule;

    #[test]
    fn test_stress_uses_elastic_part_only() {
        let elastic = IsotropicLinearElastic::from_youngs_poissons(211000.0, 0.3).unwrap();
        let hardening = VoceSlipHardening::new(80.0, 4.0, 3.0).unwrap();
        let rule = PowerLawSlipRule::new(hardening, 0.25, 10.0).unwrap();
        let model = StandardKinematicModel::new(elastic, AsaroInelasticity::new(rule));

        let total = SymTensor([2.0e-3, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let plastic = SymTensor([1.0e-3, -0.5e-3, -0.5e-3, 0.0, 0.0, 0.0]);

        let stress = model.stress(&total, &plastic);
        let elastic_only = elastic.stress(&(total - plastic));
        assert_eq!(stress, elastic_only);
    }
}
