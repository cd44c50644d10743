//! # 单晶模型
//!
//! 单个晶粒的应变步积分。状态量为塑性应变张量与累积滑移量。
//!
//! ## 积分方案
//! 后向 Euler + Newton 迭代，未知量为塑性应变的 Mandel 6 维向量：
//!
//! R(ε_p) = ε_p - ε_p^n - Δt Σ_α γ̇_α(τ_α) P_α,  τ_α = P_α : C : (ε - ε_p)
//!
//! 由于 P_α 无迹，∂τ_α/∂ε_p = -2μ P_α，Jacobian 为解析形式
//! J = I + 2μ Δt Σ_α γ̇'_α p_α p_αᵀ（对称正定 6×6）。
//! 滑移阻力在步内取步初值。`max_iter` 次迭代内不收敛时
//! 将应变步对分递归重试，最多 `max_divide` 层。
//!
//! ## 依赖关系
//! - 持有 `cp/kinematics.rs` 与 `cp/crystallography.rs`
//! - 被 `cp/polycrystal.rs` 驱动

use crate::cp::crystallography::CubicLattice;
use crate::cp::kinematics::StandardKinematicModel;
use crate::cp::tensors::{gauss_solve, sym_outer, transpose_mat_vec, SymTensor};
use crate::error::{PolycpError, Result};
use crate::models::CrystalOrientation;

/// Newton 残差收敛容差
const NEWTON_TOL: f64 = 1.0e-12;

/// 晶粒状态
#[derive(Debug, Clone, Copy, Default)]
pub struct GrainState {
    /// 塑性应变
    pub plastic_strain: SymTensor,
    /// 累积滑移量 Γ
    pub accumulated_slip: f64,
}

/// 已取向晶粒：样品坐标系下的 Schmid 张量
#[derive(Debug, Clone)]
pub struct OrientedGrain {
    /// 各滑移系的 Schmid 张量 P_α = sym(s_α ⊗ n_α)
    pub schmid: Vec<SymTensor>,
}

/// 单晶模型
#[derive(Debug, Clone)]
pub struct SingleCrystalModel {
    /// 运动学模型
    kinematics: StandardKinematicModel,
    /// 晶格（滑移系来源）
    lattice: CubicLattice,
    /// 每步最大 Newton 迭代次数
    max_iter: usize,
    /// 最大步对分层数
    max_divide: usize,
}

impl SingleCrystalModel {
    /// 创建新的单晶模型
    pub fn new(
        kinematics: StandardKinematicModel,
        lattice: CubicLattice,
        max_iter: usize,
        max_divide: usize,
    ) -> Result<Self> {
        if lattice.slip_systems().is_empty() {
            return Err(PolycpError::InvalidParameter(
                "Lattice has no registered slip systems".to_string(),
            ));
        }
        if max_iter == 0 {
            return Err(PolycpError::InvalidParameter(
                "max_iter must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            kinematics,
            lattice,
            max_iter,
            max_divide,
        })
    }

    /// 将滑移系旋转到样品坐标系，得到该取向晶粒的 Schmid 张量
    pub fn orient_grain(&self, orientation: &CrystalOrientation) -> OrientedGrain {
        let g = orientation.rotation_matrix();

        let schmid = self
            .lattice
            .slip_systems()
            .iter()
            .map(|system| {
                let direction = transpose_mat_vec(&g, &system.direction);
                let normal = transpose_mat_vec(&g, &system.normal);
                sym_outer(&direction, &normal)
            })
            .collect();

        OrientedGrain { schmid }
    }

    /// 积分一个应变步，返回步末应力与新状态
    pub fn update(
        &self,
        grain: &OrientedGrain,
        state: &GrainState,
        strain_old: &SymTensor,
        strain_new: &SymTensor,
        dt: f64,
    ) -> Result<(SymTensor, GrainState)> {
        self.integrate(grain, state, strain_old, strain_new, dt, 0)
    }

    /// 递归积分：失败时对分应变步重试
    fn integrate(
        &self,
        grain: &OrientedGrain,
        state: &GrainState,
        strain_old: &SymTensor,
        strain_new: &SymTensor,
        dt: f64,
        level: usize,
    ) -> Result<(SymTensor, GrainState)> {
        if let Some(result) = self.newton_step(grain, state, strain_new, dt) {
            return Ok(result);
        }

        if level >= self.max_divide {
            return Err(PolycpError::ConvergenceFailure {
                context: format!(
                    "single crystal strain step did not converge after {} bisection levels",
                    level
                ),
            });
        }

        let mid = (*strain_old + *strain_new) * 0.5;
        let half_dt = dt * 0.5;
        let (_, mid_state) =
            self.integrate(grain, state, strain_old, &mid, half_dt, level + 1)?;
        self.integrate(grain, &mid_state, &mid, strain_new, half_dt, level + 1)
    }

    /// 单次后向 Euler 求解；不收敛时返回 None
    fn newton_step(
        &self,
        grain: &OrientedGrain,
        state: &GrainState,
        strain_new: &SymTensor,
        dt: f64,
    ) -> Option<(SymTensor, GrainState)> {
        let strength = self.kinematics.strength(state.accumulated_slip);
        let two_mu = 2.0 * self.kinematics.shear_modulus();

        let mut plastic = state.plastic_strain;

        for _ in 0..self.max_iter {
            let stress = self.kinematics.stress(strain_new, &plastic);
            let flow = self.kinematics.flow(&stress, &grain.schmid, strength);

            // 残差 R = ε_p - ε_p^n - Δt ε̇_p
            let residual =
                plastic - state.plastic_strain - flow.strain_rate * dt;
            let residual_norm = residual.norm();

            if !residual_norm.is_finite() {
                return None;
            }

            if residual_norm < NEWTON_TOL {
                let new_state = GrainState {
                    plastic_strain: plastic,
                    accumulated_slip: state.accumulated_slip + dt * flow.slip_magnitude,
                };
                return Some((stress, new_state));
            }

            // J = I + 2μ Δt Σ γ̇'_α p_α p_αᵀ
            let mut jacobian = [[0.0; 6]; 6];
            for i in 0..6 {
                jacobian[i][i] = 1.0;
            }
            for (p, rates) in grain.schmid.iter().zip(flow.system_rates.iter()) {
                let scale = two_mu * dt * rates.derivative;
                for i in 0..6 {
                    for j in 0..6 {
                        jacobian[i][j] += scale * p.0[i] * p.0[j];
                    }
                }
            }

            let delta = gauss_solve(jacobian, residual.0)?;
            plastic = plastic - SymTensor(delta);
        }

        None
    }
}
