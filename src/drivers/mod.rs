//! # 单轴拉伸试验驱动
//!
//! 对多晶体模型施加恒应变率的轴向应变斜坡，每步求解五个
//! 非轴向应变分量使均匀化的非轴向应力为零（Newton，
//! 有限差分 Jacobian），记录轴向应变与应力序列。
//!
//! 试探评估不提交晶粒状态；仅在该步收敛后推进状态。
//! 结果序列长度为 nsteps + 1（含初始零点）。
//!
//! ## 依赖关系
//! - 驱动 `cp/polycrystal.rs` 的 TaylorModel
//! - 使用 `utils/progress.rs` 与 `utils/output.rs` 反馈进度
//! - 子模块: plot, export

pub mod export;
pub mod plot;

use crate::cp::singlecrystal::GrainState;
use crate::cp::tensors::{gauss_solve, SymTensor};
use crate::cp::TaylorModel;
use crate::error::{PolycpError, Result};
use crate::utils::{output, progress};

/// 每步横向求解的最大 Newton 迭代次数
const MAX_NEWTON_ITER: usize = 50;
/// 横向应力残差绝对容差 (MPa)
const STRESS_ATOL: f64 = 1.0e-8;
/// 横向应力残差相对容差（相对轴向应力）
const STRESS_RTOL: f64 = 1.0e-6;
/// 有限差分 Jacobian 的应变扰动
const FD_STEP: f64 = 1.0e-8;

/// 驱动结果：命名数值序列
#[derive(Debug, Clone)]
pub struct DriverResult {
    /// 轴向应变序列
    pub strain: Vec<f64>,
    /// 轴向应力序列 (MPa)
    pub stress: Vec<f64>,
    /// 试验温度 (K)
    pub temperature: f64,
}

impl DriverResult {
    /// 按名称取序列（外部契约：至少提供 "strain" 与 "stress"）
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        match name {
            "strain" => Some(&self.strain),
            "stress" => Some(&self.stress),
            _ => None,
        }
    }

    /// 序列长度
    pub fn len(&self) -> usize {
        self.strain.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.strain.is_empty()
    }
}

/// 运行单轴拉伸试验
///
/// 以恒应变率 `erate` 将轴向应变从 0 拉升至 `emax`，共 `nsteps` 步。
/// `temperature` 随结果记录（本模型的材料参数与温度无关）。
pub fn uniaxial_test(
    model: &TaylorModel,
    erate: f64,
    temperature: f64,
    emax: f64,
    nsteps: usize,
    verbose: bool,
) -> Result<DriverResult> {
    if erate <= 0.0 || !erate.is_finite() {
        return Err(PolycpError::InvalidArgument(format!(
            "Strain rate must be positive, got {}",
            erate
        )));
    }
    if emax <= 0.0 || !emax.is_finite() {
        return Err(PolycpError::InvalidArgument(format!(
            "Maximum strain must be positive, got {}",
            emax
        )));
    }
    if nsteps == 0 {
        return Err(PolycpError::InvalidArgument(
            "Step count must be at least 1".to_string(),
        ));
    }

    let dt = emax / erate / nsteps as f64;

    let mut states = model.initial_state();
    let mut strain_prev = SymTensor::zero();
    // 非轴向应变分量 [ε22, ε33, √2ε23, √2ε13, √2ε12]，跨步沿用作初值
    let mut transverse = [0.0; 5];

    let mut strain = Vec::with_capacity(nsteps + 1);
    let mut stress = Vec::with_capacity(nsteps + 1);
    strain.push(0.0);
    stress.push(0.0);

    let pb = if verbose {
        None
    } else {
        Some(progress::create_progress_bar(nsteps as u64, "Simulating"))
    };

    for step in 1..=nsteps {
        let e_axial = emax * (step as f64 / nsteps as f64);

        let (step_stress, new_states) = solve_step(
            model,
            &states,
            &strain_prev,
            e_axial,
            &mut transverse,
            dt,
            step,
        )?;

        states = new_states;
        strain_prev = compose_strain(e_axial, &transverse);
        strain.push(e_axial);
        stress.push(step_stress.0[0]);

        if verbose {
            output::print_info(&format!(
                "step {:>4}/{}: strain = {:.6e}, stress = {:.4} MPa",
                step,
                nsteps,
                e_axial,
                step_stress.0[0]
            ));
        } else if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(DriverResult {
        strain,
        stress,
        temperature,
    })
}

/// 组合完整应变张量：轴向分量固定，其余为求解变量
fn compose_strain(e_axial: f64, transverse: &[f64; 5]) -> SymTensor {
    SymTensor([
        e_axial,
        transverse[0],
        transverse[1],
        transverse[2],
        transverse[3],
        transverse[4],
    ])
}

/// 单步求解：Newton 迭代横向应变直至非轴向应力为零
fn solve_step(
    model: &TaylorModel,
    states: &[GrainState],
    strain_prev: &SymTensor,
    e_axial: f64,
    transverse: &mut [f64; 5],
    dt: f64,
    step: usize,
) -> Result<(SymTensor, Vec<GrainState>)> {
    for _ in 0..MAX_NEWTON_ITER {
        let strain_new = compose_strain(e_axial, transverse);
        let (stress, new_states) = model.update(states, strain_prev, &strain_new, dt)?;

        let mut residual = [0.0; 5];
        residual.copy_from_slice(&stress.0[1..6]);
        let residual_norm = residual.iter().map(|r| r * r).sum::<f64>().sqrt();

        if residual_norm < STRESS_ATOL + STRESS_RTOL * stress.0[0].abs() {
            return Ok((stress, new_states));
        }

        // 有限差分 Jacobian ∂σ_t/∂ε_t（5x5）
        let mut jacobian = [[0.0; 5]; 5];
        for j in 0..5 {
            let mut perturbed = *transverse;
            perturbed[j] += FD_STEP;
            let strain_fd = compose_strain(e_axial, &perturbed);
            let (stress_fd, _) = model.update(states, strain_prev, &strain_fd, dt)?;

            for i in 0..5 {
                jacobian[i][j] = (stress_fd.0[i + 1] - residual[i]) / FD_STEP;
            }
        }

        let delta =
            gauss_solve(jacobian, residual).ok_or_else(|| PolycpError::ConvergenceFailure {
                context: format!("singular transverse Jacobian at driver step {}", step),
            })?;

        for j in 0..5 {
            transverse[j] -= delta[j];
        }
    }

    Err(PolycpError::ConvergenceFailure {
        context: format!(
            "transverse stress equilibrium at driver step {} (axial strain {:.6e})",
            step, e_axial
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::crystallography::CubicLattice;
    use crate::cp::elasticity::IsotropicLinearElastic;
    use crate::cp::inelasticity::AsaroInelasticity;
    use crate::cp::kinematics::StandardKinematicModel;
    use crate::cp::singlecrystal::SingleCrystalModel;
    use crate::cp::slipharden::VoceSlipHardening;
    use crate::cp::sliprules::PowerLawSlipRule;
    use crate::models::CrystalOrientation;

    fn build_taylor(tau_0: f64, orientations: &[CrystalOrientation]) -> TaylorModel {
        let elastic = IsotropicLinearElastic::from_youngs_poissons(211000.0, 0.3).unwrap();
        let mut lattice = CubicLattice::new(1.0).unwrap();
        lattice.add_slip_system([1, 1, 0], [1, 1, 1]).unwrap();
        let hardening = VoceSlipHardening::new(83.68041279, 3.73928443, tau_0).unwrap();
        let rule = PowerLawSlipRule::new(hardening, 0.26831762, 14.04134645).unwrap();
        let kinematics =
            StandardKinematicModel::new(elastic, AsaroInelasticity::new(rule));
        let single = SingleCrystalModel::new(kinematics, lattice, 64, 6).unwrap();
        TaylorModel::new(single, orientations, 2).unwrap()
    }

    #[test]
    fn test_elastic_response_matches_youngs_modulus() {
        // 极高滑移阻力：整条曲线为弹性，σ = E ε
        let model = build_taylor(1.0e8, &[CrystalOrientation::new(0.0, 0.0, 0.0)]);
        let result = uniaxial_test(&model, 1.0e-4, 300.0, 1.0e-3, 5, false).unwrap();

        for (e, s) in result.strain.iter().zip(result.stress.iter()).skip(1) {
            let expected = 211000.0 * e;
            assert!(
                (s - expected).abs() / expected < 1.0e-4,
                "stress {} vs elastic {}",
                s,
                expected
            );
        }
    }

    #[test]
    fn test_series_lengths_and_strain_ramp() {
        let model = build_taylor(3.05569439, &[CrystalOrientation::new(0.0, 0.0, 0.0)]);
        let result = uniaxial_test(&model, 1.0e-4, 300.0, 0.005, 20, false).unwrap();

        assert_eq!(result.strain.len(), 21);
        assert_eq!(result.stress.len(), 21);
        assert_eq!(result.strain[0], 0.0);
        assert!((result.strain[20] - 0.005).abs() < 1e-15);

        // 应变严格单调上升
        for window in result.strain.windows(2) {
            assert!(window[1] > window[0]);
        }

        // 恒应变率 + 硬化：应力不应下降
        for window in result.stress.windows(2) {
            assert!(window[1] >= window[0] - 1.0e-3);
        }
    }

    #[test]
    fn test_named_series_contract() {
        let model = build_taylor(3.05569439, &[CrystalOrientation::new(0.0, 0.0, 0.0)]);
        let result = uniaxial_test(&model, 1.0e-4, 300.0, 0.001, 4, false).unwrap();

        assert_eq!(result.series("strain").unwrap().len(), result.len());
        assert_eq!(result.series("stress").unwrap().len(), result.len());
        assert!(result.series("time").is_none());
        assert_eq!(result.temperature, 300.0);
    }

    #[test]
    fn test_end_to_end_single_grain_ramp() {
        // 基准场景：单晶粒 (0,0,0)，默认参数，101 个点覆盖 0 → 0.005
        let model = build_taylor(3.05569439, &[CrystalOrientation::new(0.0, 0.0, 0.0)]);
        let result = uniaxial_test(&model, 1.0e-4, 300.0, 0.005, 100, false).unwrap();

        assert_eq!(result.len(), 101);
        assert_eq!(result.strain[0], 0.0);
        assert!((result.strain[100] - 0.005).abs() < 1e-15);

        let final_stress = *result.stress.last().unwrap();
        assert!(final_stress.is_finite());
        // 屈服后应力远低于弹性外推，且高于初始滑移阻力量级
        assert!(final_stress > 5.0);
        assert!(final_stress < 211000.0 * 0.005);
    }

    #[test]
    fn test_invalid_driver_arguments() {
        let model = build_taylor(3.05569439, &[CrystalOrientation::new(0.0, 0.0, 0.0)]);
        assert!(uniaxial_test(&model, 0.0, 300.0, 0.005, 10, false).is_err());
        assert!(uniaxial_test(&model, 1.0e-4, 300.0, -0.005, 10, false).is_err());
        assert!(uniaxial_test(&model, 1.0e-4, 300.0, 0.005, 0, false).is_err());
    }

    #[test]
    fn test_multi_grain_aggregate_runs() {
        let orientations = [
            CrystalOrientation::new(0.0, 0.0, 0.0),
            CrystalOrientation::new(30.0, 45.0, 60.0),
            CrystalOrientation::new(120.0, 30.0, 200.0),
        ];
        let model = build_taylor(3.05569439, &orientations);
        let result = uniaxial_test(&model, 1.0e-4, 300.0, 0.002, 10, false).unwrap();
        assert_eq!(result.len(), 11);
        assert!(result.stress.iter().all(|s| s.is_finite()));
    }
}
