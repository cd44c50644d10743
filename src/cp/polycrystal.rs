//! # Taylor 多晶均匀化模型
//!
//! 全约束 Taylor 假设：所有晶粒承受相同的总应变，
//! 宏观应力取晶粒应力的算术平均。
//!
//! 晶粒更新相互独立，在专用 rayon 线程池上并行执行；
//! 试探评估不修改已提交的晶粒状态，新状态由调用方决定是否提交。
//!
//! ## 依赖关系
//! - 持有 `cp/singlecrystal.rs` 的 SingleCrystalModel
//! - 被 `drivers/` 驱动
//! - 使用 `rayon` + `num_cpus` 并行计算

use crate::cp::singlecrystal::{GrainState, OrientedGrain, SingleCrystalModel};
use crate::cp::tensors::SymTensor;
use crate::error::{PolycpError, Result};
use crate::models::CrystalOrientation;

use rayon::prelude::*;

/// Taylor 多晶模型
pub struct TaylorModel {
    /// 单晶模型
    model: SingleCrystalModel,
    /// 已取向晶粒（Schmid 张量已旋转到样品坐标系）
    grains: Vec<OrientedGrain>,
    /// 晶粒并行线程池
    pool: rayon::ThreadPool,
}

impl TaylorModel {
    /// 创建新的 Taylor 模型
    ///
    /// `nthreads` 为 0 时使用全部可用核心。
    pub fn new(
        model: SingleCrystalModel,
        orientations: &[CrystalOrientation],
        nthreads: usize,
    ) -> Result<Self> {
        if orientations.is_empty() {
            return Err(PolycpError::InvalidParameter(
                "Polycrystal aggregate needs at least one grain orientation".to_string(),
            ));
        }

        let nthreads = if nthreads == 0 {
            num_cpus::get()
        } else {
            nthreads
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(nthreads)
            .build()
            .map_err(|e| PolycpError::Other(format!("Failed to build thread pool: {}", e)))?;

        let grains = orientations
            .iter()
            .map(|orientation| model.orient_grain(orientation))
            .collect();

        Ok(Self {
            model,
            grains,
            pool,
        })
    }

    /// 晶粒数量
    pub fn num_grains(&self) -> usize {
        self.grains.len()
    }

    /// 初始晶粒状态（零塑性应变、零累积滑移）
    pub fn initial_state(&self) -> Vec<GrainState> {
        vec![GrainState::default(); self.grains.len()]
    }

    /// 以相同总应变更新全部晶粒，返回平均应力与新状态
    pub fn update(
        &self,
        states: &[GrainState],
        strain_old: &SymTensor,
        strain_new: &SymTensor,
        dt: f64,
    ) -> Result<(SymTensor, Vec<GrainState>)> {
        debug_assert_eq!(states.len(), self.grains.len());

        let results: Result<Vec<(SymTensor, GrainState)>> = self.pool.install(|| {
            self.grains
                .par_iter()
                .zip(states.par_iter())
                .map(|(grain, state)| {
                    self.model.update(grain, state, strain_old, strain_new, dt)
                })
                .collect()
        });
        let results = results?;

        let mut mean_stress = SymTensor::zero();
        let mut new_states = Vec::with_capacity(results.len());
        for (stress, state) in results {
            mean_stress = mean_stress + stress;
            new_states.push(state);
        }
        mean_stress = mean_stress * (1.0 / self.grains.len() as f64);

        Ok((mean_stress, new_states))
    }
}
