//! # 晶体塑性本构模块
//!
//! 小应变率相关晶体塑性本构链，对应装配顺序：
//! 弹性 → 晶格/滑移系 → 滑移硬化 → 滑移率 → 非弹性 → 运动学
//! → 单晶模型 → 多晶 Taylor 均匀化。
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 组装
//! - 被 `drivers/` 驱动
//! - 子模块: tensors, elasticity, crystallography, slipharden,
//!   sliprules, inelasticity, kinematics, singlecrystal, polycrystal

pub mod crystallography;
pub mod elasticity;
pub mod inelasticity;
pub mod kinematics;
pub mod polycrystal;
pub mod singlecrystal;
pub mod slipharden;
pub mod sliprules;
pub mod tensors;

pub use crystallography::CubicLattice;
pub use elasticity::IsotropicLinearElastic;
pub use inelasticity::AsaroInelasticity;
pub use kinematics::StandardKinematicModel;
pub use polycrystal::TaylorModel;
pub use singlecrystal::{GrainState, SingleCrystalModel};
pub use slipharden::VoceSlipHardening;
pub use sliprules::PowerLawSlipRule;
pub use tensors::SymTensor;
