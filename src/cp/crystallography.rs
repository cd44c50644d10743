//! # 立方晶格与滑移系
//!
//! 由一对 Miller 指数（滑移方向、滑移面）展开立方对称等价的
//! 完整滑移系族：分量的全部带符号排列，按整体符号去重，
//! 并筛选方向位于滑移面内（d · n = 0）的组合。
//!
//! 例如 <110>{111} 展开为 12 个滑移系，<010>{100} 展开为 6 个。
//!
//! ## 依赖关系
//! - 被 `cp/singlecrystal.rs` 持有
//! - 使用 `cp/tensors.rs` 的向量工具

use crate::cp::tensors::normalize3;
use crate::error::{PolycpError, Result};

use std::collections::BTreeSet;

/// 单个滑移系（晶体坐标系下的单位向量）
#[derive(Debug, Clone, Copy)]
pub struct SlipSystem {
    /// 滑移方向 s（单位向量）
    pub direction: [f64; 3],
    /// 滑移面法线 n（单位向量）
    pub normal: [f64; 3],
}

/// 立方晶格
#[derive(Debug, Clone)]
pub struct CubicLattice {
    /// 晶格常数 a
    a: f64,
    /// 已注册的滑移系
    systems: Vec<SlipSystem>,
}

impl CubicLattice {
    /// 创建新的立方晶格
    pub fn new(a: f64) -> Result<Self> {
        if a <= 0.0 || !a.is_finite() {
            return Err(PolycpError::InvalidParameter(format!(
                "Lattice parameter must be positive, got {}",
                a
            )));
        }
        Ok(Self {
            a,
            systems: Vec::new(),
        })
    }

    /// 晶格常数
    pub fn lattice_parameter(&self) -> f64 {
        self.a
    }

    /// 注册一个滑移系族
    ///
    /// 输入一对族代表 Miller 指数（如 <110> 与 {111}），
    /// 展开为全部立方对称等价组合；只有方向位于面内
    /// （d · n = 0）的组合才是有效滑移系。
    pub fn add_slip_system(&mut self, direction: [i32; 3], plane: [i32; 3]) -> Result<()> {
        if direction == [0, 0, 0] || plane == [0, 0, 0] {
            return Err(PolycpError::InvalidParameter(
                "Slip direction and plane must be nonzero".to_string(),
            ));
        }

        let directions = signed_permutations(direction);
        let normals = signed_permutations(plane);

        // 按（面，方向）对收集，d ⊥ n 才是有效滑移系
        let mut pairs: BTreeSet<([i32; 3], [i32; 3])> = BTreeSet::new();
        for n in &normals {
            for d in &directions {
                if d[0] * n[0] + d[1] * n[1] + d[2] * n[2] == 0 {
                    pairs.insert((*n, *d));
                }
            }
        }

        if pairs.is_empty() {
            return Err(PolycpError::InvalidParameter(format!(
                "Slip family <{:?}>{{{:?}}} contains no direction lying in a plane",
                direction, plane
            )));
        }

        for (n, d) in pairs {
            self.systems.push(SlipSystem {
                direction: normalize3(&[d[0] as f64, d[1] as f64, d[2] as f64]),
                normal: normalize3(&[n[0] as f64, n[1] as f64, n[2] as f64]),
            });
        }

        Ok(())
    }

    /// 已注册的滑移系列表
    pub fn slip_systems(&self) -> &[SlipSystem] {
        &self.systems
    }
}

/// 生成整型向量分量的全部带符号排列，按整体符号去重
/// （首个非零分量取正号为规范形式）
fn signed_permutations(v: [i32; 3]) -> Vec<[i32; 3]> {
    let mut out: BTreeSet<[i32; 3]> = BTreeSet::new();

    let perms = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for perm in &perms {
        let base = [v[perm[0]].abs(), v[perm[1]].abs(), v[perm[2]].abs()];
        for sx in [-1, 1] {
            for sy in [-1, 1] {
                for sz in [-1, 1] {
                    let cand = [base[0] * sx, base[1] * sy, base[2] * sz];
                    out.insert(canonical_sign(cand));
                }
            }
        }
    }

    out.into_iter().collect()
}

/// 规范符号：首个非零分量为正
fn canonical_sign(v: [i32; 3]) -> [i32; 3] {
    for component in v {
        if component > 0 {
            return v;
        }
        if component < 0 {
            return [-v[0], -v[1], -v[2]];
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cp::tensors::dot3;

    #[test]
    fn test_fcc_octahedral_family() {
        // <110>{111}: 4 个面 × 每面 3 个方向 = 12 个滑移系
        let mut lattice = CubicLattice::new(1.0).unwrap();
        lattice.add_slip_system([1, 1, 0], [1, 1, 1]).unwrap();
        assert_eq!(lattice.slip_systems().len(), 12);

        for system in lattice.slip_systems() {
            assert!(dot3(&system.direction, &system.normal).abs() < 1e-12);
            assert!((dot3(&system.direction, &system.direction) - 1.0).abs() < 1e-12);
            assert!((dot3(&system.normal, &system.normal) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cube_slip_family() {
        // <010>{100}: 3 个面 × 每面 2 个方向 = 6 个滑移系
        let mut lattice = CubicLattice::new(1.0).unwrap();
        lattice.add_slip_system([0, 1, 0], [1, 0, 0]).unwrap();
        assert_eq!(lattice.slip_systems().len(), 6);
    }

    #[test]
    fn test_family_without_in_plane_direction_rejected() {
        // <111>{111}: 任意符号组合的点积为 ±1 或 ±3，恒非零
        let mut lattice = CubicLattice::new(1.0).unwrap();
        assert!(lattice.add_slip_system([1, 1, 1], [1, 1, 1]).is_err());
    }

    #[test]
    fn test_lattice_parameter() {
        assert!((CubicLattice::new(1.0).unwrap().lattice_parameter() - 1.0).abs() < 1e-15);
        assert!(CubicLattice::new(0.0).is_err());
        assert!(CubicLattice::new(-1.0).is_err());
    }

    #[test]
    fn test_zero_miller_indices_rejected() {
        let mut lattice = CubicLattice::new(1.0).unwrap();
        assert!(lattice.add_slip_system([0, 0, 0], [1, 1, 1]).is_err());
        assert!(lattice.add_slip_system([1, 1, 0], [0, 0, 0]).is_err());
    }
}
