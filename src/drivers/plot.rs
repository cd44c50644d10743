//! # 应力-应变曲线绘图
//!
//! 使用 `plotters` 库将驱动结果渲染为散点图。
//!
//! ## 功能
//! - 轴向应变为横轴，轴向应力为纵轴
//! - 根据输出扩展名选择 PNG 或 SVG 后端
//! - 无条件覆盖已有输出文件
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `drivers/mod.rs` 的 DriverResult
//! - 使用 `plotters` 渲染图表

use crate::drivers::DriverResult;
use crate::error::{PolycpError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成应力-应变散点图
pub fn generate_curve_plot(
    result: &DriverResult,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    if result.is_empty() {
        return Err(PolycpError::PlotError(
            "Driver result contains no data points".to_string(),
        ));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, result, title)?;
        root.present()
            .map_err(|e| PolycpError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, result, title)?;
        root.present()
            .map_err(|e| PolycpError::PlotError(e.to_string()))?;
    }

    Ok(())
}

/// 绘制散点图的核心逻辑
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    result: &DriverResult,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| PolycpError::PlotError(format!("{:?}", e)))?;

    // 确定范围
    let x_max = result
        .strain
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let y_max = result
        .stress
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.10 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(|e| PolycpError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Strain (mm/mm)")
        .y_desc("Stress (MPa)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PolycpError::PlotError(format!("{:?}", e)))?;

    let point_color = RGBColor(0, 102, 204);
    chart
        .draw_series(
            result
                .strain
                .iter()
                .zip(result.stress.iter())
                .map(|(x, y)| Circle::new((*x, *y), 3, point_color.filled())),
        )
        .map_err(|e| PolycpError::PlotError(format!("{:?}", e)))?;

    // 标注温度
    let temperature_text = format!("T = {:.0} K", result.temperature);
    chart
        .draw_series(std::iter::once(Text::new(
            temperature_text,
            (x_max * 0.82, y_max * 0.95),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| PolycpError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
