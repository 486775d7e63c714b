// ==========================================
// AI 智能体投资回报分析 - 主入口
// ==========================================
// 流程: 加载配置 → 综合 ROI 分析 → 诊疗流程对比仿真 → 报表输出
// 配置: 环境变量（见 config::config_keys），无命令行参数
// ==========================================

use ai_agents_roi::api::{
    export_patients_csv, render_comprehensive, render_condition_breakdown,
    render_simulation_findings, RoiApi, SimulationApi,
};
use ai_agents_roi::config::{config_keys, ConfigManager};
use ai_agents_roi::i18n::t_locale;
use ai_agents_roi::logging;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", ai_agents_roi::APP_NAME, ai_agents_roi::VERSION);
    tracing::info!("==================================================");

    let manager = ConfigManager::from_env().context("加载配置失败")?;
    let config = manager.config();
    let locale = config.locale.as_str();
    let snapshot = manager.get_config_snapshot()?;
    tracing::debug!(%snapshot, "生效配置");

    // ==========================================
    // 1. 综合 ROI 分析
    // ==========================================
    let roi_api = RoiApi::new();
    let analysis = roi_api.comprehensive_from_settings(&config.roi, None)?;
    println!("{}", render_comprehensive(&analysis, locale));
    println!();

    // ==========================================
    // 2. 诊疗流程对比仿真
    // ==========================================
    let simulation_api = SimulationApi::from_config(config);
    let run = simulation_api.run()?;

    println!("{}", t_locale(locale, "simulation.title", &[]));
    println!(
        "{}",
        t_locale(locale, "simulation.seed", &[("value", &run.seed.to_string())])
    );
    println!();
    println!("{}", render_simulation_findings(&run.analysis, &run.savings, locale));
    println!();
    println!("{}", render_condition_breakdown(&run.analysis, locale));

    // ==========================================
    // 3. 可选: 导出患者明细
    // ==========================================
    if let Ok(path) = std::env::var(config_keys::EXPORT_CSV) {
        let file = File::create(&path).with_context(|| format!("无法创建文件: {}", path))?;
        let rows = export_patients_csv(&run.result, BufWriter::new(file))?;
        println!();
        println!(
            "{}",
            t_locale(
                locale,
                "simulation.csv_exported",
                &[("path", &path), ("rows", &rows.to_string())],
            )
        );
    }

    Ok(())
}
