// ==========================================
// AI 智能体投资回报分析 - 医院演示
// ==========================================
// 场景: 东京都立医院（2,500 名员工，年营收 150 亿日元）
// 流程: 机构级 ROI（按 150 日元/美元折算）→ 30 天诊疗流程仿真
// ==========================================

use ai_agents_roi::api::{
    format_amount, render_roi_summary, render_simulation_findings, RoiApi, SimulationApi,
};
use ai_agents_roi::config::ConfigManager;
use ai_agents_roi::domain::Industry;
use ai_agents_roi::engine::DEFAULT_HORIZON_YEARS;
use ai_agents_roi::i18n::t_locale;
use ai_agents_roi::logging;

const HOSPITAL_NAME: &str = "Tokyo Metropolitan Hospital";
const HOSPITAL_EMPLOYEES: f64 = 2_500.0;
const HOSPITAL_REVENUE_YEN: f64 = 15_000_000_000.0;
const YEN_PER_DOLLAR: f64 = 150.0;
const DEMO_DAYS: u32 = 30;

fn main() -> anyhow::Result<()> {
    logging::init();

    let manager = ConfigManager::from_env()?;
    let config = manager.config();
    let locale = config.locale.as_str();

    println!(
        "{}",
        t_locale(locale, "demo.title", &[("hospital", HOSPITAL_NAME)])
    );
    println!(
        "{}",
        t_locale(
            locale,
            "demo.profile",
            &[
                ("employees", &format_amount(HOSPITAL_EMPLOYEES)),
                ("revenue", &format_amount(HOSPITAL_REVENUE_YEN)),
            ],
        )
    );
    println!();

    // 机构级 ROI
    let projection = RoiApi::new().project_industry(
        Industry::Healthcare,
        HOSPITAL_EMPLOYEES,
        HOSPITAL_REVENUE_YEN / YEN_PER_DOLLAR,
        DEFAULT_HORIZON_YEARS,
    )?;
    println!("{}", t_locale(locale, "demo.roi_section", &[]));
    println!("{}", render_roi_summary(&projection, locale));
    println!();

    // 30 天仿真
    let run = SimulationApi::from_config(config).run_days(DEMO_DAYS)?;
    println!(
        "{}",
        t_locale(
            locale,
            "demo.simulation_section",
            &[("days", &DEMO_DAYS.to_string())],
        )
    );
    println!(
        "{}",
        t_locale(locale, "simulation.seed", &[("value", &run.seed.to_string())])
    );
    println!("{}", render_simulation_findings(&run.analysis, &run.savings, locale));

    Ok(())
}
