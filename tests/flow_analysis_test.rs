// ==========================================
// FlowAnalyzer 集成测试
// ==========================================
// 测试目标: 验证群体指标、改进幅度、病种拆分与节省额推算
// 覆盖范围: 相同群体 / 零基线无定义 / 空群体 / 仿真全流程
// ==========================================


use ai_agents_roi::domain::{Condition, MetricValue};
use ai_agents_roi::engine::{EngineError, FlowAnalyzer, FlowSimulator};
use test_helpers::{comparative, seeded, PatientBuilder};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance, "expected {}, got {}", expected, actual);
}

// ==========================================
// 测试用例 1: 改进幅度
// ==========================================

#[test]
fn test_identical_populations_report_zero_improvement() {
    let population = vec![
        PatientBuilder::new("P1").wait(12.0).treatment(40.0).cost(20_000.0).build(),
        PatientBuilder::new("P2").wait(8.0).treatment(60.0).cost(30_000.0).build(),
    ];
    let result = comparative(population.clone(), population, 1);

    let analysis = FlowAnalyzer::new().analyze(&result);
    let improvements = analysis.improvements;

    assert_eq!(improvements.wait_time_reduction, MetricValue::Value(0.0));
    assert_eq!(improvements.treatment_time_reduction, MetricValue::Value(0.0));
    assert_eq!(improvements.cost_reduction, MetricValue::Value(0.0));
    assert_close(improvements.total_cost_savings, 0.0);
}

#[test]
fn test_zero_traditional_wait_is_undefined() {
    let traditional = vec![PatientBuilder::new("T1").wait(0.0).build()];
    let ai_enabled = vec![PatientBuilder::new("A1").wait(0.0).ai(true).build()];

    let analysis = FlowAnalyzer::new().analyze(&comparative(traditional, ai_enabled, 1));

    assert!(analysis.improvements.wait_time_reduction.is_undefined());
    assert_eq!(
        analysis.improvements.wait_time_reduction.require("wait_time_reduction"),
        Err(EngineError::DegenerateMetric {
            metric: "wait_time_reduction".to_string()
        })
    );
    // 其余指标仍有定义
    assert_eq!(analysis.improvements.cost_reduction, MetricValue::Value(0.0));
}

#[test]
fn test_empty_populations_do_not_panic() {
    let analysis = FlowAnalyzer::new().analyze(&comparative(vec![], vec![], 1));

    assert!(analysis.traditional.avg_wait_time.is_undefined());
    assert!(analysis.improvements.cost_reduction.is_undefined());
    assert_eq!(analysis.traditional.total_patients, 0);
    assert_close(analysis.improvements.total_cost_savings, 0.0);
}

#[test]
fn test_hand_computed_improvements() {
    let traditional = vec![
        PatientBuilder::new("T1").wait(20.0).treatment(60.0).cost(40_000.0).build(),
        PatientBuilder::new("T2").wait(10.0).treatment(40.0).cost(20_000.0).build(),
    ];
    let ai_enabled = vec![
        PatientBuilder::new("A1").wait(6.0).treatment(30.0).cost(20_000.0).ai(true).build(),
        PatientBuilder::new("A2").wait(6.0).treatment(30.0).cost(25_000.0).ai(true).build(),
    ];

    let analysis = FlowAnalyzer::new().analyze(&comparative(traditional, ai_enabled, 1));

    // 等待 15 → 6: 60%；诊疗 50 → 30: 40%；人均费用 30000 → 22500: 25%
    assert_close(analysis.improvements.wait_time_reduction.value().unwrap(), 60.0);
    assert_close(analysis.improvements.treatment_time_reduction.value().unwrap(), 40.0);
    assert_close(analysis.improvements.cost_reduction.value().unwrap(), 25.0);
    assert_close(analysis.improvements.total_cost_savings, 15_000.0);
    assert_close(analysis.traditional.avg_total_time.value().unwrap(), 65.0);
}

// ==========================================
// 测试用例 2: 病种拆分
// ==========================================

#[test]
fn test_condition_breakdown_covers_all_conditions() {
    let traditional = vec![
        PatientBuilder::new("T1").condition(Condition::Diabetes).cost(30_000.0).build(),
        PatientBuilder::new("T2").condition(Condition::Diabetes).cost(40_000.0).build(),
        PatientBuilder::new("T3").condition(Condition::Emergency).build(),
    ];
    let ai_enabled = vec![PatientBuilder::new("A1")
        .condition(Condition::Diabetes)
        .cost(21_000.0)
        .ai(true)
        .build()];

    let breakdown = FlowAnalyzer::condition_breakdown(&comparative(traditional, ai_enabled, 1));

    assert_eq!(breakdown.len(), Condition::ALL.len());
    let diabetes = breakdown
        .iter()
        .find(|row| row.condition == Condition::Diabetes)
        .unwrap();
    assert_eq!(diabetes.traditional.count, 2);
    assert_eq!(diabetes.traditional.avg_cost, MetricValue::Value(35_000.0));
    assert_eq!(diabetes.ai_enabled.count, 1);

    let checkup = breakdown
        .iter()
        .find(|row| row.condition == Condition::RoutineCheckup)
        .unwrap();
    assert_eq!(checkup.traditional.count, 0);
    assert!(checkup.traditional.avg_cost.is_undefined());
}

// ==========================================
// 测试用例 3: 节省额推算
// ==========================================

#[test]
fn test_project_savings_formula() {
    let traditional = vec![PatientBuilder::new("T1").cost(130_000.0).build()];
    let ai_enabled = vec![PatientBuilder::new("A1").cost(100_000.0).ai(true).build()];
    let analyzer = FlowAnalyzer::new();
    let analysis = analyzer.analyze(&comparative(traditional, ai_enabled, 30));

    let savings = analyzer.project_savings(&analysis, 1_000_000.0, 5, 1.1).unwrap();

    // 30,000 × 365 / 30 = 365,000；× 5 × 1.1 = 2,007,500
    assert_close(savings.total_cost_savings, 30_000.0);
    assert_close(savings.annualized_savings, 365_000.0);
    assert_close(savings.projected_savings, 2_007_500.0);
    assert_close(savings.roi_percentage.value().unwrap(), 100.75);
}

#[test]
fn test_project_savings_zero_cost_is_undefined_roi() {
    let analyzer = FlowAnalyzer::new();
    let analysis = analyzer.analyze(&comparative(
        vec![PatientBuilder::new("T1").build()],
        vec![PatientBuilder::new("A1").ai(true).build()],
        10,
    ));

    let savings = analyzer.project_savings(&analysis, 0.0, 5, 1.1).unwrap();
    assert!(savings.roi_percentage.is_undefined());

    assert!(matches!(
        analyzer.project_savings(&analysis, 1.0, 0, 1.1),
        Err(EngineError::InvalidParameter { .. })
    ));
}

// ==========================================
// 测试用例 4: 仿真全流程
// ==========================================

#[test]
fn test_simulated_month_shows_savings() {
    let result = FlowSimulator::default()
        .run_comparative(&mut seeded(20250101), 30)
        .unwrap();
    let analysis = FlowAnalyzer::new().analyze(&result);

    assert_eq!(analysis.traditional.total_patients, 6_000);
    assert_eq!(analysis.ai_enabled.total_patients, 6_000);
    assert!(analysis.improvements.total_cost_savings > 0.0);
    assert!(analysis.improvements.cost_reduction.value().unwrap() > 0.0);
    assert!(analysis.improvements.treatment_time_reduction.value().unwrap() > 0.0);
    assert!(analysis.improvements.wait_time_reduction.value().unwrap() > 0.0);
}
