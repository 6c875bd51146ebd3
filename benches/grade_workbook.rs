//! Benchmark for grading throughput
//!
//! Measures one full grade (ten rule modules, bonus, transcript) and a
//! parallel batch of records.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use design_grader_rust::comparison::compare_logs;
use design_grader_rust::data::cell_ref;
use design_grader_rust::{grade_workbook, DesignScorer, RubricConfig, TableName, Workbook};

/// Record with a populated constraint diagram and mission table
fn sample_record(index: u32) -> Workbook {
    let mut wb = Workbook::with_file_name(format!("bench_{}.xlsm", index));
    for col in 11..=31 {
        let ws = 20.0 + 5.0 * f64::from(col - 11);
        wb.set(TableName::Constants, &cell_ref(22, col), ws);
        for row in [23, 24, 26, 27, 28, 29, 32] {
            wb.set(TableName::Constants, &cell_ref(row, col), 0.4 + 0.004 * ws);
        }
    }
    for col in 3..=14 {
        wb.set(TableName::Mission, &cell_ref(48, col), 1000.0);
        wb.set(TableName::Mission, &cell_ref(49, col), 1500.0 + f64::from(index));
    }
    wb.set(TableName::Main, "P13", 60.0);
    wb.set(TableName::Main, "Q13", 0.7);
    wb.set(TableName::Main, "Y37", 380.0 + f64::from(index % 40));
    wb.set(TableName::Main, "N31", 187.0);
    wb.set(TableName::Main, "Q31", 105.0);
    wb
}

fn bench_grade(c: &mut Criterion) {
    let rubric = RubricConfig::default();
    let record = sample_record(0);

    c.bench_function("grade_workbook", |b| {
        b.iter(|| grade_workbook(black_box(&record), black_box(&rubric)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let scorer = DesignScorer::default();
    let records: Vec<Workbook> = (0..256).map(sample_record).collect();

    c.bench_function("score_batch_256", |b| {
        b.iter(|| scorer.score_batch(black_box(&records)))
    });
    c.bench_function("score_batch_parallel_256", |b| {
        b.iter(|| scorer.score_batch_parallel(black_box(&records)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let result = grade_workbook(&sample_record(1), &RubricConfig::default());
    let expected: Vec<String> = result.lines().map(|line| format!("{} ", line)).collect();

    c.bench_function("compare_logs", |b| {
        b.iter(|| compare_logs(black_box(expected.clone()), black_box(result.feedback_log.as_str())))
    });
}

criterion_group!(benches, bench_grade, bench_batch, bench_compare);
criterion_main!(benches);
