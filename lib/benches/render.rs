/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use sloth_prometheus::{
    build_groups, AlertRule, CancellationToken, GroupedRulesYamlRepo, RecordRule, Rule, Slo,
    SloId, SloRules, StorageSlo,
};

const WINDOWS: [&str; 7] = ["5m", "30m", "1h", "2h", "6h", "1d", "3d"];

fn synthetic_slos(n: usize) -> Vec<StorageSlo> {
    (0..n)
        .map(|i| {
            let id = format!("svc-{i}-requests-availability");
            let labels = BTreeMap::from([
                (String::from("sloth_id"), id.clone()),
                (String::from("sloth_service"), format!("svc-{i}")),
            ]);
            let record = |name: String, expr: String| {
                Rule::from(RecordRule {
                    record: name,
                    expr,
                    labels: Some(labels.clone()),
                })
            };
            StorageSlo::new(
                Slo::new(SloId::new(id.clone())),
                SloRules {
                    sli_error_rec_rules: WINDOWS
                        .iter()
                        .map(|w| {
                            record(
                                format!("slo:sli_error:ratio_rate{w}"),
                                format!("sum(rate(http_errors_total[{w}])) / sum(rate(http_requests_total[{w}]))"),
                            )
                        })
                        .collect(),
                    metadata_rec_rules: vec![
                        record(String::from("slo:objective:ratio"), String::from("vector(0.999)")),
                        record(
                            String::from("slo:error_budget:ratio"),
                            String::from("vector(1-0.999)"),
                        ),
                    ],
                    alert_rules: ["page", "ticket"]
                        .iter()
                        .map(|severity| {
                            Rule::from(AlertRule {
                                alert: format!("Svc{i}HighErrorRate"),
                                expr: String::from("slo:sli_error:ratio_rate5m > (14.4 * 0.001)"),
                                r#for: None,
                                labels: Some(BTreeMap::from([(
                                    String::from("severity"),
                                    severity.to_string(),
                                )])),
                                annotations: Some(BTreeMap::from([(
                                    String::from("summary"),
                                    format!("{id} is burning its error budget"),
                                )])),
                            })
                        })
                        .collect(),
                },
            )
        })
        .collect()
}

fn bench_build_groups(c: &mut Criterion) {
    let slos = synthetic_slos(500);
    c.bench_function("build_groups_500", |b| {
        b.iter(|| build_groups(&slos).len())
    });
}

fn bench_store_slos(c: &mut Criterion) {
    let slos = synthetic_slos(500);
    let token = CancellationToken::new();
    c.bench_function("store_slos_500", |b| {
        b.iter(|| {
            let mut repo = GroupedRulesYamlRepo::new(Vec::<u8>::new());
            repo.store_slos(&token, &slos)
                .expect("failed to store rule file");
            repo.into_inner().len()
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_build_groups, bench_store_slos
);
criterion_main!(benches);
