/// Benchmarks for decoding congress.gov response bodies into the typed models, and for
/// building request descriptors.
use congress_gov_client::Endpoint as _;
use congress_gov_client::types::request::{CrsReportsRequest, NominationCommitteesRequest};
use congress_gov_client::types::response::{
    CrsReportsResponse, CurrentCongressResponse, TreatyCommitteesResponse,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn crs_report(id: usize) -> String {
    format!(
        r#"{{
            "contentType": "Reports",
            "id": "R{id:05}",
            "publishDate": "2025-02-05T11:34:25Z",
            "status": "Active",
            "title": "SBA Assistance to Small Business Startups",
            "updateDate": "2025-02-07T01:36:49Z",
            "url": "http://api.congress.gov/v3/crsreport/R{id:05}",
            "version": 145
        }}"#
    )
}

fn bench_congress(c: &mut Criterion) {
    let mut group = c.benchmark_group("congress/current");

    let current = r#"{
        "congress": {
            "endYear": "2024",
            "name": "118th Congress",
            "number": 118,
            "sessions": [
                {"chamber": "House of Representatives", "endDate": "2024-01-03", "number": 1, "startDate": "2023-01-03", "type": "R"},
                {"chamber": "Senate", "endDate": "2024-01-03", "number": 1, "startDate": "2023-01-03", "type": "R"},
                {"chamber": "Senate", "number": 2, "startDate": "2024-01-03", "type": "R"},
                {"chamber": "House of Representatives", "number": 2, "startDate": "2024-01-03", "type": "R"}
            ],
            "startYear": "2023",
            "updateDate": "2023-01-03T17:43:32Z",
            "url": "https://api.congress.gov/v3/congress/current?format=json"
        }
    }"#;

    group.throughput(Throughput::Bytes(current.len() as u64));
    group.bench_function("CurrentCongressResponse", |b| {
        b.iter(|| {
            let _: CurrentCongressResponse = serde_json::from_str(std::hint::black_box(current))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

fn bench_crs_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("crsreport/list");

    for count in [1_usize, 20, 250] {
        let reports: Vec<String> = (0..count).map(crs_report).collect();
        let json = format!(r#"{{"CRSReports": [{}]}}"#, reports.join(","));

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("CrsReportsResponse", count),
            &json,
            |b, json| {
                b.iter(|| {
                    let _: CrsReportsResponse = serde_json::from_str(std::hint::black_box(json))
                        .expect("Deserialization should succeed");
                });
            },
        );
    }

    group.finish();
}

fn bench_committees(c: &mut Criterion) {
    let mut group = c.benchmark_group("treaty/committees");

    let committees = r#"{
        "treatyCommittees": [
            {
                "activities": [
                    {"date": "2020-06-18T20:19:22Z", "name": "Referred to"},
                    {"date": "2020-07-30T14:00:00Z", "name": "Hearings by"},
                    {"date": "2020-09-22T15:30:00Z", "name": "Reported by"}
                ],
                "chamber": "Senate",
                "name": "Foreign Relations Committee",
                "subcommittees": [],
                "systemCode": "ssfr00",
                "type": "Standing",
                "url": "https://api.congress.gov/v3/committee/senate/ssfr00?format=json"
            }
        ]
    }"#;

    group.throughput(Throughput::Bytes(committees.len() as u64));
    group.bench_function("TreatyCommitteesResponse", |b| {
        b.iter(|| {
            let _: TreatyCommitteesResponse =
                serde_json::from_str(std::hint::black_box(committees))
                    .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

fn bench_request_parts(c: &mut Criterion) {
    let mut group = c.benchmark_group("request/parts");

    let nomination = NominationCommitteesRequest::builder()
        .congress(117)
        .nomination_number(2467)
        .build();
    group.bench_function("NominationCommitteesRequest", |b| {
        b.iter(|| {
            std::hint::black_box(&nomination)
                .parts()
                .expect("parts should build")
        });
    });

    let reports = CrsReportsRequest::builder()
        .format("json")
        .offset(250)
        .limit(250)
        .build();
    group.bench_function("CrsReportsRequest", |b| {
        b.iter(|| {
            std::hint::black_box(&reports)
                .parts()
                .expect("parts should build")
        });
    });

    group.finish();
}

criterion_group!(
    congress_benches,
    bench_congress,
    bench_crs_reports,
    bench_committees,
    bench_request_parts
);
criterion_main!(congress_benches);
