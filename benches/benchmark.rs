//! Performance benchmarks for newsbrief.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newsbrief::summary::summarize;
use newsbrief::{extract, extract_with_config, Config};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <title>수도권 전철 연장 확정 - 뉴스브리프</title>
</head>
<body>
    <nav>
        <a href="/">홈</a>
        <a href="/news/">뉴스</a>
    </nav>
    <h1>수도권 전철 연장 사업 확정</h1>
    <span class="reporter-name">김철수 기자</span>
    <article>
        <p>국토교통부는 수도권 전철 연장 사업의 기본계획을 최종 확정했다고
        밝혔다. 총 연장 구간은 12.3킬로미터로, 네 개 역이 새로 들어선다.</p>
        <p>사업비는 약 1조 2천억 원 규모로 추산되며, 착공은 내후년 상반기를
        목표로 하고 있다. 개통 시 출퇴근 시간이 크게 단축될 전망이다.</p>
        <p>지역 주민들은 오랜 숙원 사업이 확정되었다며 환영하는 분위기다.
        다만 일부 구간의 소음 대책을 요구하는 목소리도 나온다.</p>
        <p>ⓒ 뉴스브리프, 무단전재 및 재배포 금지</p>
    </article>
    <footer>
        <p>Copyright 2025 뉴스브리프. All rights reserved.</p>
    </footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_strict(c: &mut Criterion) {
    let config = Config::strict();
    c.bench_function("extract_strict", |b| {
        b.iter(|| extract_with_config(black_box(SAMPLE_HTML), &config));
    });
}

fn bench_summarize(c: &mut Criterion) {
    let body = extract(SAMPLE_HTML).body_text;
    c.bench_function("summarize", |b| {
        b.iter(|| summarize(black_box(&body)));
    });
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_strict,
    bench_summarize
);
criterion_main!(benches);
