use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use once_cell::sync::Lazy;
use pprof::criterion::{Output, PProfProfiler};
use request_gatekeeper::{
    AllowedOrigins, Decision, Gatekeeper, GatekeeperOptions, RequestBody, RequestContext,
    StatusRewriter, contains_ignore_case, source_hostname,
};
use serde_json::{Value, json};
use std::env;

const PUBLIC_URL: &str = "https://cms.bench.local";
const ALLOWED_ORIGIN: &str = "https://app.bench.allowed";
const HEAVY_CONTENT_TYPE: &str = "Multipart/Form-Data; boundary=----BenchBoundary0123456789";

static LOGIN_BODY: Lazy<Value> = Lazy::new(|| {
    json!({ "email": "bench@example.com", "password": "hunter2", "mode": "session" })
});

static GRAPHQL_BODY: Lazy<Value> = Lazy::new(|| {
    json!({
        "query": "query Articles($first: Int!) { articles(first: $first) { id title } }",
        "variables": { "first": 20 },
        "operationName": "Articles",
    })
});

static LARGE_ORIGIN_LIST: Lazy<Vec<String>> = Lazy::new(|| {
    (0..256)
        .map(|idx| format!("https://svc{idx:03}.bench.allowed"))
        .collect()
});

fn build_gatekeeper(allowed_origins: AllowedOrigins) -> Gatekeeper {
    Gatekeeper::new(GatekeeperOptions {
        allowed_origins,
        public_url: PUBLIC_URL.into(),
        ..GatekeeperOptions::default()
    })
    .expect("valid benchmark configuration")
}

fn build_allowlist_gatekeeper() -> Gatekeeper {
    build_gatekeeper(AllowedOrigins::list([
        ALLOWED_ORIGIN,
        "admin.bench.allowed",
    ]))
}

fn build_csrf_gatekeeper() -> Gatekeeper {
    build_gatekeeper(AllowedOrigins::none())
}

fn request<'a>(method: &'a str, path: &'a str) -> RequestContext<'a> {
    RequestContext::new(method, path)
}

fn expect_allow(decision: Decision) {
    if let Decision::Reject(rejection) = decision {
        panic!("unexpected rejection: {rejection:?}");
    }
}

fn expect_reject(decision: Decision) {
    assert!(!decision.is_allowed(), "unexpected allow");
}

fn bench_origin_checks(c: &mut Criterion) {
    let allowlist = build_allowlist_gatekeeper();
    let csrf = build_csrf_gatekeeper();
    let mut group = c.benchmark_group("origin_checks");

    group.bench_function("allowlist_accept", |b| {
        let ctx = RequestContext {
            origin: Some(ALLOWED_ORIGIN),
            ..request("POST", "/items")
        };
        b.iter(|| expect_allow(allowlist.evaluate(black_box(&ctx))))
    });

    group.bench_function("allowlist_reject", |b| {
        let ctx = RequestContext {
            origin: Some("https://evil.bench.test"),
            ..request("POST", "/items")
        };
        b.iter(|| expect_reject(allowlist.evaluate(black_box(&ctx))))
    });

    group.bench_function("allowlist_referer_fallback", |b| {
        let ctx = RequestContext {
            referer: Some("http://admin.bench.allowed:8080/dashboard?tab=1"),
            ..request("PATCH", "/items/1")
        };
        b.iter(|| expect_allow(allowlist.evaluate(black_box(&ctx))))
    });

    group.bench_function("csrf_same_origin", |b| {
        let ctx = RequestContext {
            origin: Some(PUBLIC_URL),
            content_type: Some(HEAVY_CONTENT_TYPE),
            ..request("POST", "/items")
        };
        b.iter(|| expect_allow(csrf.evaluate(black_box(&ctx))))
    });

    group.bench_function("csrf_cross_site_form", |b| {
        let ctx = RequestContext {
            origin: Some("https://evil.bench.test"),
            content_type: Some(HEAVY_CONTENT_TYPE),
            ..request("POST", "/items")
        };
        b.iter(|| expect_reject(csrf.evaluate(black_box(&ctx))))
    });

    group.bench_function("safe_method_shortcut", |b| {
        let ctx = RequestContext {
            origin: Some("https://evil.bench.test"),
            ..request("GET", "/items")
        };
        b.iter(|| expect_allow(csrf.evaluate(black_box(&ctx))))
    });

    group.finish();
}

fn bench_request_shape(c: &mut Criterion) {
    let keeper = build_csrf_gatekeeper();
    let mut group = c.benchmark_group("request_shape");

    group.bench_function("login_properties", |b| {
        let ctx = RequestContext {
            content_type: Some("application/json"),
            body: RequestBody::Parsed(&LOGIN_BODY),
            ..request("POST", "/auth/login")
        };
        b.iter(|| expect_allow(keeper.evaluate(black_box(&ctx))))
    });

    group.bench_function("graphql_properties", |b| {
        let ctx = RequestContext {
            content_type: Some("application/json"),
            body: RequestBody::Parsed(&GRAPHQL_BODY),
            ..request("POST", "/graphql")
        };
        b.iter(|| expect_allow(keeper.evaluate(black_box(&ctx))))
    });

    group.bench_function("graphql_system_subpath", |b| {
        let ctx = request("GET", "/graphql/system/health");
        b.iter(|| expect_allow(keeper.evaluate(black_box(&ctx))))
    });

    group.bench_function("graphql_invalid_subpath", |b| {
        let ctx = request("GET", "/graphql/introspection?depth=10");
        b.iter(|| expect_reject(keeper.evaluate(black_box(&ctx))))
    });

    group.finish();
}

fn bench_scaling_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling_inputs");
    group.sample_size(40);

    for size in [8usize, 64, 256] {
        let keeper = build_gatekeeper(AllowedOrigins::list(
            LARGE_ORIGIN_LIST.iter().take(size),
        ));
        let last = LARGE_ORIGIN_LIST[size - 1].as_str();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("allowlist_last_entry", size), &last, |b, origin| {
            let ctx = RequestContext {
                origin: Some(*origin),
                ..request("POST", "/items")
            };
            b.iter(|| expect_allow(keeper.evaluate(black_box(&ctx))))
        });
    }

    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");
    let rewriter = StatusRewriter::new();

    group.bench_function("source_hostname", |b| {
        b.iter(|| black_box(source_hostname(black_box("https://svc128.bench.allowed:8443/x"))))
    });

    group.bench_function("contains_ignore_case", |b| {
        b.iter(|| {
            black_box(contains_ignore_case(
                black_box(HEAVY_CONTENT_TYPE),
                "multipart/form-data",
            ))
        })
    });

    group.bench_function("rewrite_forbidden", |b| {
        b.iter(|| black_box(rewriter.rewrite(black_box(403), "/graphql?query=1")))
    });

    group.finish();
}

fn bench_gatekeeper(c: &mut Criterion) {
    bench_origin_checks(c);
    bench_request_shape(c);
    bench_scaling_inputs(c);
    bench_helpers(c);
}

fn configure_criterion() -> Criterion {
    if env::var_os("GATEKEEPER_PROFILE_FLAMEGRAPH").is_some() {
        Criterion::default().with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)))
    } else {
        Criterion::default()
    }
}

criterion_group!(
    name = request_gatekeeper_benches;
    config = configure_criterion();
    targets = bench_gatekeeper
);
criterion_main!(request_gatekeeper_benches);
