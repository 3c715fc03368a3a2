//! Integration tests for rirstats-csv
//!
//! These tests run the whole pipeline against fixture registry files served by
//! an in-memory fetcher.

use rirstats_csv::diagnostics::MemoryDiagnostics;
use rirstats_csv::error::RirError;
use rirstats_csv::fetch::Fetcher;
use rirstats_csv::output::CSV_HEADER;
use rirstats_csv::{collect_ranges, run};
use std::collections::HashMap;
use std::net::Ipv4Addr;

const APNIC: &str = "src/tests/test_data/delegated-apnic-ipv4.txt";
const RIPENCC: &str = "src/tests/test_data/delegated-ripencc-ipv6.txt";
const BAD_VERSION: &str = "src/tests/test_data/delegated-bad-version.txt";
const MALFORMED: &str = "src/tests/test_data/delegated-malformed-detail.txt";

/// Serves fixture files by URL; unknown URLs fail like a 404.
struct FixtureFetcher {
    files: HashMap<String, String>,
}

impl FixtureFetcher {
    fn new(files: &[&str]) -> FixtureFetcher {
        let files = files
            .iter()
            .map(|path| {
                let text = std::fs::read_to_string(path)
                    .unwrap_or_else(|e| panic!("Error reading fixture {path}: {e}"));
                (format!("file://{path}"), text)
            })
            .collect();
        FixtureFetcher { files }
    }
}

impl Fetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String, RirError> {
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| RirError::Retrieval {
                url: url.to_string(),
                reason: "status 404 Not Found".to_string(),
            })
    }
}

fn urls(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| format!("file://{p}")).collect()
}

async fn run_to_string(paths: &[&str]) -> Result<(String, usize), RirError> {
    let fetcher = FixtureFetcher::new(paths);
    let diag = MemoryDiagnostics::new();
    let mut out = Vec::new();
    let rows = run(&fetcher, &urls(paths), &mut out, &diag).await?;
    Ok((String::from_utf8(out).expect("CSV should be UTF-8"), rows))
}

#[tokio::test]
async fn test_full_workflow_two_sources() {
    // ripencc first so that the family partition, not source order, decides row order
    let (csv, rows) = run_to_string(&[RIPENCC, APNIC])
        .await
        .expect("pipeline should succeed");

    let expected = "\
type,subnet,registry,country,date,status,reg_id
ipv4,1.0.1.0/24,apnic,CN,2011-04-14,allocated,A92E1062
ipv4,1.0.4.0/30,apnic,KR,2011-04-12,allocated,
ipv4,1.0.8.0/31,apnic,ZZ,,available,
ipv4,1.0.8.2/32,apnic,ZZ,,available,
ipv4,1.0.16.0/20,apnic,JP,2011-04-12,allocated,A92E1062
ipv4,203.0.113.0/24,apnic,AU,2002-08-01,assigned,A91A7381
ipv4,203.0.114.0/23,apnic,AU,2002-08-01,assigned,A91A7381
ipv6,2001:608::/32,ripencc,DE,1999-08-19,allocated,0c9a6d12
ipv6,2001:67c:2e8::/48,ripencc,NL,2010-08-20,assigned,b5e1a6f4
ipv6,2a00:1450::/29,ripencc,GB,2008-11-07,allocated,
";
    assert_eq!(csv, expected);
    assert_eq!(rows, 10);
}

#[tokio::test]
async fn test_output_partitions_are_sorted() {
    let (csv, _) = run_to_string(&[APNIC, RIPENCC]).await.unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<Vec<&str>> = lines.map(|l| l.split(',').collect()).collect();
    let first_v6 = rows
        .iter()
        .position(|r| r[0] == "ipv6")
        .expect("expected ipv6 rows");
    assert!(rows[..first_v6].iter().all(|r| r[0] == "ipv4"));
    assert!(rows[first_v6..].iter().all(|r| r[0] == "ipv6"));

    let v4_starts: Vec<Ipv4Addr> = rows[..first_v6]
        .iter()
        .map(|r| r[1].split('/').next().unwrap().parse().unwrap())
        .collect();
    assert!(v4_starts.windows(2).all(|w| w[0] < w[1]));

    let v6_starts: Vec<std::net::Ipv6Addr> = rows[first_v6..]
        .iter()
        .map(|r| r[1].split('/').next().unwrap().parse().unwrap())
        .collect();
    assert!(v6_starts.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_asn_records_never_emitted() {
    let (csv, _) = run_to_string(&[APNIC, RIPENCC]).await.unwrap();
    assert!(!csv.contains("asn"));
    assert!(!csv.contains("4608"));
    assert!(!csv.contains("3333"));
}

#[tokio::test]
async fn test_collect_ranges_counts() {
    let fetcher = FixtureFetcher::new(&[APNIC, RIPENCC]);
    let diag = MemoryDiagnostics::new();
    let ranges = collect_ranges(&fetcher, &urls(&[APNIC, RIPENCC]), &diag)
        .await
        .unwrap();
    assert_eq!(ranges.ipv4.len(), 5);
    assert_eq!(ranges.ipv6.len(), 3);
    // declared record counts match what was read
    assert!(!diag.messages().iter().any(|m| m.contains("declared")));
    assert!(diag.warnings().is_empty());
}

#[tokio::test]
async fn test_bad_version_is_fatal() {
    let result = run_to_string(&[APNIC, BAD_VERSION]).await;
    assert!(matches!(result, Err(RirError::FormatVersion { .. })));
}

#[tokio::test]
async fn test_malformed_detail_is_fatal() {
    let result = run_to_string(&[MALFORMED, APNIC]).await;
    match result {
        Err(RirError::MalformedDetail { line, .. }) => {
            assert_eq!(line, "lacnic|BR|ipv4|200.160.0|4096|19980101|allocated|abc")
        }
        other => panic!("expected malformed detail error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retrieval_failure_writes_nothing() {
    let fetcher = FixtureFetcher::new(&[APNIC]);
    let diag = MemoryDiagnostics::new();
    let mut out = Vec::new();
    let sources = vec![
        format!("file://{APNIC}"),
        "http://ftp.example.net/missing".to_string(),
    ];
    let result = run(&fetcher, &sources, &mut out, &diag).await;
    match result {
        Err(RirError::Retrieval { url, .. }) => assert_eq!(url, "http://ftp.example.net/missing"),
        other => panic!("expected retrieval error, got {other:?}"),
    }
    assert!(out.is_empty(), "no partial CSV across sources");
}
