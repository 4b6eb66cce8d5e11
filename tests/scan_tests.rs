use fastscan::config::{Aggressiveness, ScanConfig};
use fastscan::output::{nmap_command, write_report, LiveOutput};
use fastscan::scanner::{run_scan, TcpProber};
use fastscan::types::{Port, PortRange, ScanTarget};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

fn localhost() -> ScanTarget {
    ScanTarget::new("127.0.0.1", IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn range(start: u16, end: u16) -> PortRange {
    PortRange::new(Port::new(start).unwrap(), Port::new(end).unwrap()).unwrap()
}

async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    (listener, port)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn finds_single_listening_port() {
    let (_listener, port) = listener().await;
    let config = ScanConfig::new(localhost(), Aggressiveness::L1, range(port, port));

    let report = run_scan(
        &config,
        Arc::new(TcpProber),
        LiveOutput::silent(),
        CancellationToken::new(),
    )
    .await;

    assert_eq!(report.open_ports, vec![Port::new(port).unwrap()]);
    assert!(!report.interrupted);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn closed_port_is_not_reported() {
    let (listener, port) = listener().await;
    drop(listener);
    let config = ScanConfig::new(localhost(), Aggressiveness::L5, range(port, port));

    let report = run_scan(
        &config,
        Arc::new(TcpProber),
        LiveOutput::silent(),
        CancellationToken::new(),
    )
    .await;

    assert!(report.open_ports.is_empty());

    let mut buf = Vec::new();
    write_report(&mut buf, &report).unwrap();
    let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
    assert!(text.contains("No open ports found"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn finds_every_listener_across_batches() {
    let (_a, port_a) = listener().await;
    let (_b, port_b) = listener().await;
    let (low, high) = (port_a.min(port_b), port_a.max(port_b));

    let config = ScanConfig::new(localhost(), Aggressiveness::L5, range(low, high))
        .with_batch_size(16)
        .unwrap();

    let report = run_scan(
        &config,
        Arc::new(TcpProber),
        LiveOutput::silent(),
        CancellationToken::new(),
    )
    .await;

    // Other local services may share the range; ours must be present and
    // the result sorted without duplicates.
    assert!(report.open_ports.contains(&Port::new(port_a).unwrap()));
    assert!(report.open_ports.contains(&Port::new(port_b).unwrap()));
    assert!(report.open_ports.windows(2).all(|w| w[0] < w[1]));

    let command = nmap_command(&report.target, &report.open_ports).unwrap();
    assert!(command.starts_with("nmap -p "));
    assert!(command.ends_with(" -sV -sC -A 127.0.0.1"));
}
