//! Installs a Perl archive served by a local HTTP server into a temporary
//! tool cache, going through the real toolkit.

use flate2::Compression;
use flate2::write::GzEncoder;
use setup_perl_installer::{Error, Installer, InstallerConfig, ReleaseSource};
use setup_perl_toolkit::{Platform, RunnerPaths, RunnerToolKit};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn perl_tarball(top_level: &str) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let content = b"#!/bin/sh\necho perl\n";
    let mut header = tar::Header::new_gnu();
    header.set_path(format!("{top_level}/bin/perl")).unwrap();
    header.set_size(content.len() as u64);
    header.set_mode(0o755);
    header.set_cksum();
    builder.append(&header, content.as_slice()).unwrap();

    builder.into_inner().unwrap().finish().unwrap()
}

fn installer(temp: &TempDir, server: &MockServer) -> Installer {
    let platform = Platform::new("linux", "x64");
    let paths = RunnerPaths::new(temp.path().join("runner-temp"), temp.path().join("toolcache"));
    let toolkit = RunnerToolKit::new(paths, &platform).unwrap();

    Installer::new(
        Arc::new(toolkit),
        platform,
        InstallerConfig::new(temp.path().join("actions-temp")),
    )
    .with_release_source(ReleaseSource::new(server.uri(), "v0.0.1-alpha"))
}

#[tokio::test]
async fn installs_into_tool_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0.0.1-alpha/perl-5.32.0-linux-x64.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(perl_tarball("perl")))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let installer = installer(&temp, &server);

    assert_eq!(installer.find_perl("5.32.0"), None);

    let cached = installer.acquire_perl("5.32.0").await.unwrap();

    assert_eq!(cached, temp.path().join("toolcache/perl/5.32.0/x64"));
    assert!(cached.join("bin/perl").is_file());
    assert_eq!(installer.find_perl("5.32.0"), Some(cached));
}

#[tokio::test]
async fn missing_release_is_a_download_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let err = installer(&temp, &server)
        .get_perl("4.0.36")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DownloadFailed { .. }));
    let msg = err.to_string();
    assert!(msg.contains("4.0.36"));
    assert!(msg.contains("404"));
}

#[tokio::test]
async fn archive_without_perl_directory_fails_to_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(perl_tarball("perl-5.32.0")))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let err = installer(&temp, &server)
        .acquire_perl("5.32.0")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CacheFailed { .. }));
}

#[tokio::test]
async fn corrupt_archive_fails_to_extract() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<html>not found</html>".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let err = installer(&temp, &server)
        .acquire_perl("5.32.0")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ExtractFailed { .. }));
}
