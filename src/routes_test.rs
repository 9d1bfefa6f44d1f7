use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_joins_site_root_and_pkg() {
    assert_eq!(pkg_dir("target/site", "pkg"), PathBuf::from("target/site/pkg"));
}
