//! Configuration discovery, env overrides and seed files

use std::io::Write;

use libserstation::config::{resolve_config_path, Config};
use libserstation::{Action, PostDraft, Store, StoreError};
use serial_test::serial;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn clear_env() {
    std::env::remove_var("SERSTATION_CONFIG");
    std::env::remove_var("SERSTATION_TICK_MS");
    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn test_config_path_from_env() {
    clear_env();
    std::env::set_var("SERSTATION_CONFIG", "/tmp/serstation-test/config.toml");

    let path = resolve_config_path().unwrap();
    clear_env();

    assert_eq!(path, std::path::PathBuf::from("/tmp/serstation-test/config.toml"));
}

#[test]
#[serial]
fn test_missing_config_file_yields_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    std::env::set_var("SERSTATION_CONFIG", dir.path().join("absent.toml"));

    let config = Config::load().unwrap();
    clear_env();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_load_reads_file_and_applies_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "config.toml",
        r#"
[profile]
id = "42"
username = "Gearhead"
avatar = "🔧"

[feed]
default_group = "tuning"

[ui]
tick_rate_ms = 200
"#,
    );
    std::env::set_var("SERSTATION_CONFIG", &path);
    std::env::set_var("SERSTATION_TICK_MS", "50");
    std::env::set_var("NO_COLOR", "1");

    let config = Config::load().unwrap();
    clear_env();

    assert_eq!(config.profile.session().username, "Gearhead");
    assert_eq!(config.feed.default_group.as_deref(), Some("tuning"));
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert!(!config.ui.colors);
}

#[test]
#[serial]
fn test_invalid_tick_env_is_ignored() {
    clear_env();
    std::env::set_var("SERSTATION_TICK_MS", "fast");

    let mut config = Config::default();
    config.apply_env_overrides();
    clear_env();

    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "config.toml", "[profile\nusername = ");

    let err = Config::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_store_from_config_uses_seed_file() {
    let dir = TempDir::new().unwrap();
    let seed_path = write_file(
        &dir,
        "seed.toml",
        r#"
[[groups]]
id = "rally"
display_name = "Rally"

[[posts]]
id = "r1"
author = "GravelKing"
content = "Stage times are up"
hours_ago = 3
group_id = "rally"
"#,
    );

    let config: Config = toml::from_str(&format!(
        "[feed]\nseed_file = {:?}\ndefault_group = \"rally\"\n",
        seed_path.to_string_lossy()
    ))
    .unwrap();

    let store = Store::from_config(&config).unwrap();
    let state = store.state();

    assert_eq!(state.groups.len(), 1);
    assert_eq!(state.posts[0].author, "GravelKing");
    assert_eq!(state.selected_group_id.as_deref(), Some("rally"));
}

#[test]
fn test_store_from_config_rejects_duplicate_seed_posts() {
    let dir = TempDir::new().unwrap();
    let seed_path = write_file(
        &dir,
        "seed.toml",
        r#"
[[posts]]
id = "1"
author = "a"
content = "a"
hours_ago = 1
group_id = "g"

[[posts]]
id = "1"
author = "b"
content = "b"
hours_ago = 2
group_id = "g"
"#,
    );

    let mut config = Config::default();
    config.feed.seed_file = Some(seed_path.to_string_lossy().into_owned());

    let err = Store::from_config(&config).unwrap_err();
    assert!(matches!(err, StoreError::Seed(_)));
}

fn config_with_seed(dir: &TempDir, seed: &str) -> Config {
    let seed_path = write_file(dir, "seed.toml", seed);
    let mut config = Config::default();
    config.feed.seed_file = Some(seed_path.to_string_lossy().into_owned());
    config
}

#[test]
fn test_store_from_config_rejects_out_of_range_hours_ago() {
    let dir = TempDir::new().unwrap();
    let config = config_with_seed(
        &dir,
        r#"
[[posts]]
id = "1"
author = "a"
content = "a"
hours_ago = 9223372036854775807
group_id = "g"
"#,
    );

    let err = Store::from_config(&config).unwrap_err();
    assert!(matches!(err, StoreError::Seed(_)));
    assert!(err.to_string().contains("hours_ago"));
}

#[test]
fn test_store_handles_seed_values_at_type_limits() {
    let dir = TempDir::new().unwrap();
    let config = config_with_seed(
        &dir,
        r#"
[[posts]]
id = "18446744073709551615"
author = "a"
content = "a"
hours_ago = 1
like_count = 4294967295
group_id = "g"
"#,
    );

    let mut store = Store::from_config(&config).unwrap();

    store.dispatch(Action::toggle_like("18446744073709551615"));
    let post = &store.state().posts[0];
    assert!(post.liked_by_current_user);
    assert_eq!(post.like_count, u32::MAX);

    store.dispatch(Action::AddPost(PostDraft::new("b", "b", "g")));
    assert_eq!(store.state().posts[0].id, "1");
    assert_eq!(store.state().posts.len(), 2);
}
