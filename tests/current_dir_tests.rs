//! Working-directory construction tests
//!
//! These change the process working directory, so they run serially.

mod common;

use autoimport::{Imports, ImportsConfig};
use common::ImportTree;
use serial_test::serial;

struct CwdGuard(std::path::PathBuf);

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        Self(previous)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

#[test]
#[serial]
fn test_from_current_dir() {
    let tree = ImportTree::new();
    tree.write("here.json", "\"cwd\"");

    let _guard = CwdGuard::enter(&tree.root());
    let imports = Imports::from_current_dir().unwrap();
    assert_eq!(imports.root(), tree.root().as_path());
    assert_eq!(*imports.get("here").unwrap().unwrap(), serde_json::json!("cwd"));
}

#[test]
#[serial]
fn test_config_without_root_uses_current_dir() {
    let tree = ImportTree::new();
    tree.write("x/settings.toml", "debug = true");

    let _guard = CwdGuard::enter(&tree.root());
    let imports = Imports::with_config(&ImportsConfig::default()).unwrap();
    assert_eq!(imports.keys(), vec!["settings"]);
}

struct RemoveOnDrop(std::path::PathBuf);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
#[serial]
fn test_from_exe_dir_resolves_file_next_to_executable() {
    let exe = std::env::current_exe().unwrap();
    let exe_dir = exe.parent().unwrap().canonicalize().unwrap();
    let name = format!("exe_dir_settings_{}", std::process::id());
    let settings = exe_dir.join(format!("{}.json", name));
    std::fs::write(&settings, r#"{"from": "exe dir"}"#).unwrap();
    let _cleanup = RemoveOnDrop(settings);

    let imports = Imports::from_exe_dir().unwrap();
    assert_eq!(imports.root(), exe_dir.as_path());
    assert!(imports.contains_key(&name));
    assert_eq!(
        *imports.get(&name).unwrap().unwrap(),
        serde_json::json!({"from": "exe dir"})
    );
}
