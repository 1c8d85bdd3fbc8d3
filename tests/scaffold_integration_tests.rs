mod utils;

use blueprint_architect::cli::runner::list_blueprints;
use blueprint_architect::constants::CONFIG_FILENAME;
use blueprint_architect::generate::{
    scaffold_config, AccessPolicy, GenerateRequest, GenerationStatus, Generator, ScaffoldStatus,
};
use blueprint_architect::ioutils::LocalFileSystem;
use blueprint_architect::license::NoLicense;
use blueprint_architect::prompt::NoticeLevel;
use std::fs;
use std::path::{Path, PathBuf};
use test_log::test;
use utils::{assert_dirs_equal, ScriptedPrompter};

fn scaffold(root: &Path) -> ScaffoldStatus {
    let prompter = ScriptedPrompter::new();
    scaffold_config(&LocalFileSystem, &prompter, &[root.to_path_buf()], root)
}

fn generate(root: &Path, request: GenerateRequest) -> GenerationStatus {
    let prompter = ScriptedPrompter::new();
    let status = Generator::new(&LocalFileSystem, &prompter, &NoLicense)
        .run(&request)
        .unwrap();
    assert!(
        prompter.notices_at(NoticeLevel::Warning).is_empty(),
        "unexpected warnings generating into {}",
        root.display()
    );
    status
}

#[test]
fn scaffolded_config_generates_arrow_component() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    assert_eq!(scaffold(root), ScaffoldStatus::Created(root.join(CONFIG_FILENAME)));

    let target = root.join("src");
    let request = GenerateRequest::new(&target, vec![root.to_path_buf()])
        .with_blueprint("reactArrowComponent")
        .with_name("my widget")
        .with_extension("jsx");
    let status = generate(root, request);

    assert!(matches!(status, GenerationStatus::Completed(_)));
    assert_dirs_equal(&target, Path::new("tests/fixtures/arrow_component"));
}

#[test]
fn scaffolded_config_generates_hook() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    let target = root.join("app");
    let request = GenerateRequest::new(&target, vec![root.to_path_buf()])
        .with_blueprint("reactHook")
        .with_name("window size")
        .with_extension("ts");
    generate(root, request);

    assert_dirs_equal(&target, Path::new("tests/fixtures/hook"));
}

#[test]
fn scaffolding_twice_keeps_existing_config() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let config = root.join(CONFIG_FILENAME);
    fs::write(&config, r#"{"mine": {"files": [{"path": "a.txt", "content": ""}]}}"#).unwrap();

    let prompter = ScriptedPrompter::new();
    let status = scaffold_config(&LocalFileSystem, &prompter, &[root.to_path_buf()], root);

    assert_eq!(status, ScaffoldStatus::AlreadyExists(config.clone()));
    assert_eq!(prompter.notices_at(NoticeLevel::Warning).len(), 1);
    assert!(fs::read_to_string(&config).unwrap().contains("mine"));
}

#[test]
fn scaffold_targets_root_containing_the_target() {
    let tmp = tempfile::tempdir().unwrap();
    let app = tmp.path().join("app");
    let lib = tmp.path().join("lib");
    fs::create_dir_all(lib.join("src")).unwrap();
    fs::create_dir_all(&app).unwrap();

    let prompter = ScriptedPrompter::new();
    let status = scaffold_config(&LocalFileSystem, &prompter, &[app.clone(), lib.clone()], &lib.join("src"));

    assert_eq!(status, ScaffoldStatus::Created(lib.join(CONFIG_FILENAME)));
    assert!(!app.join(CONFIG_FILENAME).exists());
}

#[test]
fn scaffold_without_workspace_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    let prompter = ScriptedPrompter::new();

    let status = scaffold_config(&LocalFileSystem, &prompter, &[], tmp.path());

    assert_eq!(status, ScaffoldStatus::Aborted);
    assert_eq!(prompter.notices_at(NoticeLevel::Error), vec!["No workspace is open."]);
    assert!(!tmp.path().join(CONFIG_FILENAME).exists());
}

#[test]
fn starter_blueprints_are_listed_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    scaffold(root);

    let lines = list_blueprints(
        &LocalFileSystem,
        &[PathBuf::from(root)],
        root,
        &AccessPolicy::default(),
    )
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "reactArrowComponent (2 files)",
            "reactNamedExportComponent (2 files)",
            "reactClassComponent (2 files)",
            "reactHook (1 file)",
        ]
    );
}
