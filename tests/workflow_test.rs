// tests/workflow_test.rs
use finalize::cli::{run_finalize_workflow, FinalizeWorkflowArgs};
use finalize::command::{Invocation, MockRunner};
use finalize::config::Config;
use finalize::domain::ReleaseKind;
use finalize::release::Finalizer;
use finalize::FinalizeError;
use std::fs::File;
use tempfile::TempDir;

fn fragment_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}

fn args_for(dir: &TempDir, dry_run: bool) -> FinalizeWorkflowArgs {
    FinalizeWorkflowArgs {
        changelog_dir: Some(dir.path().to_path_buf()),
        dry_run,
    }
}

fn identity() -> finalize::Result<String> {
    Ok("dev@example.com".to_string())
}

fn python(args: &[&str]) -> Invocation {
    Invocation::new("python3").args(args.iter().copied())
}

#[test]
fn test_get_version_returns_value() {
    let runner = MockRunner::new().respond("bumpversion", "current_version=1.2.2\nnew_version=1.2.3\n");
    let config = Config::default();
    let finalizer = Finalizer::new(&runner, &config.tools, ReleaseKind::Patch);

    assert_eq!(finalizer.get_version().unwrap(), "1.2.3");
    assert_eq!(
        runner.calls(),
        vec![python(&["-m", "bumpversion", "patch", "--dry-run", "--verbose"])]
    );
}

#[test]
fn test_get_version_without_line_fails() {
    let runner = MockRunner::new().respond("bumpversion", "nothing to see\n");
    let config = Config::default();
    let finalizer = Finalizer::new(&runner, &config.tools, ReleaseKind::Minor);

    assert!(matches!(
        finalizer.get_version(),
        Err(FinalizeError::VersionNotFound)
    ));
}

#[test]
fn test_get_version_tool_failure() {
    let runner = MockRunner::new().fail("bumpversion", 1);
    let config = Config::default();
    let finalizer = Finalizer::new(&runner, &config.tools, ReleaseKind::Minor);

    assert!(matches!(
        finalizer.get_version(),
        Err(FinalizeError::Command { code: 1, .. })
    ));
}

#[test]
fn test_end_to_end_major_release() {
    let dir = fragment_dir(&["001.breaking.rst", "002.misc.rst"]);
    let runner = MockRunner::new().respond("bumpversion", "new_version=2.0.0\n");
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, false), &config, &runner, identity).unwrap();

    assert_eq!(result.kind, ReleaseKind::Major);
    assert_eq!(result.version, "2.0.0");
    assert!(result.applied);

    let dry_run = python(&["-m", "bumpversion", "major", "--dry-run", "--verbose"]);
    assert_eq!(
        runner.calls(),
        vec![
            dry_run.clone(),
            // the changelog step resolves the version again
            dry_run,
            python(&["-m", "towncrier", "--version", "2.0.0", "--yes"]),
            python(&["-m", "bumpversion", "major", "--allow-dirty"]),
        ]
    );
}

#[test]
fn test_dry_run_stops_before_mutation() {
    let dir = fragment_dir(&["5.change.rst"]);
    let runner = MockRunner::new().respond("bumpversion", "new_version=1.3.0\n");
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, true), &config, &runner, identity).unwrap();

    assert_eq!(result.kind, ReleaseKind::Minor);
    assert_eq!(result.version, "1.3.0");
    assert!(!result.applied);
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_missing_identity_aborts_before_mutation() {
    let dir = fragment_dir(&["1.misc.rst"]);
    let runner = MockRunner::new().respond("bumpversion", "new_version=0.1.1\n");
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, false), &config, &runner, || {
        Err(FinalizeError::git_identity("user.email is not set"))
    });

    assert!(matches!(result, Err(FinalizeError::GitIdentity(_))));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_malformed_fragment_aborts_before_mutation() {
    let dir = fragment_dir(&["1.misc.rst", "notes.txt"]);
    let runner = MockRunner::new().respond("bumpversion", "new_version=0.1.1\n");
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, false), &config, &runner, identity);

    assert!(matches!(
        result,
        Err(FinalizeError::MalformedFragment { .. })
    ));
    assert!(runner
        .calls()
        .iter()
        .all(|call| !call.args.contains(&"towncrier".to_string())));
}

#[test]
fn test_empty_directory_runs_nothing() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, false), &config, &runner, identity);

    assert!(matches!(result, Err(FinalizeError::NoFragments { .. })));
    assert!(runner.calls().is_empty());
}

#[test]
fn test_changelog_failure_skips_bump() {
    let dir = fragment_dir(&["1.doc.rst"]);
    let runner = MockRunner::new()
        .respond("bumpversion", "new_version=0.1.1\n")
        .fail("towncrier", 2);
    let config = Config::default();

    let result = run_finalize_workflow(&args_for(&dir, false), &config, &runner, identity);

    assert!(matches!(result, Err(FinalizeError::Command { code: 2, .. })));
    assert!(runner
        .calls()
        .iter()
        .all(|call| !call.args.contains(&"--allow-dirty".to_string())));
}

#[test]
fn test_configured_tools_are_used() {
    let dir = fragment_dir(&["1.misc.rst"]);
    let runner = MockRunner::new().respond("bump_my_version", "new_version=0.1.1\n");
    let mut config = Config::default();
    config.tools.interpreter = "python".to_string();
    config.tools.bump_module = "bump_my_version".to_string();

    run_finalize_workflow(&args_for(&dir, false), &config, &runner, identity).unwrap();

    let calls = runner.calls();
    assert!(calls.iter().all(|call| call.program == "python"));
    assert_eq!(
        calls.last().unwrap().args,
        vec!["-m", "bump_my_version", "patch", "--allow-dirty"]
    );
}
