//! End-to-end tests: diagram in, filesystem and export out.

use std::fs;
use tempfile::TempDir;
use treeforge_core::{
    Action, ExcludeSet, MaterializeOptions, Materializer, Outcome, Parser, TemplateStore,
    write_export,
};

const DIAGRAM: &str = "\
webapp
├── src/
│   ├── api/
│   │   ├── routes.py
│   │   └── models.py
│   └── main.py
├── tests/
│   └── test_main.py
├── Dockerfile
└── README.md";

#[test]
fn full_pipeline_creates_the_declared_hierarchy() {
    let tmp = TempDir::new().unwrap();
    let tree = Parser::new().parse(DIAGRAM).unwrap();

    let report = Materializer::new(&tree)
        .with_options(MaterializeOptions::new().with_confirmation(false))
        .with_base(tmp.path())
        .run(|| true);

    assert_eq!(report.outcome, Outcome::Completed);
    assert_eq!(report.summary.dirs_created, 4);
    assert_eq!(report.summary.files_created, 6);
    assert_eq!(report.summary.skipped, 0);
    assert_eq!(report.summary.io_errors, 0);

    assert!(tmp.path().join("webapp/src/api/routes.py").is_file());
    assert!(tmp.path().join("webapp/tests/test_main.py").is_file());
    assert!(tmp.path().join("webapp/Dockerfile").is_file());
}

#[test]
fn dry_run_reports_planned_actions_in_preorder() {
    let input = "root\n├── src/\n│   ├── main.py\n│   └── utils.py\n└── README.md";
    let tree = Parser::new().parse(input).unwrap();

    let report = Materializer::new(&tree)
        .with_options(MaterializeOptions::new().with_dry_run(true))
        .run(|| unreachable!("dry runs skip the confirmation gate"));

    assert_eq!(report.summary.dirs_created, 2);
    assert_eq!(report.summary.files_created, 3);

    let order: Vec<&str> = report
        .actions
        .iter()
        .map(|action| match action {
            Action::CreateDir { path }
            | Action::CreateFile { path, .. }
            | Action::Skip { path }
            | Action::Failed { path, .. } => path.file_name().unwrap().to_str().unwrap(),
        })
        .collect();
    assert_eq!(order, ["root", "src", "main.py", "utils.py", "README.md"]);
}

#[test]
fn templates_fill_files_and_misses_touch() {
    let tmp = TempDir::new().unwrap();
    let templates_dir = tmp.path().join("templates");
    fs::create_dir(&templates_dir).unwrap();
    fs::write(templates_dir.join("README.md"), "# Webapp\n").unwrap();

    let store = TemplateStore::load(&templates_dir).unwrap();
    let tree = Parser::new().parse(DIAGRAM).unwrap();
    Materializer::new(&tree)
        .with_options(MaterializeOptions::new().with_confirmation(false))
        .with_templates(&store)
        .with_base(tmp.path())
        .run(|| true);

    assert_eq!(
        fs::read_to_string(tmp.path().join("webapp/README.md")).unwrap(),
        "# Webapp\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("webapp/src/main.py")).unwrap(),
        ""
    );
}

#[test]
fn exclusions_and_export_work_together() {
    let tmp = TempDir::new().unwrap();
    let tree = Parser::new().parse(DIAGRAM).unwrap();
    let excludes = ExcludeSet::compile(["^tests"]).unwrap();

    let report = Materializer::new(&tree)
        .with_options(MaterializeOptions::new().with_confirmation(false))
        .with_excludes(excludes)
        .with_base(tmp.path())
        .run(|| true);

    // `^tests` matches the directory and its child file.
    assert_eq!(report.summary.skipped, 2);

    let export_path = tmp.path().join("structure.json");
    write_export(&tree, &export_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(value["name"], "webapp");
    // The export reflects the parsed tree, not the exclusion policy.
    let names: Vec<&str> = value["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["src", "tests", "Dockerfile", "README.md"]);
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let tree = Parser::new().parse(DIAGRAM).unwrap();
    let options = MaterializeOptions::new().with_confirmation(false);

    Materializer::new(&tree)
        .with_options(options)
        .with_base(tmp.path())
        .run(|| true);
    fs::write(tmp.path().join("webapp/src/main.py"), "app = 1\n").unwrap();

    let second = Materializer::new(&tree)
        .with_options(options)
        .with_base(tmp.path())
        .run(|| true);

    assert_eq!(second.summary.io_errors, 0);
    assert_eq!(second.summary.dirs_created, 4);
    assert_eq!(second.summary.files_created, 6);
    assert_eq!(
        fs::read_to_string(tmp.path().join("webapp/src/main.py")).unwrap(),
        "app = 1\n"
    );
}
