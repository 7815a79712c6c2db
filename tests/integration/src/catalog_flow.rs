//! End-to-end catalog flow
//!
//! Exercises the complete path a workflow compiler takes: seed the per-user
//! configuration -> read both registries -> build the tool and workflow
//! catalogs -> resolve steps by name.

use pretty_assertions::assert_eq;
use serde_json::json;
use stepcat_core::{
    Diagnostic, Diagnostics, StepId, ToolCatalogBuilder, WorkflowCatalogBuilder,
};
use stepcat_meta::{ConfigHome, RegistryKind};
use stepcat_test_utils::TestTree;
use stepcat_test_utils::fixtures::{COMMAND_LINE_TOOL, TOOL_WITH_STREAMS, WORKFLOW};

/// A tree with two tool directories sharing a namespace, a deprecated
/// package, an empty namespace, and a workflow tree with generated inputs.
fn setup_project() -> TestTree {
    let tree = TestTree::new();

    tree.write("project/cwl_adapters/align.cwl", TOOL_WITH_STREAMS);
    tree.write("project/cwl_adapters/biobb_md/grompp.cwl", COMMAND_LINE_TOOL);
    tree.write("project/extra_adapters/nested/sort.cwl", COMMAND_LINE_TOOL);
    tree.write("project/extra_adapters/align.cwl", COMMAND_LINE_TOOL);
    tree.mkdir("project/mm_adapters");

    tree.write("project/workflows/align_sort.yml", WORKFLOW);
    tree.write("project/workflows/examples/long/align_sort.yml", WORKFLOW);
    tree.write("project/workflows/align_sort_inputs.yml", "message: hi\n");
    tree.write("project/more_workflows/qc.yml", WORKFLOW);

    tree.registry(
        "home/stepcat/tool_dirs.txt",
        &[
            ("global", "project/cwl_adapters"),
            ("mm", "project/mm_adapters"),
            ("global", "project/extra_adapters"),
        ],
    );
    tree.registry(
        "home/stepcat/workflow_dirs.txt",
        &[
            ("global", "project/workflows"),
            ("global", "project/more_workflows"),
        ],
    );
    tree
}

#[test]
fn test_full_catalog_flow() {
    let tree = setup_project();
    let home = ConfigHome::new(tree.path("home"));

    // Existing registries are kept as-is
    assert!(home.ensure_config_files().unwrap().is_empty());
    let settings = home.settings().unwrap();

    let tool_pairs = home.read_registry(RegistryKind::Tools).unwrap();
    assert_eq!(tool_pairs.len(), 3);
    assert_eq!(tool_pairs[0].namespace, "global");
    assert_eq!(tool_pairs[2].namespace, "global");

    let mut diagnostics = Diagnostics::new();
    let tools = ToolCatalogBuilder::new()
        .settings(settings.clone())
        .artifact_root(tree.path("project"))
        .validate(true)
        .build(&tool_pairs, &mut diagnostics)
        .unwrap();

    // align from the later directory wins; grompp is deprecated
    assert_eq!(tools.len(), 2);
    let align = tools.get(&StepId::new("align", "global")).unwrap();
    assert_eq!(align.path, tree.path("project/extra_adapters/align.cwl"));
    assert_eq!(align.definition["stdout"], json!("align.out"));
    assert!(tools.lookup("global", "sort").is_some());
    assert!(tools.lookup("global", "grompp").is_none());

    let warnings: Vec<&Diagnostic> = diagnostics.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], Diagnostic::NoMatches { namespace, .. } if namespace == "mm"));

    let workflow_pairs = home.read_registry(RegistryKind::Workflows).unwrap();
    let mut diagnostics = Diagnostics::new();
    let workflows = WorkflowCatalogBuilder::new()
        .settings(settings)
        .artifact_root(tree.path("project"))
        .build(&workflow_pairs, &mut diagnostics)
        .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(workflows.len(), 2);
    assert_eq!(
        workflows.get("global", "align_sort"),
        Some(tree.path("project/workflows/align_sort.yml").as_path())
    );
    assert_eq!(
        workflows.get("global", "qc"),
        Some(tree.path("project/more_workflows/qc.yml").as_path())
    );

    tree.assert_file_exists("project/autogenerated/schemas/tools");
    tree.assert_file_exists("project/autogenerated/schemas/workflows");
}

#[test]
fn test_settings_file_changes_discovery() {
    let tree = setup_project();
    tree.write(
        "home/stepcat/config.toml",
        "deprecated_markers = []\ngenerated_marker = \"examples\"\n",
    );
    let home = ConfigHome::new(tree.path("home"));
    let settings = home.settings().unwrap();

    let tools = ToolCatalogBuilder::new()
        .settings(settings.clone())
        .artifact_root(tree.path("project"))
        .build(
            &home.read_registry(RegistryKind::Tools).unwrap(),
            &mut Diagnostics::new(),
        )
        .unwrap();
    assert!(tools.lookup("global", "grompp").is_some());

    let workflows = WorkflowCatalogBuilder::new()
        .settings(settings)
        .artifact_root(tree.path("project"))
        .build(
            &home.read_registry(RegistryKind::Workflows).unwrap(),
            &mut Diagnostics::new(),
        )
        .unwrap();
    // `_inputs` files are kept now and paths under `examples/` are dropped
    assert!(workflows.get("global", "align_sort_inputs").is_some());
    assert_eq!(
        workflows.get("global", "align_sort"),
        Some(tree.path("project/workflows/align_sort.yml").as_path())
    );
}

#[test]
fn test_fresh_home_is_seeded_before_reading() {
    let tree = TestTree::new();
    let home = ConfigHome::new(tree.path("home"));

    let created = home.ensure_config_files().unwrap();
    assert_eq!(created.len(), 2);

    let pairs = home.read_registry(RegistryKind::Workflows).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].namespace, "global");
    assert_eq!(pairs[0].directory, std::path::PathBuf::from("workflows"));
}
