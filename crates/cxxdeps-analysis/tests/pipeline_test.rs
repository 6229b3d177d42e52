//! End-to-end runs of the analyzer over in-memory and on-disk projects.

use std::fs;
use std::path::Path;

use cxxdeps_analysis::emit::{fragment, makefile, report};
use cxxdeps_analysis::{
    AnalysisOptions, AnalysisSnapshot, CorrectionRule, DependencyAnalyzer, DiskTree, MemoryTree,
    SourceTree, WalkOptions,
};

fn analyze<T: SourceTree>(tree: T, options: AnalysisOptions) -> AnalysisSnapshot {
    let files = tree.source_files();
    let mut analyzer = DependencyAnalyzer::new(options, tree);
    analyzer.parse_files(&files);
    analyzer.finish()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_quoted_import_produces_object_edge() {
    let tree = MemoryTree::new()
        .with_file("src/a.cpp", "import \"b\";\n")
        .with_file("src/b.cppm", "export module b;\n");
    let text = fragment::render(&analyze(tree, AnalysisOptions::default()));
    assert!(text.contains("obj/a.o: obj/b.o\n"));
    assert!(text.contains("OBJECTS = obj/a.o obj/b.o\n"));
}

#[test]
fn test_standard_include_adds_nothing() {
    let tree = MemoryTree::new().with_file("src/a.cpp", "#include <vector>\n");
    let snapshot = analyze(tree, AnalysisOptions::default());
    assert!(snapshot.graph().is_empty());
    assert_eq!(snapshot.stats().includes_found, 1);
    assert_eq!(fragment::render(&snapshot), "");
}

#[test]
fn test_unknown_module_leaves_no_edge() {
    let tree = MemoryTree::new()
        .with_file("src/a.cpp", "import nowhere.to.be.found;\nimport b;\n")
        .with_file("src/b.cppm", "export module b;\n");
    let snapshot = analyze(tree, AnalysisOptions::default());
    let all: Vec<&String> = snapshot.graph().iter().flat_map(|(_, deps)| deps).collect();
    assert_eq!(all, vec!["obj/b.o"]);
    assert_eq!(snapshot.stats().imports_found, 2);
}

#[test]
fn test_hierarchical_module_found_by_path_spelling() {
    let tree = MemoryTree::new()
        .with_file("src/main.cpp", "import net.http;\n")
        .with_file("src/net/http.cppm", "export module net.http;\n");
    let snapshot = analyze(tree, AnalysisOptions::default());
    assert!(snapshot
        .graph()
        .prerequisites("obj/main.o")
        .unwrap()
        .contains("obj/net/http.o"));
}

#[test]
fn test_fragment_is_byte_identical_across_runs() {
    let tree = MemoryTree::new()
        .with_file("src/a.cpp", "import b;\nimport c;\n#include \"a.h\"\n")
        .with_file("src/a.h", "")
        .with_file("src/b.cppm", "export module b;\nimport c;\n")
        .with_file("src/c.cppm", "export module c;\n");
    let first = fragment::render(&analyze(tree.clone(), AnalysisOptions::default()));
    let second = fragment::render(&analyze(tree, AnalysisOptions::default()));
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_custom_roots_and_extensions() {
    let tree = MemoryTree::new()
        .with_file("source/app.cpp", "import util;\n")
        .with_file("source/util.ixx", "export module util;\n");
    let options = AnalysisOptions {
        source_root: "source".to_string(),
        object_root: "build".to_string(),
        object_extension: ".obj".to_string(),
        module_extension: ".ixx".to_string(),
        ..Default::default()
    };
    // `.ixx` is not part of the inventory glob, so feed the files explicitly.
    let mut analyzer = DependencyAnalyzer::new(options, tree);
    analyzer.parse_files(&["source/app.cpp".to_string(), "source/util.ixx".to_string()]);
    let snapshot = analyzer.finish();
    let text = fragment::render(&snapshot);
    assert!(text.contains("# Sources in source/, objects in build/\n"));
    assert!(text.contains("build/app.obj: build/util.obj\n"));
}

#[test]
fn test_cycles_pass_through() {
    let tree = MemoryTree::new()
        .with_file("src/a.cppm", "export module a;\nimport b;\n")
        .with_file("src/b.cppm", "export module b;\nimport a;\n");
    let text = fragment::render(&analyze(tree, AnalysisOptions::default()));
    assert!(text.contains("obj/a.o: obj/b.o\n"));
    assert!(text.contains("obj/b.o: obj/a.o\n"));
}

#[test]
fn test_disk_project_with_two_spellings() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    write(root, "src/a.cpp", "import b;\n");
    write(root, "src/b.cppm", "export module b;\n#include \"b.h\"\n");
    write(root, "src/b.h", "");
    write(root, "src/sub/c.cpp", "import b;\n#include \"../b.h\"\n");

    let tree = DiskTree::new(root, &WalkOptions::default());
    let mut analyzer = DependencyAnalyzer::new(AnalysisOptions::default(), tree);
    // Same file seen through three spellings.
    analyzer.parse_files(&[
        "src/b.cppm".to_string(),
        "./src/a.cpp".to_string(),
        "src/sub/../a.cpp".to_string(),
        "src/sub/c.cpp".to_string(),
    ]);
    let snapshot = analyzer.finish();

    let targets: Vec<&str> = snapshot.graph().targets().collect();
    assert_eq!(targets, vec!["obj/a.o", "obj/b.o", "obj/sub/c.o"]);
    assert!(snapshot
        .corrections()
        .iter()
        .any(|c| c.original == "obj/sub/../a.o" && c.rule == CorrectionRule::ReverseMapped));
    assert_eq!(
        snapshot.graph().prerequisites("obj/sub/c.o").unwrap().iter().collect::<Vec<_>>(),
        vec!["obj/b.o", "src/sub/../b.h"]
    );

    let text = makefile::render(&snapshot);
    assert!(text.contains("OBJECTS = obj/a.o obj/b.o obj/sub/c.o\n"));
    assert!(text.contains("obj/b.o: src/b.h\n"));
}

#[test]
fn test_disk_read_errors_do_not_abort() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "src/a.cpp", "import b;\n");
    write(dir.path(), "src/b.cppm", "export module b;\n");

    let tree = DiskTree::new(dir.path(), &WalkOptions::default());
    let mut analyzer = DependencyAnalyzer::new(AnalysisOptions::default(), tree);
    analyzer.parse_files(&["src/missing.cpp".to_string(), "src/b.cppm".to_string()]);
    analyzer.parse_file("src/a.cpp");
    let snapshot = analyzer.finish();

    assert_eq!(snapshot.stats().files_processed, 3);
    assert_eq!(snapshot.stats().error_count(), 1);
    assert!(snapshot.graph().prerequisites("obj/a.o").is_some());
    assert!(report::render(&snapshot).contains("Error processing src/missing.cpp: "));
}
