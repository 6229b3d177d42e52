use cxxdeps_analysis::emit::fragment;
use cxxdeps_analysis::{
    scan_source, AnalysisOptions, DependencyAnalyzer, MemoryTree, PathMapper, SourceTree,
};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn source_extension() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![".cpp", ".cc", ".cxx", ".c++", ".cppm", ".ccm", ".cxxm", ".c++m"])
}

proptest! {
    #[test]
    fn mapped_source_lands_under_object_root(
        dirs in prop::collection::vec(segment(), 0..4),
        stem in segment(),
        ext in source_extension(),
        dot_slash in any::<bool>(),
    ) {
        let mapper = PathMapper::new("src", "obj", ".o");
        let mut path = String::from(if dot_slash { "./src/" } else { "src/" });
        for dir in &dirs {
            path.push_str(dir);
            path.push('/');
        }
        path.push_str(&stem);
        path.push_str(ext);

        let target = mapper.map(&path);
        prop_assert!(target.starts_with("obj/"), "{} -> {}", path, target);
        prop_assert!(target.ends_with(".o"));
        let expected_dir = format!("obj/{}", dirs.join("/"));
        prop_assert_eq!(target.rsplit_once('/').map(|(d, _)| d.trim_end_matches('/')), Some(expected_dir.trim_end_matches('/')));
    }

    #[test]
    fn outside_source_root_keeps_directory(
        top in "(lib|tools|gen|third_party)",
        dirs in prop::collection::vec(segment(), 0..3),
        stem in segment(),
        ext in source_extension(),
    ) {
        let mapper = PathMapper::new("src", "obj", ".o");
        let dir = std::iter::once(top).chain(dirs).collect::<Vec<_>>().join("/");
        let path = format!("{dir}/{stem}{ext}");

        let target = mapper.map(&path);
        prop_assert_eq!(target.rsplit_once('/').map(|(d, _)| d), Some(dir.as_str()));
        prop_assert_eq!(target, format!("{dir}/{stem}.o"));
    }

    #[test]
    fn scanner_never_panics(text in "(\\PC|\n){0,400}") {
        let _ = scan_source("fuzz.cpp", &text, &AnalysisOptions::default());
    }

    #[test]
    fn nothing_after_unterminated_block_comment(
        before in prop::collection::vec(segment(), 0..4),
        after in prop::collection::vec(segment(), 1..6),
    ) {
        let mut text = String::new();
        for name in &before {
            text.push_str(&format!("import {name};\n"));
        }
        text.push_str("/* open\n");
        for name in &after {
            text.push_str(&format!("import hidden_{name};\nexport module hidden_{name};\n#include \"{name}.h\"\n"));
        }

        let outcome = scan_source("a.cpp", &text, &AnalysisOptions::default());
        prop_assert!(outcome.unit.imports().iter().all(|m| !m.starts_with("hidden_")));
        prop_assert!(outcome.unit.exports().is_empty());
        prop_assert!(outcome.unit.includes().is_empty());
        prop_assert_eq!(outcome.unit.imports().len(), before.iter().collect::<std::collections::BTreeSet<_>>().len());
    }

    #[test]
    fn registry_lookup_wins_regardless_of_order(
        others in prop::collection::vec(segment(), 0..6),
        exporter_position in 0usize..7,
    ) {
        // `mod_x` is exported from a file whose name the search could never find.
        let mut files: Vec<String> = others.iter().map(|n| format!("src/other_{n}.cpp")).collect();
        files.sort();
        files.dedup();
        let position = exporter_position.min(files.len());
        files.insert(position, "src/provider.cppm".to_string());
        files.push("src/consumer.cpp".to_string());

        let mut tree = MemoryTree::new();
        for file in &files {
            tree.insert(file, "");
        }
        tree.insert("src/provider.cppm", "export module mod_x;\n");
        tree.insert("src/consumer.cpp", "import mod_x;\n");

        let mut analyzer = DependencyAnalyzer::new(AnalysisOptions::default(), tree);
        analyzer.parse_files(&files);
        let snapshot = analyzer.finish();
        let deps = snapshot.graph().prerequisites("obj/consumer.o");
        prop_assert!(deps.is_some_and(|d| d.contains("obj/provider.o")));
    }

    #[test]
    fn fragment_is_idempotent(names in prop::collection::btree_set(segment(), 1..6)) {
        let mut tree = MemoryTree::new();
        let names: Vec<_> = names.into_iter().collect();
        for (i, name) in names.iter().enumerate() {
            let import = names.get(i + 1).map(|n| format!("import {n};\n")).unwrap_or_default();
            tree.insert(&format!("src/{name}.cppm"), format!("export module {name};\n{import}"));
        }

        let render = |tree: MemoryTree| {
            let files = tree.source_files();
            let mut analyzer = DependencyAnalyzer::new(AnalysisOptions::default(), tree);
            analyzer.parse_files(&files);
            fragment::render(&analyzer.finish())
        };
        prop_assert_eq!(render(tree.clone()), render(tree));
    }
}
