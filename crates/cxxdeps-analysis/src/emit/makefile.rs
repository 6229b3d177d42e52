//! Complete Makefile generation.

use std::collections::BTreeSet;

use cxxdeps_core::constants::{
    CONVENTIONAL_SOURCE_EXTENSIONS, MODULE_CACHE_DIR, MODULE_FLAGS, MODULE_SOURCE_EXTENSIONS,
};

use super::{push_list, GENERATED_BY};
use crate::pipeline::AnalysisSnapshot;

/// `SOURCES` and `OBJECTS` stay on one line up to this many entries.
const INLINE_LIST: usize = 3;

const COMPILE: &str = "\t$(CXX) $(CXXFLAGS) -c $< -o $@";

/// Render a standalone Makefile for the analyzed project.
///
/// Unlike the fragment, dependency rules list every prerequisite,
/// headers included. Module-specific variables, rules, and cleanup only
/// appear when modules were observed.
pub fn render(snapshot: &AnalysisSnapshot) -> String {
    let options = snapshot.options();
    let modules = snapshot.has_modules();
    let obj_ext = &options.object_extension;

    let mut out = vec![
        "# C++ Makefile with module support".to_string(),
        GENERATED_BY.to_string(),
        String::new(),
        "# Project configuration".to_string(),
        "PROJECT_NAME ?= $(notdir $(CURDIR))".to_string(),
        "CXX ?= g++".to_string(),
        "CXXFLAGS ?= -std=c++20 -Wall -Wextra -O2".to_string(),
        "LDFLAGS ?=".to_string(),
        "LIBS ?=".to_string(),
        format!("SRC_DIR = {}", options.source_root),
        format!("OBJ_DIR = {}", options.object_root),
        String::new(),
    ];

    if modules {
        out.push("# Module configuration".to_string());
        out.push(format!("MODULE_FLAGS = {MODULE_FLAGS}"));
        out.push(format!("MODULE_CACHE_DIR = {MODULE_CACHE_DIR}"));
        out.push("CXXFLAGS += $(MODULE_FLAGS)".to_string());
        out.push(String::new());
    }

    if !snapshot.sources().is_empty() {
        out.push("# Source files".to_string());
        push_list(
            &mut out,
            "SOURCES",
            snapshot.sources().iter().map(String::as_str),
            INLINE_LIST,
        );
        out.push(String::new());
    }

    // Targets kept by the correction pass may have no inventory source.
    let objects: BTreeSet<&str> = snapshot
        .objects()
        .iter()
        .map(String::as_str)
        .chain(snapshot.graph().targets())
        .collect();
    if !objects.is_empty() {
        out.push("# Object files".to_string());
        push_list(&mut out, "OBJECTS", objects, INLINE_LIST);
        out.push(String::new());
    }

    out.push("# Main targets".to_string());
    out.push("all: $(PROJECT_NAME)".to_string());
    out.push(String::new());
    out.push("$(PROJECT_NAME): $(OBJECTS)".to_string());
    out.push("\t$(CXX) $(LDFLAGS) $(OBJECTS) $(LIBS) -o $@".to_string());
    out.push(String::new());

    if !snapshot.graph().is_empty() {
        out.push("# Dependencies".to_string());
        for (target, prerequisites) in snapshot.graph().iter() {
            let deps: Vec<&str> = prerequisites.iter().map(String::as_str).collect();
            out.push(format!("{target}: {}", deps.join(" ")));
        }
        out.push(String::new());
    }

    if modules {
        out.push("# Module compilation rules".to_string());
        for ext in MODULE_SOURCE_EXTENSIONS {
            out.push(format!("$(OBJ_DIR)/%{obj_ext}: $(SRC_DIR)/%{ext}"));
            out.push("\t@mkdir -p $(MODULE_CACHE_DIR) $(dir $@)".to_string());
            out.push(COMPILE.to_string());
            out.push(String::new());
            out.push(format!("%{obj_ext}: %{ext}"));
            out.push("\t@mkdir -p $(MODULE_CACHE_DIR)".to_string());
            out.push(COMPILE.to_string());
            out.push(String::new());
        }
    }

    out.push("# Standard compilation rules".to_string());
    for ext in CONVENTIONAL_SOURCE_EXTENSIONS {
        out.push(format!("$(OBJ_DIR)/%{obj_ext}: $(SRC_DIR)/%{ext}"));
        out.push("\t@mkdir -p $(dir $@)".to_string());
        out.push(COMPILE.to_string());
        out.push(String::new());
        out.push(format!("%{obj_ext}: %{ext}"));
        out.push(COMPILE.to_string());
        out.push(String::new());
    }

    out.push("# Utility targets".to_string());
    out.push(".PHONY: all clean install debug release help".to_string());
    out.push(String::new());

    out.push("clean:".to_string());
    out.push("\trm -f $(OBJECTS) $(PROJECT_NAME)".to_string());
    if modules {
        out.push("\trm -rf $(MODULE_CACHE_DIR) *.pcm".to_string());
    }
    out.push(String::new());

    out.extend(
        [
            "debug: CXXFLAGS += -g -DDEBUG",
            "debug: $(PROJECT_NAME)",
            "",
            "release: CXXFLAGS += -O3 -DNDEBUG",
            "release: $(PROJECT_NAME)",
            "",
            "install: $(PROJECT_NAME)",
            "\tinstall -D $(PROJECT_NAME) $(DESTDIR)$(PREFIX)/bin/$(PROJECT_NAME)",
            "",
            "help:",
            "\t@echo 'Available targets:'",
            "\t@echo '  all      - Build the project (default)'",
            "\t@echo '  clean    - Remove built files'",
            "\t@echo '  debug    - Build with debug flags'",
            "\t@echo '  release  - Build with optimization'",
            "\t@echo '  install  - Install the binary'",
            "\t@echo '  help     - Show this help'",
        ]
        .map(String::from),
    );

    let mut text = out.join("\n");
    text.push('\n');
    text
}
