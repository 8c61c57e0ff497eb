//! Bundled sample project

use crate::node::FileNode;
use crate::tree::FileTree;

const INDEX_TS: &[&str] = &[
    "// This is a single-line comment",
    "/* This is a",
    "   multi-line comment */",
    "const greeting: string = \"Hello, World!\";",
    "let count: number = 42;",
    "function printGreeting(name: string): void {",
    "  console.log(`${greeting} My name is ${name}.`);",
    "}",
    "class Person {",
    "  constructor(private name: string) {}",
    "  greet() {",
    "    printGreeting(this.name);",
    "  }",
    "}",
    "const john = new Person(\"John\");",
    "john.greet();",
];

const README_MD: &[&str] = &["# My Project", "", "This is a sample project."];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// The tree a fresh session starts with
pub fn sample_project() -> FileTree {
    FileTree::new(vec![FileNode::folder(
        "project",
        vec![
            FileNode::folder(
                "src",
                vec![
                    FileNode::file("index.ts", owned(INDEX_TS)),
                    FileNode::file("utils.ts", owned(&[""])),
                    FileNode::file("type.ts", owned(&[""])),
                ],
            ),
            FileNode::file("README.md", owned(README_MD)),
        ],
    )])
}
