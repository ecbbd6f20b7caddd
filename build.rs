//! Build script to generate embedded category word lists
//!
//! Reads one word file per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (input file, const name, description)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("data/programming.txt", "PROGRAMMING", "Programming words"),
    ("data/fruits.txt", "FRUITS", "Fruit words"),
    ("data/animals.txt", "ANIMALS", "Animal words"),
    ("data/countries.txt", "COUNTRIES", "Country words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("categories.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category word lists").unwrap();
    writeln!(output).unwrap();

    for &(input_path, const_name, doc_comment) in CATEGORIES {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    assert!(!words.is_empty(), "{input_path} contains no words");

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
