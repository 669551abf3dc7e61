//! Simple example demonstrating how to use the Source Formatter library

use source_formatter::format_tree;

fn main() {
    // Walk ./src and run clang-format on every .h and .cpp file
    let summary = format_tree("src");

    println!("Files found: {}", summary.discovered);
    println!("Files formatted: {}", summary.formatted);

    for error in &summary.failed {
        println!("  - {}", error);
    }
}
