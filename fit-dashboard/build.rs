//! Build script for fit-dashboard.
//!
//! Copies the freedom and self-immolation CSV files to OUT_DIR so they can be
//! embedded via `include_str!` at compile time. The page cannot start without
//! either file, so a missing file fails the build.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    let files = [
        ("../fixtures/Cleanest_Freedom.csv", "freedom.csv"),
        ("../fixtures/Cleaned_selfimmo.csv", "self_immolation.csv"),
    ];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if !src.exists() {
            panic!("Required dataset {} not found", src_path);
        }
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
