use chrono::Datelike;

fn main() {
    // Footer year, fixed at build time so server and client render the same text
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
