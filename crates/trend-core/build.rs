// File: crates/trend-core/build.rs
// Summary: Links the Windows registry API that Skia font lookup and ICU need on MSVC targets.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
