// File: crates/plotter-render-skia/build.rs
// Summary: Links advapi32 on Windows; skia-safe's prebuilt Skia/ICU static libraries for the PNG backend call the registry APIs it exports.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
