// File: crates/calcplot-render-skia/build.rs
// Summary: Link the Windows system libraries Skia's font/ICU code needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) from Skia's font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
