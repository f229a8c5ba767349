use std::fs;
use std::path::Path;

fn platform_library_name() -> &'static str {
    match std::env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("windows") => "pdfium.dll",
        Ok("macos") => "libpdfium.dylib",
        _ => "libpdfium.so",
    }
}

fn main() {
    let workspace_root = env!("CARGO_MANIFEST_DIR")
        .split("crates")
        .next()
        .expect("Failed to determine workspace root");

    let library_name = platform_library_name();
    let vendor_library = Path::new(workspace_root)
        .join("vendor")
        .join("pdfium")
        .join(library_name);

    println!("cargo:rerun-if-changed={}", vendor_library.display());

    if !vendor_library.exists() {
        // Runtime falls back to the configured path or the system library.
        return;
    }

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .expect("Failed to determine target directory");

    let dest_library = target_dir.join(library_name);

    match fs::copy(&vendor_library, &dest_library) {
        Ok(_) => println!(
            "cargo:warning=Copied {} from vendor to {}",
            library_name,
            dest_library.display()
        ),
        Err(e) => println!(
            "cargo:warning=Failed to copy {} to {}: {}",
            library_name,
            dest_library.display(),
            e
        ),
    }
}
