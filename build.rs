// Stages the static page into `dist/` so it can be served next to the
// wasm-pack output (`wasm-pack build --target web --out-dir dist/pkg`).
use std::path::Path;
use std::{env, fs};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // The wasm32 build is driven by wasm-pack, which runs its own cargo;
    // staging once from the host build is enough.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=static/ missing - nothing to stage");
        return;
    }

    let out_dir = Path::new("dist");
    if let Err(err) = fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {err}");
        return;
    }

    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ into dist/ failed: {err}");
    }
}
