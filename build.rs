// Stages `static/` into `dist/` so the site can be served as-is once
// wasm-pack has written its bundle into `static/pkg`.
use std::path::Path;

use fs_extra::dir::{self, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=no static/ directory; dist/ not staged");
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        if let Err(e) = dir::remove(out_dir) {
            println!("cargo:warning=could not clear dist/: {e}");
            return;
        }
    }
    if let Err(e) = dir::create_all(out_dir, false) {
        println!("cargo:warning=could not create dist/: {e}");
        return;
    }

    let options = CopyOptions::new().content_only(true).overwrite(true);
    if let Err(e) = dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ failed: {e}");
    }
}
