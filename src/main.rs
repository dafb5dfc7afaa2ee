//! Host-side helper: `cargo run` bundles the portfolio with wasm-pack into
//! `static/pkg` and serves `static/` locally.
//!
//! `cargo run -- 9000` picks another port; `--no-build` skips wasm-pack.

use std::env;
use std::process::{Command, ExitCode};

const DEFAULT_PORT: u16 = 8000;

fn main() -> ExitCode {
    let mut port = DEFAULT_PORT;
    let mut build = true;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--no-build" => build = false,
            other => match other.parse() {
                Ok(p) => port = p,
                Err(_) => {
                    eprintln!("usage: folio3d [PORT] [--no-build]");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    if build {
        println!("Building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => {}
            Ok(_) => {
                eprintln!("wasm-pack finished with errors");
                return ExitCode::FAILURE;
            }
            Err(_) => {
                eprintln!("wasm-pack not found in PATH; serving whatever is in static/pkg");
            }
        }
    }

    println!("Serving static/ at http://127.0.0.1:{port} (Ctrl+C to stop)");
    let port_arg = port.to_string();
    match Command::new("python3")
        .args(["-m", "http.server", &port_arg, "--bind", "127.0.0.1", "--directory", "static"])
        .status()
    {
        Ok(st) if st.success() => ExitCode::SUCCESS,
        Ok(st) => {
            eprintln!("http server exited with {st}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            ExitCode::FAILURE
        }
    }
}
