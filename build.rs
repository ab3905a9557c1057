// build.rs: Embed the tool's UI message files into a generated Rust source file
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let locales_dir = "./locales";
    println!("cargo:rerun-if-changed={}", locales_dir);

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("ui_locales.rs");
    let mut out = fs::File::create(&dest_path).unwrap();

    let mut locales: Vec<(String, String)> = Vec::new();
    for entry in fs::read_dir(locales_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            let ftl_path = path.join("main.ftl");
            if ftl_path.exists() {
                let locale = path.file_name().unwrap().to_string_lossy().to_string();
                let content = fs::read_to_string(&ftl_path).unwrap();
                locales.push((locale, content));
            }
        }
    }
    // read_dir order is platform dependent
    locales.sort();

    writeln!(out, "pub fn embedded_ui_locales() -> &'static [(&'static str, &'static str)] {{").unwrap();
    writeln!(out, "    &[").unwrap();
    for (locale, content) in &locales {
        writeln!(out, "        ({:?}, {:?}),", locale, content).unwrap();
    }
    writeln!(out, "    ]").unwrap();
    writeln!(out, "}}").unwrap();
}
