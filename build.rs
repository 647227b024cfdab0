use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

// seed/ is compiled in through include_str!; a new file there must rebuild.
const WATCHED: &[(&str, &[&str])] = &[
    ("seed", &["json"]),
    ("static", &["html", "js", "css"]),
];

fn main() {
    for (dir, extensions) in WATCHED {
        // The directory itself catches added or removed files.
        println!("cargo:rerun-if-changed={}", dir);
        watch(Path::new(dir), extensions);
    }

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ROSTER_BUILD_ID={}", build_id);
}

fn watch(dir: &Path, extensions: &[&str]) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            watch(&path, extensions);
        } else if path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| extensions.contains(&ext))
        {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
