// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Generate a temporary tree with `num_files` files spread over nested
/// directories, with slightly varied file sizes
pub fn generate_tree(num_files: usize) -> TempDir {
    let dir = TempDir::new().unwrap();

    for i in 0..num_files {
        let sub = dir
            .path()
            .join(format!("dir_{}", i / 50))
            .join(format!("sub_{}", (i / 10) % 5));
        fs::create_dir_all(&sub).unwrap();
        fs::write(
            sub.join(format!("file_{}.bin", i)),
            vec![0u8; 128 + (i % 1024)],
        )
        .unwrap();
    }

    dir
}
