//! File Hierarchy Cloning
//!
//! This demo builds a small folder tree and deep-copies it with the
//! prototype capability, showing the clone is a fully independent tree.
//!
//! Run with: cargo run --example file_hierarchy

use vendo::hierarchy::{File, Folder, Inode};

fn main() {
    let folder2 = Folder::new("Folder2")
        .with(Folder::new("Folder1").with(File::new("File1")))
        .with(File::new("File2"))
        .with(File::new("File3"));

    println!("Printing hierarchy for Folder2");
    print!("{}", folder2.render_tree());

    let clone = folder2.clone_node();
    println!("\nPrinting hierarchy for clone Folder");
    print!("{}", clone.render_tree());
}
