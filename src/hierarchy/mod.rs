//! Prototype-style deep copies of a file/folder hierarchy.
//!
//! An isolated illustration alongside the vending machine core: a tree of
//! named nodes with a two-operation capability set: render with
//! indentation, and clone into a new owned copy. Cloning is a recursive
//! structural copy; every descendant of the clone is duplicated, never
//! aliased, so mutating one tree can never affect the other.
//!
//! # Example
//!
//! ```rust
//! use vendo::hierarchy::{File, Folder, Inode};
//!
//! let folder = Folder::new("docs")
//!     .with(File::new("readme"))
//!     .with(Folder::new("api").with(File::new("errors")));
//!
//! let copy = folder.clone_node();
//! assert_eq!(copy.render_tree(), folder.render_tree());
//! ```

use std::fmt::{self, Write};

/// Capability set shared by every node in the hierarchy.
pub trait Inode {
    /// The node's name.
    fn name(&self) -> &str;

    /// Write this node and its descendants into `out`, one per line,
    /// indented by `indent` spaces.
    fn render(&self, indent: usize, out: &mut String);

    /// Deep-copy this node and everything below it into a new owned tree.
    fn clone_node(&self) -> Box<dyn Inode>;

    /// Render the whole subtree into a fresh string.
    fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render(0, &mut out);
        out
    }
}

/// A leaf node.
#[derive(Clone, Debug)]
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Inode for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent: usize, out: &mut String) {
        let _ = writeln!(out, "{:indent$}{}", "", self.name);
    }

    fn clone_node(&self) -> Box<dyn Inode> {
        Box::new(self.clone())
    }
}

/// A composite node owning its children.
pub struct Folder {
    name: String,
    children: Vec<Box<dyn Inode>>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a child, consuming and returning the folder for chaining.
    pub fn with(mut self, child: impl Inode + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Add a child in place.
    pub fn push(&mut self, child: Box<dyn Inode>) {
        self.children.push(child);
    }

    /// The folder's direct children.
    pub fn children(&self) -> &[Box<dyn Inode>] {
        &self.children
    }
}

impl fmt::Debug for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Children are trait objects; list their names instead of
        // requiring Debug on every Inode.
        let children: Vec<&str> = self.children.iter().map(|c| c.name()).collect();
        f.debug_struct("Folder")
            .field("name", &self.name)
            .field("children", &children)
            .finish()
    }
}

impl Inode for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, indent: usize, out: &mut String) {
        let _ = writeln!(out, "{:indent$}{}", "", self.name);
        for child in &self.children {
            child.render(indent + 2, out);
        }
    }

    fn clone_node(&self) -> Box<dyn Inode> {
        let children = self.children.iter().map(|c| c.clone_node()).collect();
        Box::new(Folder {
            name: self.name.clone(),
            children,
        })
    }
}
