//! Human-readable listing
//!
//! ```text
//! root:
//!      |--a.txt
//!      |--b
//!           |--c.txt
//! files: 2
//! dirs: 2
//! ```

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Entry, ScanResult};

use super::config::OutputConfig;

const SEPARATOR: &str = "|--";

/// Formatter for the indented text listing.
pub struct HumanFormatter {
    config: OutputConfig,
}

impl HumanFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, result: &ScanResult) -> String {
        let mut output = String::new();
        output.push_str(&result.tree.name);
        output.push_str(":\n");
        self.format_children(&result.tree, &mut output, 0);
        output.push_str(&format!(
            "files: {}\ndirs: {}\n",
            result.meta.file_count, result.meta.dir_count
        ));
        output
    }

    pub fn print(&self, result: &ScanResult) -> io::Result<()> {
        // Terminal detection already happened when `use_color` was decided.
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, result)
    }

    /// Write the listing to any colour-capable writer.
    pub fn write_to<W: WriteColor>(&self, out: &mut W, result: &ScanResult) -> io::Result<()> {
        write_name(out, &result.tree)?;
        writeln!(out, ":")?;
        self.write_children(out, &result.tree, 0)?;
        writeln!(out, "files: {}", result.meta.file_count)?;
        writeln!(out, "dirs: {}", result.meta.dir_count)?;
        Ok(())
    }

    /// Each level adds a fixed stride, so a child is always indented past its parent.
    fn child_indent(&self, parent_indent: usize) -> usize {
        parent_indent + self.config.indent
    }

    fn format_children(&self, node: &Entry, output: &mut String, parent_indent: usize) {
        let indent = self.child_indent(parent_indent);
        for child in &node.children {
            output.push_str(&" ".repeat(indent));
            output.push_str(SEPARATOR);
            output.push_str(&child.name);
            output.push('\n');
            self.format_children(child, output, indent);
        }
    }

    fn write_children<W: WriteColor>(
        &self,
        out: &mut W,
        node: &Entry,
        parent_indent: usize,
    ) -> io::Result<()> {
        let indent = self.child_indent(parent_indent);
        for child in &node.children {
            write!(out, "{}{}", " ".repeat(indent), SEPARATOR)?;
            write_name(out, child)?;
            writeln!(out)?;
            self.write_children(out, child, indent)?;
        }
        Ok(())
    }
}

fn write_name<W: WriteColor>(out: &mut W, entry: &Entry) -> io::Result<()> {
    if entry.is_dir() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", entry.name)?;
        out.reset()
    } else {
        write!(out, "{}", entry.name)
    }
}
