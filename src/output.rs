//! Console and JSON output for rendered trees

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{RenderedTree, TreeNode};

/// Print the node tree as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(node).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

/// Print the diagram to stdout, colorizing entry names when enabled:
/// directories blue and bold, files white, prefix glyphs unstyled.
pub fn print_text(tree: &RenderedTree, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for line in tree.lines() {
        let (prefix, name) = split_prefix(line);
        write!(stdout, "{}", prefix)?;

        if name.ends_with('/') {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(stdout, "{}", name)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    Ok(())
}

/// Split a diagram line into its glyph prefix and the entry name. Lines
/// without a connector (the root line) are all name.
fn split_prefix(line: &str) -> (&str, &str) {
    match line.rfind("── ") {
        Some(i) => line.split_at(i + "── ".len()),
        None => ("", line),
    }
}
