use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// Write `rows` with every column but the last padded to a common width.
pub fn display_table<ItemType: TableDisplay>(
    rows: &[ItemType],
    mut output: impl Write,
) -> io::Result<()> {
    let column_count = ItemType::columns();
    let mut column_widths = vec![0; column_count];
    for row in rows {
        for column_index in 0..column_count {
            column_widths[column_index] = std::cmp::max(
                row.item(column_index).width(),
                column_widths[column_index],
            );
        }
    }

    for row in rows {
        output_row(&mut output, column_count, |column_index| {
            if column_index + 1 == column_count {
                Padded(row.item(column_index), 0)
            } else {
                Padded(row.item(column_index), column_widths[column_index])
            }
        })?;
    }

    Ok(())
}

pub trait TableDisplay {
    fn columns() -> usize;
    fn item(&self, column_index: usize) -> &str;
}

fn output_row<F, D>(
    mut output: impl Write,
    column_count: usize,
    get_column_display: F,
) -> io::Result<()>
where
    D: Display,
    F: Fn(usize) -> D,
{
    let mut first = true;
    for column_index in 0..column_count {
        if first {
            first = false;
        } else {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_column_display(column_index))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}
