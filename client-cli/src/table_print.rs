use std::cmp::max;
use std::io::Write;

//Every column is as wide as its longest cell plus two. Cells are left aligned after one space
pub struct TablePrint {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    columns_width: Vec<usize>,
}

impl TablePrint {
    pub fn create(header: Vec<String>) -> TablePrint {
        let columns_width = header.iter()
            .map(|column| column.len() + 2)
            .collect();

        TablePrint {
            rows: Vec::new(),
            columns_width,
            header,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (column_index, value) in row.iter().enumerate() {
            if column_index == self.columns_width.len() {
                self.columns_width.push(0);
            }
            self.columns_width[column_index] = max(self.columns_width[column_index], value.len() + 2);
        }

        self.rows.push(row);
    }

    pub fn print(&self, out: &mut impl Write) -> std::io::Result<()> {
        self.print_horizontal_line(out)?;
        self.print_row(out, &self.header)?;
        self.print_horizontal_line(out)?;
        for row in &self.rows {
            self.print_row(out, row)?;
        }
        self.print_horizontal_line(out)
    }

    fn print_row(&self, out: &mut impl Write, row: &Vec<String>) -> std::io::Result<()> {
        write!(out, "|")?;
        for (column_index, cell) in row.iter().enumerate() {
            let column_width = self.columns_width[column_index];
            write!(out, " {}{}|", cell, " ".repeat(column_width - cell.len() - 1))?;
        }
        writeln!(out)
    }

    fn print_horizontal_line(&self, out: &mut impl Write) -> std::io::Result<()> {
        write!(out, "+")?;
        for column_width in &self.columns_width {
            write!(out, "{}+", "-".repeat(*column_width))?;
        }
        writeln!(out)
    }
}
