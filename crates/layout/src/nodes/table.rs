use crate::Renderer;
use crate::text::{collapse_whitespace, truncate_to_width};
use folio_idf::ContentNode;
use folio_render_core::{Font, PdfSurface};
use folio_types::{Color, Rect};

struct Row<'n, N> {
    cells: Vec<&'n N>,
    header: bool,
}

fn is_cell<N: ContentNode>(node: &N) -> bool {
    node.is_element("td") || node.is_element("th")
}

/// Rows in document order, descending through row groups. Rows inside `thead`
/// or made only of `th` cells are header rows.
fn collect_rows<'n, N: ContentNode>(node: &'n N, in_head: bool, rows: &mut Vec<Row<'n, N>>) {
    for child in node.children() {
        if child.is_element("tr") {
            let cells: Vec<&N> = child.children().filter(|c| is_cell(*c)).collect();
            let all_th = !cells.is_empty() && cells.iter().all(|c| c.is_element("th"));
            rows.push(Row {
                cells,
                header: in_head || all_th,
            });
        } else if child.is_element("thead") {
            collect_rows(child, true, rows);
        } else if child.is_element("tbody") || child.is_element("tfoot") {
            collect_rows(child, in_head, rows);
        }
    }
}

impl<S: PdfSurface + ?Sized> Renderer<'_, S> {
    /// Equal-width columns, one bordered rectangle per cell, single-line cells
    /// truncated with an ellipsis. The column count comes from the first row.
    pub(crate) fn render_table<N: ContentNode>(&mut self, table: &N) {
        let mut rows = Vec::new();
        collect_rows(table, false, &mut rows);
        let columns = rows.first().map_or(0, |r| r.cells.len());
        if columns == 0 {
            log::debug!("Skipping table without cells");
            return;
        }

        let size = self.config.table_font_size;
        let pad = self.config.cell_padding;
        let col_width = self.ctx.content_width() / columns as f32;
        let row_height = self.line_height(size) + 2.0 * pad;
        let baseline = self.baseline(size);
        let left = self.ctx.padding();
        let right = left + col_width * columns as f32;

        for row in &rows {
            let y = self.ensure_space(row_height);
            let font = if row.header {
                Font::bold(self.ctx.font_family, size)
            } else {
                Font::regular(self.ctx.font_family, size)
            };
            self.surface.set_font(font);
            self.surface.set_draw_color(Color::BLACK);
            self.surface.set_line_width(self.config.cell_border_width);

            for i in 0..columns {
                let x = left + i as f32 * col_width;
                self.surface.rect(Rect::new(x, y, col_width, row_height));
                let Some(cell) = row.cells.get(i) else {
                    continue;
                };
                let text = collapse_whitespace(&cell.text_content());
                if text.is_empty() {
                    continue;
                }
                let shown = truncate_to_width(&text, col_width - 2.0 * pad, &font);
                self.surface.text(&shown, x + pad, y + pad + baseline);
            }

            if row.header {
                let bottom = y + row_height;
                self.surface.set_line_width(self.config.header_rule_width);
                self.surface.line(left, bottom, right, bottom);
            }
            self.ctx.y = y + row_height;
        }
        self.ctx.y += self.config.table_spacing;
    }
}
