// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal multi-page tabular PDF report built directly with pdf-writer.
/// Object ids are handed out manually; catalog and page tree are
/// assembled at save time.
pub struct PdfReport {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
}

impl PdfReport {
    const FONT_SIZE: f32 = 10.0;
    const HEADER_FONT_SIZE: f32 = 11.0;
    const TITLE_FONT_SIZE: f32 = 14.0;

    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(s.as_bytes()));
        content.end_text();
    }

    fn cell_border(&self, content: &mut Content, x: f32, y: f32, w: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, self.row_h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;
        for (i, cell) in row.iter().enumerate() {
            self.text(content, x + 4.0, y + 5.0, font_size, cell);
            self.cell_border(content, x, y, col_widths[i]);
            x += col_widths[i];
        }
    }

    /// Column widths proportional to header + content length, scaled to
    /// fit inside the margins.
    fn col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len() as f32 * 6.2);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Write the table, paginating as needed. An empty row set still
    /// produces one page with the title and the header row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.col_widths(headers, rows);
        let table_width: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let top_y = self.page_h - self.margin - 30.0;
        let rows_per_page = ((top_y - self.margin) / self.row_h).floor() as usize - 1;

        let pages: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![&[][..]]
        } else {
            rows.chunks(rows_per_page.max(1)).collect()
        };

        for (page_idx, page_rows) in pages.iter().enumerate() {
            let page_id = self.fresh_ref();
            let content_id = self.fresh_ref();
            self.page_refs.push(page_id);

            {
                let mut page = self.pdf.page(page_id);
                page.parent(self.pages_id)
                    .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                    .contents(content_id);
                page.resources().fonts().pair(Name(b"F1"), self.font_id);
            }

            let mut content = Content::new();

            // Title and page number
            self.text(
                &mut content,
                self.margin,
                self.page_h - self.margin + 15.0,
                Self::TITLE_FONT_SIZE,
                title,
            );
            self.text(
                &mut content,
                self.page_w - self.margin - 60.0,
                self.margin - 35.0,
                Self::FONT_SIZE,
                &format!("Page {}", page_idx + 1),
            );

            // Header row
            let mut y = top_y;
            self.fill_band(&mut content, y, table_width, 0.86);
            self.draw_row(
                &mut content,
                y,
                &col_widths,
                &header_row,
                Self::HEADER_FONT_SIZE,
            );
            y -= self.row_h;

            for (i, row) in page_rows.iter().enumerate() {
                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_width, 0.96);
                }
                self.draw_row(&mut content, y, &col_widths, row, Self::FONT_SIZE);
                y -= self.row_h;
            }

            self.pdf.stream(content_id, &content.finish());
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}
